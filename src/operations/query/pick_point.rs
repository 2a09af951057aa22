use crate::math::Point2;

/// Finds the control point under a cursor position.
///
/// Returns the index of the first point strictly closer than `tolerance`,
/// scanning in order, so overlapping points resolve to the earliest one.
pub struct PickControlPoint<'a> {
    points: &'a [Point2],
    tolerance: f64,
}

impl<'a> PickControlPoint<'a> {
    /// Creates a new `PickControlPoint` query with the default pick radius of 5.
    #[must_use]
    pub fn new(points: &'a [Point2]) -> Self {
        Self {
            points,
            tolerance: 5.0,
        }
    }

    /// Overrides the pick radius.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Executes the query for `cursor`.
    #[must_use]
    pub fn execute(&self, cursor: &Point2) -> Option<usize> {
        let tol_sq = self.tolerance * self.tolerance;
        self.points
            .iter()
            .position(|pt| (pt - cursor).norm_squared() < tol_sq)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_first_point_in_radius() {
        let pts = [
            Point2::new(0.0, 0.0),
            Point2::new(50.0, 50.0),
            Point2::new(52.0, 50.0),
        ];
        let pick = PickControlPoint::new(&pts);
        assert_eq!(pick.execute(&Point2::new(51.0, 50.0)), Some(1));
        assert_eq!(pick.execute(&Point2::new(3.0, 3.0)), Some(0));
        assert_eq!(pick.execute(&Point2::new(20.0, 20.0)), None);
    }

    #[test]
    fn radius_is_exclusive() {
        let pts = [Point2::new(0.0, 0.0)];
        let pick = PickControlPoint::new(&pts).with_tolerance(1.0);
        assert_eq!(pick.execute(&Point2::new(1.0, 0.0)), None);
        assert_eq!(pick.execute(&Point2::new(0.5, 0.0)), Some(0));
    }
}
