use crate::math::Point2;

/// Ordered control points of a planar Bezier curve.
///
/// The curve's degree is `len() - 1`. At least two points are needed to
/// evaluate anything; shorter polygons produce empty results.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ControlPolygon {
    points: Vec<Point2>,
}

impl ControlPolygon {
    /// Creates a control polygon from its points, in curve order.
    #[must_use]
    pub fn new(points: Vec<Point2>) -> Self {
        Self { points }
    }

    /// Returns the control points.
    #[must_use]
    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    /// Number of control points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if there are no control points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns `true` if the polygon can define a curve (two or more points).
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.points.len() >= 2
    }

    /// Evaluates the curve at `t` with de Casteljau's algorithm.
    ///
    /// Returns `None` for an invalid polygon or when `t` lies outside `[0, 1]`.
    /// The endpoints are reproduced exactly: `t = 0` yields the first control
    /// point and `t = 1` the last.
    #[must_use]
    pub fn evaluate(&self, t: f64) -> Option<Point2> {
        if !self.is_valid() || !(0.0..=1.0).contains(&t) {
            return None;
        }
        let mut work = self.points.clone();
        let n = work.len();
        for round in 1..n {
            for i in 0..n - round {
                let a = work[i];
                let b = work[i + 1];
                work[i] = Point2::new((1.0 - t) * a.x + t * b.x, (1.0 - t) * a.y + t * b.y);
            }
        }
        Some(work[0])
    }

    /// Samples the curve at `count + 1` evenly spaced parameters
    /// `t = i / count`, both endpoints included.
    ///
    /// Returns an empty vector for an invalid polygon or `count == 0`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn sample(&self, count: usize) -> Vec<Point2> {
        if !self.is_valid() || count == 0 {
            return Vec::new();
        }
        (0..=count)
            .filter_map(|i| self.evaluate(i as f64 / count as f64))
            .collect()
    }
}

impl From<Vec<Point2>> for ControlPolygon {
    fn from(points: Vec<Point2>) -> Self {
        Self::new(points)
    }
}
