use crate::math::Point2;

/// Tolerances for sampled curve-curve intersection.
///
/// The two values play different roles: `detection_tolerance` decides
/// whether two samples are close enough to count as a crossing,
/// `merge_tolerance` decides whether a new candidate repeats one already
/// found. Both are in the curves' working units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveIntersectionParams {
    /// Maximum sample distance that counts as an intersection.
    pub detection_tolerance: f64,
    /// Candidates closer than this to an earlier candidate are dropped.
    pub merge_tolerance: f64,
}

impl Default for CurveIntersectionParams {
    fn default() -> Self {
        Self {
            detection_tolerance: 2.0,
            merge_tolerance: 0.5,
        }
    }
}

/// Finds approximate intersections of two sampled curves.
///
/// Brute force over every sample pair: each pair closer than the detection
/// tolerance yields its midpoint as a candidate, unless it falls within the
/// merge tolerance of a candidate already recorded. Accuracy is bounded by
/// the sampling density of the inputs.
pub struct CurveCurveIntersect<'a> {
    curve_a: &'a [Point2],
    curve_b: &'a [Point2],
    params: CurveIntersectionParams,
}

impl<'a> CurveCurveIntersect<'a> {
    /// Creates a new `CurveCurveIntersect` query over two sampled curves.
    #[must_use]
    pub fn new(curve_a: &'a [Point2], curve_b: &'a [Point2]) -> Self {
        Self {
            curve_a,
            curve_b,
            params: CurveIntersectionParams::default(),
        }
    }

    /// Overrides the tolerances.
    #[must_use]
    pub fn with_params(mut self, params: CurveIntersectionParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the query, returning candidate intersection points in
    /// discovery order.
    #[must_use]
    pub fn execute(&self) -> Vec<Point2> {
        let detect_sq = self.params.detection_tolerance * self.params.detection_tolerance;
        let merge_sq = self.params.merge_tolerance * self.params.merge_tolerance;

        let mut found: Vec<Point2> = Vec::new();
        for a in self.curve_a {
            for b in self.curve_b {
                if (a - b).norm_squared() >= detect_sq {
                    continue;
                }
                let mid = nalgebra::center(a, b);
                if found.iter().all(|f| (f - mid).norm_squared() >= merge_sq) {
                    found.push(mid);
                }
            }
        }
        found
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::ControlPolygon;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn identical_curves_intersect_everywhere() {
        let curve = ControlPolygon::new(vec![p(0.0, 0.0), p(10.0, 20.0), p(20.0, 0.0)]).sample(50);
        let hits = CurveCurveIntersect::new(&curve, &curve).execute();
        assert!(!hits.is_empty());
        // Merging keeps candidates at least 0.5 apart.
        for (i, a) in hits.iter().enumerate() {
            for b in &hits[i + 1..] {
                assert!((a - b).norm() >= 0.5);
            }
        }
    }

    #[test]
    fn distant_curves_do_not_intersect() {
        let a = ControlPolygon::new(vec![p(0.0, 0.0), p(10.0, 0.0)]).sample(20);
        let b = ControlPolygon::new(vec![p(0.0, 5.0), p(10.0, 5.0)]).sample(20);
        assert!(CurveCurveIntersect::new(&a, &b).execute().is_empty());
    }

    #[test]
    fn crossing_lines_meet_near_the_crossing() {
        let a = ControlPolygon::new(vec![p(-10.0, -10.0), p(10.0, 10.0)]).sample(40);
        let b = ControlPolygon::new(vec![p(-10.0, 10.0), p(10.0, -10.0)]).sample(40);
        let hits = CurveCurveIntersect::new(&a, &b)
            .with_params(CurveIntersectionParams {
                detection_tolerance: 1.0,
                merge_tolerance: 2.0,
            })
            .execute();
        assert_eq!(hits.len(), 1, "hits={hits:?}");
        assert!(hits[0].coords.norm() < 1.0);
    }

    #[test]
    fn tighter_merge_keeps_more_candidates() {
        let a = ControlPolygon::new(vec![p(0.0, 0.0), p(10.0, 0.0)]).sample(100);
        let b = ControlPolygon::new(vec![p(0.0, 0.5), p(10.0, 0.5)]).sample(100);
        let coarse = CurveCurveIntersect::new(&a, &b).execute();
        let fine = CurveCurveIntersect::new(&a, &b)
            .with_params(CurveIntersectionParams {
                detection_tolerance: 2.0,
                merge_tolerance: 0.1,
            })
            .execute();
        assert!(fine.len() > coarse.len());
    }

    #[test]
    fn empty_input() {
        let a = [p(0.0, 0.0)];
        assert!(CurveCurveIntersect::new(&a, &[]).execute().is_empty());
    }
}
