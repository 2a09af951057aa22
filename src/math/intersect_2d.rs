use super::{cross_2d, Point2};

/// Orientation of an ordered point triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// The three points lie on one line.
    Collinear,
    /// `p -> q -> r` turns right.
    Clockwise,
    /// `p -> q -> r` turns left.
    CounterClockwise,
}

/// Classifies the turn `p -> q -> r`.
///
/// Exact comparison against zero: only truly collinear triples report
/// [`Orientation::Collinear`].
#[must_use]
#[allow(clippy::float_cmp)]
pub fn orientation(p: &Point2, q: &Point2, r: &Point2) -> Orientation {
    let val = cross_2d(p, q, r);
    if val == 0.0 {
        Orientation::Collinear
    } else if val > 0.0 {
        Orientation::CounterClockwise
    } else {
        Orientation::Clockwise
    }
}

/// Returns `true` if `q` lies within the bounding box of segment `p`–`r`.
///
/// Only meaningful when `p`, `q` and `r` are already known to be collinear.
#[must_use]
pub fn on_segment(p: &Point2, q: &Point2, r: &Point2) -> bool {
    q.x <= p.x.max(r.x) && q.x >= p.x.min(r.x) && q.y <= p.y.max(r.y) && q.y >= p.y.min(r.y)
}

/// Closed segment-segment intersection test in 2D.
///
/// Touching endpoints and collinear overlaps count as intersecting.
#[must_use]
pub fn segments_intersect_2d(p1: &Point2, q1: &Point2, p2: &Point2, q2: &Point2) -> bool {
    let o1 = orientation(p1, q1, p2);
    let o2 = orientation(p1, q1, q2);
    let o3 = orientation(p2, q2, p1);
    let o4 = orientation(p2, q2, q1);

    if o1 != o2 && o3 != o4 {
        return true;
    }

    (o1 == Orientation::Collinear && on_segment(p1, p2, q1))
        || (o2 == Orientation::Collinear && on_segment(p1, q2, q1))
        || (o3 == Orientation::Collinear && on_segment(p2, p1, q2))
        || (o4 == Orientation::Collinear && on_segment(p2, q1, q2))
}

/// Point where segment `s -> e` crosses the supporting line of `a -> b`.
///
/// `side_s` and `side_e` are the cross products `(b - a) × (s - a)` and
/// `(b - a) × (e - a)`. Returns `None` when they do not differ, i.e. the segment
/// does not cross the line at a single point.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn crossing_point(s: &Point2, e: &Point2, side_s: f64, side_e: f64) -> Option<Point2> {
    let denom = side_s - side_e;
    if denom == 0.0 {
        return None;
    }
    let t = side_s / denom;
    Some(s + (e - s) * t)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::TOLERANCE;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn orientation_cases() {
        assert_eq!(
            orientation(&p(0.0, 0.0), &p(1.0, 0.0), &p(1.0, 1.0)),
            Orientation::CounterClockwise
        );
        assert_eq!(
            orientation(&p(0.0, 0.0), &p(1.0, 0.0), &p(1.0, -1.0)),
            Orientation::Clockwise
        );
        assert_eq!(
            orientation(&p(0.0, 0.0), &p(1.0, 1.0), &p(2.0, 2.0)),
            Orientation::Collinear
        );
    }

    #[test]
    fn segments_crossing() {
        assert!(segments_intersect_2d(
            &p(0.0, 0.0),
            &p(2.0, 2.0),
            &p(0.0, 2.0),
            &p(2.0, 0.0)
        ));
    }

    #[test]
    fn segments_parallel_disjoint() {
        assert!(!segments_intersect_2d(
            &p(0.0, 0.0),
            &p(1.0, 0.0),
            &p(0.0, 1.0),
            &p(1.0, 1.0)
        ));
    }

    #[test]
    fn segments_touching_endpoint() {
        assert!(segments_intersect_2d(
            &p(0.0, 0.0),
            &p(1.0, 0.0),
            &p(1.0, 0.0),
            &p(1.0, 5.0)
        ));
    }

    #[test]
    fn segments_collinear_overlap_and_gap() {
        assert!(segments_intersect_2d(
            &p(0.0, 0.0),
            &p(2.0, 0.0),
            &p(1.0, 0.0),
            &p(3.0, 0.0)
        ));
        assert!(!segments_intersect_2d(
            &p(0.0, 0.0),
            &p(1.0, 0.0),
            &p(2.0, 0.0),
            &p(3.0, 0.0)
        ));
    }

    #[test]
    fn crossing_point_on_vertical_line() {
        // Line x = 5 going up; segment from (0, 2) to (10, 2).
        let a = p(5.0, 0.0);
        let b = p(5.0, 10.0);
        let s = p(0.0, 2.0);
        let e = p(10.0, 2.0);
        let pt = crossing_point(&s, &e, cross_2d(&a, &b, &s), cross_2d(&a, &b, &e)).unwrap();
        assert!((pt.x - 5.0).abs() < TOLERANCE);
        assert!((pt.y - 2.0).abs() < TOLERANCE);
    }

    #[test]
    fn crossing_point_same_side_is_none() {
        assert!(crossing_point(&p(0.0, 0.0), &p(1.0, 0.0), 1.0, 1.0).is_none());
    }
}
