use super::{near_2d, Point2};

/// Computes the signed area of a polygon (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise.
#[must_use]
pub fn signed_area_2d(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Axis-aligned bounding box in the plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb2 {
    /// Minimum corner.
    pub min: Point2,
    /// Maximum corner.
    pub max: Point2,
}

impl Aabb2 {
    /// Bounding box of a point set, or `None` for an empty slice.
    #[must_use]
    pub fn from_points(points: &[Point2]) -> Option<Self> {
        let first = points.first()?;
        let mut min = *first;
        let mut max = *first;
        for pt in &points[1..] {
            min.x = min.x.min(pt.x);
            min.y = min.y.min(pt.y);
            max.x = max.x.max(pt.x);
            max.y = max.y.max(pt.y);
        }
        Some(Self { min, max })
    }

    /// Overlap of two boxes. `None` unless the overlap has positive area.
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        let min = Point2::new(self.min.x.max(other.min.x), self.min.y.max(other.min.y));
        let max = Point2::new(self.max.x.min(other.max.x), self.max.y.min(other.max.y));
        if min.x < max.x && min.y < max.y {
            Some(Self { min, max })
        } else {
            None
        }
    }

    /// Box area.
    #[must_use]
    pub fn area(&self) -> f64 {
        (self.max.x - self.min.x) * (self.max.y - self.min.y)
    }

    /// Corners in counter-clockwise order starting at `min`.
    #[must_use]
    pub fn corners(&self) -> [Point2; 4] {
        [
            self.min,
            Point2::new(self.max.x, self.min.y),
            self.max,
            Point2::new(self.min.x, self.max.y),
        ]
    }
}

/// Drops consecutive points closer than `tol` (per coordinate), including the
/// wrap-around pair between the last and first point.
#[must_use]
pub fn dedup_consecutive(points: &[Point2], tol: f64) -> Vec<Point2> {
    let mut out: Vec<Point2> = Vec::with_capacity(points.len());
    for pt in points {
        if out.last().is_some_and(|last| near_2d(last, pt, tol)) {
            continue;
        }
        out.push(*pt);
    }
    while out.len() > 1 && near_2d(&out[0], &out[out.len() - 1], tol) {
        out.pop();
    }
    out
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
    fn signed_area_ccw_square() {
        let pts = [p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0), p(0.0, 1.0)];
        assert!((signed_area_2d(&pts) - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn signed_area_cw_square() {
        let pts = [p(0.0, 0.0), p(0.0, 1.0), p(1.0, 1.0), p(1.0, 0.0)];
        assert!((signed_area_2d(&pts) + 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn signed_area_degenerate() {
        assert!(signed_area_2d(&[p(0.0, 0.0)]).abs() < TOLERANCE);
        assert!(signed_area_2d(&[]).abs() < TOLERANCE);
    }

    #[test]
    fn aabb_overlap() {
        let a = Aabb2::from_points(&[p(0.0, 0.0), p(10.0, 10.0)]).unwrap();
        let b = Aabb2::from_points(&[p(5.0, -5.0), p(15.0, 5.0)]).unwrap();
        let o = a.intersection(&b).unwrap();
        assert_eq!(o.min, p(5.0, 0.0));
        assert_eq!(o.max, p(10.0, 5.0));
        assert!((o.area() - 25.0).abs() < TOLERANCE);
    }

    #[test]
    fn aabb_touching_is_not_overlap() {
        let a = Aabb2::from_points(&[p(0.0, 0.0), p(1.0, 1.0)]).unwrap();
        let b = Aabb2::from_points(&[p(1.0, 0.0), p(2.0, 1.0)]).unwrap();
        assert!(a.intersection(&b).is_none());
        assert!(Aabb2::from_points(&[]).is_none());
    }

    #[test]
    fn dedup_removes_runs_and_wrap() {
        let pts = [
            p(0.0, 0.0),
            p(0.0, 1e-9),
            p(1.0, 0.0),
            p(1.0, 1.0),
            p(1e-8, 0.0),
        ];
        let out = dedup_consecutive(&pts, 1e-6);
        assert_eq!(out, vec![p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0)]);
    }
}
