use crate::geometry::Triangle;

use super::{Point3, Vector3, TOLERANCE};

/// Plane through a triangle in the implicit form `normal · x + offset = 0`.
///
/// The normal is `(p2 - p1) × (p3 - p1)` and is not normalized, so distances
/// reported by [`signed_distance`](Self::signed_distance) are scaled by twice
/// the triangle's area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrianglePlane {
    /// Unnormalized plane normal.
    pub normal: Vector3,
    /// Plane offset, `-normal · p1`.
    pub offset: f64,
}

impl TrianglePlane {
    /// Plane of `tri`, or `None` if the triangle is degenerate.
    #[must_use]
    pub fn of(tri: &Triangle) -> Option<Self> {
        let normal = tri.normal();
        if normal.norm() < TOLERANCE {
            return None;
        }
        Some(Self {
            normal,
            offset: -normal.dot(&tri.p1.coords),
        })
    }

    /// Scaled signed distance of `point` from the plane.
    #[must_use]
    pub fn signed_distance(&self, point: &Point3) -> f64 {
        self.normal.dot(&point.coords) + self.offset
    }
}

/// Barycentric coordinates `(s, t)` of `point` relative to `tri`, such that
/// `point ≈ p1 + s (p2 - p1) + t (p3 - p1)` after projection onto the plane.
///
/// Returns `None` for a degenerate triangle.
#[must_use]
pub fn barycentric(point: &Point3, tri: &Triangle) -> Option<(f64, f64)> {
    let u = tri.p2 - tri.p1;
    let v = tri.p3 - tri.p1;
    let w = point - tri.p1;

    let uu = u.dot(&u);
    let uv = u.dot(&v);
    let vv = v.dot(&v);
    let wu = w.dot(&u);
    let wv = w.dot(&v);

    let denom = uv * uv - uu * vv;
    if denom.abs() < TOLERANCE * TOLERANCE {
        return None;
    }
    let s = (uv * wv - vv * wu) / denom;
    let t = (uv * wu - uu * wv) / denom;
    Some((s, t))
}

/// Barycentric containment test with slack `tol` on every edge.
#[must_use]
pub fn point_in_triangle(point: &Point3, tri: &Triangle, tol: f64) -> bool {
    barycentric(point, tri).is_some_and(|(s, t)| s >= -tol && t >= -tol && s + t <= 1.0 + tol)
}

/// Intersection of segment `p0 -> p1` with triangle `tri`.
///
/// The segment is rejected when it is parallel to the triangle's plane
/// (`|normal · dir| < parallel_tol`), when it does not reach the plane within
/// its own extent, or when the crossing point falls outside the triangle by
/// more than `bary_tol`.
#[must_use]
pub fn segment_intersect_triangle(
    p0: &Point3,
    p1: &Point3,
    tri: &Triangle,
    parallel_tol: f64,
    bary_tol: f64,
) -> Option<Point3> {
    let plane = TrianglePlane::of(tri)?;
    let dir = p1 - p0;
    let denom = plane.normal.dot(&dir);
    if denom.abs() < parallel_tol {
        return None;
    }
    let t = plane.normal.dot(&(tri.p1 - p0)) / denom;
    if !(0.0..=1.0).contains(&t) {
        return None;
    }
    let point = p0 + dir * t;
    point_in_triangle(&point, tri, bary_tol).then_some(point)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    fn xy_triangle() -> Triangle {
        Triangle::new(p(0.0, 0.0, 0.0), p(2.0, 0.0, 0.0), p(0.0, 2.0, 0.0))
    }

    #[test]
    fn plane_distance_sign() {
        let plane = TrianglePlane::of(&xy_triangle()).unwrap();
        assert!(plane.signed_distance(&p(0.3, 0.3, 1.0)) > 0.0);
        assert!(plane.signed_distance(&p(0.3, 0.3, -1.0)) < 0.0);
        assert!(plane.signed_distance(&p(5.0, -3.0, 0.0)).abs() < TOLERANCE);
    }

    #[test]
    fn degenerate_triangle_has_no_plane() {
        let tri = Triangle::new(p(0.0, 0.0, 0.0), p(1.0, 1.0, 1.0), p(2.0, 2.0, 2.0));
        assert!(TrianglePlane::of(&tri).is_none());
        assert!(barycentric(&p(0.0, 0.0, 0.0), &tri).is_none());
        assert!(!point_in_triangle(&p(1.0, 1.0, 1.0), &tri, 1e-5));
    }

    #[test]
    fn barycentric_of_vertices() {
        let tri = xy_triangle();
        let (s, t) = barycentric(&tri.p2, &tri).unwrap();
        assert!((s - 1.0).abs() < 1e-12 && t.abs() < 1e-12);
        let (s, t) = barycentric(&tri.p3, &tri).unwrap();
        assert!(s.abs() < 1e-12 && (t - 1.0).abs() < 1e-12);
    }

    #[test]
    fn point_in_triangle_inside_edge_outside() {
        let tri = xy_triangle();
        assert!(point_in_triangle(&p(0.5, 0.5, 0.0), &tri, 1e-5));
        assert!(point_in_triangle(&p(1.0, 1.0, 0.0), &tri, 1e-5));
        assert!(!point_in_triangle(&p(1.5, 1.5, 0.0), &tri, 1e-5));
    }

    #[test]
    fn segment_through_triangle() {
        let hit = segment_intersect_triangle(
            &p(0.5, 0.5, -1.0),
            &p(0.5, 0.5, 1.0),
            &xy_triangle(),
            1e-6,
            1e-5,
        )
        .unwrap();
        assert!((hit - p(0.5, 0.5, 0.0)).norm() < 1e-12);
    }

    #[test]
    fn segment_too_short_misses() {
        assert!(segment_intersect_triangle(
            &p(0.5, 0.5, 1.0),
            &p(0.5, 0.5, 2.0),
            &xy_triangle(),
            1e-6,
            1e-5,
        )
        .is_none());
    }

    #[test]
    fn segment_parallel_is_rejected() {
        assert!(segment_intersect_triangle(
            &p(0.1, 0.1, 0.0),
            &p(0.5, 0.5, 0.0),
            &xy_triangle(),
            1e-6,
            1e-5,
        )
        .is_none());
    }

    #[test]
    fn segment_crossing_plane_outside_triangle() {
        assert!(segment_intersect_triangle(
            &p(3.0, 3.0, -1.0),
            &p(3.0, 3.0, 1.0),
            &xy_triangle(),
            1e-6,
            1e-5,
        )
        .is_none());
    }
}
