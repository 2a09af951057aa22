pub mod intersect_2d;
pub mod intersect_3d;
pub mod polygon_2d;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Global geometric tolerance for degeneracy checks.
pub const TOLERANCE: f64 = 1e-10;

/// 2D cross product of `(a - o)` and `(b - o)`.
///
/// Positive when `o -> a -> b` turns left (counter-clockwise).
#[inline]
#[must_use]
pub fn cross_2d(o: &Point2, a: &Point2, b: &Point2) -> f64 {
    (a.x - o.x) * (b.y - o.y) - (a.y - o.y) * (b.x - o.x)
}

/// Component-wise closeness with an absolute tolerance.
#[inline]
#[must_use]
pub fn near_2d(a: &Point2, b: &Point2, tol: f64) -> bool {
    (a.x - b.x).abs() < tol && (a.y - b.y).abs() < tol
}

/// Component-wise closeness with an absolute tolerance.
#[inline]
#[must_use]
pub fn near_3d(a: &Point3, b: &Point3, tol: f64) -> bool {
    (a.x - b.x).abs() < tol && (a.y - b.y).abs() < tol && (a.z - b.z).abs() < tol
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cross_2d_sign_follows_turn_direction() {
        let o = Point2::new(0.0, 0.0);
        let a = Point2::new(1.0, 0.0);
        assert!(cross_2d(&o, &a, &Point2::new(1.0, 1.0)) > 0.0);
        assert!(cross_2d(&o, &a, &Point2::new(1.0, -1.0)) < 0.0);
        assert!(cross_2d(&o, &a, &Point2::new(2.0, 0.0)).abs() < TOLERANCE);
    }

    #[test]
    fn near_is_per_component() {
        let a = Point3::new(0.0, 0.0, 0.0);
        assert!(near_3d(&a, &Point3::new(5e-6, -5e-6, 5e-6), 1e-5));
        assert!(!near_3d(&a, &Point3::new(0.0, 0.0, 2e-5), 1e-5));
        assert!(near_2d(&Point2::new(1.0, 1.0), &Point2::new(1.0, 1.0 + 1e-7), 1e-6));
    }
}
