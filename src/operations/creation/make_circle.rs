use std::f64::consts::TAU;

use crate::error::{GeometryError, OperationError, Result};
use crate::geometry::Polygon;
use crate::math::{Point2, TOLERANCE};

/// Approximates a circle by a regular counter-clockwise polygon.
pub struct MakeCircle {
    center: Point2,
    radius: f64,
    segments: usize,
}

impl MakeCircle {
    /// Creates a new `MakeCircle` operation with 100 segments.
    #[must_use]
    pub fn new(center: Point2, radius: f64) -> Self {
        Self {
            center,
            radius,
            segments: 100,
        }
    }

    /// Overrides the number of polygon vertices.
    #[must_use]
    pub fn with_segments(mut self, segments: usize) -> Self {
        self.segments = segments;
        self
    }

    /// Executes the operation. The first vertex lies at angle zero.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Degenerate`] if the radius is not positive and
    /// [`OperationError::InvalidInput`] if fewer than 3 segments are requested.
    #[allow(clippy::cast_precision_loss)]
    pub fn execute(&self) -> Result<Polygon> {
        if self.radius.is_nan() || self.radius < TOLERANCE {
            return Err(GeometryError::Degenerate("circle radius must be positive".into()).into());
        }
        if self.segments < 3 {
            return Err(OperationError::InvalidInput(format!(
                "a circle needs at least 3 segments, got {}",
                self.segments
            ))
            .into());
        }
        let step = TAU / self.segments as f64;
        let vertices = (0..self.segments)
            .map(|i| {
                let angle = i as f64 * step;
                Point2::new(
                    self.center.x + self.radius * angle.cos(),
                    self.center.y + self.radius * angle.sin(),
                )
            })
            .collect();
        Ok(Polygon::new(vertices))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::ShapekernError;

    #[test]
    fn vertices_lie_on_circle() {
        let center = Point2::new(3.0, -2.0);
        let poly = MakeCircle::new(center, 4.0).execute().unwrap();
        assert_eq!(poly.len(), 100);
        for v in poly.vertices() {
            assert!(((v - center).norm() - 4.0).abs() < 1e-9);
        }
        assert!((poly.vertices()[0] - Point2::new(7.0, -2.0)).norm() < 1e-12);
    }

    #[test]
    fn polygon_area_approaches_disc_area() {
        let poly = MakeCircle::new(Point2::origin(), 1.0).execute().unwrap();
        assert!(poly.signed_area() > 0.0);
        assert!((poly.signed_area() - std::f64::consts::PI).abs() < 0.01);
    }

    #[test]
    fn invalid_parameters() {
        assert!(matches!(
            MakeCircle::new(Point2::origin(), 0.0).execute(),
            Err(ShapekernError::Geometry(GeometryError::Degenerate(_)))
        ));
        assert!(MakeCircle::new(Point2::origin(), -1.0).execute().is_err());
        assert!(MakeCircle::new(Point2::origin(), 1.0)
            .with_segments(2)
            .execute()
            .is_err());
    }
}
