use crate::error::{GeometryError, Result};
use crate::geometry::Polygon;
use crate::math::polygon_2d::Aabb2;
use crate::math::{Point2, TOLERANCE};

/// Creates an axis-aligned rectangle from its center and extents.
pub struct MakeRectangle {
    center: Point2,
    length: f64,
    width: f64,
}

impl MakeRectangle {
    /// Creates a new `MakeRectangle` operation. `length` runs along x and
    /// `width` along y.
    #[must_use]
    pub fn new(center: Point2, length: f64, width: f64) -> Self {
        Self {
            center,
            length,
            width,
        }
    }

    /// Executes the operation, returning the corners counter-clockwise from
    /// the bottom-left one.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Degenerate`] if either extent is not positive.
    pub fn execute(&self) -> Result<Polygon> {
        let positive = |v: f64| !v.is_nan() && v >= TOLERANCE;
        if !positive(self.length) || !positive(self.width) {
            return Err(GeometryError::Degenerate(format!(
                "rectangle extents must be positive, got {} x {}",
                self.length, self.width
            ))
            .into());
        }
        let half_len = self.length / 2.0;
        let half_wid = self.width / 2.0;
        let bounds = Aabb2 {
            min: Point2::new(self.center.x - half_len, self.center.y - half_wid),
            max: Point2::new(self.center.x + half_len, self.center.y + half_wid),
        };
        Ok(Polygon::new(bounds.corners().to_vec()))
    }
}
