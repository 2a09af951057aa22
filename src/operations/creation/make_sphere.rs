use std::f64::consts::{FRAC_PI_2, PI, TAU};

use crate::error::{GeometryError, OperationError, Result};
use crate::geometry::{Polyline, Wireframe};
use crate::math::{Point3, TOLERANCE};

/// Creates the latitude/longitude wireframe of a sphere centered on the origin.
///
/// Latitude rings exclude the poles (`stacks - 1` closed rings); each of the
/// `slices` meridians runs pole to pole through `stacks + 1` points.
pub struct MakeSphere {
    radius: f64,
    slices: usize,
    stacks: usize,
}

impl MakeSphere {
    /// Creates a new `MakeSphere` operation with 20 slices and 20 stacks.
    #[must_use]
    pub fn new(radius: f64) -> Self {
        Self {
            radius,
            slices: 20,
            stacks: 20,
        }
    }

    /// Overrides the tessellation density.
    #[must_use]
    pub fn with_resolution(mut self, slices: usize, stacks: usize) -> Self {
        self.slices = slices;
        self.stacks = stacks;
        self
    }

    /// Executes the operation.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Degenerate`] if the radius is not positive and
    /// [`OperationError::InvalidInput`] if there are fewer than 3 slices or
    /// 2 stacks.
    #[allow(clippy::cast_precision_loss)]
    pub fn execute(&self) -> Result<Wireframe> {
        if self.radius.is_nan() || self.radius < TOLERANCE {
            return Err(GeometryError::Degenerate("sphere radius must be positive".into()).into());
        }
        if self.slices < 3 || self.stacks < 2 {
            return Err(OperationError::InvalidInput(format!(
                "sphere needs at least 3 slices and 2 stacks, got {} x {}",
                self.slices, self.stacks
            ))
            .into());
        }

        let r = self.radius;
        let point = |i: usize, j: usize| {
            let lat = -FRAC_PI_2 + PI * i as f64 / self.stacks as f64;
            let lng = TAU * j as f64 / self.slices as f64;
            Point3::new(
                r * lat.cos() * lng.cos(),
                r * lat.cos() * lng.sin(),
                r * lat.sin(),
            )
        };

        let mut polylines = Vec::with_capacity(self.stacks - 1 + self.slices);
        for i in 1..self.stacks {
            polylines.push(Polyline::closed((0..self.slices).map(|j| point(i, j)).collect()));
        }
        for j in 0..self.slices {
            polylines.push(Polyline::open((0..=self.stacks).map(|i| point(i, j)).collect()));
        }
        Ok(Wireframe { polylines })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::ShapekernError;

    #[test]
    fn ring_and_meridian_counts() {
        let wf = MakeSphere::new(1.0).execute().unwrap();
        assert_eq!(wf.polylines.len(), 19 + 20);
        assert!(wf.polylines[..19].iter().all(|pl| pl.closed));
        assert!(wf.polylines[19..].iter().all(|pl| pl.points.len() == 21));
    }

    #[test]
    fn points_lie_on_the_sphere() {
        let wf = MakeSphere::new(3.0).with_resolution(6, 4).execute().unwrap();
        for pt in wf.points() {
            assert!((pt.coords.norm() - 3.0).abs() < 1e-9);
        }
        let meridian = &wf.polylines[3];
        assert!((meridian.points[0].z + 3.0).abs() < 1e-12);
        assert!((meridian.points[4].z - 3.0).abs() < 1e-12);
    }

    #[test]
    fn invalid_parameters() {
        assert!(matches!(
            MakeSphere::new(-1.0).execute(),
            Err(ShapekernError::Geometry(GeometryError::Degenerate(_)))
        ));
        assert!(matches!(
            MakeSphere::new(1.0).with_resolution(3, 1).execute(),
            Err(ShapekernError::Operation(OperationError::InvalidInput(_)))
        ));
    }
}
