use std::f64::consts::TAU;

use crate::error::{GeometryError, OperationError, Result};
use crate::geometry::{Polyline, Wireframe};
use crate::math::{Point3, TOLERANCE};

/// Creates the wireframe of a z-aligned cylinder centered on the origin.
///
/// The wireframe holds `stacks + 1` horizontal rings from `z = -height / 2`
/// to `z = height / 2`, followed by `slices` vertical lines.
pub struct MakeCylinder {
    radius: f64,
    height: f64,
    slices: usize,
    stacks: usize,
}

impl MakeCylinder {
    /// Creates a new `MakeCylinder` operation with 20 slices and 10 stacks.
    #[must_use]
    pub fn new(radius: f64, height: f64) -> Self {
        Self {
            radius,
            height,
            slices: 20,
            stacks: 10,
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
    /// Returns [`GeometryError::Degenerate`] if the radius or height is not
    /// positive, and [`OperationError::InvalidInput`] if there are fewer than
    /// 3 slices or no stacks.
    #[allow(clippy::cast_precision_loss)]
    pub fn execute(&self) -> Result<Wireframe> {
        if self.radius.is_nan() || self.radius < TOLERANCE {
            return Err(GeometryError::Degenerate("cylinder radius must be positive".into()).into());
        }
        if self.height.is_nan() || self.height < TOLERANCE {
            return Err(GeometryError::Degenerate("cylinder height must be positive".into()).into());
        }
        if self.slices < 3 || self.stacks == 0 {
            return Err(OperationError::InvalidInput(format!(
                "cylinder needs at least 3 slices and 1 stack, got {} x {}",
                self.slices, self.stacks
            ))
            .into());
        }

        let half = self.height / 2.0;
        let z_at = |i: usize| -half + self.height * i as f64 / self.stacks as f64;
        let rim = |j: usize| {
            let angle = TAU * j as f64 / self.slices as f64;
            (self.radius * angle.cos(), self.radius * angle.sin())
        };

        let mut polylines = Vec::with_capacity(self.stacks + 1 + self.slices);
        for i in 0..=self.stacks {
            let z = z_at(i);
            let ring = (0..self.slices)
                .map(|j| {
                    let (x, y) = rim(j);
                    Point3::new(x, y, z)
                })
                .collect();
            polylines.push(Polyline::closed(ring));
        }
        for j in 0..self.slices {
            let (x, y) = rim(j);
            let line = (0..=self.stacks).map(|i| Point3::new(x, y, z_at(i))).collect();
            polylines.push(Polyline::open(line));
        }
        Ok(Wireframe { polylines })
    }
}
