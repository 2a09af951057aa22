use crate::error::{OperationError, Result};
use crate::geometry::{Polygon, Polyline, Wireframe};
use crate::math::{Point3, TOLERANCE};

/// Extrudes a planar outline from `z = 0` up to `z = height` as a wireframe.
pub struct ExtrudeWireframe<'a> {
    base: &'a Polygon,
    height: f64,
}

impl<'a> ExtrudeWireframe<'a> {
    /// Creates a new `ExtrudeWireframe` operation.
    #[must_use]
    pub fn new(base: &'a Polygon, height: f64) -> Self {
        Self { base, height }
    }

    /// Executes the extrusion.
    ///
    /// The result holds the bottom loop, then the top loop and one vertical
    /// edge per base vertex. A zero height yields only the bottom loop.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::InvalidInput`] if the outline has fewer than
    /// 3 distinct vertices or the height is not finite.
    pub fn execute(&self) -> Result<Wireframe> {
        let base = self.base.open_vertices();
        if base.len() < 3 {
            return Err(OperationError::InvalidInput(format!(
                "extrusion needs at least 3 base points, got {}",
                base.len()
            ))
            .into());
        }
        if !self.height.is_finite() {
            return Err(
                OperationError::InvalidInput("extrude height must be finite".into()).into(),
            );
        }

        let bottom: Vec<Point3> = base.iter().map(|p| Point3::new(p.x, p.y, 0.0)).collect();
        if self.height.abs() < TOLERANCE {
            return Ok(Wireframe {
                polylines: vec![Polyline::closed(bottom)],
            });
        }

        let top: Vec<Point3> = base
            .iter()
            .map(|p| Point3::new(p.x, p.y, self.height))
            .collect();
        let verticals: Vec<Polyline> = bottom
            .iter()
            .zip(&top)
            .map(|(b, t)| Polyline::open(vec![*b, *t]))
            .collect();
        let mut polylines = vec![Polyline::closed(bottom), Polyline::closed(top)];
        polylines.extend(verticals);
        Ok(Wireframe { polylines })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point2;

    fn square() -> Polygon {
        Polygon::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
        ])
    }

    #[test]
    fn extrude_square_to_box_outline() {
        let base = square();
        let wf = ExtrudeWireframe::new(&base, 2.0).execute().unwrap();
        assert_eq!(wf.polylines.len(), 6);
        assert!(wf.polylines[0].points.iter().all(|p| p.z.abs() < 1e-12));
        assert!(wf.polylines[1].points.iter().all(|p| (p.z - 2.0).abs() < 1e-12));
        // 4 bottom + 4 top + 4 vertical
        assert_eq!(wf.segment_count(), 12);
    }

    #[test]
    fn closed_outline_is_not_doubled() {
        let mut pts = square().into_vertices();
        pts.push(pts[0]);
        let base = Polygon::new(pts);
        let wf = ExtrudeWireframe::new(&base, 1.0).execute().unwrap();
        assert_eq!(wf.polylines[0].points.len(), 4);
    }

    #[test]
    fn zero_height_gives_face_loop() {
        let base = square();
        let wf = ExtrudeWireframe::new(&base, 0.0).execute().unwrap();
        assert_eq!(wf.polylines.len(), 1);
        assert!(wf.polylines[0].closed);
    }

    #[test]
    fn too_few_points() {
        let base = Polygon::new(vec![Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)]);
        assert!(ExtrudeWireframe::new(&base, 1.0).execute().is_err());
    }
}
