use crate::geometry::{IntersectionSegment, Triangle, TriangleSet};
use crate::math::intersect_3d::point_in_triangle;
use crate::math::Point3;

use super::triangle_intersect::{
    are_coplanar, TriangleIntersectionParams, TriangleTriangleIntersect,
};

/// Smallest accepted coplanar sampling step; finer steps are clamped to it.
pub const MIN_SAMPLE_STEP: f64 = 1e-6;

/// Parameters for mesh-mesh intersection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshIntersectionParams {
    /// Tolerances for the per-pair triangle queries.
    pub triangle: TriangleIntersectionParams,
    /// Edge parameter step used to sample coplanar overlaps.
    pub coplanar_sample_step: f64,
}

impl Default for MeshIntersectionParams {
    fn default() -> Self {
        Self {
            triangle: TriangleIntersectionParams::default(),
            coplanar_sample_step: 0.01,
        }
    }
}

/// Intersects every triangle of one mesh with every triangle of another.
///
/// Non-coplanar pairs use [`TriangleTriangleIntersect`]. Coplanar pairs fall
/// back to sampling: each edge of one triangle is walked in steps of
/// `coplanar_sample_step` and every run of two or more consecutive samples
/// inside the other triangle becomes a segment. That fallback is only
/// accurate to one sampling step, which is much coarser than the other
/// tolerances in the kernel. Degenerate triangles are skipped.
pub struct MeshMeshIntersect<'a> {
    mesh_a: &'a TriangleSet,
    mesh_b: &'a TriangleSet,
    params: MeshIntersectionParams,
}

impl<'a> MeshMeshIntersect<'a> {
    /// Creates a new `MeshMeshIntersect` query.
    #[must_use]
    pub fn new(mesh_a: &'a TriangleSet, mesh_b: &'a TriangleSet) -> Self {
        Self {
            mesh_a,
            mesh_b,
            params: MeshIntersectionParams::default(),
        }
    }

    /// Overrides the parameters.
    #[must_use]
    pub fn with_params(mut self, params: MeshIntersectionParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the query, returning all segments in A-major pair order.
    #[must_use]
    pub fn execute(&self) -> Vec<IntersectionSegment> {
        let mut segments = Vec::new();
        let mut skipped = 0usize;
        let mut coplanar_pairs = 0usize;

        for (ia, a) in self.mesh_a.iter().enumerate() {
            if a.is_degenerate() {
                tracing::trace!(index = ia, "skipping degenerate triangle in mesh A");
                skipped += self.mesh_b.len();
                continue;
            }
            for (ib, b) in self.mesh_b.iter().enumerate() {
                if b.is_degenerate() {
                    tracing::trace!(index = ib, "skipping degenerate triangle in mesh B");
                    skipped += 1;
                    continue;
                }
                if are_coplanar(a, b, self.params.triangle.coplanar_tolerance) {
                    coplanar_pairs += 1;
                    self.sample_coplanar(a, b, &mut segments);
                    self.sample_coplanar(b, a, &mut segments);
                } else if let Some(seg) = TriangleTriangleIntersect::new(a, b)
                    .with_params(self.params.triangle)
                    .execute()
                {
                    segments.push(seg);
                }
            }
        }

        tracing::debug!(
            triangles_a = self.mesh_a.len(),
            triangles_b = self.mesh_b.len(),
            coplanar_pairs,
            skipped,
            segments = segments.len(),
            "mesh intersection finished"
        );
        segments
    }

    /// Appends the runs of `edges_of`'s edges lying inside `target`.
    fn sample_coplanar(
        &self,
        edges_of: &Triangle,
        target: &Triangle,
        out: &mut Vec<IntersectionSegment>,
    ) {
        let steps = sample_count(self.params.coplanar_sample_step);
        let tol = self.params.triangle.barycentric_tolerance;
        for (p0, p1) in edges_of.edges() {
            let mut run = SampleRun::default();
            for i in 0..=steps {
                #[allow(clippy::cast_precision_loss)]
                let t = i as f64 / steps as f64;
                let pt = p0 + (p1 - p0) * t;
                if point_in_triangle(&pt, target, tol) {
                    run.extend(pt);
                } else {
                    run.flush(out);
                }
            }
            run.flush(out);
        }
    }
}

/// Number of steps that walk `[0, 1]` with the given step size.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn sample_count(step: f64) -> usize {
    if step.is_finite() && step > 0.0 {
        (1.0 / step.max(MIN_SAMPLE_STEP)).round().max(1.0) as usize
    } else {
        1
    }
}

/// A run of consecutive contained samples along one edge.
#[derive(Debug, Default)]
struct SampleRun {
    start: Option<Point3>,
    end: Option<Point3>,
    len: usize,
}

impl SampleRun {
    fn extend(&mut self, pt: Point3) {
        if self.start.is_none() {
            self.start = Some(pt);
        }
        self.end = Some(pt);
        self.len += 1;
    }

    /// Emits the run as a segment when it spans two or more samples, then resets.
    fn flush(&mut self, out: &mut Vec<IntersectionSegment>) {
        if let (Some(start), Some(end)) = (self.start, self.end) {
            if self.len > 1 {
                out.push(IntersectionSegment::new(start, end));
            }
        }
        *self = Self::default();
    }
}
