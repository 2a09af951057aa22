//! The stateless entry point collaborators call into.
//!
//! [`Kernel`] bundles an immutable [`KernelConfig`] and forwards every call to
//! the matching operation in [`crate::operations`]. No call mutates the kernel
//! or its inputs; every result is freshly owned.

use tracing::debug;

use crate::error::{ConfigError, Result};
use crate::geometry::{ControlPolygon, IntersectionSegment, Polygon, Triangle, TriangleSet};
use crate::math::Point2;
use crate::operations::boolean::{
    boolean_execute, BooleanOp, ClipParams, Intersect, Subtract, SubtractStrategy, Union,
};
use crate::operations::query::{
    are_coplanar, CurveCurveIntersect, CurveIntersectionParams, MeshIntersectionParams,
    MeshMeshIntersect, TriangleIntersectionParams, TriangleTriangleIntersect, MIN_SAMPLE_STEP,
};

/// Tolerances and policies shared by every kernel call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KernelConfig {
    /// Tolerances for triangle-triangle tests.
    pub triangle: TriangleIntersectionParams,
    /// Tolerances for sampled curve intersection.
    pub curve: CurveIntersectionParams,
    /// Tolerances for polygon clipping.
    pub clip: ClipParams,
    /// Parameter step used when walking edges of coplanar triangle pairs.
    pub coplanar_sample_step: f64,
    /// How polygon subtraction decomposes its result.
    pub subtract_strategy: SubtractStrategy,
}

impl Default for KernelConfig {
    fn default() -> Self {
        Self {
            triangle: TriangleIntersectionParams::default(),
            curve: CurveIntersectionParams::default(),
            clip: ClipParams::default(),
            coplanar_sample_step: MeshIntersectionParams::default().coplanar_sample_step,
            subtract_strategy: SubtractStrategy::default(),
        }
    }
}

impl KernelConfig {
    /// Checks that every tolerance is finite and positive and that the
    /// coplanar sampling step lies in `[MIN_SAMPLE_STEP, 1]`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidTolerance`] naming the first offending
    /// tolerance, or [`ConfigError::InvalidSampleStep`].
    pub fn validate(&self) -> Result<()> {
        let tolerances = [
            ("triangle.coplanar_tolerance", self.triangle.coplanar_tolerance),
            ("triangle.parallel_tolerance", self.triangle.parallel_tolerance),
            (
                "triangle.barycentric_tolerance",
                self.triangle.barycentric_tolerance,
            ),
            ("triangle.merge_tolerance", self.triangle.merge_tolerance),
            ("curve.detection_tolerance", self.curve.detection_tolerance),
            ("curve.merge_tolerance", self.curve.merge_tolerance),
            ("clip.merge_tolerance", self.clip.merge_tolerance),
        ];
        for (name, value) in tolerances {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidTolerance { name, value }.into());
            }
        }
        let step = self.coplanar_sample_step;
        if !(MIN_SAMPLE_STEP..=1.0).contains(&step) {
            return Err(ConfigError::InvalidSampleStep(step).into());
        }
        Ok(())
    }

    fn mesh_params(&self) -> MeshIntersectionParams {
        MeshIntersectionParams {
            triangle: self.triangle,
            coplanar_sample_step: self.coplanar_sample_step,
        }
    }
}

/// Geometry kernel facade.
#[derive(Debug, Clone, Default)]
pub struct Kernel {
    config: KernelConfig,
}

impl Kernel {
    /// Creates a kernel after validating `config`.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the configuration is rejected by
    /// [`KernelConfig::validate`].
    pub fn new(config: KernelConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns the active configuration.
    #[must_use]
    pub fn config(&self) -> &KernelConfig {
        &self.config
    }

    /// Evaluates a Bezier curve at `t` in `[0, 1]`.
    #[must_use]
    pub fn evaluate_bezier(&self, control: &ControlPolygon, t: f64) -> Option<Point2> {
        control.evaluate(t)
    }

    /// Samples a Bezier curve at `count + 1` evenly spaced parameters.
    #[must_use]
    pub fn sample_bezier(&self, control: &ControlPolygon, count: usize) -> Vec<Point2> {
        control.sample(count)
    }

    /// Approximates the crossings of two sampled curves.
    #[must_use]
    pub fn intersect_curves(&self, curve_a: &[Point2], curve_b: &[Point2]) -> Vec<Point2> {
        let hits = CurveCurveIntersect::new(curve_a, curve_b)
            .with_params(self.config.curve)
            .execute();
        debug!(
            samples_a = curve_a.len(),
            samples_b = curve_b.len(),
            hits = hits.len(),
            "curve intersection finished"
        );
        hits
    }

    /// Convex hull of both polygons' vertices.
    #[must_use]
    pub fn union_polygons(&self, poly_a: &Polygon, poly_b: &Polygon) -> Polygon {
        Union::new(poly_a, poly_b).execute()
    }

    /// Clips `subject` against the convex polygon `clip`.
    #[must_use]
    pub fn intersect_polygons(&self, subject: &Polygon, clip: &Polygon) -> Polygon {
        Intersect::new(subject, clip)
            .with_params(self.config.clip)
            .execute()
    }

    /// Removes `poly_b` from `poly_a`, returning the remaining pieces.
    #[must_use]
    pub fn subtract_polygons(&self, poly_a: &Polygon, poly_b: &Polygon) -> Vec<Polygon> {
        Subtract::new(poly_a, poly_b)
            .with_strategy(self.config.subtract_strategy)
            .with_clip_params(self.config.clip)
            .execute()
    }

    /// Runs any polygon boolean, reporting non-empty pieces.
    #[must_use]
    pub fn polygon_boolean(
        &self,
        poly_a: &Polygon,
        poly_b: &Polygon,
        op: BooleanOp,
    ) -> Vec<Polygon> {
        boolean_execute(
            poly_a,
            poly_b,
            op,
            self.config.clip,
            self.config.subtract_strategy,
        )
    }

    /// Whether `t2` lies in the plane of `t1`.
    #[must_use]
    pub fn are_triangles_coplanar(&self, t1: &Triangle, t2: &Triangle) -> bool {
        are_coplanar(t1, t2, self.config.triangle.coplanar_tolerance)
    }

    /// The segment along which two non-coplanar triangles meet, if any.
    #[must_use]
    pub fn intersect_triangles(
        &self,
        t1: &Triangle,
        t2: &Triangle,
    ) -> Option<IntersectionSegment> {
        TriangleTriangleIntersect::new(t1, t2)
            .with_params(self.config.triangle)
            .execute()
    }

    /// Every intersection segment between two meshes.
    #[must_use]
    pub fn intersect_meshes(
        &self,
        mesh_a: &TriangleSet,
        mesh_b: &TriangleSet,
    ) -> Vec<IntersectionSegment> {
        MeshMeshIntersect::new(mesh_a, mesh_b)
            .with_params(self.config.mesh_params())
            .execute()
    }
}
