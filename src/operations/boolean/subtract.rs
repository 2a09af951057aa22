use crate::geometry::Polygon;
use crate::math::polygon_2d::Aabb2;
use crate::math::Point2;

use super::intersect_op::{ClipParams, Intersect};

/// How [`Subtract`] computes `A - B`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubtractStrategy {
    /// Cut A's bounding box by the overlap box into up to four rectangular
    /// strips. Exact for axis-aligned rectangles; any other polygon is
    /// treated as its bounding box.
    #[default]
    BoundingBoxStrips,
    /// Legacy behavior: the vertices of A that are not vertices of `A ∩ B`,
    /// or `A ∩ B` itself when none remain. Not a region difference.
    ClipDifference,
}

/// Subtracts one polygon from another (A - B).
pub struct Subtract<'a> {
    poly_a: &'a Polygon,
    poly_b: &'a Polygon,
    strategy: SubtractStrategy,
    clip_params: ClipParams,
}

impl<'a> Subtract<'a> {
    /// Creates a new `Subtract` operation (A - B) using strip decomposition.
    #[must_use]
    pub fn new(poly_a: &'a Polygon, poly_b: &'a Polygon) -> Self {
        Self {
            poly_a,
            poly_b,
            strategy: SubtractStrategy::default(),
            clip_params: ClipParams::default(),
        }
    }

    /// Selects the subtraction strategy.
    #[must_use]
    pub fn with_strategy(mut self, strategy: SubtractStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Overrides the clipping parameters used by [`SubtractStrategy::ClipDifference`].
    #[must_use]
    pub fn with_clip_params(mut self, params: ClipParams) -> Self {
        self.clip_params = params;
        self
    }

    /// Executes the subtraction.
    ///
    /// Returns the pieces of the difference. With strip decomposition these
    /// are counter-clockwise quads ordered top, bottom, left, right; when the
    /// boxes do not overlap the result is A unchanged. Inputs with fewer
    /// than three vertices produce no pieces.
    #[must_use]
    pub fn execute(&self) -> Vec<Polygon> {
        if self.poly_a.open_vertices().len() < 3 || self.poly_b.open_vertices().len() < 3 {
            return Vec::new();
        }
        match self.strategy {
            SubtractStrategy::BoundingBoxStrips => self.execute_strips(),
            SubtractStrategy::ClipDifference => self.execute_clip_difference(),
        }
    }

    fn execute_strips(&self) -> Vec<Polygon> {
        let (Some(a), Some(b)) = (
            Aabb2::from_points(self.poly_a.open_vertices()),
            Aabb2::from_points(self.poly_b.open_vertices()),
        ) else {
            return Vec::new();
        };
        let Some(overlap) = a.intersection(&b) else {
            return vec![self.poly_a.clone()];
        };

        let mut strips = Vec::with_capacity(4);
        // Top and bottom span A's full width; left and right fill the overlap's rows.
        if a.max.y > overlap.max.y {
            strips.push(strip(a.min.x, overlap.max.y, a.max.x, a.max.y));
        }
        if overlap.min.y > a.min.y {
            strips.push(strip(a.min.x, a.min.y, a.max.x, overlap.min.y));
        }
        if overlap.min.x > a.min.x {
            strips.push(strip(a.min.x, overlap.min.y, overlap.min.x, overlap.max.y));
        }
        if a.max.x > overlap.max.x {
            strips.push(strip(overlap.max.x, overlap.min.y, a.max.x, overlap.max.y));
        }
        strips
    }

    fn execute_clip_difference(&self) -> Vec<Polygon> {
        let common = Intersect::new(self.poly_a, self.poly_b)
            .with_params(self.clip_params)
            .execute();
        let remaining: Vec<Point2> = self
            .poly_a
            .open_vertices()
            .iter()
            .filter(|v| !common.vertices().contains(*v))
            .copied()
            .collect();
        if remaining.is_empty() {
            if common.is_empty() {
                Vec::new()
            } else {
                vec![common]
            }
        } else {
            vec![Polygon::new(remaining)]
        }
    }
}

fn strip(x0: f64, y0: f64, x1: f64, y1: f64) -> Polygon {
    let bounds = Aabb2 {
        min: Point2::new(x0, y0),
        max: Point2::new(x1, y1),
    };
    Polygon::new(bounds.corners().to_vec())
}
