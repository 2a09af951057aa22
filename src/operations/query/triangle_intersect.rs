use crate::geometry::{IntersectionSegment, Triangle};
use crate::math::intersect_2d::segments_intersect_2d;
use crate::math::intersect_3d::{segment_intersect_triangle, TrianglePlane};
use crate::math::{near_3d, Point2, Point3};

/// Tolerances for triangle-triangle queries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriangleIntersectionParams {
    /// Maximum `|n·v + d|` for a vertex to count as lying on a plane.
    pub coplanar_tolerance: f64,
    /// Edges with `|n·dir|` below this are treated as parallel to a plane.
    pub parallel_tolerance: f64,
    /// Slack allowed on each barycentric coordinate in containment tests.
    pub barycentric_tolerance: f64,
    /// Crossing points closer than this (per coordinate) are merged.
    pub merge_tolerance: f64,
}

impl Default for TriangleIntersectionParams {
    fn default() -> Self {
        Self {
            coplanar_tolerance: 1e-5,
            parallel_tolerance: 1e-6,
            barycentric_tolerance: 1e-5,
            merge_tolerance: 1e-5,
        }
    }
}

/// Returns `true` if every vertex of `t2` lies on the plane of `t1`.
///
/// The plane is taken in its unnormalized form, so `eps` scales with twice
/// `t1`'s area. A degenerate `t1` has no plane and is never coplanar.
#[must_use]
pub fn are_coplanar(t1: &Triangle, t2: &Triangle, eps: f64) -> bool {
    let Some(plane) = TrianglePlane::of(t1) else {
        return false;
    };
    t2.vertices()
        .iter()
        .all(|v| plane.signed_distance(v).abs() < eps)
}

/// Returns `true` if any edge of `t1` crosses any edge of `t2` once both are
/// projected onto the XY plane.
///
/// The z coordinate is ignored entirely, so this is only meaningful for
/// triangles that already lie in (or parallel to) the XY plane.
#[must_use]
pub fn edges_intersect_2d(t1: &Triangle, t2: &Triangle) -> bool {
    let flat = |p: &Point3| Point2::new(p.x, p.y);
    t1.edges().iter().any(|(a0, a1)| {
        t2.edges()
            .iter()
            .any(|(b0, b1)| segments_intersect_2d(&flat(a0), &flat(a1), &flat(b0), &flat(b1)))
    })
}

/// Computes the segment along which two non-coplanar triangles meet.
pub struct TriangleTriangleIntersect<'a> {
    t1: &'a Triangle,
    t2: &'a Triangle,
    params: TriangleIntersectionParams,
}

impl<'a> TriangleTriangleIntersect<'a> {
    /// Creates a new `TriangleTriangleIntersect` query.
    #[must_use]
    pub fn new(t1: &'a Triangle, t2: &'a Triangle) -> Self {
        Self {
            t1,
            t2,
            params: TriangleIntersectionParams::default(),
        }
    }

    /// Overrides the tolerances.
    #[must_use]
    pub fn with_params(mut self, params: TriangleIntersectionParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the query.
    ///
    /// Every edge of each triangle is intersected with the other triangle.
    /// The surviving crossing points are merged, and exactly two distinct
    /// points form the result. Touching at a single point, missing, and
    /// the coplanar configuration (edges parallel to the other plane) all
    /// return `None`, as does any degenerate input.
    #[must_use]
    pub fn execute(&self) -> Option<IntersectionSegment> {
        let mut unique: Vec<Point3> = Vec::with_capacity(6);
        for hit in self
            .edge_hits(self.t1, self.t2)
            .chain(self.edge_hits(self.t2, self.t1))
        {
            if !unique
                .iter()
                .any(|q| near_3d(q, &hit, self.params.merge_tolerance))
            {
                unique.push(hit);
            }
        }

        match unique.as_slice() {
            [start, end] => Some(IntersectionSegment::new(*start, *end)),
            _ => None,
        }
    }

    /// Crossing points of `edges_of`'s edges with triangle `target`.
    fn edge_hits<'b>(
        &'b self,
        edges_of: &'b Triangle,
        target: &'b Triangle,
    ) -> impl Iterator<Item = Point3> + 'b {
        edges_of.edges().into_iter().filter_map(move |(p0, p1)| {
            segment_intersect_triangle(
                &p0,
                &p1,
                target,
                self.params.parallel_tolerance,
                self.params.barycentric_tolerance,
            )
        })
    }
}
