use crate::geometry::Polygon;
use crate::math::intersect_2d::crossing_point;
use crate::math::polygon_2d::{dedup_consecutive, signed_area_2d};
use crate::math::{cross_2d, Point2};

/// Parameters for polygon clipping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipParams {
    /// Consecutive output vertices closer than this (per coordinate) are merged.
    pub merge_tolerance: f64,
}

impl Default for ClipParams {
    fn default() -> Self {
        Self {
            merge_tolerance: 1e-6,
        }
    }
}

/// Intersects a subject polygon with a convex clip polygon
/// (Sutherland–Hodgman).
///
/// The clip polygon must be convex and consistently wound; either winding is
/// accepted. A non-convex clip polygon gives an unspecified result.
pub struct Intersect<'a> {
    subject: &'a Polygon,
    clip: &'a Polygon,
    params: ClipParams,
}

impl<'a> Intersect<'a> {
    /// Creates a new `Intersect` operation clipping `subject` by `clip`.
    #[must_use]
    pub fn new(subject: &'a Polygon, clip: &'a Polygon) -> Self {
        Self {
            subject,
            clip,
            params: ClipParams::default(),
        }
    }

    /// Overrides the clipping parameters.
    #[must_use]
    pub fn with_params(mut self, params: ClipParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the clip.
    ///
    /// The result is explicitly closed (first vertex repeated at the end)
    /// when non-empty. Inputs with fewer than three vertices, and disjoint
    /// inputs, produce an empty polygon.
    #[must_use]
    pub fn execute(&self) -> Polygon {
        let subject = self.subject.open_vertices();
        let clip = self.clip.open_vertices();
        if subject.len() < 3 || clip.len() < 3 {
            return Polygon::default();
        }

        // Orientation of the clip polygon decides which side of an edge is "in".
        let winding = if signed_area_2d(clip) < 0.0 { -1.0 } else { 1.0 };

        let mut output = subject.to_vec();
        for (i, a) in clip.iter().enumerate() {
            if output.is_empty() {
                break;
            }
            let b = &clip[(i + 1) % clip.len()];
            output = clip_against_edge(&output, a, b, winding);
        }

        let mut result = dedup_consecutive(&output, self.params.merge_tolerance);
        if result.len() < 3 {
            // Touching along an edge or at a corner leaves no area.
            return Polygon::default();
        }
        result.push(result[0]);
        Polygon::new(result)
    }
}

/// One Sutherland–Hodgman pass: keeps the part of `input` on the inner side
/// of the directed line `a -> b`. Points on the line count as inside.
fn clip_against_edge(input: &[Point2], a: &Point2, b: &Point2, winding: f64) -> Vec<Point2> {
    let side = |pt: &Point2| winding * cross_2d(a, b, pt);
    let mut out = Vec::with_capacity(input.len() + 1);

    let Some(mut prev) = input.last() else {
        return out;
    };
    let mut prev_side = side(prev);

    for cur in input {
        let cur_side = side(cur);
        let cur_in = cur_side >= 0.0;
        let prev_in = prev_side >= 0.0;

        if cur_in != prev_in {
            if let Some(x) = crossing_point(prev, cur, prev_side, cur_side) {
                out.push(x);
            }
        }
        if cur_in {
            out.push(*cur);
        }

        prev = cur;
        prev_side = cur_side;
    }
    out
}
