use crate::geometry::Polygon;

use super::intersect_op::{ClipParams, Intersect};
use super::select::BooleanOp;
use super::subtract::{Subtract, SubtractStrategy};
use super::union::Union;

/// Executes a boolean operation on two polygons.
///
/// Every operation is reported as a list of pieces so callers can render the
/// three kinds uniformly: union and intersection produce at most one
/// polygon, subtraction may produce several. Empty pieces are dropped.
#[must_use]
pub fn boolean_execute(
    poly_a: &Polygon,
    poly_b: &Polygon,
    op: BooleanOp,
    clip_params: ClipParams,
    strategy: SubtractStrategy,
) -> Vec<Polygon> {
    let pieces = match op {
        BooleanOp::Union => vec![Union::new(poly_a, poly_b).execute()],
        BooleanOp::Intersect => vec![Intersect::new(poly_a, poly_b)
            .with_params(clip_params)
            .execute()],
        BooleanOp::Subtract => Subtract::new(poly_a, poly_b)
            .with_strategy(strategy)
            .with_clip_params(clip_params)
            .execute(),
    };
    let pieces: Vec<Polygon> = pieces.into_iter().filter(|p| !p.is_empty()).collect();
    tracing::debug!(?op, pieces = pieces.len(), "polygon boolean finished");
    pieces
}
