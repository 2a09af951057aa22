/// The type of boolean operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BooleanOp {
    /// Convex hull of both vertex sets.
    Union,
    /// A minus B.
    Subtract,
    /// A clipped by convex B.
    Intersect,
}
