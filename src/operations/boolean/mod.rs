mod engine;
mod intersect_op;
mod select;
mod subtract;
mod union;

pub use engine::boolean_execute;
pub use intersect_op::{ClipParams, Intersect};
pub use select::BooleanOp;
pub use subtract::{Subtract, SubtractStrategy};
pub use union::{convex_hull, Union};
