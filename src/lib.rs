pub mod error;
pub mod geometry;
pub mod io;
pub mod kernel;
pub mod math;
pub mod operations;

pub use error::{Result, ShapekernError};
pub use kernel::{Kernel, KernelConfig};
