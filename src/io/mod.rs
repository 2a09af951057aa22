pub mod mesh_file;

pub use mesh_file::{load_ascii_mesh, read_ascii_mesh};
