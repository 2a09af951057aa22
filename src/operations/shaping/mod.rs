mod extrude;

pub use extrude::ExtrudeWireframe;
