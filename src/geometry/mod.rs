pub mod bezier;
pub mod polygon;
pub mod triangle;
pub mod wireframe;

pub use bezier::ControlPolygon;
pub use polygon::Polygon;
pub use triangle::{IntersectionSegment, Triangle, TriangleSet};
pub use wireframe::{Polyline, Wireframe};
