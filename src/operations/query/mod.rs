mod curve_intersect;
mod mesh_intersect;
mod pick_point;
mod triangle_intersect;

pub use curve_intersect::{CurveCurveIntersect, CurveIntersectionParams};
pub use mesh_intersect::{MeshIntersectionParams, MeshMeshIntersect, MIN_SAMPLE_STEP};
pub use pick_point::PickControlPoint;
pub use triangle_intersect::{
    are_coplanar, edges_intersect_2d, TriangleIntersectionParams, TriangleTriangleIntersect,
};
