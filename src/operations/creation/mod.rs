mod make_circle;
mod make_cylinder;
mod make_rectangle;
mod make_sphere;

pub use make_circle::MakeCircle;
pub use make_cylinder::MakeCylinder;
pub use make_rectangle::MakeRectangle;
pub use make_sphere::MakeSphere;
