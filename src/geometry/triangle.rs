use crate::math::{Point3, Vector3, TOLERANCE};

/// A triangle in 3D space.
///
/// Winding only affects the direction of [`normal`](Self::normal); the
/// intersection queries do not depend on it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub p1: Point3,
    pub p2: Point3,
    pub p3: Point3,
}

impl Triangle {
    /// Creates a triangle from its three vertices.
    #[must_use]
    pub fn new(p1: Point3, p2: Point3, p3: Point3) -> Self {
        Self { p1, p2, p3 }
    }

    /// Vertices in order.
    #[must_use]
    pub fn vertices(&self) -> [Point3; 3] {
        [self.p1, self.p2, self.p3]
    }

    /// Directed edges `p1→p2`, `p2→p3`, `p3→p1`.
    #[must_use]
    pub fn edges(&self) -> [(Point3, Point3); 3] {
        [(self.p1, self.p2), (self.p2, self.p3), (self.p3, self.p1)]
    }

    /// Unnormalized normal `(p2 - p1) × (p3 - p1)`.
    #[must_use]
    pub fn normal(&self) -> Vector3 {
        (self.p2 - self.p1).cross(&(self.p3 - self.p1))
    }

    /// Returns `true` if the vertices are (nearly) collinear.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.normal().norm() < TOLERANCE
    }
}

/// An unordered collection of triangles forming one mesh.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TriangleSet {
    triangles: Vec<Triangle>,
}

impl TriangleSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a triangle.
    pub fn push(&mut self, triangle: Triangle) {
        self.triangles.push(triangle);
    }

    /// Returns the triangles.
    #[must_use]
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// Iterates over the triangles.
    pub fn iter(&self) -> std::slice::Iter<'_, Triangle> {
        self.triangles.iter()
    }

    /// Number of triangles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    /// Returns `true` if the set holds no triangles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }
}

impl From<Vec<Triangle>> for TriangleSet {
    fn from(triangles: Vec<Triangle>) -> Self {
        Self { triangles }
    }
}

impl FromIterator<Triangle> for TriangleSet {
    fn from_iter<I: IntoIterator<Item = Triangle>>(iter: I) -> Self {
        Self {
            triangles: iter.into_iter().collect(),
        }
    }
}

impl Extend<Triangle> for TriangleSet {
    fn extend<I: IntoIterator<Item = Triangle>>(&mut self, iter: I) {
        self.triangles.extend(iter);
    }
}

impl<'a> IntoIterator for &'a TriangleSet {
    type Item = &'a Triangle;
    type IntoIter = std::slice::Iter<'a, Triangle>;

    fn into_iter(self) -> Self::IntoIter {
        self.triangles.iter()
    }
}

/// Segment along which two triangles meet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionSegment {
    pub start: Point3,
    pub end: Point3,
}

impl IntersectionSegment {
    /// Creates a segment from its endpoints.
    #[must_use]
    pub fn new(start: Point3, end: Point3) -> Self {
        Self { start, end }
    }

    /// Euclidean length.
    #[must_use]
    pub fn length(&self) -> f64 {
        (self.end - self.start).norm()
    }
}
