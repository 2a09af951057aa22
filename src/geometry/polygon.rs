use crate::math::polygon_2d::signed_area_2d;
use crate::math::Point2;

/// An implicitly closed planar polygon.
///
/// Vertex order is significant: boolean operations read the inside of an
/// edge from its winding. A final vertex equal to the first is treated as
/// explicit closure and is ignored by [`open_vertices`](Self::open_vertices).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polygon {
    vertices: Vec<Point2>,
}

impl Polygon {
    /// Creates a polygon from its vertices.
    #[must_use]
    pub fn new(vertices: Vec<Point2>) -> Self {
        Self { vertices }
    }

    /// Returns the vertices as stored, including a closing duplicate if any.
    #[must_use]
    pub fn vertices(&self) -> &[Point2] {
        &self.vertices
    }

    /// Consumes the polygon and returns its vertices.
    #[must_use]
    pub fn into_vertices(self) -> Vec<Point2> {
        self.vertices
    }

    /// Returns the vertices without a trailing closing duplicate.
    #[must_use]
    pub fn open_vertices(&self) -> &[Point2] {
        match self.vertices.as_slice() {
            [first, rest @ .., last] if !rest.is_empty() && first == last => {
                &self.vertices[..self.vertices.len() - 1]
            }
            all => all,
        }
    }

    /// Number of stored vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns `true` if the polygon has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns `true` if the last stored vertex repeats the first.
    #[must_use]
    pub fn is_explicitly_closed(&self) -> bool {
        self.open_vertices().len() < self.vertices.len()
    }

    /// Signed area, positive for counter-clockwise winding.
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        signed_area_2d(self.open_vertices())
    }
}

impl From<Vec<Point2>> for Polygon {
    fn from(vertices: Vec<Point2>) -> Self {
        Self::new(vertices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn closing_vertex_is_dropped_from_open_view() {
        let closed = Polygon::new(vec![p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0), p(0.0, 0.0)]);
        assert!(closed.is_explicitly_closed());
        assert_eq!(closed.open_vertices().len(), 3);

        let open = Polygon::new(vec![p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0)]);
        assert!(!open.is_explicitly_closed());
        assert_eq!(open.open_vertices().len(), 3);
    }

    #[test]
    fn two_equal_points_are_not_closure() {
        let pair = Polygon::new(vec![p(2.0, 2.0), p(2.0, 2.0)]);
        assert_eq!(pair.open_vertices().len(), 2);
    }

    #[test]
    fn signed_area_ignores_closure() {
        let closed = Polygon::new(vec![
            p(0.0, 0.0),
            p(2.0, 0.0),
            p(2.0, 2.0),
            p(0.0, 2.0),
            p(0.0, 0.0),
        ]);
        assert!((closed.signed_area() - 4.0).abs() < 1e-12);
    }
}
