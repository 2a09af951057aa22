use crate::geometry::Polygon;
use crate::math::{cross_2d, Point2};

/// Approximates the union of two polygons by the convex hull of their
/// combined vertices.
///
/// This is exact only when both inputs are convex and their true union is
/// convex as well. Two disjoint squares, for example, come back as one hull
/// that also covers the gap between them.
pub struct Union<'a> {
    poly_a: &'a Polygon,
    poly_b: &'a Polygon,
}

impl<'a> Union<'a> {
    /// Creates a new `Union` operation.
    #[must_use]
    pub fn new(poly_a: &'a Polygon, poly_b: &'a Polygon) -> Self {
        Self { poly_a, poly_b }
    }

    /// Executes the union, returning a counter-clockwise hull.
    ///
    /// When the inputs contribute three points or fewer in total they are
    /// returned unmodified.
    #[must_use]
    pub fn execute(&self) -> Polygon {
        let mut points = Vec::with_capacity(self.poly_a.len() + self.poly_b.len());
        points.extend_from_slice(self.poly_a.open_vertices());
        points.extend_from_slice(self.poly_b.open_vertices());
        Polygon::new(convex_hull(points))
    }
}

/// Andrew's monotone chain convex hull.
///
/// Collinear points on the hull boundary are dropped. Inputs of three points
/// or fewer are returned as given. The result is counter-clockwise and not
/// explicitly closed.
#[must_use]
pub fn convex_hull(mut points: Vec<Point2>) -> Vec<Point2> {
    if points.len() <= 3 {
        return points;
    }
    points.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));

    let mut lower: Vec<Point2> = Vec::with_capacity(points.len());
    for pt in &points {
        push_hull_point(&mut lower, *pt);
    }
    let mut upper: Vec<Point2> = Vec::with_capacity(points.len());
    for pt in points.iter().rev() {
        push_hull_point(&mut upper, *pt);
    }

    // Each chain ends where the other begins.
    lower.pop();
    upper.pop();
    lower.extend(upper);

    if lower.is_empty() {
        // Every input point coincides.
        lower.push(points[0]);
    }
    lower
}

fn push_hull_point(chain: &mut Vec<Point2>, pt: Point2) {
    while chain.len() >= 2
        && cross_2d(&chain[chain.len() - 2], &chain[chain.len() - 1], &pt) <= 0.0
    {
        chain.pop();
    }
    chain.push(pt);
}
