use crate::math::Point3;

/// An ordered run of points, optionally closed into a loop.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polyline {
    /// The ordered vertices of the polyline.
    pub points: Vec<Point3>,
    /// Whether the last point connects back to the first.
    pub closed: bool,
}

impl Polyline {
    /// Creates an open polyline.
    #[must_use]
    pub fn open(points: Vec<Point3>) -> Self {
        Self {
            points,
            closed: false,
        }
    }

    /// Creates a closed loop.
    #[must_use]
    pub fn closed(points: Vec<Point3>) -> Self {
        Self {
            points,
            closed: true,
        }
    }

    /// Number of line segments the polyline draws.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        match self.points.len() {
            0 | 1 => 0,
            n if self.closed => n,
            n => n - 1,
        }
    }
}

/// A line-only outline of a shape, ready to be drawn as strips and loops.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Wireframe {
    pub polylines: Vec<Polyline>,
}

impl Wireframe {
    /// Total number of drawn segments.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.polylines.iter().map(Polyline::segment_count).sum()
    }

    /// Iterates over every point of every polyline.
    pub fn points(&self) -> impl Iterator<Item = &Point3> {
        self.polylines.iter().flat_map(|pl| pl.points.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segment_counts() {
        let pts = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
        ];
        let wf = Wireframe {
            polylines: vec![
                Polyline::open(pts.clone()),
                Polyline::closed(pts),
                Polyline::closed(vec![Point3::origin()]),
            ],
        };
        assert_eq!(wf.polylines[0].segment_count(), 2);
        assert_eq!(wf.polylines[1].segment_count(), 3);
        assert_eq!(wf.segment_count(), 5);
        assert_eq!(wf.points().count(), 7);
    }
}
