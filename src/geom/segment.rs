use super::{Point, Rect};

/// A directed line segment from `a` to `b`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Segment {
    pub a: Point,
    pub b: Point,
}

impl Segment {
    #[inline] pub const fn new(a: Point, b: Point) -> Self { Self { a, b } }

    /// Bounding rect of the segment, normalised so that `min <= max`.
    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::new(
            Point::new(self.a.x.min(self.b.x), self.a.y.min(self.b.y)),
            Point::new(self.a.x.max(self.b.x), self.a.y.max(self.b.y)),
        )
    }

    #[inline]
    pub fn midpoint(&self) -> Point {
        Point::new((self.a.x + self.b.x) / 2.0, (self.a.y + self.b.y) / 2.0)
    }
}

impl From<geo::Line<f64>> for Segment {
    fn from(line: geo::Line<f64>) -> Self {
        Self { a: line.start.into(), b: line.end.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_is_normalised() {
        let seg = Segment::new(Point::new(3.0, -1.0), Point::new(1.0, 4.0));
        assert_eq!(seg.rect(), Rect::new(Point::new(1.0, -1.0), Point::new(3.0, 4.0)));
    }

    #[test]
    fn midpoint_is_halfway() {
        let seg = Segment::new(Point::new(-2.0, 1.0), Point::new(4.0, 2.0));
        assert_eq!(seg.midpoint(), Point::new(1.0, 1.5));
    }
}
