use super::Point;

/// An axis-aligned bounding box.
///
/// `Default` is the zero rect at the origin, which is what empty series report.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub min: Point,
    pub max: Point,
}

impl Rect {
    #[inline] pub const fn new(min: Point, max: Point) -> Self { Self { min, max } }

    /// A zero-area rect covering a single point.
    #[inline] pub const fn from_point(p: Point) -> Self { Self { min: p, max: p } }

    /// The degenerate rect spanning every x at height `y`.
    #[inline]
    pub const fn horizontal_line(y: f64) -> Self {
        Self {
            min: Point::new(f64::NEG_INFINITY, y),
            max: Point::new(f64::INFINITY, y),
        }
    }

    /// Grow the rect so that it includes `p`.
    #[inline]
    pub fn expand(&mut self, p: Point) {
        self.min.x = self.min.x.min(p.x);
        self.min.y = self.min.y.min(p.y);
        self.max.x = self.max.x.max(p.x);
        self.max.y = self.max.y.max(p.y);
    }

    /// Closed-interval overlap test; rects that only touch do intersect.
    #[inline]
    pub fn intersects_rect(&self, other: &Rect) -> bool {
        self.min.x <= other.max.x && self.max.x >= other.min.x
            && self.min.y <= other.max.y && self.max.y >= other.min.y
    }

    #[inline]
    pub fn contains_point(&self, p: Point) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    #[inline]
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.min.x >= self.min.x && other.max.x <= self.max.x
            && other.min.y >= self.min.y && other.max.y <= self.max.y
    }

    #[inline]
    pub fn center(&self) -> Point {
        Point::new((self.min.x + self.max.x) / 2.0, (self.min.y + self.max.y) / 2.0)
    }

    /// Corners in the layout the box index expects.
    #[inline]
    pub fn as_corners(&self) -> ([f64; 2], [f64; 2]) {
        (self.min.into(), self.max.into())
    }
}

impl From<geo::Rect<f64>> for Rect {
    fn from(r: geo::Rect<f64>) -> Self {
        Self { min: r.min().into(), max: r.max().into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit() -> Rect { Rect::new(Point::new(0.0, 0.0), Point::new(1.0, 1.0)) }

    #[test]
    fn expand_grows_both_axes() {
        let mut r = Rect::from_point(Point::new(1.0, 1.0));
        r.expand(Point::new(-2.0, 3.0));
        r.expand(Point::new(0.0, -4.0));
        assert_eq!(r, Rect::new(Point::new(-2.0, -4.0), Point::new(1.0, 3.0)));
    }

    #[test]
    fn touching_rects_intersect() {
        let other = Rect::new(Point::new(1.0, 1.0), Point::new(2.0, 2.0));
        assert!(unit().intersects_rect(&other));
        let apart = Rect::new(Point::new(1.01, 0.0), Point::new(2.0, 1.0));
        assert!(!unit().intersects_rect(&apart));
    }

    #[test]
    fn horizontal_line_hits_everything_at_height() {
        let line = Rect::horizontal_line(0.5);
        assert!(line.intersects_rect(&unit()));
        assert!(!Rect::horizontal_line(1.5).intersects_rect(&unit()));
    }

    #[test]
    fn containment_and_center() {
        let inner = Rect::new(Point::new(0.25, 0.25), Point::new(0.75, 1.0));
        assert!(unit().contains_rect(&inner));
        assert!(!inner.contains_rect(&unit()));
        assert!(unit().contains_point(Point::new(1.0, 0.0)));
        assert_eq!(unit().center(), Point::new(0.5, 0.5));
    }
}
