/// A position in the plane.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline] pub const fn new(x: f64, y: f64) -> Self { Self { x, y } }
}

impl From<(f64, f64)> for Point {
    #[inline] fn from((x, y): (f64, f64)) -> Self { Self { x, y } }
}

impl From<[f64; 2]> for Point {
    #[inline] fn from([x, y]: [f64; 2]) -> Self { Self { x, y } }
}

impl From<Point> for [f64; 2] {
    #[inline] fn from(p: Point) -> Self { [p.x, p.y] }
}

impl From<geo::Coord<f64>> for Point {
    #[inline] fn from(c: geo::Coord<f64>) -> Self { Self { x: c.x, y: c.y } }
}

impl From<Point> for geo::Coord<f64> {
    #[inline] fn from(p: Point) -> Self { geo::Coord { x: p.x, y: p.y } }
}

impl From<geo::Point<f64>> for Point {
    #[inline] fn from(p: geo::Point<f64>) -> Self { Self { x: p.x(), y: p.y() } }
}

impl From<Point> for geo::Point<f64> {
    #[inline] fn from(p: Point) -> Self { geo::Point::new(p.x, p.y) }
}
