use geoseries::{Point, Rect, Series};

/// A decoded GeoJSON geometry, with every ring built into a `Series`.
#[derive(Debug)]
pub enum Shape {
    Point(Point),
    LineString(Series<'static>),
    Polygon {
        exterior: Series<'static>,
        holes: Vec<Series<'static>>,
    },
}

impl Shape {
    /// Bounding rect; a zero-area rect for points.
    pub fn rect(&self) -> Rect {
        match self {
            Shape::Point(p) => Rect::from_point(*p),
            Shape::LineString(line) => line.rect(),
            Shape::Polygon { exterior, .. } => exterior.rect(),
        }
    }

    #[inline] pub fn center(&self) -> Point { self.rect().center() }

    /// The series describing the outline, if the shape has one.
    fn outline(&self) -> Option<&Series<'static>> {
        match self {
            Shape::Point(_) => None,
            Shape::LineString(line) => Some(line),
            Shape::Polygon { exterior, .. } => Some(exterior),
        }
    }

    fn holes(&self) -> &[Series<'static>] {
        match self {
            Shape::Polygon { holes, .. } => holes.as_slice(),
            _ => &[],
        }
    }

    /// Points inside a hole are outside the polygon; points on a hole's
    /// boundary follow `allow_on_edge` like the exterior boundary does.
    pub fn contains_point(&self, point: Point, allow_on_edge: bool) -> bool {
        match self {
            Shape::Point(p) => *p == point,
            Shape::LineString(line) => line.contains_point(point, allow_on_edge),
            Shape::Polygon { exterior, holes } => {
                exterior.contains_point(point, allow_on_edge)
                    && !holes.iter().any(|hole| hole.contains_point(point, !allow_on_edge))
            }
        }
    }

    pub fn intersects(&self, other: &Shape, allow_on_edge: bool) -> bool {
        match (self, other) {
            (Shape::Point(p), _) => other.contains_point(*p, allow_on_edge),
            (_, Shape::Point(p)) => self.contains_point(*p, allow_on_edge),
            _ => {
                let (Some(a), Some(b)) = (self.outline(), other.outline()) else { return false };
                a.intersects_ring(b, allow_on_edge)
                    && !self.holes().iter().any(|hole| hole.contains_ring(b, !allow_on_edge))
                    && !other.holes().iter().any(|hole| hole.contains_ring(a, !allow_on_edge))
            }
        }
    }

    /// Returns true if `other` lies within this shape.
    pub fn contains(&self, other: &Shape, allow_on_edge: bool) -> bool {
        match (self, other) {
            (_, Shape::Point(p)) => self.contains_point(*p, allow_on_edge),
            (Shape::Point(_), _) => false,
            _ => {
                let (Some(a), Some(b)) = (self.outline(), other.outline()) else { return false };
                a.contains_ring(b, allow_on_edge)
                    && !self.holes().iter().any(|hole| hole.intersects_ring(b, !allow_on_edge))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ring(coords: &[(f64, f64)]) -> Series<'static> {
        Series::new(coords.iter().map(|&c| c.into()).collect(), true)
    }

    fn donut() -> Shape {
        Shape::Polygon {
            exterior: ring(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]),
            holes: vec![ring(&[(4.0, 4.0), (6.0, 4.0), (6.0, 6.0), (4.0, 6.0)])],
        }
    }

    #[test]
    fn holes_exclude_points() {
        let donut = donut();
        assert!(donut.contains_point(Point::new(1.0, 1.0), false));
        assert!(!donut.contains_point(Point::new(5.0, 5.0), true));
        assert!(donut.contains_point(Point::new(4.0, 5.0), true));
        assert!(!donut.contains_point(Point::new(4.0, 5.0), false));
        assert_eq!(donut.center(), Point::new(5.0, 5.0));
    }

    #[test]
    fn shape_inside_hole_does_not_intersect() {
        let donut = donut();
        let pebble = Shape::Polygon {
            exterior: ring(&[(4.5, 4.5), (5.5, 4.5), (5.5, 5.5)]),
            holes: vec![],
        };
        assert!(!donut.intersects(&pebble, true));
        assert!(!pebble.intersects(&donut, true));
        assert!(!donut.contains(&pebble, true));
    }

    #[test]
    fn shape_across_hole_is_not_contained() {
        let donut = donut();
        let bar = Shape::Polygon {
            exterior: ring(&[(1.0, 4.5), (9.0, 4.5), (9.0, 5.5), (1.0, 5.5)]),
            holes: vec![],
        };
        assert!(donut.intersects(&bar, false));
        assert!(!donut.contains(&bar, true));

        let corner = Shape::Polygon {
            exterior: ring(&[(1.0, 1.0), (3.0, 1.0), (3.0, 3.0), (1.0, 3.0)]),
            holes: vec![],
        };
        assert!(donut.contains(&corner, false));
    }

    #[test]
    fn plug_filling_hole_touches_only_the_hole_boundary() {
        let donut = donut();
        let plug = Shape::Polygon {
            exterior: ring(&[(4.0, 4.0), (6.0, 4.0), (6.0, 6.0), (4.0, 6.0)]),
            holes: vec![],
        };
        assert!(!donut.contains(&plug, true));
        assert!(donut.intersects(&plug, true));
        assert!(!donut.intersects(&plug, false));
    }

    #[test]
    fn points_relate_by_equality() {
        let a = Shape::Point(Point::new(1.0, 2.0));
        let b = Shape::Point(Point::new(1.0, 2.0));
        assert!(a.intersects(&b, false));
        assert!(a.contains(&b, false));
        assert!(b.contains(&a, false));
    }
}
