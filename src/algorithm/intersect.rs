use geo::kernels::{Kernel, Orientation, RobustKernel};

use crate::algorithm::raycast;
use crate::geom::{Point, Segment};

/// Orientation of the triple `p`, `q`, `r`, using adaptive-precision arithmetic.
#[inline]
pub fn orient(p: Point, q: Point, r: Point) -> Orientation {
    <RobustKernel as Kernel<f64>>::orient2d(p.into(), q.into(), r.into())
}

/// `r` is collinear with `p`–`q` and lies within its bounding box.
#[inline]
fn on_collinear(p: Point, q: Point, r: Point) -> bool {
    Segment::new(p, q).rect().contains_point(r)
}

/// Returns true if the closed segments `a`–`b` and `c`–`d` share any point.
///
/// Proper crossings, endpoint touches and collinear overlaps all count.
pub fn segments_intersect(a: Point, b: Point, c: Point, d: Point) -> bool {
    let o1 = orient(a, b, c);
    let o2 = orient(a, b, d);
    let o3 = orient(c, d, a);
    let o4 = orient(c, d, b);

    if o1 != o2 && o3 != o4 {
        return true;
    }

    (o1 == Orientation::Collinear && on_collinear(a, b, c))
        || (o2 == Orientation::Collinear && on_collinear(a, b, d))
        || (o3 == Orientation::Collinear && on_collinear(c, d, a))
        || (o4 == Orientation::Collinear && on_collinear(c, d, b))
}

/// Returns true if an endpoint of either segment lies on the other one.
///
/// Two intersecting segments that touch this way meet at or along an edge
/// rather than crossing through each other.
pub fn segments_touch(s: Segment, t: Segment) -> bool {
    raycast(s.a, t.a, t.b).on
        || raycast(s.b, t.a, t.b).on
        || raycast(t.a, s.a, s.b).on
        || raycast(t.b, s.a, s.b).on
}
