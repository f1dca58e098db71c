use geo::kernels::Orientation;

use crate::algorithm::orient;
use crate::geom::{Point, Segment};

/// Classification of a point against one segment of a ring.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RayHit {
    /// The rightward horizontal ray from the point crosses the segment.
    pub inside: bool,
    /// The point lies on the closed segment, endpoints included.
    pub on: bool,
}

/// Cast a horizontal ray from `p` towards `+x` against the segment `a`–`b`.
///
/// An edge is crossed only when exactly one of its endpoints lies strictly
/// above `p.y`; an endpoint at exactly `p.y` counts as below.  Two edges
/// meeting at a vertex level with the ray are therefore counted zero or two
/// times when the ring merely touches the ray there, and exactly once when it
/// passes through it, so parity over a closed ring does not depend on where
/// the vertices fall.
pub fn raycast(p: Point, a: Point, b: Point) -> RayHit {
    let turn = orient(a, b, p);
    if turn == Orientation::Collinear && Segment::new(a, b).rect().contains_point(p) {
        return RayHit { inside: false, on: true };
    }
    if (a.y > p.y) == (b.y > p.y) {
        return RayHit::default();
    }
    // The crossing lies right of `p` iff `p` is left of the edge walked upwards.
    let inside = if b.y > a.y {
        turn == Orientation::CounterClockwise
    } else {
        turn == Orientation::Clockwise
    };
    RayHit { inside, on: false }
}
