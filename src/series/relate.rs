use crate::algorithm::{raycast, segments_intersect, segments_touch};
use crate::geom::{Point, Rect, Segment};

use super::Series;

impl Series<'_> {
    /// Returns true if `point` lies inside the ring.
    ///
    /// A point on the boundary yields `allow_on_edge`.  Open series have no
    /// interior, so for them only boundary points can qualify.
    pub fn contains_point(&self, point: Point, allow_on_edge: bool) -> bool {
        if self.is_empty() || !self.rect.contains_point(point) {
            return false;
        }

        let mut inside = false;
        let mut on_edge = false;
        self.search(Rect::horizontal_line(point.y), |seg, _| {
            let hit = raycast(point, seg.a, seg.b);
            if hit.on {
                on_edge = true;
                return false;
            }
            if hit.inside {
                inside = !inside;
            }
            true
        });

        if on_edge { allow_on_edge } else { self.closed && inside }
    }

    /// Returns true if `seg` intersects any segment of the series.
    ///
    /// When `allow_on_edge` is false, segments that only touch (an endpoint of
    /// one lying on the other, or a collinear overlap) are not counted.
    pub fn intersects_segment(&self, seg: Segment, allow_on_edge: bool) -> bool {
        let mut intersects = false;
        self.search(seg.rect(), |other, _| {
            if !segments_intersect(seg.a, seg.b, other.a, other.b) {
                return true;
            }
            if !allow_on_edge && segments_touch(seg, other) {
                return true;
            }
            intersects = true;
            false
        });
        intersects
    }

    /// Returns true if `other` lies entirely inside this ring.
    ///
    /// Every point of `other` must be inside (or on the boundary, if
    /// `allow_on_edge`), and no segment of `other` may cross the boundary or
    /// have its midpoint outside.  For a convex ring the point test alone is
    /// sufficient.
    pub fn contains_ring(&self, other: &Series<'_>, allow_on_edge: bool) -> bool {
        if !self.closed || self.is_empty() || other.is_empty() {
            return false;
        }
        if !self.rect.contains_rect(&other.rect) {
            return false;
        }
        if !other.iter_points().all(|p| self.contains_point(p, allow_on_edge)) {
            return false;
        }
        if self.convex {
            return true;
        }
        // A segment with both ends on the boundary can span a notch without
        // crossing any edge.
        other.segments().all(|(_, seg)| {
            !self.intersects_segment(seg, false) && self.contains_point(seg.midpoint(), allow_on_edge)
        })
    }

    /// Returns true if the two series share any point.
    ///
    /// Boundary-only contact counts only when `allow_on_edge` is set.  Rings
    /// whose boundaries coincide still intersect if their interiors overlap.
    /// The relation is symmetric.
    pub fn intersects_ring(&self, other: &Series<'_>, allow_on_edge: bool) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        if !self.rect.intersects_rect(&other.rect) {
            return false;
        }
        if other.segments().any(|(_, seg)| self.intersects_segment(seg, allow_on_edge))
            || other.iter_points().any(|p| self.contains_point(p, allow_on_edge))
            || self.iter_points().any(|p| other.contains_point(p, allow_on_edge))
        {
            return true;
        }
        if allow_on_edge {
            return false;
        }

        // Every contact so far was on a boundary; look for interior overlap.
        other.segments().any(|(_, seg)| self.contains_point(seg.midpoint(), false))
            || self.segments().any(|(_, seg)| other.contains_point(seg.midpoint(), false))
            || other.interior_point().is_some_and(|q| self.contains_point(q, false))
            || self.interior_point().is_some_and(|q| other.contains_point(q, false))
    }

    /// A point strictly inside the ring, or `None` for open, empty or flat
    /// series.
    ///
    /// Scans a horizontal line between the two lowest vertex heights, where
    /// no vertex can lie, and takes the middle of the first inside span.
    fn interior_point(&self) -> Option<Point> {
        if !self.closed || self.is_empty() {
            return None;
        }
        let low = self.rect.min.y;
        let next = self.iter_points().map(|p| p.y).filter(|&y| y > low).reduce(f64::min)?;
        let y = (low + next) / 2.0;

        let mut xs = Vec::new();
        self.search(Rect::horizontal_line(y), |seg, _| {
            if (seg.a.y > y) != (seg.b.y > y) {
                let t = (y - seg.a.y) / (seg.b.y - seg.a.y);
                xs.push(seg.a.x + t * (seg.b.x - seg.a.x));
            }
            true
        });
        xs.sort_by(f64::total_cmp);

        match xs.as_slice() {
            [left, right, ..] if left < right => Some(Point::new((left + right) / 2.0, y)),
            _ => None,
        }
    }
}
