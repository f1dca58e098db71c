use crate::geom::{Point, Rect, Segment};

use super::{SegmentId, Series};

impl Series<'_> {
    /// Iterate over the points in order.
    #[inline]
    pub fn iter_points(&self) -> impl Iterator<Item = Point> + '_ {
        self.points.iter().copied()
    }

    /// Visit each point in order until `visit` returns `false`.
    pub fn for_each_point<F>(&self, mut visit: F)
    where
        F: FnMut(Point) -> bool,
    {
        for &point in self.points.iter() {
            if !visit(point) {
                return;
            }
        }
    }

    /// Iterate over the segments in order.
    #[inline]
    pub fn segments(&self) -> impl Iterator<Item = (SegmentId, Segment)> + '_ {
        (0..self.segment_count()).map(move |i| (SegmentId(i), self.segment_unchecked(SegmentId(i))))
    }

    /// Visit each segment in order until `visit` returns `false`.
    pub fn for_each_segment<F>(&self, mut visit: F)
    where
        F: FnMut(Segment, SegmentId) -> bool,
    {
        for (id, seg) in self.segments() {
            if !visit(seg, id) {
                return;
            }
        }
    }

    /// Visit every segment whose bounding rect intersects `rect`, until
    /// `visit` returns `false`.
    ///
    /// Uses the segment index when one exists and a linear scan otherwise.
    /// Both paths visit the same set of segments, though not necessarily in
    /// the same order.
    pub fn search<F>(&self, rect: Rect, mut visit: F)
    where
        F: FnMut(Segment, SegmentId) -> bool,
    {
        match self.tree.get() {
            Some(tree) => {
                let (min, max) = rect.as_corners();
                tree.search(min, max, |entry| visit(self.segment_unchecked(entry.handle), entry.handle));
            }
            None => self.for_each_segment(|seg, id| {
                !seg.rect().intersects_rect(&rect) || visit(seg, id)
            }),
        }
    }
}
