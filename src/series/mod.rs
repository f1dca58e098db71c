//! Point series: ordered point sequences, optionally closed into rings, with
//! a cached bounding rect, a convexity flag and a segment index for large
//! inputs.

mod build;
mod relate;
mod search;

use std::borrow::Cow;
use std::fmt;
use std::sync::OnceLock;

use boxtree::BoxTree;

use crate::geom::{Point, Rect, Segment};

/// Minimum number of points before a series indexes its own segments.
pub const MIN_TREE_POINTS: usize = 32;

/// Identifies one segment of a series: segment `i` runs from point `i` to
/// point `i + 1`, or back to point `0` for the closing segment of a ring.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SegmentId(pub(crate) usize);

impl SegmentId {
    /// Position of the segment within its series.
    #[inline] pub fn get(self) -> usize { self.0 }
}

impl fmt::Display for SegmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SegmentId({})", self.0)
    }
}

/// An ordered series of points, optionally closed into a ring.
///
/// All derived data (rect, convexity, segment index) is computed once at
/// construction, so a series never changes after it is built.  Points are
/// either owned or borrowed from the caller; a borrowed buffer cannot be
/// mutated while the series is alive.
#[derive(Clone, Debug)]
pub struct Series<'a> {
    points: Cow<'a, [Point]>,
    closed: bool,
    convex: bool,
    rect: Rect,
    tree: OnceLock<BoxTree<SegmentId>>,
}

impl Series<'static> {
    /// Build a series that takes ownership of `points`.
    pub fn new(points: Vec<Point>, closed: bool) -> Self {
        Self::build(points, closed, MIN_TREE_POINTS)
    }

    /// Build a series over a private copy of `points`.
    pub fn copied(points: &[Point], closed: bool) -> Self {
        Self::build(points.to_vec(), closed, MIN_TREE_POINTS)
    }
}

impl<'a> Series<'a> {
    /// Build a series that borrows the caller's `points`.
    pub fn borrowed(points: &'a [Point], closed: bool) -> Self {
        Self::build(points, closed, MIN_TREE_POINTS)
    }

    /// Build a series, indexing its segments if it has at least
    /// `index_threshold` points.
    pub fn build(points: impl Into<Cow<'a, [Point]>>, closed: bool, index_threshold: usize) -> Self {
        let points = points.into();

        let mut entries = (!build::is_degenerate(points.len(), closed)
            && points.len() >= index_threshold)
            .then(Vec::new);
        let (convex, rect) = build::process_points(&points, closed, entries.as_mut());

        let tree = match entries {
            Some(entries) => {
                tracing::debug!(points = points.len(), segments = entries.len(), "bulk-loading segment index");
                OnceLock::from(BoxTree::bulk_load(entries))
            }
            None => OnceLock::new(),
        };

        Self { points, closed, convex, rect, tree }
    }

    /// Index the segments of a series built below the threshold.
    ///
    /// Does nothing if an index already exists.
    pub fn build_index(&self) {
        self.tree.get_or_init(|| {
            tracing::trace!(points = self.points.len(), "building deferred segment index");
            let mut entries = Vec::with_capacity(self.segment_count());
            build::process_points(&self.points, self.closed, Some(&mut entries));
            BoxTree::bulk_load(entries)
        });
    }

    /// Returns true if the series takes up no space: a ring with fewer than
    /// three points or a line with fewer than two.
    #[inline] pub fn is_empty(&self) -> bool { build::is_degenerate(self.points.len(), self.closed) }

    /// Get the bounding rect; the zero rect for empty series.
    #[inline] pub fn rect(&self) -> Rect { self.rect }

    /// Check if every turn of the series has the same rotational sign.
    #[inline] pub fn convex(&self) -> bool { self.convex }

    /// Check if the last point connects back to the first.
    #[inline] pub fn closed(&self) -> bool { self.closed }

    /// Get the points as given at construction.
    #[inline] pub fn points(&self) -> &[Point] { &self.points }

    /// Check if a segment index has been built.
    #[inline] pub fn has_index(&self) -> bool { self.tree.get().is_some() }

    /// Number of segments yielded by `for_each_segment`.
    #[inline] pub fn segment_count(&self) -> usize { build::segment_count(&self.points, self.closed) }

    /// Get the segment with the given id, or `None` if the series has no such
    /// segment.
    pub fn segment(&self, id: SegmentId) -> Option<Segment> {
        (id.0 < self.segment_count()).then(|| self.segment_unchecked(id))
    }

    /// `id` must be below `segment_count()`.
    #[inline]
    pub(crate) fn segment_unchecked(&self, id: SegmentId) -> Segment {
        build::segment_at(&self.points, self.closed, id.0)
    }
}

impl From<&geo::LineString<f64>> for Series<'static> {
    fn from(line: &geo::LineString<f64>) -> Self {
        Series::new(line.coords().map(|&c| c.into()).collect(), line.is_closed())
    }
}

impl From<&geo::Polygon<f64>> for Series<'static> {
    fn from(polygon: &geo::Polygon<f64>) -> Self {
        Series::new(polygon.exterior().coords().map(|&c| c.into()).collect(), true)
    }
}
