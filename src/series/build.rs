use boxtree::Entry;

use crate::algorithm::{orient, Orientation};
use crate::geom::{Point, Rect, Segment};

use super::SegmentId;

/// A ring needs three points to enclose anything, a line needs two.
#[inline]
pub(super) fn is_degenerate(len: usize, closed: bool) -> bool {
    (closed && len < 3) || len < 2
}

/// Number of segments, dropping the closing segment of a ring whose last
/// point already repeats the first.
pub(super) fn segment_count(points: &[Point], closed: bool) -> usize {
    let n = points.len();
    if is_degenerate(n, closed) { return 0 }
    if !closed { return n - 1 }
    if points[n - 1] == points[0] { n - 1 } else { n }
}

#[inline]
pub(super) fn segment_at(points: &[Point], closed: bool, i: usize) -> Segment {
    let b = if closed && i == points.len() - 1 { points[0] } else { points[i + 1] };
    Segment::new(points[i], b)
}

/// Compute convexity and the bounding rect, and collect segment boxes into
/// `entries` if given, all in one pass over the points.
///
/// Degenerate input yields `(false, Rect::default())` and no entries.
pub(super) fn process_points(
    points: &[Point],
    closed: bool,
    mut entries: Option<&mut Vec<Entry<SegmentId>>>,
) -> (bool, Rect) {
    let n = points.len();
    if is_degenerate(n, closed) {
        return (false, Rect::default());
    }

    let segments = segment_count(points, closed);
    // Distinct vertices of a ring: an explicit closing point repeats vertex 0,
    // so the turn at vertex 0 wraps over it.
    let vertices = if closed && points[n - 1] == points[0] { n - 1 } else { n };
    // Open series have no turns at their endpoints.
    let turns = if closed { vertices } else { n - 2 };

    let mut rect = Rect::from_point(points[0]);
    let mut direction = Orientation::Collinear;
    let mut concave = false;

    for i in 0..n {
        if let Some(entries) = entries.as_deref_mut() {
            if i < segments {
                let (min, max) = segment_at(points, closed, i).rect().as_corners();
                entries.push(Entry::new(min, max, SegmentId(i)));
            }
        }

        rect.expand(points[i]);

        if concave || i >= turns { continue }
        let turn = orient(points[i], points[(i + 1) % vertices], points[(i + 2) % vertices]);
        match (direction, turn) {
            (_, Orientation::Collinear) => {}
            (Orientation::Collinear, _) => direction = turn,
            _ if turn != direction => concave = true,
            _ => {}
        }
    }

    (!concave, rect)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points(coords: &[(f64, f64)]) -> Vec<Point> {
        coords.iter().map(|&c| c.into()).collect()
    }

    #[test]
    fn entries_cover_every_segment() {
        let ring = points(&[(0.0, 0.0), (2.0, 0.0), (2.0, 1.0), (0.0, 1.0)]);
        let mut entries = Vec::new();
        process_points(&ring, true, Some(&mut entries));
        let ids: Vec<usize> = entries.iter().map(|e| e.handle.0).collect();
        assert_eq!(ids, vec![0, 1, 2, 3]);
        // Closing segment runs from (0, 1) back to (0, 0).
        assert_eq!(entries[3].min, [0.0, 0.0]);
        assert_eq!(entries[3].max, [0.0, 1.0]);
    }

    #[test]
    fn entries_skip_duplicate_closing_segment() {
        let ring = points(&[(0.0, 0.0), (2.0, 0.0), (2.0, 1.0), (0.0, 0.0)]);
        let mut entries = Vec::new();
        let (convex, rect) = process_points(&ring, true, Some(&mut entries));
        assert_eq!(entries.len(), 3);
        assert!(convex);
        assert_eq!(rect, Rect::new(Point::new(0.0, 0.0), Point::new(2.0, 1.0)));
    }

    #[test]
    fn closing_point_does_not_hide_first_turn() {
        // Reflex at vertex 0 only.
        let dart = [(1.0, 0.5), (2.0, 0.0), (1.0, 2.0), (0.0, 0.0)];
        let (convex, _) = process_points(&points(&dart), true, None);
        assert!(!convex);

        let mut closed = dart.to_vec();
        closed.push(dart[0]);
        let mut entries = Vec::new();
        let (convex, _) = process_points(&points(&closed), true, Some(&mut entries));
        assert!(!convex);
        assert_eq!(entries.len(), 4);
    }

    #[test]
    fn degenerate_input_yields_nothing() {
        let mut entries = Vec::new();
        let (convex, rect) = process_points(&points(&[(1.0, 1.0), (2.0, 2.0)]), true, Some(&mut entries));
        assert!(!convex);
        assert_eq!(rect, Rect::default());
        assert!(entries.is_empty());
    }

    #[test]
    fn rect_is_seeded_by_first_point() {
        let line = points(&[(-1.0, 5.0), (-3.0, 6.0)]);
        let (_, rect) = process_points(&line, false, None);
        assert_eq!(rect, Rect::new(Point::new(-3.0, 5.0), Point::new(-1.0, 6.0)));
    }
}
