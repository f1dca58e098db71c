use rstar::{AABB, RTree};

use crate::entry::Entry;

/// An R-tree over `Entry<H>` items, keyed by handle.
///
/// Built either incrementally with [`BoxTree::insert`] or in one shot with
/// [`BoxTree::bulk_load`], which yields a better balanced tree.
#[derive(Clone, Debug)]
pub struct BoxTree<H> {
    rtree: RTree<Entry<H>>,
}

impl<H> Default for BoxTree<H> {
    fn default() -> Self {
        Self { rtree: RTree::new() }
    }
}

impl<H: Copy> BoxTree<H> {
    /// Create an empty tree.
    pub fn new() -> Self { Self::default() }

    /// Construct a tree from a complete set of entries.
    pub fn bulk_load(items: Vec<Entry<H>>) -> Self {
        Self { rtree: RTree::bulk_load(items) }
    }

    /// Insert a single box.
    pub fn insert(&mut self, min: [f64; 2], max: [f64; 2], handle: H) {
        self.rtree.insert(Entry::new(min, max, handle));
    }

    /// Number of stored entries.
    #[inline] pub fn len(&self) -> usize { self.rtree.size() }

    /// Check if the tree holds no entries.
    #[inline] pub fn is_empty(&self) -> bool { self.rtree.size() == 0 }

    /// Iterate over every entry in unspecified order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Entry<H>> {
        self.rtree.iter()
    }

    /// Visit every entry whose box intersects the closed box `[min, max]`.
    ///
    /// Stops as soon as `visit` returns `false`.  Returns `false` if the
    /// search was stopped early, `true` if every candidate was visited.
    pub fn search<F>(&self, min: [f64; 2], max: [f64; 2], mut visit: F) -> bool
    where
        F: FnMut(&Entry<H>) -> bool,
    {
        let envelope = AABB::from_corners(min, max);
        for entry in self.rtree.locate_in_envelope_intersecting(&envelope) {
            if !visit(entry) {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(n: usize) -> Vec<Entry<usize>> {
        (0..n * n)
            .map(|i| {
                let (x, y) = ((i % n) as f64, (i / n) as f64);
                Entry::new([x, y], [x + 0.5, y + 0.5], i)
            })
            .collect()
    }

    #[test]
    fn empty_tree_finds_nothing() {
        let tree: BoxTree<usize> = BoxTree::new();
        assert!(tree.is_empty());
        let mut hits = 0;
        assert!(tree.search([-1e9, -1e9], [1e9, 1e9], |_| { hits += 1; true }));
        assert_eq!(hits, 0);
    }

    #[test]
    fn insert_then_search() {
        let mut tree = BoxTree::new();
        tree.insert([0.0, 0.0], [1.0, 1.0], 1u32);
        tree.insert([5.0, 5.0], [6.0, 6.0], 2u32);
        assert_eq!(tree.len(), 2);

        let mut found = Vec::new();
        tree.search([0.5, 0.5], [0.7, 0.7], |e| { found.push(e.handle); true });
        assert_eq!(found, vec![1]);
    }

    #[test]
    fn bulk_load_matches_insert() {
        let items = grid(10);
        let bulk = BoxTree::bulk_load(items.clone());
        let mut incremental = BoxTree::new();
        for e in &items {
            incremental.insert(e.min, e.max, e.handle);
        }

        let query = ([2.2, 3.1], [4.9, 6.0]);
        let mut a = Vec::new();
        let mut b = Vec::new();
        bulk.search(query.0, query.1, |e| { a.push(e.handle); true });
        incremental.search(query.0, query.1, |e| { b.push(e.handle); true });
        a.sort_unstable();
        b.sort_unstable();
        assert_eq!(a, b);
        assert!(!a.is_empty());
    }

    #[test]
    fn search_stops_early() {
        let tree = BoxTree::bulk_load(grid(8));
        let mut visits = 0;
        let completed = tree.search([0.0, 0.0], [8.0, 8.0], |_| { visits += 1; false });
        assert!(!completed);
        assert_eq!(visits, 1);
    }
}
