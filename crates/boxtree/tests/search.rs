// Integration tests for BoxTree range queries.

use boxtree::{BoxTree, Entry};

/// A diagonal staircase of unit boxes: box `i` spans `[i, i + 1]` on both axes.
fn staircase(n: usize) -> Vec<Entry<usize>> {
    (0..n)
        .map(|i| Entry::new([i as f64, i as f64], [i as f64 + 1.0, i as f64 + 1.0], i))
        .collect()
}

fn hits(tree: &BoxTree<usize>, min: [f64; 2], max: [f64; 2]) -> Vec<usize> {
    let mut found = Vec::new();
    tree.search(min, max, |e| { found.push(e.handle); true });
    found.sort_unstable();
    found
}

#[test]
fn search_matches_brute_force() {
    let items = staircase(200);
    let tree = BoxTree::bulk_load(items.clone());
    assert_eq!(tree.len(), 200);

    for (min, max) in [([10.5, 0.0], [20.2, 300.0]), ([-5.0, -5.0], [0.0, 0.0]), ([199.5, 0.0], [500.0, 500.0])] {
        let mut expected: Vec<usize> = items.iter()
            .filter(|e| e.intersects(min, max))
            .map(|e| e.handle)
            .collect();
        expected.sort_unstable();
        assert_eq!(hits(&tree, min, max), expected);
    }
}

#[test]
fn shared_corners_are_found() {
    let tree = BoxTree::bulk_load(staircase(10));
    // The point (3, 3) is the corner shared by boxes 2 and 3.
    assert_eq!(hits(&tree, [3.0, 3.0], [3.0, 3.0]), vec![2, 3]);
}

#[test]
fn horizontal_line_query() {
    let tree = BoxTree::bulk_load(staircase(50));
    let found = hits(&tree, [f64::NEG_INFINITY, 7.5], [f64::INFINITY, 7.5]);
    assert_eq!(found, vec![7]);
}

#[test]
fn mixed_bulk_load_and_insert() {
    let mut tree = BoxTree::bulk_load(staircase(5));
    tree.insert([100.0, 100.0], [101.0, 101.0], 99);
    assert_eq!(tree.len(), 6);
    assert_eq!(hits(&tree, [100.5, 100.5], [100.5, 100.5]), vec![99]);
    assert_eq!(tree.iter().count(), 6);
}
