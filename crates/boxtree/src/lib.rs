//! A small two-dimensional box index.
//!
//! `BoxTree` maps opaque handles to axis-aligned bounding boxes and answers
//! range queries with early-exit visitation.  It knows nothing about the
//! geometry the boxes were derived from; callers keep their own storage and
//! use the handle to look items up again.

pub mod entry;
pub mod tree;

pub use entry::Entry;
pub use tree::BoxTree;
