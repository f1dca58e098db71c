#![doc = "Indexed point series and exact spatial predicates for GeoJSON-style geometry"]
pub mod algorithm;
mod geom;
mod series;

#[doc(inline)]
pub use geom::{Point, Rect, Segment};

#[doc(inline)]
pub use series::{MIN_TREE_POINTS, SegmentId, Series};

#[doc(inline)]
pub use algorithm::{RayHit, raycast, segments_intersect};
