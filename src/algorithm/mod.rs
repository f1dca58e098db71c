mod intersect;
mod raycast;

pub use intersect::{orient, segments_intersect, segments_touch};
pub use raycast::{raycast, RayHit};

pub use geo::kernels::Orientation;
