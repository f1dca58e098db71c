use rstar::{AABB, RTreeObject};

/// A bounding box in the index, associated with a caller-defined handle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Entry<H> {
    pub min: [f64; 2],
    pub max: [f64; 2],
    pub handle: H,
}

impl<H> Entry<H> {
    /// Create an entry.  Corners are normalised so that `min <= max` on both axes.
    pub fn new(a: [f64; 2], b: [f64; 2], handle: H) -> Self {
        Self {
            min: [a[0].min(b[0]), a[1].min(b[1])],
            max: [a[0].max(b[0]), a[1].max(b[1])],
            handle,
        }
    }

    /// Returns true if this entry's box overlaps the closed box `[min, max]`.
    #[inline]
    pub fn intersects(&self, min: [f64; 2], max: [f64; 2]) -> bool {
        self.min[0] <= max[0] && self.max[0] >= min[0]
            && self.min[1] <= max[1] && self.max[1] >= min[1]
    }
}

impl<H> RTreeObject for Entry<H> {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners(self.min, self.max)
    }
}
