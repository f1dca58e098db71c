mod point;
mod rect;
mod segment;

pub use point::Point;
pub use rect::Rect;
pub use segment::Segment;
