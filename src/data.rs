mod line;
mod line_segment;
pub(crate) mod point;
mod scene;
mod vector;
mod visibility_polygon;
mod wall;

pub use line::*;
pub use line_segment::*;
pub use scene::*;
pub use visibility_polygon::*;
pub use wall::*;

pub use point::Point;
pub use vector::Vector;
