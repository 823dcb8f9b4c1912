mod adjacency;
mod duplicates;
mod point;
mod rectangle;
mod shape;

pub use adjacency::AdjacencyType;
pub use duplicates::{find_duplicates, sort_numeric};
pub use point::{Coordinate, Edge};
pub use rectangle::{DimensionPolicy, Rectangle};
pub use shape::Parallelogram;
