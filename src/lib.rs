pub mod cli;
pub mod config;
pub mod error;
pub mod geometry;
pub mod output;
pub mod request;

pub use cli::{CliArgs, Command, CommonArgs};
pub use error::{ShapesError, ValidationError};
pub use geometry::{AdjacencyType, Coordinate, DimensionPolicy, Edge, Parallelogram, Rectangle};
pub use request::{Operation, RectangleDescriptor, RectangleRequest, Response, evaluate};
