use std::path::PathBuf;
use thiserror::Error;

/// Raised while building a rectangle from raw input.
///
/// This is the only failure the geometry core can produce. Every predicate
/// is total once a [`Rectangle`](crate::geometry::Rectangle) exists.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Cannot instantiate Rectangle: '{field}' must be a numeric value")]
    NotNumeric { field: &'static str },

    #[error("Cannot instantiate Rectangle: '{field}' must be finite, got {value}")]
    NotFinite { field: &'static str, value: f64 },

    #[error("Cannot instantiate Rectangle: {field} must not be negative, got {value}")]
    NegativeDimension { field: &'static str, value: f64 },

    #[error("Cannot instantiate Rectangle: {field} must be greater than zero")]
    ZeroDimension { field: &'static str },

    #[error("Rectangle descriptor must be a JSON object")]
    NotAnObject,

    #[error("Request is missing rectangle '{0}'")]
    MissingRectangle(&'static str),

    #[error("Unknown operation '{0}'. Valid values: intersect, contain, are-adjacent")]
    UnknownOperation(String),

    #[error("Rectangle shorthand '{0}' must have the form x,y,width,height")]
    Shorthand(String),
}

#[derive(Error, Debug)]
pub enum ShapesError {
    #[error("Failed to read request file '{path}': {source}")]
    RequestRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse request file '{path}': {source}")]
    RequestParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Failed to write output file '{path}': {source}")]
    OutputWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Bad request: {0}")]
    BadRequest(#[from] ValidationError),

    #[error("No batch files found in input")]
    NoRequests,

    #[error("No batch files match pattern '{0}'")]
    NoMatches(String),

    #[error("Input path does not exist: {0}")]
    InputNotFound(PathBuf),
}
