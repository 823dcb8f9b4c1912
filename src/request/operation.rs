use std::fmt;
use std::str::FromStr;

use log::debug;
use serde::Serialize;

use super::RectangleRequest;
use crate::error::ValidationError;
use crate::geometry::{AdjacencyType, DimensionPolicy, Rectangle};

/// The three questions that can be asked about a pair of rectangles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Intersect,
    Contain,
    AreAdjacent,
}

impl Operation {
    pub fn name(self) -> &'static str {
        match self {
            Operation::Intersect => "intersect",
            Operation::Contain => "contain",
            Operation::AreAdjacent => "are-adjacent",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "intersect" => Ok(Operation::Intersect),
            "contain" => Ok(Operation::Contain),
            "are-adjacent" => Ok(Operation::AreAdjacent),
            _ => Err(ValidationError::UnknownOperation(s.to_string())),
        }
    }
}

/// Result body of an operation.
///
/// Serializes to the rectangle itself (or `null`), `{"isContained": bool}`
/// or `{"adjacencyType": "<label>"}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Response {
    Intersection(Option<Rectangle>),
    Containment {
        #[serde(rename = "isContained")]
        is_contained: bool,
    },
    Adjacency {
        #[serde(rename = "adjacencyType")]
        adjacency_type: AdjacencyType,
    },
}

impl Response {
    pub fn outcome(&self) -> Outcome {
        match self {
            Response::Intersection(None) => Outcome::NoContent,
            _ => Outcome::Ok,
        }
    }
}

/// Client-facing status of a request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Ok,
    /// The rectangles do not intersect
    NoContent,
    BadRequest,
    NotFound,
}

impl Outcome {
    pub fn status_code(self) -> u16 {
        match self {
            Outcome::Ok => 200,
            Outcome::NoContent => 204,
            Outcome::BadRequest => 400,
            Outcome::NotFound => 404,
        }
    }

    pub fn of_error(error: &ValidationError) -> Self {
        match error {
            ValidationError::UnknownOperation(_) => Outcome::NotFound,
            _ => Outcome::BadRequest,
        }
    }
}

/// Build both rectangles and answer `operation` about them.
pub fn evaluate(
    operation: Operation,
    request: &RectangleRequest,
    policy: DimensionPolicy,
) -> Result<Response, ValidationError> {
    let (r1, r2) = request.rectangles(policy)?;

    let response = match operation {
        Operation::Intersect => Response::Intersection(r1.does_intersect_with(&r2)),
        Operation::Contain => Response::Containment {
            is_contained: r1.does_contain(&r2),
        },
        Operation::AreAdjacent => Response::Adjacency {
            adjacency_type: r1.is_adjacent_to(&r2),
        },
    };
    debug!("{} {:?} {:?} -> {:?}", operation, request.r1, request.r2, response);

    Ok(response)
}
