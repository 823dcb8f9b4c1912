use serde::{Deserialize, Serialize};

use super::{Coordinate, Edge, Parallelogram, sort_numeric};
use crate::error::ValidationError;

/// How construction treats a negative width or height
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DimensionPolicy {
    /// Fail with [`ValidationError::NegativeDimension`]
    #[default]
    Reject,
    /// Move the origin so the same area is covered with a positive extent
    Normalize,
}

/// An immutable axis-aligned rectangle.
///
/// Serializes as `{ "left": { "upper", "lower" }, "right": { ... } }`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rectangle {
    left: Edge,
    right: Edge,
}

impl Parallelogram for Rectangle {
    fn left(&self) -> &Edge {
        &self.left
    }

    fn right(&self) -> &Edge {
        &self.right
    }
}

impl Rectangle {
    /// Build a rectangle from its lower-left corner and size.
    ///
    /// Negative dimensions are rejected; see [`Rectangle::with_policy`].
    pub fn new(origin: Coordinate, width: f64, height: f64) -> Result<Self, ValidationError> {
        Self::with_policy(origin, width, height, DimensionPolicy::Reject)
    }

    pub fn with_policy(
        origin: Coordinate,
        width: f64,
        height: f64,
        policy: DimensionPolicy,
    ) -> Result<Self, ValidationError> {
        require_finite("x", origin.x)?;
        require_finite("y", origin.y)?;
        require_finite("width", width)?;
        require_finite("height", height)?;

        let (min_x, max_x) = resolve_extent("width", origin.x, width, policy)?;
        let (min_y, max_y) = resolve_extent("height", origin.y, height, policy)?;

        Ok(Self::from_bounds(min_x, min_y, max_x, max_y))
    }

    /// Caller guarantees `min_x < max_x` and `min_y < max_y`.
    fn from_bounds(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            left: Edge::vertical(min_x, min_y, max_y),
            right: Edge::vertical(max_x, min_y, max_y),
        }
    }

    /// Overlapping area of the two rectangles.
    ///
    /// Both projections must overlap with positive length, so rectangles
    /// that only share an edge or a corner return `None`.
    pub fn does_intersect_with(&self, other: &Rectangle) -> Option<Rectangle> {
        let overlap_x = self.max_x().min(other.max_x()) - self.min_x().max(other.min_x());
        let overlap_y = self.max_y().min(other.max_y()) - self.min_y().max(other.min_y());
        if overlap_x <= 0.0 || overlap_y <= 0.0 {
            return None;
        }

        // With overlapping ranges the two middle values bound the overlap
        let (xs, ys) = self.sorted_coordinates(other);
        Some(Self::from_bounds(xs[1], ys[1], xs[2], ys[2]))
    }

    /// Inclusive containment: a rectangle contains itself.
    pub fn does_contain(&self, other: &Rectangle) -> bool {
        other.min_x() >= self.min_x()
            && other.max_x() <= self.max_x()
            && other.max_y() <= self.max_y()
            && other.min_y() >= self.min_y()
    }

    /// The four x and four y boundary values of both rectangles, each sorted
    /// ascending.
    pub(crate) fn sorted_coordinates(&self, other: &Rectangle) -> ([f64; 4], [f64; 4]) {
        let mut xs = [self.min_x(), self.max_x(), other.min_x(), other.max_x()];
        let mut ys = [self.min_y(), self.max_y(), other.min_y(), other.max_y()];
        sort_numeric(&mut xs);
        sort_numeric(&mut ys);
        (xs, ys)
    }
}

fn require_finite(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::NotFinite { field, value })
    }
}

/// Turn a start and signed length into an ordered `(min, max)` pair.
fn resolve_extent(
    field: &'static str,
    start: f64,
    length: f64,
    policy: DimensionPolicy,
) -> Result<(f64, f64), ValidationError> {
    let (min, max) = if length >= 0.0 {
        (start, start + length)
    } else {
        match policy {
            DimensionPolicy::Reject => {
                return Err(ValidationError::NegativeDimension {
                    field,
                    value: length,
                });
            }
            DimensionPolicy::Normalize => (start + length, start),
        }
    };

    require_finite(field, min)?;
    require_finite(field, max)?;
    // Also catches a length too small to move `start`
    if min >= max {
        return Err(ValidationError::ZeroDimension { field });
    }

    Ok((min, max))
}
