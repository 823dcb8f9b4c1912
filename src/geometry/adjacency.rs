use std::fmt;

use serde::{Serialize, Serializer};

use super::{Parallelogram, Rectangle, find_duplicates};

/// Kinds of boundary contact between two rectangles
///
/// Serializes as its [`label`](AdjacencyType::label).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdjacencyType {
    /// One edge lies strictly within the other's edge
    SubLine,
    /// The edges overlap with at least one end point misaligned
    Partial,
    /// The touching edges match end to end
    Proper,
    /// Overlapping, nested, or sharing no boundary at all
    NotAdjacent,
}

impl AdjacencyType {
    pub fn label(self) -> &'static str {
        match self {
            AdjacencyType::SubLine => "Sub-Line",
            AdjacencyType::Partial => "Partial",
            AdjacencyType::Proper => "Proper",
            AdjacencyType::NotAdjacent => "Not Adjacent",
        }
    }
}

impl fmt::Display for AdjacencyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for AdjacencyType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl Rectangle {
    /// Classify how `other` touches this rectangle.
    ///
    /// The answer is relative to `self`: `SubLine` means `other`'s edge lies
    /// within this rectangle's edge. Swapping the operands turns a `SubLine`
    /// into a `Partial`; `Proper` and `NotAdjacent` are unaffected.
    pub fn is_adjacent_to(&self, other: &Rectangle) -> AdjacencyType {
        if self.does_contain(other) || self.does_intersect_with(other).is_some() {
            return AdjacencyType::NotAdjacent;
        }

        // A repeated boundary value hints at a shared side
        let (xs, ys) = self.sorted_coordinates(other);
        let shared_xs = find_duplicates(&xs).len();
        let shared_ys = find_duplicates(&ys).len();

        if shared_xs == 0 && shared_ys == 0 {
            return AdjacencyType::NotAdjacent;
        }

        if shared_xs > 0 {
            // Same horizontal extent, one stacked on the other
            if shared_xs == 2 {
                return if shared_ys == 1 {
                    AdjacencyType::Proper
                } else {
                    AdjacencyType::NotAdjacent
                };
            }

            // Side by side with matching heights
            if shared_ys == 2 {
                return AdjacencyType::Proper;
            }

            if other.max_y() <= self.max_y() && other.min_y() >= self.min_y() {
                return AdjacencyType::SubLine;
            }

            return AdjacencyType::Partial;
        }

        // Only a shared horizontal line: above or below
        if other.min_x() > self.min_x() && other.max_x() < self.max_x() {
            AdjacencyType::SubLine
        } else {
            AdjacencyType::Partial
        }
    }
}
