use serde::Serialize;

/// A point in the plane
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
}

impl Coordinate {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// One vertical side of a shape, stored as its two end points.
///
/// Both points share the same `x` and `upper.y >= lower.y`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Edge {
    pub upper: Coordinate,
    pub lower: Coordinate,
}

impl Edge {
    pub(crate) fn vertical(x: f64, lower_y: f64, upper_y: f64) -> Self {
        Self {
            upper: Coordinate::new(x, upper_y),
            lower: Coordinate::new(x, lower_y),
        }
    }

    pub fn x(&self) -> f64 {
        self.lower.x
    }

    pub fn length(&self) -> f64 {
        self.upper.y - self.lower.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertical_edge() {
        let edge = Edge::vertical(3.0, -1.0, 4.0);

        assert_eq!(edge.upper, Coordinate::new(3.0, 4.0));
        assert_eq!(edge.lower, Coordinate::new(3.0, -1.0));
        assert_eq!(edge.x(), 3.0);
        assert_eq!(edge.length(), 5.0);
    }

    #[test]
    fn test_edge_serializes_upper_then_lower() {
        let edge = Edge::vertical(0.0, 0.0, 1.0);
        let json = serde_json::to_value(edge).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "upper": { "x": 0.0, "y": 1.0 },
                "lower": { "x": 0.0, "y": 0.0 }
            })
        );
    }
}
