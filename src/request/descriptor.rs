use std::str::FromStr;

use serde::Serialize;
use serde_json::Value;

use crate::error::ValidationError;
use crate::geometry::{Coordinate, DimensionPolicy, Rectangle};

const FIELDS: [&str; 4] = ["x", "y", "width", "height"];

/// Incoming `{ x, y, width, height }` rectangle description.
///
/// Holds raw numbers only; nothing is checked beyond "is a number" until
/// [`RectangleDescriptor::to_rectangle`] is called.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RectangleDescriptor {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl RectangleDescriptor {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Read a descriptor from a JSON object.
    ///
    /// A field that is absent, `null`, or not a JSON number is rejected.
    pub fn from_value(value: &Value) -> Result<Self, ValidationError> {
        let object = value.as_object().ok_or(ValidationError::NotAnObject)?;
        let field = |name: &'static str| {
            object
                .get(name)
                .and_then(Value::as_f64)
                .ok_or(ValidationError::NotNumeric { field: name })
        };

        Ok(Self {
            x: field("x")?,
            y: field("y")?,
            width: field("width")?,
            height: field("height")?,
        })
    }

    pub fn to_rectangle(&self, policy: DimensionPolicy) -> Result<Rectangle, ValidationError> {
        Rectangle::with_policy(
            Coordinate::new(self.x, self.y),
            self.width,
            self.height,
            policy,
        )
    }
}

/// Parses the `x,y,width,height` command line shorthand.
impl FromStr for RectangleDescriptor {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        if parts.len() != FIELDS.len() {
            return Err(ValidationError::Shorthand(s.to_string()));
        }

        let mut values = [0.0; 4];
        for ((value, part), field) in values.iter_mut().zip(&parts).zip(FIELDS) {
            *value = part
                .parse::<f64>()
                .map_err(|_e| ValidationError::NotNumeric { field })?;
        }

        let [x, y, width, height] = values;
        Ok(Self::new(x, y, width, height))
    }
}

/// A pair of rectangles, as sent to every operation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RectangleRequest {
    pub r1: RectangleDescriptor,
    pub r2: RectangleDescriptor,
}

impl RectangleRequest {
    pub fn new(r1: RectangleDescriptor, r2: RectangleDescriptor) -> Self {
        Self { r1, r2 }
    }

    /// Read `{ "r1": {...}, "r2": {...} }`.
    pub fn from_value(value: &Value) -> Result<Self, ValidationError> {
        let r1 = value
            .get("r1")
            .ok_or(ValidationError::MissingRectangle("r1"))?;
        let r2 = value
            .get("r2")
            .ok_or(ValidationError::MissingRectangle("r2"))?;

        Ok(Self {
            r1: RectangleDescriptor::from_value(r1)?,
            r2: RectangleDescriptor::from_value(r2)?,
        })
    }

    pub fn rectangles(
        &self,
        policy: DimensionPolicy,
    ) -> Result<(Rectangle, Rectangle), ValidationError> {
        Ok((
            self.r1.to_rectangle(policy)?,
            self.r2.to_rectangle(policy)?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_value() {
        let descriptor =
            RectangleDescriptor::from_value(&json!({ "x": 0, "y": -4, "width": 5, "height": 2.5 }))
                .unwrap();

        assert_eq!(descriptor, RectangleDescriptor::new(0.0, -4.0, 5.0, 2.5));
    }

    #[test]
    fn test_from_value_rejects_string_field() {
        let err = RectangleDescriptor::from_value(
            &json!({ "x": 6, "y": 6, "width": "asdfasdf", "height": 5 }),
        )
        .unwrap_err();

        assert_eq!(err, ValidationError::NotNumeric { field: "width" });
    }

    #[test]
    fn test_from_value_rejects_missing_and_null_fields() {
        let err =
            RectangleDescriptor::from_value(&json!({ "x": 6, "y": 6, "height": 5 })).unwrap_err();
        assert_eq!(err, ValidationError::NotNumeric { field: "width" });

        let err = RectangleDescriptor::from_value(&json!({ "x": 0, "y": 0, "width": null, "height": 5 }))
            .unwrap_err();
        assert_eq!(err, ValidationError::NotNumeric { field: "width" });
    }

    #[test]
    fn test_from_value_rejects_non_object() {
        let err = RectangleDescriptor::from_value(&json!([0, 0, 5, 5])).unwrap_err();
        assert_eq!(err, ValidationError::NotAnObject);
    }

    #[test]
    fn test_shorthand() {
        let descriptor: RectangleDescriptor = "-4, -4, 5, 5".parse().unwrap();
        assert_eq!(descriptor, RectangleDescriptor::new(-4.0, -4.0, 5.0, 5.0));
    }

    #[test]
    fn test_shorthand_errors() {
        assert_eq!(
            "0,0,5".parse::<RectangleDescriptor>().unwrap_err(),
            ValidationError::Shorthand("0,0,5".to_string())
        );
        assert_eq!(
            "0,a,5,5".parse::<RectangleDescriptor>().unwrap_err(),
            ValidationError::NotNumeric { field: "y" }
        );
    }

    #[test]
    fn test_request_missing_rectangle() {
        let a = json!({ "x": 0, "y": 0, "width": 5, "height": 5 });
        let err = RectangleRequest::from_value(&json!({ "j": a, "r2": a })).unwrap_err();

        assert_eq!(err, ValidationError::MissingRectangle("r1"));
    }

    #[test]
    fn test_request_rectangles_apply_policy() {
        let request = RectangleRequest::new(
            RectangleDescriptor::new(0.0, 0.0, 5.0, 5.0),
            RectangleDescriptor::new(5.0, 5.0, -5.0, -5.0),
        );

        assert!(request.rectangles(DimensionPolicy::Reject).is_err());
        let (r1, r2) = request.rectangles(DimensionPolicy::Normalize).unwrap();
        assert_eq!(r1, r2);
    }
}
