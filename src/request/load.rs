use std::fs;
use std::path::Path;

use serde_json::Value;

use super::RectangleRequest;
use crate::error::ShapesError;

fn read_json(path: &Path) -> Result<Value, ShapesError> {
    if !path.exists() {
        return Err(ShapesError::InputNotFound(path.to_path_buf()));
    }

    let content = fs::read_to_string(path).map_err(|e| ShapesError::RequestRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    serde_json::from_str(&content).map_err(|e| ShapesError::RequestParse {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Load a single `{ "r1": {...}, "r2": {...} }` request.
pub fn read_request_file(path: &Path) -> Result<RectangleRequest, ShapesError> {
    let value = read_json(path)?;
    Ok(RectangleRequest::from_value(&value)?)
}

/// Load the entries of a batch file.
///
/// A top-level object counts as a batch of one. Entries are left
/// unvalidated so one bad entry does not reject the whole file.
pub fn read_batch_file(path: &Path) -> Result<Vec<Value>, ShapesError> {
    match read_json(path)? {
        Value::Array(entries) => Ok(entries),
        other => Ok(vec![other]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::RectangleDescriptor;
    use std::path::PathBuf;

    fn temp_file(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("shapes_{}_{}", std::process::id(), name));
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_read_request_file() {
        let path = temp_file(
            "request.json",
            r#"{ "r1": { "x": 0, "y": 0, "width": 5, "height": 5 },
                 "r2": { "x": 1, "y": 1, "width": 2, "height": 2 } }"#,
        );

        let request = read_request_file(&path).unwrap();
        assert_eq!(request.r2, RectangleDescriptor::new(1.0, 1.0, 2.0, 2.0));

        fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_read_request_file_invalid_rectangle() {
        let path = temp_file(
            "invalid.json",
            r#"{ "r1": { "x": 0, "y": 0, "width": 5, "height": 5 },
                 "r2": { "x": 6, "y": 6, "height": 5 } }"#,
        );

        let err = read_request_file(&path).unwrap_err();
        assert!(matches!(err, ShapesError::BadRequest(_)));

        fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_read_malformed_json() {
        let path = temp_file("malformed.json", "{ r1: ");

        let err = read_batch_file(&path).unwrap_err();
        assert!(matches!(err, ShapesError::RequestParse { .. }));

        fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_read_batch_file_with_huge_number() {
        let path = temp_file(
            "huge.json",
            r#"[ { "operation": "contain", "r1": { "x": 0, "y": 0, "width": 1e400, "height": 5 } },
                 { "operation": "contain" } ]"#,
        );

        assert_eq!(read_batch_file(&path).unwrap().len(), 2);

        fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_request_file(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, ShapesError::InputNotFound(_)));
    }

    #[test]
    fn test_read_batch_file_single_object() {
        let path = temp_file("single.json", r#"{ "operation": "contain" }"#);

        assert_eq!(read_batch_file(&path).unwrap().len(), 1);

        fs::remove_file(path).unwrap();
    }
}
