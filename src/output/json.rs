use std::fs;
use std::io::{self, Write};
use std::path::Path;

use anyhow::Result;
use serde::Serialize;

use crate::error::ShapesError;

/// Serialize a result body, compact or pretty-printed
pub fn render_json<T: Serialize + ?Sized>(value: &T, pretty: bool) -> Result<String> {
    let content = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(content)
}

/// Write a result body to `destination`, or to stdout when none is given
pub fn write_json<T: Serialize + ?Sized>(
    value: &T,
    pretty: bool,
    destination: Option<&Path>,
) -> Result<()> {
    let content = render_json(value, pretty)?;

    match destination {
        Some(path) => {
            fs::write(path, format!("{}\n", content)).map_err(|e| ShapesError::OutputWrite {
                path: path.to_path_buf(),
                source: e,
            })?;
        }
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{}", content)?;
        }
    }

    Ok(())
}
