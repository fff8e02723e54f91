use std::io::Read;
use std::path::Path;

use serde_json::Value;
use thiserror::Error;
use tracing::{info, warn};

pub mod reader;

use crate::model::summary::locate_summary;
use reader::open_maybe_gz;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Reads one JSON document, gunzipping `.gz` paths.
pub fn read_document(path: &Path) -> Result<Value, InputError> {
    let mut reader = open_maybe_gz(path)?;
    let mut buf = String::new();
    reader.read_to_string(&mut buf)?;
    if buf.trim().is_empty() {
        return Err(InputError::InvalidInput(format!(
            "{} is empty",
            path.display()
        )));
    }
    Ok(serde_json::from_str(&buf)?)
}

/// Splits a document into run containers: an object is one run, an array is
/// one run per element.
pub fn containers_from_document(doc: Value) -> Result<Vec<Value>, InputError> {
    match doc {
        Value::Array(items) => {
            if let Some(idx) = items.iter().position(|v| !v.is_object()) {
                return Err(InputError::InvalidInput(format!(
                    "run #{} is not a JSON object",
                    idx + 1
                )));
            }
            Ok(items)
        }
        obj @ Value::Object(_) => Ok(vec![obj]),
        _ => Err(InputError::InvalidInput(
            "expected a run object or an array of run objects".to_string(),
        )),
    }
}

pub fn load_runs(path: &Path) -> Result<Vec<Value>, InputError> {
    let containers = containers_from_document(read_document(path)?)?;
    info!(path = %path.display(), runs = containers.len(), "loaded run summaries");
    for (idx, c) in containers.iter().enumerate() {
        if locate_summary(c).is_none() {
            warn!(run = idx + 1, "no summary found; run will evaluate as Passed");
        }
    }
    Ok(containers)
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
