//! JSON reading and writing for dialect files.

use std::path::Path;

use serde_json::{Map, Value};

use crate::error::{Result, SyncError};

/// Load a dialect file as a JSON object.
///
/// A missing file is [`SyncError::FileAbsent`]; a file that cannot be read,
/// does not parse, or whose root is not an object is
/// [`SyncError::MalformedJson`].
pub fn load_document(path: &Path) -> Result<Map<String, Value>> {
    if !path.exists() {
        return Err(SyncError::FileAbsent {
            path: path.to_path_buf(),
        });
    }
    let malformed = |reason: String| SyncError::MalformedJson {
        path: path.to_path_buf(),
        reason,
    };
    let bytes = std::fs::read(path).map_err(|err| malformed(err.to_string()))?;
    let value: Value = serde_json::from_slice(&bytes).map_err(|err| malformed(err.to_string()))?;
    match value {
        Value::Object(map) => Ok(map),
        _ => Err(malformed("expected JSON object at root".to_string())),
    }
}

/// Load a dialect file, folding every failure into `None`.
///
/// Missing and malformed files are indistinguishable to the caller.
pub fn load_optional(path: &Path) -> Option<Map<String, Value>> {
    match load_document(path) {
        Ok(map) => Some(map),
        Err(err) => {
            tracing::debug!("Skipping {}: {}", path.display(), err);
            None
        }
    }
}

/// Render a document as 2-space indented JSON.
pub fn render_document(value: &Value) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Write a document, replacing any existing file.
///
/// Creates parent directories if they don't exist.
pub fn save_document(path: &Path, value: &Value) -> Result<()> {
    let write_err = |source: std::io::Error| SyncError::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(write_err)?;
    }
    let rendered = render_document(value)?;
    std::fs::write(path, rendered).map_err(write_err)?;
    Ok(())
}
