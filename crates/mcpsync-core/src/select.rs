//! Auto-selection of the source file.
//!
//! Without an explicit source, every dialect's fixed file in the working
//! directory is loaded and the one listing the most servers wins.

use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::config::load_optional;
use crate::dialect::Dialect;
use crate::error::{Result, SyncError};

/// One dialect file considered during auto-selection.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub dialect: Dialect,
    pub path: PathBuf,
    /// Decoded root, or `None` if the file is missing or malformed.
    pub root: Option<Map<String, Value>>,
}

impl Candidate {
    /// Number of configured servers, `None` if the file did not load.
    pub fn server_count(&self) -> Option<usize> {
        let file_name = self.path.file_name()?.to_string_lossy();
        self.root
            .as_ref()
            .map(|root| server_count(root, &file_name))
    }
}

/// Count servers in a decoded document, choosing the key from the filename.
///
/// Copilot files count `servers`, everything else counts `mcpServers`.
pub fn server_count(root: &Map<String, Value>, file_name: &str) -> usize {
    let key = if file_name.contains(Dialect::Copilot.id()) {
        Dialect::Copilot.servers_key()
    } else {
        Dialect::Claude.servers_key()
    };
    root.get(key)
        .and_then(Value::as_object)
        .map_or(0, Map::len)
}

/// Load every dialect's fixed file in `dir`, in priority order.
pub fn survey(dir: &Path) -> Vec<Candidate> {
    Dialect::ALL
        .into_iter()
        .map(|dialect| {
            let path = dir.join(dialect.file_name());
            let root = load_optional(&path);
            Candidate {
                dialect,
                path,
                root,
            }
        })
        .collect()
}

/// Pick the loaded candidate with the most servers.
///
/// Ties go to the earlier candidate. Returns `None` if nothing loaded.
pub fn pick(candidates: &[Candidate]) -> Option<&Candidate> {
    candidates
        .iter()
        .filter_map(|candidate| Some((candidate, candidate.server_count()?)))
        // max_by_key keeps the last maximum; reversing makes that the first.
        .rev()
        .max_by_key(|(_, count)| *count)
        .map(|(candidate, _)| candidate)
}

/// Survey `dir` and return the winning candidate.
pub fn select_source(dir: &Path) -> Result<Candidate> {
    let candidates = survey(dir);
    let selected = pick(&candidates)
        .cloned()
        .ok_or_else(|| SyncError::NoValidSourceFound {
            dir: dir.to_path_buf(),
        })?;
    tracing::debug!(
        "Selected {} with {} servers",
        selected.path.display(),
        selected.server_count().unwrap_or_default()
    );
    Ok(selected)
}
