//! Sync command implementation.
//!
//! Loads one dialect file and rewrites the other two from it.

use std::path::{Path, PathBuf};

use crate::config::{load_document, save_document};
use crate::dialect::{ConfigDocument, Dialect};
use crate::error::{Result, SyncError};
use crate::select::select_source;

/// Options for the sync command
#[derive(Debug, Clone, Default)]
pub struct SyncOptions {
    /// Directory holding the dialect files; `None` means the process
    /// working directory.
    pub working_dir: Option<PathBuf>,
    /// Explicit source file. Auto-selected when `None`.
    pub source: Option<PathBuf>,
    /// Translate without writing any file.
    pub dry_run: bool,
}

impl SyncOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the directory the dialect files live in
    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    /// Set the source file
    pub fn with_source(mut self, source: impl Into<PathBuf>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Enable or disable dry-run mode
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Resolve a file name against the working directory.
    pub fn resolve(&self, name: impl AsRef<Path>) -> PathBuf {
        match &self.working_dir {
            Some(dir) => dir.join(name),
            None => name.as_ref().to_path_buf(),
        }
    }
}

/// One translated document.
#[derive(Debug, Clone)]
pub struct SyncOutput {
    pub path: PathBuf,
    pub document: ConfigDocument,
    /// False in dry-run mode.
    pub written: bool,
}

/// Report from a sync run
#[derive(Debug, Clone)]
pub struct SyncReport {
    /// Source file as it was named or selected
    pub source: PathBuf,
    pub dialect: Dialect,
    /// Whether the source was picked by auto-selection
    pub auto_selected: bool,
    /// Both sibling documents, in write order
    pub outputs: Vec<SyncOutput>,
}

impl SyncReport {
    /// One-line summary, e.g. `Successfully converted copilot.json to claude.json and gemini.json`.
    pub fn summary(&self) -> String {
        let targets: Vec<_> = self
            .outputs
            .iter()
            .map(|output| output.document.dialect().file_name())
            .collect();
        format!(
            "Successfully converted {} to {}",
            self.dialect.file_name(),
            targets.join(" and ")
        )
    }
}

/// Sync command orchestrator
#[derive(Debug)]
pub struct SyncCommand {
    options: SyncOptions,
}

impl SyncCommand {
    pub fn new(options: SyncOptions) -> Self {
        Self { options }
    }

    /// Execute the sync.
    ///
    /// Every failure short of a write error happens before the first write.
    /// A failed second write leaves the first sibling already updated.
    pub fn run(&self) -> Result<SyncReport> {
        let (source, dialect, root, auto_selected) = match &self.options.source {
            Some(source) => {
                let root = load_document(&self.options.resolve(source))?;
                let dialect = Dialect::from_file_name(&source.to_string_lossy()).ok_or_else(
                    || SyncError::UnsupportedSourceFilename {
                        path: source.clone(),
                    },
                )?;
                (source.clone(), dialect, root, false)
            }
            None => {
                let dir = self
                    .options
                    .working_dir
                    .clone()
                    .unwrap_or_else(|| PathBuf::from("."));
                let candidate = select_source(&dir)?;
                let root = candidate.root.unwrap_or_default();
                (
                    PathBuf::from(candidate.dialect.file_name()),
                    candidate.dialect,
                    root,
                    true,
                )
            }
        };
        tracing::debug!("Source {} detected as {}", source.display(), dialect);

        let document = ConfigDocument::from_root(dialect, &root);
        let mut outputs = Vec::with_capacity(2);
        for translated in document.translate_siblings() {
            let path = self.options.resolve(translated.dialect().file_name());
            if !self.options.dry_run {
                save_document(&path, &translated.to_value())?;
                tracing::info!(
                    "Wrote {} servers to {}",
                    translated.server_count(),
                    path.display()
                );
            }
            outputs.push(SyncOutput {
                path,
                document: translated,
                written: !self.options.dry_run,
            });
        }

        Ok(SyncReport {
            source,
            dialect,
            auto_selected,
            outputs,
        })
    }
}
