//! Gemini CLI dialect conversions.

use super::{ConfigDocument, Dialect, copilot, copy_masked};

pub fn from_copilot(source: &ConfigDocument) -> ConfigDocument {
    ConfigDocument::new(Dialect::Gemini, copilot::launch_entries(source.servers()))
}

pub fn from_claude(source: &ConfigDocument) -> ConfigDocument {
    ConfigDocument::new(Dialect::Gemini, copy_masked(source.servers()))
}
