//! Claude dialect conversions.

use super::{ConfigDocument, Dialect, copilot, copy_masked};

pub fn from_copilot(source: &ConfigDocument) -> ConfigDocument {
    ConfigDocument::new(Dialect::Claude, copilot::launch_entries(source.servers()))
}

pub fn from_gemini(source: &ConfigDocument) -> ConfigDocument {
    ConfigDocument::new(Dialect::Claude, copy_masked(source.servers()))
}
