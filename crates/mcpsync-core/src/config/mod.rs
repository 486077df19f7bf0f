//! Dialect file I/O.

mod json;

pub use json::{load_document, load_optional, render_document, save_document};
