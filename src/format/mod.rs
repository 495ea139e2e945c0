//! Record rendering.
//!
//! `Formatter` is the pluggable seam between filtering and emission; the
//! default `TextFormatter` renders human-readable single-line text with
//! truncation and stack-trace expansion for error-class records.

pub mod text;

use crate::domain::Record;
use once_cell::sync::Lazy;
use std::sync::Arc;

pub use text::TextFormatter;

/// Renders a record to display text.
pub trait Formatter: Send + Sync {
    fn render(&self, record: &Record) -> String;
}

static DEFAULT_FORMATTER: Lazy<Arc<TextFormatter>> = Lazy::new(|| Arc::new(TextFormatter::new()));

/// Shared default formatter used by sinks that do not configure their own.
/// Sinks sharing this instance also share the per-dispatch render memo.
pub fn default_formatter() -> Arc<TextFormatter> {
    Arc::clone(&DEFAULT_FORMATTER)
}
