//! Domain layer for logfan.
//!
//! Contains the canonical types shared across all modules:
//! - `Record`: the pipeline's core data type
//! - `Part`: one call-site argument of a record (closed variant)
//! - `Severity`: ranked verbosity level (Debug/Info/Warn/Error/Fatal)
//! - `ModuleRef`: name-only handle identifying the producing logger

pub mod record;
pub mod severity;

pub use record::{ModuleRef, Part, Record};
pub use severity::Severity;
