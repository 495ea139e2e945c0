#![deny(warnings, rust_2024_compatibility)]
// Specific pedantic lints enforced (not blanket allow):
#![deny(
    clippy::explicit_iter_loop,
    clippy::manual_let_else,
    clippy::semicolon_if_nothing_returned,
    clippy::inconsistent_struct_constructor
)]
// Noisy pedantic lints suppressed with justification:
#![allow(
    clippy::cast_possible_truncation, // Safe within realistic value bounds (lengths, ranks)
    clippy::cast_sign_loss,           // Safe where values are known non-negative
    clippy::missing_errors_doc,       // Internal API
    clippy::missing_panics_doc,       // Internal API
    clippy::module_name_repetitions,  // e.g. SinkError in sink module
    clippy::must_use_candidate        // Annotated selectively on critical APIs
)]

pub mod domain;
pub mod error;
pub mod format;
pub mod logger;
pub mod registry;
pub mod sink;

// Re-export main types for easy access
pub use domain::{ModuleRef, Part, Record, Severity};
pub use error::{ConfigError, DispatchError, SinkError};
pub use format::{Formatter, TextFormatter};
pub use logger::{Logger, create, create_with};
pub use registry::{Registry, SinkId, default_registry};
pub use sink::{ConsoleSink, CustomSink, MemorySink, ModulePattern, Sink, SinkConfig};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
