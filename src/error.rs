use thiserror::Error;

/// Configuration-time rejections. Raised when a sink or formatter is built,
/// never deferred to dispatch.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid max length: {0} (must be non-negative)")]
    InvalidMaxLength(i64),

    #[error("empty module pattern")]
    EmptyPattern,
}

/// A failure raised by a concrete sink's `emit`.
#[derive(Error, Debug)]
pub enum SinkError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("emit failed: {0}")]
    Emit(String),
}

/// One failed sink emit during fan-out. Dispatch is fail-fast: sinks not yet
/// visited in the same call are skipped.
#[derive(Error, Debug)]
#[error("dispatch to sink `{sink}` failed: {source}")]
pub struct DispatchError {
    pub sink: String,
    #[source]
    pub source: SinkError,
}
