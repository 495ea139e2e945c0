use super::{Sink, SinkConfig};
use crate::domain::Record;
use crate::error::SinkError;
use std::fmt;

type EmitFn = Box<dyn Fn(&str, &Record) -> Result<(), SinkError> + Send + Sync>;

/// Escape hatch for hosts needing another output channel (file, socket, …)
/// without defining a new sink type: wraps a caller-supplied emit function.
pub struct CustomSink {
    config: SinkConfig,
    emit: EmitFn,
}

impl CustomSink {
    pub fn new(
        config: SinkConfig,
        emit: impl Fn(&str, &Record) -> Result<(), SinkError> + Send + Sync + 'static,
    ) -> Self {
        Self {
            config,
            emit: Box::new(emit),
        }
    }
}

impl Sink for CustomSink {
    fn name(&self) -> &str {
        "custom"
    }

    fn config(&self) -> &SinkConfig {
        &self.config
    }

    fn emit(&self, text: &str, record: &Record) -> Result<(), SinkError> {
        (self.emit)(text, record)
    }
}

impl fmt::Debug for CustomSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomSink")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
