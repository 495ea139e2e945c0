use super::{Sink, SinkConfig};
use crate::domain::{Record, Severity};
use crate::error::SinkError;
use std::io::Write;

/// Writes rendered lines to the process console: stderr for records at
/// ERROR rank or stricter, stdout otherwise.
#[derive(Debug, Default)]
pub struct ConsoleSink {
    config: SinkConfig,
}

impl ConsoleSink {
    pub fn new(config: SinkConfig) -> Self {
        Self { config }
    }
}

impl Sink for ConsoleSink {
    fn name(&self) -> &str {
        "console"
    }

    fn config(&self) -> &SinkConfig {
        &self.config
    }

    fn emit(&self, text: &str, record: &Record) -> Result<(), SinkError> {
        if record.severity().rank() <= Severity::Error.rank() {
            let stderr = std::io::stderr();
            let mut handle = stderr.lock();
            writeln!(handle, "{text}")?;
        } else {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            writeln!(handle, "{text}")?;
        }
        Ok(())
    }
}
