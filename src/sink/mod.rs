//! Output sinks.
//!
//! A sink owns its acceptance filter (threshold, module include/exclude
//! lists, optional predicate) and its formatter choice, and performs final
//! output in `emit`. `emit` is a required trait method, so an unimplemented
//! sink is a compile error rather than a runtime contract violation.

pub mod console;
pub mod custom;
pub mod filter;
pub mod memory;

use crate::domain::{Record, Severity};
use crate::error::{ConfigError, SinkError};
use crate::format::{Formatter, default_formatter};
use std::fmt;
use std::sync::Arc;

pub use console::ConsoleSink;
pub use custom::CustomSink;
pub use filter::ModulePattern;
pub use memory::MemorySink;

/// Record-level filter callback.
pub type Predicate = Box<dyn Fn(&Record) -> bool + Send + Sync>;

/// Per-sink configuration: acceptance filter plus formatter choice.
pub struct SinkConfig {
    threshold: Severity,
    formatter: Arc<dyn Formatter>,
    include: Vec<ModulePattern>,
    exclude: Vec<ModulePattern>,
    predicate: Option<Predicate>,
}

impl Default for SinkConfig {
    fn default() -> Self {
        Self {
            threshold: Severity::default_from_env(),
            formatter: default_formatter(),
            include: vec![ModulePattern::Any],
            exclude: Vec::new(),
            predicate: None,
        }
    }
}

impl SinkConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Verbosity budget: the sink accepts records whose severity rank is at
    /// most this severity's rank.
    pub fn threshold(mut self, threshold: Severity) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn formatter(mut self, formatter: Arc<dyn Formatter>) -> Self {
        self.formatter = formatter;
        self
    }

    /// Replaces the include list (default: the `*` wildcard).
    pub fn include(mut self, patterns: impl IntoIterator<Item = ModulePattern>) -> Self {
        self.include = patterns.into_iter().collect();
        self
    }

    /// Parses and appends one include pattern, replacing the default
    /// wildcard on first use.
    pub fn include_module(mut self, pattern: &str) -> Result<Self, ConfigError> {
        let parsed = ModulePattern::parse(pattern)?;
        if self.include == [ModulePattern::Any] {
            self.include.clear();
        }
        self.include.push(parsed);
        Ok(self)
    }

    pub fn exclude(mut self, patterns: impl IntoIterator<Item = ModulePattern>) -> Self {
        self.exclude = patterns.into_iter().collect();
        self
    }

    pub fn exclude_module(mut self, pattern: &str) -> Result<Self, ConfigError> {
        self.exclude.push(ModulePattern::parse(pattern)?);
        Ok(self)
    }

    pub fn predicate(mut self, predicate: impl Fn(&Record) -> bool + Send + Sync + 'static) -> Self {
        self.predicate = Some(Box::new(predicate));
        self
    }

    pub fn formatter_ref(&self) -> &Arc<dyn Formatter> {
        &self.formatter
    }

    /// Acceptance test, in precedence order: threshold, exclude list (always
    /// wins over include), predicate, include list.
    pub fn accepts(&self, record: &Record) -> bool {
        if self.threshold.rank() < record.severity().rank() {
            return false;
        }
        if self.exclude.iter().any(|p| p.matches(record.module())) {
            return false;
        }
        if let Some(predicate) = &self.predicate
            && !predicate(record)
        {
            return false;
        }
        self.include.iter().any(|p| p.matches(record.module()))
    }
}

impl fmt::Debug for SinkConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SinkConfig")
            .field("threshold", &self.threshold)
            .field("include", &self.include)
            .field("exclude", &self.exclude)
            .field("predicate", &self.predicate.as_ref().map(|_| "<fn>"))
            .finish_non_exhaustive()
    }
}

/// A configured output destination.
pub trait Sink: Send + Sync {
    /// Short name used in dispatch error reports.
    fn name(&self) -> &str;

    fn config(&self) -> &SinkConfig;

    /// Final output step. Receives both the rendered text and the original
    /// record so a sink may keep either.
    fn emit(&self, text: &str, record: &Record) -> Result<(), SinkError>;

    fn accepts(&self, record: &Record) -> bool {
        self.config().accepts(record)
    }

    fn formatter(&self) -> Arc<dyn Formatter> {
        Arc::clone(self.config().formatter_ref())
    }
}
