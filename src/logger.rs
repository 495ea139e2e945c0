use crate::domain::{ModuleRef, Part, Record, Severity};
use crate::error::DispatchError;
use crate::registry::{Registry, default_registry};

/// Per-module logging facade.
///
/// Loggers are lightweight; one per module is the intended usage. A logger
/// owns nothing but its module name, default severity, and registry
/// reference, and is immutable after construction.
pub struct Logger {
    module: ModuleRef,
    default_severity: Severity,
    registry: &'static Registry,
}

impl Logger {
    pub fn with_registry(
        module_name: &str,
        default_severity: Severity,
        registry: &'static Registry,
    ) -> Self {
        Self {
            module: ModuleRef::new(module_name),
            default_severity,
            registry,
        }
    }

    pub fn module(&self) -> &ModuleRef {
        &self.module
    }

    pub fn default_severity(&self) -> Severity {
        self.default_severity
    }

    /// The one mutable knob a logger carries after construction.
    pub fn set_default_severity(&mut self, severity: Severity) {
        self.default_severity = severity;
    }

    /// Logs at the logger's configured default severity.
    pub fn log_default(&self, parts: Vec<Part>) -> Result<(), DispatchError> {
        self.log(self.default_severity, parts)
    }

    /// Builds a record at the given severity and fans it out. Dispatch
    /// failures propagate unguarded.
    pub fn log(&self, severity: Severity, parts: Vec<Part>) -> Result<(), DispatchError> {
        let record = Record::new(severity, self.module.clone(), parts);
        self.registry.dispatch(&record)
    }

    pub fn debug(&self, parts: Vec<Part>) -> Result<(), DispatchError> {
        self.log(Severity::Debug, parts)
    }

    pub fn info(&self, parts: Vec<Part>) -> Result<(), DispatchError> {
        self.log(Severity::Info, parts)
    }

    pub fn warn(&self, parts: Vec<Part>) -> Result<(), DispatchError> {
        self.log(Severity::Warn, parts)
    }

    pub fn error(&self, parts: Vec<Part>) -> Result<(), DispatchError> {
        self.log(Severity::Error, parts)
    }

    /// Emits a FATAL record, then attempts process termination through the
    /// registry's termination hook. When the host exposes no termination
    /// primitive, a follow-up ERROR record reports that instead. Advisory:
    /// never surfaces an error to the caller.
    pub fn fatal(&self, parts: Vec<Part>) {
        let _ = self.log(Severity::Fatal, parts);
        if !self.registry.terminate() {
            let _ = self.log(
                Severity::Error,
                vec![Part::from(
                    "log.fatal called but environment doesn't support aborting",
                )],
            );
        }
    }
}

/// Creates a logger on the default registry with the environment-derived
/// default severity. The `DEBUG` flag is sampled at logger construction,
/// so loggers created after a flag change pick up the new default.
pub fn create(module_name: &str) -> Logger {
    create_with(module_name, Severity::default_from_env())
}

pub fn create_with(module_name: &str, default_severity: Severity) -> Logger {
    Logger::with_registry(module_name, default_severity, default_registry())
}
