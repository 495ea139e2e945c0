use super::severity::Severity;
use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

/// Name-only handle identifying the logger that produced a record.
///
/// Carries no ownership over the logger; used purely for filter matching and
/// display. Cloning is cheap (shared string).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModuleRef {
    name: Arc<str>,
}

impl ModuleRef {
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for ModuleRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// One call-site argument of a log record.
///
/// Call sites log free-form argument lists, so records carry a heterogeneous
/// sequence. The closed variant keeps formatting exhaustive instead of
/// relying on dynamic type tests.
#[derive(Debug, Clone, PartialEq)]
pub enum Part {
    Text(String),
    Number(f64),
    Error {
        message: String,
        /// Rendered error chain, outermost cause first. Empty when the error
        /// carried no source chain.
        frames: Vec<String>,
    },
    Structured(serde_json::Value),
}

impl Part {
    /// Captures an error as a part: the message is the error's display text,
    /// the frames are the cause chain, one rendered string per link.
    pub fn from_error(error: &(dyn StdError + 'static)) -> Self {
        let mut frames = Vec::new();
        let mut cause = cause_of(error);
        while let Some(inner) = cause {
            frames.push(inner.to_string());
            cause = cause_of(inner);
        }
        Part::Error {
            message: error.to_string(),
            frames,
        }
    }
}

/// Next link of an error's cause chain.
///
/// `std::io::Error` does not report its boxed payload through `source()`
/// (it delegates to the payload's own source), so a wrapped cause would be
/// lost on the plain `source()` walk. When `source()` is empty, surface the
/// io payload instead — but only when it carries structure of its own
/// (another io error, or an error with a source); a plain message payload
/// already is the io error's display text.
fn cause_of<'a>(error: &'a (dyn StdError + 'static)) -> Option<&'a (dyn StdError + 'static)> {
    if let Some(source) = error.source() {
        return Some(source);
    }
    let payload = error
        .downcast_ref::<std::io::Error>()
        .and_then(std::io::Error::get_ref)?;
    if payload.is::<std::io::Error>() || payload.source().is_some() {
        let payload: &(dyn StdError + 'static) = payload;
        Some(payload)
    } else {
        None
    }
}

impl From<&str> for Part {
    fn from(value: &str) -> Self {
        Part::Text(value.to_string())
    }
}

impl From<String> for Part {
    fn from(value: String) -> Self {
        Part::Text(value)
    }
}

impl From<f64> for Part {
    fn from(value: f64) -> Self {
        Part::Number(value)
    }
}

impl From<f32> for Part {
    fn from(value: f32) -> Self {
        Part::Number(f64::from(value))
    }
}

impl From<i64> for Part {
    fn from(value: i64) -> Self {
        Part::Number(value as f64)
    }
}

impl From<i32> for Part {
    fn from(value: i32) -> Self {
        Part::Number(f64::from(value))
    }
}

impl From<u64> for Part {
    fn from(value: u64) -> Self {
        Part::Number(value as f64)
    }
}

impl From<u32> for Part {
    fn from(value: u32) -> Self {
        Part::Number(f64::from(value))
    }
}

impl From<usize> for Part {
    fn from(value: usize) -> Self {
        Part::Number(value as f64)
    }
}

impl From<bool> for Part {
    fn from(value: bool) -> Self {
        Part::Text(value.to_string())
    }
}

impl From<serde_json::Value> for Part {
    fn from(value: serde_json::Value) -> Self {
        Part::Structured(value)
    }
}

/// Builds a `Vec<Part>` from a free-form argument list, converting each
/// element via `Into<Part>`:
///
/// ```
/// use logfan::parts;
/// let p = parts!["request failed", 42, serde_json::json!({"retry": true})];
/// assert_eq!(p.len(), 3);
/// ```
#[macro_export]
macro_rules! parts {
    () => { Vec::<$crate::domain::Part>::new() };
    ($($part:expr),+ $(,)?) => {
        vec![$($crate::domain::Part::from($part)),+]
    };
}

/// One captured log event. Immutable once constructed.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    severity: Severity,
    module: ModuleRef,
    parts: Vec<Part>,
}

impl Record {
    pub fn new(severity: Severity, module: ModuleRef, parts: Vec<Part>) -> Self {
        Self {
            severity,
            module,
            parts,
        }
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn module(&self) -> &ModuleRef {
        &self.module
    }

    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    /// Error-class records get stack-trace expansion in the default
    /// formatter. Classification is by rank, not by variant identity.
    pub fn is_error_class(&self) -> bool {
        self.severity.rank() <= Severity::Warn.rank()
    }
}
