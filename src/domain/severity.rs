use serde::{Deserialize, Serialize};
use std::fmt;

/// Ranked severity of a log record.
///
/// The rank is a verbosity budget, not a severity score: higher rank = more
/// verbose / less severe. A sink with threshold rank R accepts records whose
/// severity rank is <= R. All filtering and classification must compare
/// `rank()` values; `Severity` intentionally implements neither `Ord` nor
/// `PartialOrd`, so variant-identity comparisons cannot creep in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Debug,
    Info,
    Warn,
    Error,
    Fatal,
}

impl Severity {
    /// Verbosity rank. Debug is the most verbose, Fatal the least.
    pub fn rank(self) -> u8 {
        match self {
            Severity::Debug => 100,
            Severity::Info => 80,
            Severity::Warn => 60,
            Severity::Error => 40,
            Severity::Fatal => 0,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
            Severity::Fatal => "FATAL",
        }
    }

    /// Process-wide default severity, derived from the `DEBUG` environment
    /// flag: a truthy value selects `Debug`, anything else selects `Warn`.
    /// Used both as the logger default and as the default sink threshold.
    pub fn default_from_env() -> Severity {
        if debug_flag_enabled() {
            Severity::Debug
        } else {
            Severity::Warn
        }
    }
}

fn debug_flag_enabled() -> bool {
    std::env::var("DEBUG")
        .map(|value| {
            let value = value.trim();
            value.eq_ignore_ascii_case("1")
                || value.eq_ignore_ascii_case("true")
                || value.eq_ignore_ascii_case("yes")
        })
        .unwrap_or(false)
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranks_are_ordered_by_verbosity() {
        assert_eq!(Severity::Debug.rank(), 100);
        assert_eq!(Severity::Info.rank(), 80);
        assert_eq!(Severity::Warn.rank(), 60);
        assert_eq!(Severity::Error.rank(), 40);
        assert_eq!(Severity::Fatal.rank(), 0);
    }

    #[test]
    fn test_display_uses_upper_case_name() {
        assert_eq!(Severity::Warn.to_string(), "WARN");
        assert_eq!(Severity::Fatal.to_string(), "FATAL");
    }
}
