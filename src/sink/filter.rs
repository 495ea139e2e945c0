use crate::domain::ModuleRef;
use crate::error::ConfigError;

/// Module filter pattern for sink include/exclude lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModulePattern {
    /// `*` — matches any module.
    Any,
    /// Matches exactly one module name.
    Exact(String),
}

impl ModulePattern {
    /// Parses a pattern string: `*` is the wildcard, anything else matches a
    /// module name exactly. The empty string is rejected at configuration
    /// time.
    pub fn parse(pattern: &str) -> Result<Self, ConfigError> {
        match pattern {
            "" => Err(ConfigError::EmptyPattern),
            "*" => Ok(ModulePattern::Any),
            name => Ok(ModulePattern::Exact(name.to_string())),
        }
    }

    /// Pattern matching a module named like `T`'s unqualified type name,
    /// for modules that are defined by a marker type:
    ///
    /// ```
    /// use logfan::sink::ModulePattern;
    /// struct Net;
    /// assert_eq!(ModulePattern::of::<Net>(), ModulePattern::parse("Net").unwrap());
    /// ```
    pub fn of<T>() -> Self {
        let full = std::any::type_name::<T>();
        let name = full.rsplit("::").next().unwrap_or(full);
        ModulePattern::Exact(name.to_string())
    }

    pub fn matches(&self, module: &ModuleRef) -> bool {
        match self {
            ModulePattern::Any => true,
            ModulePattern::Exact(name) => name == module.name(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Net;

    #[test]
    fn test_wildcard_matches_any_module() {
        let pattern = ModulePattern::parse("*").unwrap();
        assert!(pattern.matches(&ModuleRef::new("Net")));
        assert!(pattern.matches(&ModuleRef::new("Ui")));
    }

    #[test]
    fn test_exact_pattern_matches_by_name() {
        let pattern = ModulePattern::parse("Net").unwrap();
        assert!(pattern.matches(&ModuleRef::new("Net")));
        assert!(!pattern.matches(&ModuleRef::new("Network")));
    }

    #[test]
    fn test_type_pattern_uses_unqualified_name() {
        let pattern = ModulePattern::of::<Net>();
        assert!(pattern.matches(&ModuleRef::new("Net")));
    }

    #[test]
    fn test_empty_pattern_rejected() {
        assert_eq!(ModulePattern::parse(""), Err(ConfigError::EmptyPattern));
    }
}
