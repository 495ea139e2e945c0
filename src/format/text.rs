use super::Formatter;
use crate::domain::{Part, Record};
use crate::error::ConfigError;
use chrono::Local;

/// Default human-readable formatter.
///
/// Line layout: `LEVEL   | HH:MM:SS.mmm   | module               | part part ...`
/// with the level padded to 7 columns, the time to 14, the module to 20.
/// When a maximum length is configured and the line exceeds it, the line is
/// cut at that many characters and `"..."` is appended. Stack-trace
/// expansion for error parts happens after truncation and is exempt from the
/// cap, so output length is unbounded when stack frames are present.
#[derive(Debug, Clone, Default)]
pub struct TextFormatter {
    max_length: Option<usize>,
}

impl TextFormatter {
    pub fn new() -> Self {
        Self { max_length: None }
    }

    /// Builds a formatter with a line-length cap. Negative values are a
    /// configuration error.
    pub fn with_max_length(max_length: i64) -> Result<Self, ConfigError> {
        let mut formatter = Self::new();
        formatter.set_max_length(max_length)?;
        Ok(formatter)
    }

    pub fn set_max_length(&mut self, max_length: i64) -> Result<(), ConfigError> {
        if max_length < 0 {
            return Err(ConfigError::InvalidMaxLength(max_length));
        }
        self.max_length = Some(max_length as usize);
        Ok(())
    }

    pub fn max_length(&self) -> Option<usize> {
        self.max_length
    }

    fn prefix(&self, record: &Record) -> String {
        let time = Local::now().format("%H:%M:%S%.3f").to_string();
        format!(
            "{:<7} | {:<14} | {:<20} |",
            record.severity().name(),
            time,
            record.module().name()
        )
    }

    fn render_part(part: &Part) -> String {
        match part {
            Part::Text(text) => text.clone(),
            Part::Number(value) => render_number(*value),
            Part::Error { message, .. } => message.clone(),
            Part::Structured(value) => value.to_string(),
        }
    }

    fn append_stack(line: &mut String, record: &Record) {
        for part in record.parts() {
            let Part::Error { frames, .. } = part else {
                continue;
            };
            if frames.is_empty() {
                line.push_str("\n\t--no stack--");
                continue;
            }
            for frame in frames {
                line.push('\n');
                line.push('\t');
                line.push_str(frame);
            }
        }
    }
}

fn render_number(value: f64) -> String {
    // Integral values print without a trailing ".0"
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

fn truncate_at_char_boundary(line: &mut String, max: usize) {
    if let Some((index, _)) = line.char_indices().nth(max) {
        line.truncate(index);
        line.push_str("...");
    }
}

impl Formatter for TextFormatter {
    fn render(&self, record: &Record) -> String {
        let mut pieces = Vec::with_capacity(record.parts().len() + 1);
        pieces.push(self.prefix(record));
        pieces.extend(record.parts().iter().map(Self::render_part));
        let mut line = pieces.join(" ");

        if let Some(max) = self.max_length
            && line.chars().count() > max
        {
            truncate_at_char_boundary(&mut line, max);
        }
        if record.is_error_class() {
            Self::append_stack(&mut line, record);
        }
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ModuleRef, Severity};

    fn record(severity: Severity, parts: Vec<Part>) -> Record {
        Record::new(severity, ModuleRef::new("Net"), parts)
    }

    #[test]
    fn test_prefix_fields_are_padded() {
        let formatter = TextFormatter::new();
        let text = formatter.render(&record(Severity::Info, vec![Part::from("hello")]));

        let fields: Vec<&str> = text.split(" | ").collect();
        assert_eq!(fields[0], "INFO   ");
        assert_eq!(fields[1].chars().count(), 14);
        assert!(fields[1].starts_with(|c: char| c.is_ascii_digit()));
        assert_eq!(fields[2].chars().count(), 20);
        assert!(fields[2].starts_with("Net "));
        assert_eq!(fields[3], "hello");
    }

    #[test]
    fn test_parts_joined_with_single_spaces() {
        let formatter = TextFormatter::new();
        let text = formatter.render(&record(
            Severity::Info,
            vec![Part::from("a"), Part::from(1), Part::from(2.5)],
        ));
        assert!(text.ends_with("| a 1 2.5"));
    }

    #[test]
    fn test_structured_part_renders_as_compact_json() {
        let formatter = TextFormatter::new();
        let text = formatter.render(&record(
            Severity::Info,
            vec![Part::from(serde_json::json!({"retry": true}))],
        ));
        assert!(text.ends_with(r#"| {"retry":true}"#));
    }

    #[test]
    fn test_truncation_appends_ellipsis() {
        let formatter = TextFormatter::with_max_length(20).unwrap();
        let long = "x".repeat(100);
        let text = formatter.render(&record(Severity::Info, vec![Part::from(long)]));

        assert_eq!(text.chars().count(), 23);
        assert!(text.ends_with("..."));
        assert_eq!(&text[..7], "INFO   ");
    }

    #[test]
    fn test_truncation_prefix_matches_untruncated_output() {
        let capped = TextFormatter::with_max_length(20).unwrap();
        let uncapped = TextFormatter::new();
        let rec = record(Severity::Info, vec![Part::from("abcdefghijklmnopqrstuvwxyz")]);

        let short = capped.render(&rec);
        let full = uncapped.render(&rec);
        // Prefix up to the time field differs run to run only in the time
        // digits, so compare structure: level and module fields.
        assert_eq!(&short[..8], &full[..8]);
        assert_eq!(short.len(), 23);
    }

    #[test]
    fn test_negative_max_length_is_a_config_error() {
        assert_eq!(
            TextFormatter::with_max_length(-1).unwrap_err(),
            ConfigError::InvalidMaxLength(-1)
        );
    }

    #[test]
    fn test_error_part_expands_stack_frames() {
        let formatter = TextFormatter::new();
        let text = formatter.render(&record(
            Severity::Error,
            vec![
                Part::from("connect failed"),
                Part::Error {
                    message: "refused".to_string(),
                    frames: vec!["dial tcp".to_string(), "socket closed".to_string()],
                },
            ],
        ));

        let mut lines = text.lines();
        let first = lines.next().unwrap();
        assert!(first.contains("connect failed refused"));
        assert_eq!(lines.next().unwrap(), "\tdial tcp");
        assert_eq!(lines.next().unwrap(), "\tsocket closed");
        assert!(lines.next().is_none());
    }

    #[test]
    fn test_frameless_error_part_gets_marker() {
        let formatter = TextFormatter::new();
        let text = formatter.render(&record(
            Severity::Warn,
            vec![Part::Error {
                message: "boom".to_string(),
                frames: vec![],
            }],
        ));
        assert!(text.ends_with("\n\t--no stack--"));
    }

    #[test]
    fn test_stack_expansion_skipped_below_error_class() {
        let formatter = TextFormatter::new();
        let text = formatter.render(&record(
            Severity::Info,
            vec![Part::Error {
                message: "boom".to_string(),
                frames: vec!["frame".to_string()],
            }],
        ));
        assert!(!text.contains('\n'));
    }

    #[test]
    fn test_stack_expansion_is_exempt_from_truncation() {
        let formatter = TextFormatter::with_max_length(20).unwrap();
        let text = formatter.render(&record(
            Severity::Error,
            vec![Part::Error {
                message: "x".repeat(100),
                frames: vec!["frame one".to_string()],
            }],
        ));

        let mut lines = text.lines();
        assert_eq!(lines.next().unwrap().chars().count(), 23);
        assert_eq!(lines.next().unwrap(), "\tframe one");
    }
}
