use super::{Sink, SinkConfig};
use crate::domain::Record;
use crate::error::SinkError;
use parking_lot::Mutex;

/// Buffers accepted records in insertion order. Intended for test harnesses
/// and introspection; the full record is kept, not just its rendered text.
#[derive(Debug, Default)]
pub struct MemorySink {
    config: SinkConfig,
    records: Mutex<Vec<Record>>,
}

impl MemorySink {
    pub fn new(config: SinkConfig) -> Self {
        Self {
            config,
            records: Mutex::new(Vec::new()),
        }
    }

    /// Buffered records in insertion order.
    pub fn records(&self) -> Vec<Record> {
        self.records.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }

    pub fn clear(&self) {
        self.records.lock().clear();
    }
}

impl Sink for MemorySink {
    fn name(&self) -> &str {
        "memory"
    }

    fn config(&self) -> &SinkConfig {
        &self.config
    }

    fn emit(&self, _text: &str, record: &Record) -> Result<(), SinkError> {
        self.records.lock().push(record.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ModuleRef, Part, Severity};

    #[test]
    fn test_records_kept_in_insertion_order() {
        let sink = MemorySink::new(SinkConfig::new());
        let module = ModuleRef::new("Net");

        for i in 0..3i64 {
            let record = Record::new(Severity::Info, module.clone(), vec![Part::from(i)]);
            sink.emit("ignored", &record).unwrap();
        }

        let records = sink.records();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].parts(), &[Part::Number(0.0)]);
        assert_eq!(records[2].parts(), &[Part::Number(2.0)]);
    }

    #[test]
    fn test_clear_empties_buffer() {
        let sink = MemorySink::new(SinkConfig::new());
        let record = Record::new(Severity::Info, ModuleRef::new("Net"), vec![]);
        sink.emit("", &record).unwrap();
        assert!(!sink.is_empty());

        sink.clear();
        assert!(sink.is_empty());
    }
}
