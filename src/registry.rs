//! Sink registry and fan-out dispatch.
//!
//! The registry is an explicit context object; `default_registry()` is the
//! process-wide instance most callers use. Registration returns an opaque
//! `SinkId` handle, registration of the same sink instance is idempotent,
//! and fan-out order is registration order.
//!
//! Dispatch snapshots the sink table under the read lock before delivering,
//! so a sink registered while a dispatch is in flight is seen by later
//! dispatches only.

use crate::domain::Record;
use crate::error::DispatchError;
use crate::sink::Sink;
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Opaque handle returned at registration time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SinkId(u64);

/// Host termination capability, invoked by `Logger::fatal`. Cleared via
/// `set_termination_hook(None)` to model a host without the primitive.
pub type TerminationHook = Box<dyn Fn() + Send + Sync>;

struct Entry {
    id: SinkId,
    sink: Arc<dyn Sink>,
}

pub struct Registry {
    sinks: RwLock<Vec<Entry>>,
    next_id: AtomicU64,
    termination: RwLock<Option<TerminationHook>>,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    pub fn new() -> Self {
        Self {
            sinks: RwLock::new(Vec::new()),
            next_id: AtomicU64::new(1),
            termination: RwLock::new(Some(Box::new(|| std::process::abort()))),
        }
    }

    /// Adds a sink and returns its handle. Registering the same instance
    /// (by identity) again returns the existing handle and leaves one entry.
    pub fn register(&self, sink: Arc<dyn Sink>) -> SinkId {
        let mut sinks = self.sinks.write();
        if let Some(entry) = sinks.iter().find(|e| Arc::ptr_eq(&e.sink, &sink)) {
            return entry.id;
        }
        let id = SinkId(self.next_id.fetch_add(1, Ordering::Relaxed));
        sinks.push(Entry { id, sink });
        id
    }

    /// Removes the sink behind the handle. Returns whether anything was
    /// removed.
    pub fn deregister(&self, id: SinkId) -> bool {
        let mut sinks = self.sinks.write();
        let before = sinks.len();
        sinks.retain(|e| e.id != id);
        sinks.len() != before
    }

    pub fn len(&self) -> usize {
        self.sinks.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.sinks.read().is_empty()
    }

    /// Fans the record out to every accepting sink, in registration order.
    /// Fail-fast: the first sink emit error propagates and sinks not yet
    /// visited in this call are skipped.
    pub fn dispatch(&self, record: &Record) -> Result<(), DispatchError> {
        self.dispatch_filtered(record, None)
    }

    /// Like `dispatch`, restricted to the listed handles (registry order is
    /// kept). An empty list means no restriction.
    pub fn dispatch_to(&self, record: &Record, targets: &[SinkId]) -> Result<(), DispatchError> {
        if targets.is_empty() {
            self.dispatch_filtered(record, None)
        } else {
            self.dispatch_filtered(record, Some(targets))
        }
    }

    fn dispatch_filtered(
        &self,
        record: &Record,
        targets: Option<&[SinkId]>,
    ) -> Result<(), DispatchError> {
        let snapshot: Vec<(SinkId, Arc<dyn Sink>)> = {
            let sinks = self.sinks.read();
            sinks
                .iter()
                .map(|e| (e.id, Arc::clone(&e.sink)))
                .collect()
        };

        // Rendered text memo, keyed by formatter instance identity and
        // scoped to this one dispatch call.
        let mut rendered: HashMap<usize, String> = HashMap::new();

        for (id, sink) in snapshot {
            if let Some(targets) = targets
                && !targets.contains(&id)
            {
                continue;
            }
            if !sink.accepts(record) {
                continue;
            }
            let formatter = sink.formatter();
            let key = Arc::as_ptr(&formatter) as *const () as usize;
            let text = rendered
                .entry(key)
                .or_insert_with(|| formatter.render(record));
            sink.emit(text.as_str(), record)
                .map_err(|source| DispatchError {
                    sink: sink.name().to_string(),
                    source,
                })?;
        }
        Ok(())
    }

    pub fn set_termination_hook(&self, hook: Option<TerminationHook>) {
        *self.termination.write() = hook;
    }

    /// Invokes the host termination hook if one is configured. Returns false
    /// when the host exposes no termination primitive.
    pub fn terminate(&self) -> bool {
        let termination = self.termination.read();
        match termination.as_ref() {
            Some(hook) => {
                hook();
                true
            }
            None => false,
        }
    }
}

static DEFAULT_REGISTRY: Lazy<Registry> = Lazy::new(Registry::new);

/// Process-wide default registry, created on first use and never torn down.
pub fn default_registry() -> &'static Registry {
    &DEFAULT_REGISTRY
}
