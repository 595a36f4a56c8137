//! Record sinks.
//!
//! # Responsibilities
//! - Define the boundary to whatever actually outputs records
//! - Forward records into `tracing` for production use
//! - Capture records in memory for tests and embedding
//!
//! # Design Decisions
//! - Sinks receive only records that passed the module threshold; they do
//!   no filtering of their own
//! - `TracingSink` cannot carry dynamic field names, so all fields travel
//!   as one JSON object

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde_json::{Map, Value};

use crate::emit::{Level, Record};

/// Destination for records.
pub trait Sink: Send + Sync {
    fn write(&self, record: Record);
}

/// Forwards records to the global `tracing` subscriber.
///
/// Fatal and panic records are emitted at `ERROR` with their original
/// severity attached.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl Sink for TracingSink {
    fn write(&self, record: Record) {
        let Record { level, message, fields } = record;
        let fields = Value::Object(fields.into_iter().collect::<Map<String, Value>>());

        match level {
            Level::Trace => tracing::trace!(fields = %fields, "{}", message),
            Level::Debug => tracing::debug!(fields = %fields, "{}", message),
            Level::Info => tracing::info!(fields = %fields, "{}", message),
            Level::Warn => tracing::warn!(fields = %fields, "{}", message),
            Level::Error | Level::Fatal | Level::Panic => {
                tracing::error!(severity = %level, fields = %fields, "{}", message)
            }
        }
    }
}

/// In-memory sink. Clones share the same buffer.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    records: Arc<Mutex<Vec<Record>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Record>> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Copy of every record written so far.
    pub fn records(&self) -> Vec<Record> {
        self.lock().clone()
    }

    /// Drain the buffer.
    pub fn take(&self) -> Vec<Record> {
        std::mem::take(&mut *self.lock())
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

impl Sink for MemorySink {
    fn write(&self, record: Record) {
        self.lock().push(record);
    }
}
