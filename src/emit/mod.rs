//! Record emission.
//!
//! # Data Flow
//! ```text
//! Logger::info("msg")
//!     → logger.rs gate: level < module threshold? → no-op
//!     → Record { level, message, fields + module tag }
//!     → RootContext sink
//!         → sink.rs (TracingSink → tracing subscriber, MemorySink → buffer)
//! ```
//!
//! # Design Decisions
//! - The gate is the only place severity meets the tree
//! - Sinks are opaque; the tree never inspects what they do

pub mod level;
pub mod logger;
pub mod record;
pub mod sink;

pub use level::{Level, ParseLevelError};
pub use logger::{emit, new_record, Logger, Module};
pub use record::{Fields, Record, ERROR_KEY};
pub use sink::{MemorySink, Sink, TracingSink};
