//! Hierarchical module loggers.
//!
//! Loggers live in a dotted-path namespace (`svc.http.handler`). Every
//! module carries its own threshold, and changing a module's threshold
//! changes it for the whole subtree.
//!
//! ```
//! use modular_log::{Level, MemorySink, RootLogger};
//!
//! let sink = MemorySink::new();
//! let root = RootLogger::new(sink.clone(), Level::Info);
//!
//! let http = root.get_or_create("svc.http", Level::Debug);
//! http.logger().with_field("status", 200).debug("request served");
//! assert_eq!(sink.len(), 1);
//!
//! root.set_threshold(Level::Error);
//! http.logger().debug("suppressed");
//! assert_eq!(sink.len(), 1);
//! ```

pub mod config;
pub mod emit;
pub mod observability;
pub mod tree;

pub use config::ModularConfig;
pub use emit::{Fields, Level, Logger, MemorySink, Record, Sink, TracingSink};
pub use tree::{ModuleLogger, RootLogger, TreeError};
