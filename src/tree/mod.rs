//! Module namespace tree.
//!
//! # Data Flow
//! ```text
//! RootLogger::new(sink, level)
//!     → root ModuleLogger (name "")
//!     → lookup / create / get_or_create("svc.http")
//!         → path.rs (qualify, split next segment)
//!         → child ModuleLogger per segment, created lazily
//!     → set_threshold(level)
//!         → this node, then every existing descendant, depth-first
//! ```
//!
//! # Design Decisions
//! - One node per distinct full path; nodes are never removed
//! - Each node guards its threshold and its children independently
//! - Walks are root-to-leaf only, which rules out lock-order deadlocks
//! - Paths may be relative or fully qualified on any node

pub mod errors;
pub mod module;
pub mod path;
pub mod root;

pub use errors::TreeError;
pub use module::ModuleLogger;
pub use root::{RootContext, RootLogger, DEFAULT_MODULE_FIELD};
