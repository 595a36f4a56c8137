//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Tree diagnostics (module creation, propagation)  ─┐
//! TracingSink records                              ─┴→ tracing subscriber
//!                                                       (logging.rs)
//! ```

pub mod logging;

pub use logging::init_logging;
