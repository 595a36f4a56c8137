//! Root logger and the process-wide context shared by every module.
//!
//! # Responsibilities
//! - Construct the unique root node around a caller-supplied sink
//! - Hold the sink and the module tagging field behind their own guards
//!
//! # Design Decisions
//! - Nodes reference the `RootContext`, not the root node, so ownership
//!   stays acyclic
//! - Sink and field are `ArcSwap`s: readers never block writers

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

use arc_swap::ArcSwap;

use crate::emit::{Level, Logger, Record, Sink};
use crate::tree::module::ModuleLogger;

/// Default field under which a record carries its module name.
pub const DEFAULT_MODULE_FIELD: &str = "module";

/// Facts every module reads when emitting.
pub struct RootContext {
    sink: ArcSwap<Box<dyn Sink>>,
    module_field: ArcSwap<String>,
}

impl RootContext {
    fn new(sink: Box<dyn Sink>) -> Self {
        Self {
            sink: ArcSwap::from_pointee(sink),
            module_field: ArcSwap::from_pointee(DEFAULT_MODULE_FIELD.to_string()),
        }
    }

    /// Field name used to tag records with the emitting module.
    pub fn module_field(&self) -> Arc<String> {
        self.module_field.load_full()
    }

    /// Change the tagging field. An empty name restores the default.
    pub fn set_module_field(&self, field: impl Into<String>) {
        let mut field = field.into();
        if field.is_empty() {
            field = DEFAULT_MODULE_FIELD.to_string();
        }
        self.module_field.store(Arc::new(field));
    }

    /// Swap the output sink. Records already handed out finish on the old one.
    pub fn replace_sink<S: Sink + 'static>(&self, sink: S) {
        let sink: Box<dyn Sink> = Box::new(sink);
        self.sink.store(Arc::new(sink));
    }

    /// Hand a record to the current sink.
    pub fn write(&self, record: Record) {
        let sink = self.sink.load_full();
        sink.write(record);
    }
}

impl fmt::Debug for RootContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RootContext")
            .field("module_field", &self.module_field())
            .finish_non_exhaustive()
    }
}

/// The root of a module namespace.
///
/// Derefs to the root [`ModuleLogger`], so the whole tree API is available
/// directly: `root.get_or_create("svc.http", Level::Debug)`.
#[derive(Clone)]
pub struct RootLogger {
    module: Arc<ModuleLogger>,
}

impl RootLogger {
    /// Build a new namespace writing to `sink`, with `level` as the root threshold.
    pub fn new<S: Sink + 'static>(sink: S, level: Level) -> Self {
        let context = Arc::new(RootContext::new(Box::new(sink)));
        let module = Arc::new(ModuleLogger::new(String::new(), level, context));
        tracing::debug!(level = %level, "Root logger created");
        Self { module }
    }

    /// The root node.
    pub fn module(&self) -> &Arc<ModuleLogger> {
        &self.module
    }

    pub fn module_field(&self) -> Arc<String> {
        self.module.root().module_field()
    }

    pub fn set_module_field(&self, field: impl Into<String>) {
        self.module.root().set_module_field(field);
    }

    pub fn replace_sink<S: Sink + 'static>(&self, sink: S) {
        self.module.root().replace_sink(sink);
    }

    /// Emission handle for the root module.
    pub fn logger(&self) -> Logger {
        self.module.logger()
    }
}

impl Deref for RootLogger {
    type Target = Arc<ModuleLogger>;

    fn deref(&self) -> &Self::Target {
        &self.module
    }
}

impl fmt::Debug for RootLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RootLogger")
            .field("module", &self.module)
            .field("context", self.module.root())
            .finish()
    }
}
