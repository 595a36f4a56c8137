//! Emission handles and the threshold gate.
//!
//! # Responsibilities
//! - Carry structured fields alongside a module
//! - Gate every emission on the module's current threshold
//! - Assemble records and hand them to the root's sink
//!
//! # Design Decisions
//! - Handles are immutable: adding fields returns a new handle
//! - The threshold is re-read on every call, never cached
//! - A suppressed call formats nothing and copies nothing

use std::fmt::Display;
use std::sync::Arc;

use serde_json::Value;

use crate::emit::{Fields, Level, Record, ERROR_KEY};
use crate::tree::{ModuleLogger, RootContext};

/// What the gate needs to know about an emitting module.
pub trait Module: Send + Sync {
    fn full_name(&self) -> &str;
    fn threshold(&self) -> Level;
    fn context(&self) -> &RootContext;
}

/// Build the record for an emission, or `None` if `level` is below the
/// module's threshold.
///
/// The module name goes in first under the root's tagging field, so a
/// caller field with the same key wins.
pub fn new_record<M, D>(module: &M, fields: &Fields, level: Level, message: D) -> Option<Record>
where
    M: Module + ?Sized,
    D: Display,
{
    if level < module.threshold() {
        return None;
    }

    let module_field = module.context().module_field();
    let mut record_fields = Fields::new();
    record_fields.insert(
        module_field.as_str().to_string(),
        Value::String(module.full_name().to_string()),
    );
    record_fields.extend(fields.iter().map(|(k, v)| (k.clone(), v.clone())));

    Some(Record {
        level,
        message: message.to_string(),
        fields: record_fields,
    })
}

/// Run the gate and write the record, if any, to the module's sink.
pub fn emit<M, D>(module: &M, fields: &Fields, level: Level, message: D)
where
    M: Module + ?Sized,
    D: Display,
{
    if let Some(record) = new_record(module, fields, level, message) {
        module.context().write(record);
    }
}

/// A module plus a set of structured fields.
#[derive(Debug, Clone)]
pub struct Logger {
    module: Arc<ModuleLogger>,
    fields: Fields,
}

impl Logger {
    pub fn new(module: Arc<ModuleLogger>) -> Self {
        Self {
            module,
            fields: Fields::new(),
        }
    }

    /// The module this handle emits from.
    pub fn module(&self) -> &Arc<ModuleLogger> {
        &self.module
    }

    pub fn fields(&self) -> &Fields {
        &self.fields
    }

    pub fn with_field(&self, key: impl Into<String>, value: impl Into<Value>) -> Logger {
        self.with_fields([(key, value)])
    }

    /// New handle with `fields` merged over this one's.
    pub fn with_fields<I, K, V>(&self, fields: I) -> Logger
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        let mut merged = self.fields.clone();
        merged.extend(fields.into_iter().map(|(k, v)| (k.into(), v.into())));
        Logger {
            module: Arc::clone(&self.module),
            fields: merged,
        }
    }

    /// New handle carrying `err`'s message under `"error"`.
    pub fn with_error<E>(&self, err: &E) -> Logger
    where
        E: std::error::Error + ?Sized,
    {
        self.with_field(ERROR_KEY, err.to_string())
    }

    /// Whether a record at `level` would currently pass the gate.
    pub fn enabled(&self, level: Level) -> bool {
        level >= self.module.threshold()
    }

    pub fn log(&self, level: Level, message: impl Display) {
        emit(&*self.module, &self.fields, level, message);
    }

    pub fn trace(&self, message: impl Display) {
        self.log(Level::Trace, message);
    }

    pub fn debug(&self, message: impl Display) {
        self.log(Level::Debug, message);
    }

    pub fn info(&self, message: impl Display) {
        self.log(Level::Info, message);
    }

    /// Alias of [`info`](Self::info).
    pub fn print(&self, message: impl Display) {
        self.info(message);
    }

    pub fn warn(&self, message: impl Display) {
        self.log(Level::Warn, message);
    }

    /// Alias of [`warn`](Self::warn).
    pub fn warning(&self, message: impl Display) {
        self.warn(message);
    }

    pub fn error(&self, message: impl Display) {
        self.log(Level::Error, message);
    }

    /// Emits at `Fatal`. Does not terminate the process.
    pub fn fatal(&self, message: impl Display) {
        self.log(Level::Fatal, message);
    }

    /// Emits at `Panic`. Does not unwind.
    pub fn panic(&self, message: impl Display) {
        self.log(Level::Panic, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emit::MemorySink;
    use crate::tree::RootLogger;
    use std::fmt;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn setup(level: Level) -> (MemorySink, Logger) {
        let sink = MemorySink::new();
        let root = RootLogger::new(sink.clone(), Level::Trace);
        let module = root.create("test_module", level).unwrap();
        (sink, module.logger())
    }

    #[test]
    fn test_with_fields_does_not_touch_receiver() {
        let (_, base) = setup(Level::Debug);
        let base = base.with_field("test", "test");

        let extended = base.with_fields([("test2", "test2")]);
        assert_eq!(base.fields().len(), 1);
        assert_eq!(extended.fields().len(), 2);
        assert_eq!(extended.fields()["test"], "test");
        assert_eq!(extended.fields()["test2"], "test2");

        // Override
        let overridden = base.with_fields([("test", "test2")]);
        assert_eq!(overridden.fields().len(), 1);
        assert_eq!(overridden.fields()["test"], "test2");
        assert_eq!(base.fields()["test"], "test");
    }

    #[test]
    fn test_with_error() {
        let (_, base) = setup(Level::Debug);
        let err = std::io::Error::new(std::io::ErrorKind::Other, "test2");

        let logger = base.with_field("test", "test").with_error(&err);
        assert_eq!(logger.fields().len(), 2);
        assert_eq!(logger.fields()[ERROR_KEY], "test2");
    }

    #[test]
    fn test_new_record_gate() {
        let (_, logger) = setup(Level::Debug);
        let module = logger.module();
        let fields = Fields::new();

        assert!(new_record(&**module, &fields, Level::Debug, "x").is_some());

        for (i, threshold) in Level::ALL.iter().enumerate() {
            module.set_threshold(*threshold);
            for below in &Level::ALL[..i] {
                assert!(
                    new_record(&**module, &fields, *below, "x").is_none(),
                    "threshold {} should suppress {}",
                    threshold,
                    below
                );
            }
            for at_or_above in &Level::ALL[i..] {
                assert!(
                    new_record(&**module, &fields, *at_or_above, "x").is_some(),
                    "threshold {} should pass {}",
                    threshold,
                    at_or_above
                );
            }
        }
    }

    #[test]
    fn test_new_record_copies_fields() {
        let (_, logger) = setup(Level::Debug);
        let logger = logger.with_fields([("test", "test"), ("test2", "test2")]);

        let record = new_record(&**logger.module(), logger.fields(), Level::Debug, "msg").unwrap();
        assert_eq!(record.fields.len(), 3);
        assert_eq!(record.field("test").unwrap(), "test");
        assert_eq!(record.field("test2").unwrap(), "test2");
        assert_eq!(record.field("module").unwrap(), "test_module");
    }

    #[test]
    fn test_caller_field_overrides_module_tag() {
        let (sink, logger) = setup(Level::Debug);
        logger.with_field("module", "custom").info("hello");

        let records = sink.records();
        assert_eq!(records[0].field("module").unwrap(), "custom");
    }

    struct CountingDisplay<'a>(&'a AtomicUsize);

    impl fmt::Display for CountingDisplay<'_> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            self.0.fetch_add(1, Ordering::SeqCst);
            f.write_str("formatted")
        }
    }

    #[test]
    fn test_suppressed_message_is_not_formatted() {
        let (sink, logger) = setup(Level::Info);
        let count = AtomicUsize::new(0);

        logger.debug(CountingDisplay(&count));
        assert_eq!(count.load(Ordering::SeqCst), 0);
        assert!(sink.is_empty());

        logger.info(CountingDisplay(&count));
        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert_eq!(sink.records()[0].message, "formatted");
    }

    #[test]
    fn test_level_helpers() {
        type LogFn = fn(&Logger, &str);
        let cases: [(Level, LogFn); 7] = [
            (Level::Trace, |l, m| l.trace(m)),
            (Level::Debug, |l, m| l.debug(m)),
            (Level::Info, |l, m| l.info(m)),
            (Level::Warn, |l, m| l.warn(m)),
            (Level::Error, |l, m| l.error(m)),
            (Level::Fatal, |l, m| l.fatal(m)),
            (Level::Panic, |l, m| l.panic(m)),
        ];

        for (level, log_fn) in cases {
            let (sink, logger) = setup(level);
            log_fn(&logger, "test");

            let records = sink.take();
            assert_eq!(records.len(), 1, "{} should be emitted", level);
            assert_eq!(records[0].level, level);
            assert_eq!(records[0].message, "test");
            assert_eq!(records[0].field("module").unwrap(), "test_module");

            // One level stricter suppresses it
            if level != Level::Panic {
                logger.module().set_threshold(Level::from(level as u8 + 1));
                log_fn(&logger, "test");
                assert!(sink.is_empty(), "{} should be suppressed", level);
            }
        }
    }

    #[test]
    fn test_enabled_tracks_threshold_changes() {
        let (_, logger) = setup(Level::Info);
        assert!(!logger.enabled(Level::Debug));

        logger.module().set_threshold(Level::Debug);
        assert!(logger.enabled(Level::Debug));
    }

    #[test]
    fn test_print_and_warning_aliases() {
        let (sink, logger) = setup(Level::Info);

        logger.print("printed");
        logger.warning("warned");

        let records = sink.take();
        assert_eq!(records.len(), 2);
        assert_eq!((records[0].level, records[0].message.as_str()), (Level::Info, "printed"));
        assert_eq!((records[1].level, records[1].message.as_str()), (Level::Warn, "warned"));

        logger.module().set_threshold(Level::Error);
        logger.print("dropped");
        logger.warning("dropped");
        assert!(sink.is_empty());
    }
}
