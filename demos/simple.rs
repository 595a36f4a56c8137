//! Two nested modules, one threshold change propagated from the parent.
//!
//! Run with `cargo run --example simple`.

use modular_log::observability::init_logging;
use modular_log::{Level, RootLogger, TracingSink};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging("trace")?;

    let root = RootLogger::new(TracingSink, Level::Debug);
    let test = root.get_or_create("test", Level::Info).logger();
    let test_test = root.get_or_create("test.test", Level::Debug).logger();

    // "test" is at info
    test.debug("No-op, level is info");
    test.info("Info message");
    test_test.debug("Debug message of child module");

    // Propagates to "test.test"
    test.module().set_threshold(Level::Info);
    test_test.debug("No-op, threshold propagated from parent");
    test_test
        .with_field("attempt", 2)
        .info("Another info message");

    Ok(())
}
