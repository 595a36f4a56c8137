//! Shared helpers for integration tests.

use std::sync::{Arc, Barrier};
use std::thread;

use modular_log::{Level, MemorySink, RootLogger};

/// Fresh namespace at `level` with a capturing sink.
pub fn root_with_sink(level: Level) -> (RootLogger, MemorySink) {
    let sink = MemorySink::new();
    (RootLogger::new(sink.clone(), level), sink)
}

/// Run `f` on `threads` threads released together, collecting the results.
pub fn run_concurrently<T, F>(threads: usize, f: F) -> Vec<T>
where
    T: Send + 'static,
    F: Fn(usize) -> T + Send + Sync + 'static,
{
    let barrier = Arc::new(Barrier::new(threads));
    let f = Arc::new(f);

    let handles: Vec<_> = (0..threads)
        .map(|i| {
            let barrier = barrier.clone();
            let f = f.clone();
            thread::spawn(move || {
                barrier.wait();
                f(i)
            })
        })
        .collect();

    handles
        .into_iter()
        .map(|h| h.join().expect("worker thread panicked"))
        .collect()
}
