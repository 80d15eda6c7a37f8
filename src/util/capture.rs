#![cfg(test)]

use std::cell::RefCell;
use std::mem;

use log::{Level, LevelFilter, Log, Metadata, Record};

thread_local! {
    static RECORDS: RefCell<Vec<(Level, String)>> = const { RefCell::new(Vec::new()) };
}

/// A logger that keeps records on the thread that emitted them, so parallel tests don't see each
/// other's output.
struct CaptureLogger;

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &Record<'_>) {
        RECORDS.with_borrow_mut(|records| {
            records.push((record.level(), record.args().to_string()));
        });
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger;

/// Runs `run` and returns every log record it emitted on the current thread, in order.
pub fn capture_logs<F: FnOnce()>(run: F) -> Vec<(Level, String)> {
    // Fails after the first call, leaving the same logger installed.
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(LevelFilter::Trace);

    RECORDS.with_borrow_mut(Vec::clear);
    run();
    RECORDS.with_borrow_mut(mem::take)
}
