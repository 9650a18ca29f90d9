//! Test-only helpers: a recording host context.

use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::Mutex;

use crate::context::TestContext;

/// Host context double that records every capability call.
#[derive(Default)]
pub struct RecordingContext {
    lines: Mutex<Vec<String>>,
    failed: AtomicBool,
    skipped: AtomicBool,
}

impl RecordingContext {
    /// Every line flushed through `log`, in order.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }

    /// Whether `fail` was ever called.
    pub fn failed_called(&self) -> bool {
        self.failed.load(Ordering::SeqCst)
    }

    /// Whether `skip_now` was ever called.
    pub fn skipped(&self) -> bool {
        self.skipped.load(Ordering::SeqCst)
    }
}

impl TestContext for RecordingContext {
    fn log(&self, line: &str) {
        self.lines.lock().push(line.to_string());
    }

    fn fail(&self) {
        self.failed.store(true, Ordering::SeqCst);
    }

    fn failed(&self) -> bool {
        self.failed.load(Ordering::SeqCst)
    }

    fn skip_now(&self) {
        self.skipped.store(true, Ordering::SeqCst);
    }
}
