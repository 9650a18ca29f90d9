//! Host test context abstraction.
//!
//! The [`TestContext`] trait is the functional subset of a host test runner
//! that the engine reports into. Production wiring adapts the real host;
//! tests use recording implementations that capture every call.

use std::sync::atomic::{AtomicBool, Ordering};

/// Capability set the engine consumes from the host test runner.
///
/// Implementations must be shareable across threads: a host is free to
/// schedule sibling suites (or, with the parallel case option, sibling
/// cases) concurrently.
pub trait TestContext: Send + Sync {
    /// Emit a diagnostic line, host-formatted.
    fn log(&self, line: &str);
    /// Mark the current schedulable unit failed.
    fn fail(&self);
    /// Query failed state.
    fn failed(&self) -> bool;
    /// Abort remaining work for this unit and mark it skipped.
    fn skip_now(&self);
}

/// Context bridge for plain `#[test]` functions.
///
/// Rust's test harness exposes no per-test handle, so this context records
/// failure and skip signals in atomics and converts a recorded failure into
/// a panic when [`StdContext::finish`] runs, failing the enclosing test.
#[derive(Debug, Default)]
pub struct StdContext {
    failed: AtomicBool,
    skipped: AtomicBool,
}

impl StdContext {
    /// Whether the suite signalled "no cases selected".
    pub fn skipped(&self) -> bool {
        self.skipped.load(Ordering::SeqCst)
    }

    /// Propagate a recorded failure into the enclosing test.
    ///
    /// # Panics
    ///
    /// Panics when any suite run against this context recorded a failure.
    pub fn finish(&self) {
        if self.failed() {
            panic!("fixture suite failed (see log output above)");
        }
    }
}

impl TestContext for StdContext {
    fn log(&self, line: &str) {
        println!("{line}");
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
