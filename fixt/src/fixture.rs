//! Per-instance failure state and buffered diagnostic log.
//!
//! A [`Fixture`] is created by the runner for one suite instantiation and
//! bound into the suite's composed [`crate::FixtureField`]. Case bodies
//! report through it; the runner flushes its buffer once per trio so that
//! failure context stays co-located with the case that produced it.

use std::any::Any;
use std::backtrace::Backtrace;
use std::fmt;
use std::fmt::Write as _;
use std::panic::Location;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::Mutex;

use crate::context::TestContext;
use crate::report::{MAX_STACK_FRAMES, failure_report, panic_note, truncate_backtrace};

const DEFAULT_CONDITION_MESSAGE: &str = "Expected condition to be true, was false instead.";

/// Tracks failure state and buffers diagnostic output for one suite instance.
///
/// `failed` is monotonic and scoped to the whole instance: once any case
/// fails, the instance stays failed for host-reporting purposes even though
/// iteration continues. The log buffer is cleared per [`Fixture::finalize`].
pub struct Fixture {
    ctx: Arc<dyn TestContext>,
    log: Mutex<String>,
    failed: AtomicBool,
    verbose: bool,
}

impl Fixture {
    pub(crate) fn new(ctx: Arc<dyn TestContext>, verbose: bool) -> Self {
        Self {
            ctx,
            log: Mutex::new(String::new()),
            failed: AtomicBool::new(false),
            verbose,
        }
    }

    /// Check `actual` against an externally supplied matcher.
    ///
    /// The matcher returns `None` on success and a failure description
    /// otherwise. On failure the instance is marked failed and a report is
    /// appended to the log. Returns whether the assertion held; the trio is
    /// never aborted.
    #[track_caller]
    pub fn so<A>(&self, actual: A, matcher: impl FnOnce(&A) -> Option<String>) -> bool {
        let location = Location::caller();
        match matcher(&actual) {
            None => true,
            Some(failure) => {
                self.fail();
                self.print(failure_report(location, &failure));
                false
            }
        }
    }

    /// Assert a boolean condition, reporting the joined `messages` (or a
    /// default message) when it is false.
    #[track_caller]
    pub fn ok(&self, condition: bool, messages: &[&str]) {
        if condition {
            return;
        }
        let message = if messages.is_empty() {
            DEFAULT_CONDITION_MESSAGE.to_string()
        } else {
            messages.join(", ")
        };
        self.fail();
        self.print(failure_report(Location::caller(), &message));
    }

    /// Unconditionally mark the instance failed and report `message`.
    ///
    /// Callers format with `format!` where the host language would use a
    /// printf-style variant.
    #[track_caller]
    pub fn error(&self, message: impl fmt::Display) {
        self.fail();
        self.print(failure_report(Location::caller(), &message.to_string()));
    }

    /// Append diagnostic text to the log without affecting failure state.
    ///
    /// Buffered output is flushed only when the instance has failed or when
    /// verbose mode is on.
    pub fn print(&self, text: impl fmt::Display) {
        let mut log = self.log.lock();
        let _ = write!(log, "{text}");
    }

    /// [`Fixture::print`] with a trailing newline.
    pub fn println(&self, text: impl fmt::Display) {
        let mut log = self.log.lock();
        let _ = writeln!(log, "{text}");
    }

    /// Read-only reflection of current failure state (instance or host).
    pub fn failed(&self) -> bool {
        self.failed.load(Ordering::SeqCst) || self.ctx.failed()
    }

    /// Flush the buffered log to the host when the instance has failed or
    /// verbose mode produced output, then clear the buffer for the next
    /// case. Failure state is never cleared here.
    pub fn finalize(&self) {
        let mut log = self.log.lock();
        if self.failed() || (self.verbose && !log.is_empty()) {
            self.ctx.log(&format!("\n{}\n", log.as_str()));
        }
        log.clear();
    }

    /// Record a panic recovered at the trio boundary: message, bounded
    /// backtrace, and a note that later steps of the trio were skipped.
    pub(crate) fn record_panic(&self, payload: &(dyn Any + Send)) {
        self.println(format_args!("X PANIC: {}", panic_note(payload)));
        let backtrace = Backtrace::force_capture().to_string();
        self.println(truncate_backtrace(&backtrace, MAX_STACK_FRAMES));
        self.println(
            "* (Additional cases may have been skipped as a result of the panic shown above.)",
        );
        self.fail();
    }

    fn fail(&self) {
        self.failed.store(true, Ordering::SeqCst);
        self.ctx.fail();
    }
}
