//! Convention-driven xUnit-style fixture engine.
//!
//! A fixture suite is a plain struct whose registered member names encode
//! lifecycle hooks and test cases: `Setup` and `Teardown` are hooks, and any
//! name matching `(Focus|Skip)?(Long)?Test...` is a case with the
//! corresponding modifiers. The engine classifies the members, reconciles the
//! skip/focus/short-mode policies into one deterministic plan, and executes
//! each selected case as a guarded Setup → case → Teardown trio so that a
//! panic in one case never corrupts the reporting of the others.
//!
//! The architecture enforces a strict separation:
//!
//! - **[`core`]**: Pure, deterministic logic (classification, planning).
//!   No I/O, fully testable in isolation.
//! - **[`runner`]**: Drives a suite instance through its plan against a host
//!   [`TestContext`], with one panic-recovery boundary per trio.
//! - **[`fixture`]**: Per-instance failure state and buffered diagnostic log,
//!   exposed to case bodies through the composed [`FixtureField`].
//!
//! Typical wiring from a plain `#[test]` function:
//!
//! ```no_run
//! use std::sync::Arc;
//! use fixt::{members, FixtureField, Member, Options, StdContext, Suite};
//!
//! #[derive(Default)]
//! struct Bowling {
//!     fx: FixtureField,
//! }
//!
//! #[allow(non_snake_case)]
//! impl Bowling {
//!     fn TestGutterGame(&mut self) {
//!         self.fx.ok(true, &[]);
//!     }
//! }
//!
//! impl Suite for Bowling {
//!     fn members() -> Vec<Member<Self>> {
//!         members![TestGutterGame]
//!     }
//!     fn fixture_field(&mut self) -> Option<&mut FixtureField> {
//!         Some(&mut self.fx)
//!     }
//! }
//!
//! #[test]
//! fn bowling() {
//!     let ctx = Arc::new(StdContext::default());
//!     fixt::run(&mut Bowling::default(), ctx.clone(), &Options::all_sequential());
//!     ctx.finish();
//! }
//! ```

pub mod context;
pub mod core;
pub mod fixture;
pub mod logging;
pub mod options;
mod report;
pub mod runner;
pub mod suite;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use context::{StdContext, TestContext};
pub use fixture::Fixture;
pub use options::{Concurrency, Options, RunMode};
pub use runner::{run, run_with_mode};
pub use suite::{FixtureField, Member, Suite};
