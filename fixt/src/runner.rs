//! Orchestration: drive one suite instance through its execution plan.

use std::any::type_name;
use std::collections::HashMap;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;

use tracing::{debug, warn};

use crate::context::TestContext;
use crate::core::classifier::classify;
use crate::core::planner::build_plan;
use crate::core::types::Classification;
use crate::fixture::Fixture;
use crate::options::{Options, RunMode};
use crate::suite::Suite;

/// Run a suite instance with the mode taken from the environment.
///
/// See [`run_with_mode`] for the execution contract.
pub fn run<S: Suite>(suite: &mut S, ctx: Arc<dyn TestContext>, options: &Options) {
    run_with_mode(suite, ctx, options, RunMode::from_env());
}

/// Run a suite instance against a host context under an explicit mode.
///
/// Contract, in order:
/// - A suite that does not expose its [`crate::FixtureField`] is a fatal
///   structural incompatibility: the host unit is failed and no discovery
///   happens.
/// - A plan with no selected cases signals `skip_now` without invoking any
///   hook.
/// - Each selected case runs as one Setup → case → Teardown trio inside a
///   single recovery boundary. A panic aborts only the remainder of that
///   trio; it is recorded on the fixture state and iteration continues with
///   the next case. Assertion failures never abort a trio at all.
/// - After every trio the fixture state is finalized, flushing buffered
///   diagnostics next to the case that produced them.
pub fn run_with_mode<S: Suite>(
    suite: &mut S,
    ctx: Arc<dyn TestContext>,
    options: &Options,
    mode: RunMode,
) {
    let suite_name = type_name::<S>();
    let Some(field) = suite.fixture_field() else {
        warn!(
            suite = suite_name,
            "suite does not compose a fixture field; failing without discovery"
        );
        ctx.fail();
        return;
    };
    let state = Arc::new(Fixture::new(Arc::clone(&ctx), mode.verbose));
    field.bind(Arc::clone(&state));

    let members = S::members();
    let classifications: Vec<Classification> = members
        .iter()
        .map(|member| classify(member.name))
        .collect();
    let Some(plan) = build_plan(&classifications, mode.short) else {
        debug!(suite = suite_name, "no cases selected; marking skipped");
        ctx.skip_now();
        return;
    };
    debug!(
        suite = suite_name,
        cases = plan.cases.len(),
        short = mode.short,
        sequential_cases = !options.cases.is_parallel(),
        "plan built"
    );

    let handlers: HashMap<&'static str, fn(&mut S)> = members
        .iter()
        .map(|member| (member.name, member.invoke))
        .collect();
    let setup = plan.setup.and_then(|name| handlers.get(name).copied());
    let teardown = plan.teardown.and_then(|name| handlers.get(name).copied());

    for case in &plan.cases {
        let Some(case_fn) = handlers.get(case.name).copied() else {
            // Plan names come from the member table; nothing can be missing.
            continue;
        };
        debug!(suite = suite_name, case = case.name, "running trio");
        let outcome = catch_unwind(AssertUnwindSafe(|| {
            if let Some(hook) = setup {
                hook(suite);
            }
            case_fn(suite);
            if let Some(hook) = teardown {
                hook(suite);
            }
        }));
        if let Err(payload) = outcome {
            warn!(
                suite = suite_name,
                case = case.name,
                "panic recovered; continuing with next case"
            );
            state.record_panic(payload.as_ref());
        }
        state.finalize();
    }
}
