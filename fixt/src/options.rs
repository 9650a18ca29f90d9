//! Execution configuration: concurrency options and run-wide mode flags.

/// Whether a level of the hierarchy may be scheduled in parallel by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Concurrency {
    Sequential,
    Parallel,
}

impl Concurrency {
    pub fn is_parallel(self) -> bool {
        matches!(self, Concurrency::Parallel)
    }
}

/// Immutable per-run concurrency selection.
///
/// The engine itself always executes one instance's cases in plan order; the
/// host context exposes no spawn capability, so these options are the
/// contract consumed by the host registration layer when it decides how many
/// schedulable units to create.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Scheduling across suite instances.
    pub fixtures: Concurrency,
    /// Scheduling across cases of one suite instance.
    pub cases: Concurrency,
}

impl Options {
    /// Force strictly sequential execution at both levels.
    pub fn all_sequential() -> Self {
        Self {
            fixtures: Concurrency::Sequential,
            cases: Concurrency::Sequential,
        }
    }
}

impl Default for Options {
    fn default() -> Self {
        Self::all_sequential()
    }
}

/// Run-wide mode flags, fixed for the whole test-binary invocation.
///
/// `short` excludes long-marked cases from every plan; `verbose` flushes
/// buffered diagnostics even for passing cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunMode {
    pub short: bool,
    pub verbose: bool,
}

impl RunMode {
    /// Read the mode from `FIXT_SHORT` / `FIXT_VERBOSE` (`1` or `true`).
    ///
    /// The host harness has no per-binary flag API to query, so the
    /// environment carries what the host CLI would otherwise provide.
    pub fn from_env() -> Self {
        Self {
            short: env_flag("FIXT_SHORT"),
            verbose: env_flag("FIXT_VERBOSE"),
        }
    }
}

fn env_flag(name: &str) -> bool {
    std::env::var(name).is_ok_and(|value| value == "1" || value.eq_ignore_ascii_case("true"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_fully_sequential() {
        assert_eq!(Options::default(), Options::all_sequential());
        assert!(!Options::default().fixtures.is_parallel());
        assert!(!Options::default().cases.is_parallel());
    }

    #[test]
    fn default_mode_is_full_and_quiet() {
        let mode = RunMode::default();
        assert!(!mode.short);
        assert!(!mode.verbose);
    }
}
