//! Deterministic execution planning for one suite type.

use crate::core::types::{CaseFlags, Classification, Role};

/// Ordered, filtered execution plan for one suite under one run mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    pub setup: Option<&'static str>,
    pub teardown: Option<&'static str>,
    /// Cases in strict ascending name order (byte-wise ordinal comparison).
    pub cases: Vec<PlannedCase>,
}

/// One selected case within a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlannedCase {
    pub name: &'static str,
    pub long: bool,
}

/// Build the execution plan for a classified member table.
///
/// Returns `None` when no case survives filtering; a suite without selected
/// cases never has a hook invoked.
pub fn build_plan(classifications: &[Classification], short_mode: bool) -> Option<Plan> {
    let mut setup = None;
    let mut teardown = None;
    let mut cases: Vec<(&'static str, CaseFlags)> = Vec::new();
    for classification in classifications {
        match classification.role {
            Role::Setup => setup = setup.or(Some(classification.name)),
            Role::Teardown => teardown = teardown.or(Some(classification.name)),
            Role::Case(flags) => cases.push((classification.name, flags)),
            Role::Ignored => {}
        }
    }

    // Selection first: any focused case narrows the pool to the focused set,
    // otherwise skip-marked cases drop out. Duration second, strictly after
    // selection: short mode prunes long cases even out of a focused pool.
    let any_focus = cases.iter().any(|(_, flags)| flags.focus);
    let mut selected: Vec<PlannedCase> = cases
        .into_iter()
        .filter(|(_, flags)| if any_focus { flags.focus } else { !flags.skip })
        .filter(|(_, flags)| !(short_mode && flags.long))
        .map(|(name, flags)| PlannedCase {
            name,
            long: flags.long,
        })
        .collect();

    // Ordinal sort keeps execution order independent of registration order.
    // An explicit registry (unlike reflection) can repeat a name; the first
    // registration wins.
    selected.sort_by(|a, b| a.name.cmp(b.name));
    selected.dedup_by(|a, b| a.name == b.name);

    if selected.is_empty() {
        return None;
    }
    Some(Plan {
        setup,
        teardown,
        cases: selected,
    })
}
