//! Property tests for the classification and planning core.
//!
//! Member tables are generated from flag combinations; names are synthesized
//! through the same grammar the classifier parses, so the classifier and
//! planner are exercised together.

use fixt::core::classifier::classify;
use fixt::core::planner::build_plan;
use fixt::core::types::{CaseFlags, Classification, Role};
use proptest::prelude::*;

/// `skip` and `focus` are mutually exclusive by grammar construction, so the
/// strategy picks at most one of them.
fn case_flags() -> impl Strategy<Value = CaseFlags> {
    (0u8..3, any::<bool>()).prop_map(|(selector, long)| CaseFlags {
        skip: selector == 1,
        focus: selector == 2,
        long,
    })
}

fn grammar_name(flags: CaseFlags, index: usize) -> &'static str {
    let mut name = String::new();
    if flags.focus {
        name.push_str("Focus");
    }
    if flags.skip {
        name.push_str("Skip");
    }
    if flags.long {
        name.push_str("Long");
    }
    name.push_str("Test");
    name.push_str(&index.to_string());
    // Planner inputs carry 'static names; leaking is fine test-side.
    Box::leak(name.into_boxed_str())
}

fn member_table() -> impl Strategy<Value = Vec<Classification>> {
    prop::collection::vec(case_flags(), 0..12).prop_map(|all| {
        all.into_iter()
            .enumerate()
            .map(|(index, flags)| classify(grammar_name(flags, index)))
            .collect()
    })
}

fn case_flags_of(classification: &Classification) -> CaseFlags {
    match classification.role {
        Role::Case(flags) => flags,
        role => panic!("generated member classified as {role:?}"),
    }
}

proptest! {
    #[test]
    fn classifier_round_trips_generated_flags(flags in case_flags()) {
        let classification = classify(grammar_name(flags, 0));
        prop_assert_eq!(classification.role, Role::Case(flags));
    }

    #[test]
    fn selection_matches_the_two_pass_policy(
        members in member_table(),
        short_mode in any::<bool>(),
    ) {
        let any_focus = members.iter().any(|m| case_flags_of(m).focus);
        let mut expected: Vec<&str> = members
            .iter()
            .filter(|member| {
                let flags = case_flags_of(member);
                let selected = if any_focus { flags.focus } else { !flags.skip };
                selected && !(short_mode && flags.long)
            })
            .map(|member| member.name)
            .collect();
        expected.sort();

        match build_plan(&members, short_mode) {
            None => prop_assert!(expected.is_empty()),
            Some(plan) => {
                let got: Vec<&str> = plan.cases.iter().map(|case| case.name).collect();
                prop_assert_eq!(got, expected);
            }
        }
    }

    #[test]
    fn planned_cases_are_sorted_ascending(
        members in member_table(),
        short_mode in any::<bool>(),
    ) {
        if let Some(plan) = build_plan(&members, short_mode) {
            let names: Vec<&str> = plan.cases.iter().map(|case| case.name).collect();
            let mut sorted = names.clone();
            sorted.sort();
            prop_assert_eq!(names, sorted);
        }
    }

    #[test]
    fn focus_always_excludes_unfocused_cases(
        members in member_table(),
        short_mode in any::<bool>(),
    ) {
        let any_focus = members.iter().any(|m| case_flags_of(m).focus);
        prop_assume!(any_focus);

        if let Some(plan) = build_plan(&members, short_mode) {
            for case in &plan.cases {
                prop_assert!(case.name.starts_with("Focus"));
            }
        }
    }
}
