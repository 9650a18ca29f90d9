//! Deterministic classification of registered member names.

use std::sync::LazyLock;

use regex::Regex;

use crate::core::types::{CaseFlags, Classification, Role};

/// Case-name grammar: an optional `Focus` or `Skip` token, an optional `Long`
/// token, then the literal `Test` followed by any (possibly empty) suffix.
static CASE_GRAMMAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(Focus|Skip)?(Long)?Test").expect("case grammar regex"));

/// Classify a member name into its role.
///
/// - `Setup` / `Teardown` match exactly (case-sensitive).
/// - Names matching the case grammar become [`Role::Case`] with the modifier
///   flags derived from the consumed prefixes.
/// - Everything else is [`Role::Ignored`].
pub fn classify(name: &'static str) -> Classification {
    let role = match name {
        "Setup" => Role::Setup,
        "Teardown" => Role::Teardown,
        _ => match CASE_GRAMMAR.captures(name) {
            Some(captures) => {
                let selector = captures.get(1).map(|m| m.as_str());
                Role::Case(CaseFlags {
                    focus: selector == Some("Focus"),
                    skip: selector == Some("Skip"),
                    long: captures.get(2).is_some(),
                })
            }
            None => Role::Ignored,
        },
    };
    Classification { name, role }
}
