//! Shared deterministic types for the classification and planning core.
//!
//! These types define stable contracts between core components. They carry no
//! callable handles and no host state, so classification and planning stay
//! pure and reproducible across runs.

/// Role assigned to a registered suite member name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Lifecycle hook run before each selected case.
    Setup,
    /// Lifecycle hook run after each selected case.
    Teardown,
    /// A test case with its selection modifiers.
    Case(CaseFlags),
    /// Helper members are not errors; they are simply not scheduled.
    Ignored,
}

/// Selection modifiers parsed from a case name.
///
/// `skip` and `focus` are mutually exclusive by construction of the naming
/// grammar: a name admits one leading `Focus` or `Skip` token, never both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CaseFlags {
    pub skip: bool,
    pub focus: bool,
    pub long: bool,
}

/// One classified member, computed once per suite type.
///
/// The name is retained only for ordering and diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub name: &'static str,
    pub role: Role,
}
