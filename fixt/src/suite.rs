//! Suite registry: the compile-time stand-in for reflective discovery.
//!
//! Rust has no runtime reflection over methods, so a suite declares its
//! member table explicitly: each entry pairs the convention-carrying name
//! with a callable handle. The classifier and planner only ever see the
//! names, so they stay identical to what a reflective host would feed them.

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

use crate::fixture::Fixture;

/// One registered member: a convention-carrying name plus its handle.
pub struct Member<S> {
    pub name: &'static str,
    pub invoke: fn(&mut S),
}

impl<S> Clone for Member<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for Member<S> {}

impl<S> fmt::Debug for Member<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Member").field("name", &self.name).finish()
    }
}

/// A fixture suite: a struct whose registered member names encode hooks and
/// cases, composing a [`FixtureField`] the runner binds state into.
pub trait Suite {
    /// The member table. Names drive classification, ordering, and
    /// diagnostics; handles drive execution.
    fn members() -> Vec<Member<Self>>
    where
        Self: Sized;

    /// Expose the composed [`FixtureField`].
    ///
    /// Returning `None` marks the type structurally incompatible: the runner
    /// fails the host unit and returns without attempting discovery.
    fn fixture_field(&mut self) -> Option<&mut FixtureField>;
}

/// The composed capability slot every compatible suite carries.
///
/// Empty until the runner binds a [`Fixture`] for the current instantiation;
/// case bodies reach the reporting surface through it by deref.
#[derive(Default)]
pub struct FixtureField {
    state: Option<Arc<Fixture>>,
}

impl FixtureField {
    pub(crate) fn bind(&mut self, state: Arc<Fixture>) {
        self.state = Some(state);
    }
}

impl Deref for FixtureField {
    type Target = Fixture;

    fn deref(&self) -> &Fixture {
        match self.state.as_deref() {
            Some(state) => state,
            // The analog of calling a test method on an unwired fixture:
            // a hard programming error, not a reportable test failure.
            None => panic!("fixture member invoked outside the runner (state not bound)"),
        }
    }
}

/// Build a member table from method identifiers.
///
/// Each identifier becomes a [`Member`] whose name is the identifier's text
/// and whose handle calls the method of the same name:
///
/// ```ignore
/// fn members() -> Vec<Member<Self>> {
///     members![Setup, Teardown, Test1, SkipTest2]
/// }
/// ```
#[macro_export]
macro_rules! members {
    ($($name:ident),* $(,)?) => {
        vec![$($crate::Member {
            name: stringify!($name),
            invoke: |suite| suite.$name(),
        }),*]
    };
}
