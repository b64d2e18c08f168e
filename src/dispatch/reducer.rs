//! Reducer trait for document-state dispatch.

use super::intent::Intent;
use super::state::State;

/// Reducer transforms state based on intents.
///
/// The reducer is the only place where state transitions happen.
/// It must be a pure function: (State, Intent) -> Result<State, Error>.
///
/// `Error` is reserved for broken programming contracts (for example a run
/// response that lacks an entry the local state requires); ordinary
/// conditions like an unknown record id are no-ops, not errors. State
/// machines with no contract to break can use [`std::convert::Infallible`].
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: State;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// Contract violations surfaced by [`Self::reduce`]. Callers should
    /// treat these as fatal, not recoverable.
    type Error: std::error::Error;

    /// Process an intent and return the new state.
    ///
    /// This should be a pure function with no side effects.
    fn reduce(state: Self::State, intent: Self::Intent) -> Result<Self::State, Self::Error>;
}
