//! Errors raised while initializing or driving a machine.

use thiserror::Error;

/// Errors that can occur when initializing a machine or firing events.
///
/// States are rendered with [`State::name`](crate::core::State::name) and
/// events with their `Debug` representation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MachineError {
    #[error("The following states are not reachable from the initial state: {}", .states.join(", "))]
    UnreachableStates { states: Vec<String> },

    #[error("Unknown event: {event} not found in internal events")]
    UnknownEvent { event: String },

    #[error("No transition exists from current state: {state} for the event: {event}")]
    NoTransitionForEvent { state: String, event: String },

    #[error("Transition {transition} is invalid: {reason}")]
    InvalidTransition { transition: String, reason: String },
}
