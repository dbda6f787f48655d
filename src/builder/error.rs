//! Build errors for the machine builder.

use crate::machine::MachineError;
use thiserror::Error;

/// Errors that can occur when building a machine.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error(
        "Transition #{index} is incomplete, missing {}: {draft}. From and to states and an on event are required",
        .missing.join(", ")
    )]
    IncompleteTransition {
        index: usize,
        missing: Vec<&'static str>,
        draft: String,
    },

    /// `state` is `None` when `set_initial_state` was never called.
    #[error("{}", invalid_initial_message(.state.as_deref()))]
    InvalidInitialState { state: Option<String> },

    #[error(transparent)]
    Validation(#[from] MachineError),
}

fn invalid_initial_message(state: Option<&str>) -> String {
    match state {
        Some(state) => format!(
            "The state {state} has no outgoing transition in this builder and cannot be the initial state"
        ),
        None => {
            "Initial state not specified. Call .set_initial_state(state) before .build()".to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_initial_state_messages() {
        let unset = BuildError::InvalidInitialState { state: None };
        let dead_end = BuildError::InvalidInitialState {
            state: Some("END".to_string()),
        };

        assert!(unset.to_string().starts_with("Initial state not specified"));
        assert!(dead_end
            .to_string()
            .starts_with("The state END has no outgoing transition"));
    }

    #[test]
    fn incomplete_transition_names_missing_fields() {
        let err = BuildError::IncompleteTransition {
            index: 2,
            missing: vec!["to", "on"],
            draft: "[from=A, to=<unset>, on=<unset>, effect=false]".to_string(),
        };

        let message = err.to_string();
        assert!(message.starts_with("Transition #2 is incomplete, missing to, on"));
        assert!(message.contains("[from=A"));
    }

    #[test]
    fn validation_errors_are_transparent() {
        let err: BuildError = MachineError::UnreachableStates {
            states: vec!["LOST".to_string()],
        }
        .into();

        assert_eq!(
            err.to_string(),
            "The following states are not reachable from the initial state: LOST"
        );
    }
}
