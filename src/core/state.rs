//! State and Event contracts for table-driven machines.
//!
//! States and events are plain values used as keys in the transition
//! table, so both must be hashable and comparable. States additionally
//! carry a display name used for graph export, error messages and
//! diagnostics.

use std::fmt::Debug;
use std::hash::Hash;

/// Trait for state machine states.
///
/// # Required Traits
///
/// - `Clone`: states are copied into the transition table
/// - `Eq` + `Hash`: states are table keys and set members
/// - `Debug`: states must be debuggable for diagnostics
///
/// # Example
///
/// ```rust
/// use waypoint::core::State;
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug)]
/// enum DoorState {
///     Open,
///     Closed,
///     Locked,
/// }
///
/// impl State for DoorState {
///     fn name(&self) -> &str {
///         match self {
///             Self::Open => "Open",
///             Self::Closed => "Closed",
///             Self::Locked => "Locked",
///         }
///     }
/// }
///
/// assert_eq!(DoorState::Locked.name(), "Locked");
/// ```
pub trait State: Clone + Eq + Hash + Debug + Send + Sync {
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;
}

/// Trait for events that trigger transitions.
///
/// Events carry no behavior of their own. Any hashable, comparable value
/// qualifies, so this trait is implemented for every such type.
pub trait Event: Clone + Eq + Hash + Debug + Send + Sync {}

impl<T> Event for T where T: Clone + Eq + Hash + Debug + Send + Sync {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[derive(Clone, PartialEq, Eq, Hash, Debug)]
    enum TestState {
        Idle,
        Running,
        Done,
    }

    impl State for TestState {
        fn name(&self) -> &str {
            match self {
                Self::Idle => "Idle",
                Self::Running => "Running",
                Self::Done => "Done",
            }
        }
    }

    fn assert_event<E: Event>(_event: &E) {}

    #[test]
    fn state_name_returns_correct_value() {
        assert_eq!(TestState::Idle.name(), "Idle");
        assert_eq!(TestState::Running.name(), "Running");
        assert_eq!(TestState::Done.name(), "Done");
    }

    #[test]
    fn states_work_as_set_members() {
        let states: HashSet<TestState> = [TestState::Idle, TestState::Done, TestState::Idle]
            .into_iter()
            .collect();

        assert_eq!(states.len(), 2);
        assert!(states.contains(&TestState::Idle));
        assert!(!states.contains(&TestState::Running));
    }

    #[test]
    fn plain_values_are_events() {
        assert_event(&"start");
        assert_event(&String::from("stop"));
        assert_event(&42u32);
        assert_event(&TestState::Running);
    }
}
