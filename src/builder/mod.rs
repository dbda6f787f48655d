//! Builder API for machine construction.
//!
//! This module provides the phased transition builder, the machine builder
//! that validates and initializes machines, and macros for declaring
//! states and events.

pub mod error;
pub mod machine;
pub mod macros;
pub mod transition;

pub use error::BuildError;
pub use machine::MachineBuilder;
pub use transition::{
    AwaitingEffect, AwaitingEvent, AwaitingTo, Detached, DraftSlot, ReadyToBuild,
    TransitionBuilder, TransitionDraft,
};

use crate::core::{Event, State};
use crate::machine::Transition;

/// Create a transition without a side-effect.
///
/// # Example
///
/// ```
/// use waypoint::builder::simple_transition;
/// use waypoint::machine::Transition;
/// use waypoint::state_enum;
///
/// state_enum! {
///     enum MyState {
///         Start,
///         End,
///     }
/// }
///
/// let transition: Transition<MyState, &str, ()> =
///     simple_transition(MyState::Start, MyState::End, "finish");
/// assert!(!transition.has_effect());
/// ```
pub fn simple_transition<S, E, C>(from: S, to: S, on: E) -> Transition<S, E, C>
where
    S: State,
    E: Event,
{
    TransitionBuilder::new().from(from).to(to).on(on).build()
}

/// Create a same-state transition without a side-effect.
pub fn refresh_transition<S, E, C>(state: S, on: E) -> Transition<S, E, C>
where
    S: State,
    E: Event,
{
    TransitionBuilder::new().refresh(state).on(on).build()
}
