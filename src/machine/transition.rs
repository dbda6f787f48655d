//! Immutable transition records.

use crate::builder::{Detached, TransitionBuilder};
use crate::core::{Effect, Event, State};
use std::fmt;
use std::sync::Arc;

/// An edge of the state graph: leave `from`, enter `to` when `on` fires,
/// running the optional side-effect in between.
///
/// Transitions are built through the phased [`TransitionBuilder`] and
/// never change afterwards.
///
/// # Example
///
/// ```rust
/// use waypoint::machine::Transition;
/// use waypoint::state_enum;
///
/// state_enum! {
///     enum Door {
///         Open,
///         Closed,
///     }
/// }
///
/// let close: Transition<Door, &str, ()> = Transition::builder()
///     .from(Door::Open)
///     .to(Door::Closed)
///     .on("close")
///     .build();
///
/// assert_eq!(close.from(), &Door::Open);
/// assert_eq!(close.to(), &Door::Closed);
/// assert!(!close.has_effect());
/// ```
pub struct Transition<S: State, E: Event, C> {
    from: S,
    to: S,
    on: E,
    effect: Option<Effect<C>>,
}

impl<S: State, E: Event, C> Transition<S, E, C> {
    /// Start a detached phased builder.
    pub fn builder() -> TransitionBuilder<S, E, C, Detached> {
        TransitionBuilder::new()
    }

    pub(crate) fn new(from: S, to: S, on: E, effect: Option<Effect<C>>) -> Self {
        Self {
            from,
            to,
            on,
            effect,
        }
    }

    pub(crate) fn into_parts(self) -> (S, S, E, Option<Effect<C>>) {
        (self.from, self.to, self.on, self.effect)
    }

    pub fn from(&self) -> &S {
        &self.from
    }

    pub fn to(&self) -> &S {
        &self.to
    }

    pub fn event(&self) -> &E {
        &self.on
    }

    pub fn has_effect(&self) -> bool {
        self.effect.is_some()
    }

    /// Check whether this transition leaves and re-enters the same state.
    pub fn is_refresh(&self) -> bool {
        self.from == self.to
    }

    /// Run the side-effect, if any, against the context.
    pub fn transit(&self, context: &mut C) {
        if let Some(effect) = &self.effect {
            effect(context);
        }
    }
}

impl<S: State, E: Event, C> Clone for Transition<S, E, C> {
    fn clone(&self) -> Self {
        Self {
            from: self.from.clone(),
            to: self.to.clone(),
            on: self.on.clone(),
            effect: self.effect.as_ref().map(Arc::clone),
        }
    }
}

impl<S: State, E: Event, C> PartialEq for Transition<S, E, C> {
    fn eq(&self, other: &Self) -> bool {
        let same_effect = match (&self.effect, &other.effect) {
            (None, None) => true,
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            _ => false,
        };
        self.from == other.from && self.to == other.to && self.on == other.on && same_effect
    }
}

impl<S: State, E: Event, C> fmt::Debug for Transition<S, E, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transition")
            .field("from", &self.from.name())
            .field("to", &self.to.name())
            .field("on", &self.on)
            .field("effect", &self.effect.is_some())
            .finish()
    }
}
