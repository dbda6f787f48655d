//! Phased builder for constructing transitions.
//!
//! Each phase is its own type and only exposes the next legal call, so the
//! order `from -> to -> on -> (during) -> build` is checked by the compiler:
//!
//! ```text
//! TransitionBuilder --from--> AwaitingTo --to--> AwaitingEvent --on--> AwaitingEffect
//!        |                                           ^                  |        |
//!        +------------------refresh------------------+                during   build
//!                                                                       |
//!                                                                  ReadyToBuild --build-->
//! ```
//!
//! A builder is either *detached* (created with [`Transition::builder`]) or
//! *attached* to a [`MachineBuilder`](crate::builder::MachineBuilder) draft
//! slot. Attached builders record every value into their slot as it is
//! supplied, so a chain abandoned half-way leaves an incomplete draft that
//! the machine builder reports when it builds.

use crate::core::{Effect, Event, State};
use crate::machine::Transition;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

/// A possibly incomplete transition recorded by an attached builder.
pub struct TransitionDraft<S: State, E: Event, C> {
    pub(crate) from: Option<S>,
    pub(crate) to: Option<S>,
    pub(crate) on: Option<E>,
    pub(crate) effect: Option<Effect<C>>,
}

impl<S: State, E: Event, C> TransitionDraft<S, E, C> {
    pub(crate) fn new() -> Self {
        Self {
            from: None,
            to: None,
            on: None,
            effect: None,
        }
    }

    /// Names of the required fields that were never supplied.
    pub fn missing(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.from.is_none() {
            missing.push("from");
        }
        if self.to.is_none() {
            missing.push("to");
        }
        if self.on.is_none() {
            missing.push("on");
        }
        missing
    }

    /// Resolve into an immutable transition, or `None` if a required field
    /// is missing.
    pub fn resolve(&self) -> Option<Transition<S, E, C>> {
        match (&self.from, &self.to, &self.on) {
            (Some(from), Some(to), Some(on)) => Some(Transition::new(
                from.clone(),
                to.clone(),
                on.clone(),
                self.effect.as_ref().map(Arc::clone),
            )),
            _ => None,
        }
    }
}

impl<S: State, E: Event, C> From<Transition<S, E, C>> for TransitionDraft<S, E, C> {
    fn from(transition: Transition<S, E, C>) -> Self {
        let (from, to, on, effect) = transition.into_parts();
        Self {
            from: Some(from),
            to: Some(to),
            on: Some(on),
            effect,
        }
    }
}

impl<S: State, E: Event, C> fmt::Display for TransitionDraft<S, E, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let from = self.from.as_ref().map_or("<unset>", S::name);
        let to = self.to.as_ref().map_or("<unset>", S::name);
        write!(f, "[from={from}, to={to}, on=")?;
        match &self.on {
            Some(on) => write!(f, "{on:?}")?,
            None => write!(f, "<unset>")?,
        }
        write!(f, ", effect={}]", self.effect.is_some())
    }
}

/// Where a phased builder records the values it is given.
pub trait DraftSlot<S: State, E: Event, C> {
    fn record(&mut self, apply: impl FnOnce(&mut TransitionDraft<S, E, C>));
}

/// Slot of a detached builder; values live only in the phase types.
#[derive(Debug, Clone, Copy, Default)]
pub struct Detached;

impl<S: State, E: Event, C> DraftSlot<S, E, C> for Detached {
    fn record(&mut self, _apply: impl FnOnce(&mut TransitionDraft<S, E, C>)) {}
}

impl<S: State, E: Event, C> DraftSlot<S, E, C> for &mut TransitionDraft<S, E, C> {
    fn record(&mut self, apply: impl FnOnce(&mut TransitionDraft<S, E, C>)) {
        apply(&mut **self);
    }
}

type Marker<S, E, C> = PhantomData<fn() -> (S, E, C)>;

/// First phase: choose the origin state.
pub struct TransitionBuilder<S: State, E: Event, C, D = Detached> {
    slot: D,
    _marker: Marker<S, E, C>,
}

/// Second phase: choose the destination state.
pub struct AwaitingTo<S: State, E: Event, C, D = Detached> {
    slot: D,
    from: S,
    _marker: Marker<S, E, C>,
}

/// Third phase: choose the triggering event.
pub struct AwaitingEvent<S: State, E: Event, C, D = Detached> {
    slot: D,
    from: S,
    to: S,
    _marker: Marker<S, E, C>,
}

/// Fourth phase: optionally attach a side-effect, or build.
pub struct AwaitingEffect<S: State, E: Event, C, D = Detached> {
    slot: D,
    from: S,
    to: S,
    on: E,
    _marker: Marker<S, E, C>,
}

/// Terminal phase: everything is supplied.
pub struct ReadyToBuild<S: State, E: Event, C> {
    transition: Transition<S, E, C>,
}

impl<S: State, E: Event, C> TransitionBuilder<S, E, C, Detached> {
    /// Create a detached builder.
    pub fn new() -> Self {
        Self {
            slot: Detached,
            _marker: PhantomData,
        }
    }
}

impl<S: State, E: Event, C> Default for TransitionBuilder<S, E, C, Detached> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, S: State, E: Event, C> TransitionBuilder<S, E, C, &'a mut TransitionDraft<S, E, C>> {
    pub(crate) fn attached(draft: &'a mut TransitionDraft<S, E, C>) -> Self {
        Self {
            slot: draft,
            _marker: PhantomData,
        }
    }
}

impl<S: State, E: Event, C, D: DraftSlot<S, E, C>> TransitionBuilder<S, E, C, D> {
    /// Set the origin state (required).
    pub fn from(mut self, state: S) -> AwaitingTo<S, E, C, D> {
        let recorded = state.clone();
        self.slot.record(move |draft| draft.from = Some(recorded));
        AwaitingTo {
            slot: self.slot,
            from: state,
            _marker: PhantomData,
        }
    }

    /// Set origin and destination to the same state.
    pub fn refresh(mut self, state: S) -> AwaitingEvent<S, E, C, D> {
        let recorded = state.clone();
        self.slot.record(move |draft| {
            draft.from = Some(recorded.clone());
            draft.to = Some(recorded);
        });
        AwaitingEvent {
            slot: self.slot,
            from: state.clone(),
            to: state,
            _marker: PhantomData,
        }
    }
}

impl<S: State, E: Event, C, D: DraftSlot<S, E, C>> AwaitingTo<S, E, C, D> {
    /// Set the destination state (required).
    pub fn to(mut self, state: S) -> AwaitingEvent<S, E, C, D> {
        let recorded = state.clone();
        self.slot.record(move |draft| draft.to = Some(recorded));
        AwaitingEvent {
            slot: self.slot,
            from: self.from,
            to: state,
            _marker: PhantomData,
        }
    }
}

impl<S: State, E: Event, C, D: DraftSlot<S, E, C>> AwaitingEvent<S, E, C, D> {
    /// Set the triggering event (required).
    pub fn on(mut self, event: E) -> AwaitingEffect<S, E, C, D> {
        let recorded = event.clone();
        self.slot.record(move |draft| draft.on = Some(recorded));
        AwaitingEffect {
            slot: self.slot,
            from: self.from,
            to: self.to,
            on: event,
            _marker: PhantomData,
        }
    }
}

impl<S: State, E: Event, C, D: DraftSlot<S, E, C>> AwaitingEffect<S, E, C, D> {
    /// Attach the side-effect run while the transition fires (optional).
    pub fn during<F>(mut self, effect: F) -> ReadyToBuild<S, E, C>
    where
        F: Fn(&mut C) + Send + Sync + 'static,
    {
        let effect: Effect<C> = Arc::new(effect);
        let recorded = Arc::clone(&effect);
        self.slot.record(move |draft| draft.effect = Some(recorded));
        ReadyToBuild {
            transition: Transition::new(self.from, self.to, self.on, Some(effect)),
        }
    }

    /// Build a transition without a side-effect.
    pub fn build(self) -> Transition<S, E, C> {
        Transition::new(self.from, self.to, self.on, None)
    }
}

impl<S: State, E: Event, C> ReadyToBuild<S, E, C> {
    pub fn build(self) -> Transition<S, E, C> {
        self.transition
    }
}
