//! Transition table keyed by origin state, then event.

use crate::core::{Event, State};
use crate::machine::transition::Transition;
use std::collections::HashMap;

/// Mapping `from ↦ (event ↦ transition)` with at most one transition per
/// `(from, event)` pair.
///
/// Keys also remember the order they were first registered in, so that
/// iteration (and therefore graph export) is deterministic.
pub(crate) struct TransitionTable<S: State, E: Event, C> {
    rows: HashMap<S, HashMap<E, Transition<S, E, C>>>,
    order: Vec<(S, E)>,
}

impl<S: State, E: Event, C> TransitionTable<S, E, C> {
    pub(crate) fn new() -> Self {
        Self {
            rows: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Insert a transition, replacing any earlier one for the same
    /// `(from, event)` pair. Returns the replaced transition.
    pub(crate) fn insert(
        &mut self,
        transition: Transition<S, E, C>,
    ) -> Option<Transition<S, E, C>> {
        let (from, event) = (transition.from().clone(), transition.event().clone());
        let replaced = self
            .rows
            .entry(from.clone())
            .or_default()
            .insert(event.clone(), transition);
        if replaced.is_none() {
            self.order.push((from, event));
        }
        replaced
    }

    pub(crate) fn get(&self, from: &S, event: &E) -> Option<&Transition<S, E, C>> {
        self.rows.get(from).and_then(|row| row.get(event))
    }

    /// Transitions leaving `from`, in no particular order.
    pub(crate) fn outgoing<'a>(
        &'a self,
        from: &S,
    ) -> impl Iterator<Item = &'a Transition<S, E, C>> {
        self.rows.get(from).into_iter().flat_map(|row| row.values())
    }

    /// Every transition in first-registration order of its key.
    pub(crate) fn iter(&self) -> impl Iterator<Item = &Transition<S, E, C>> {
        self.order
            .iter()
            .filter_map(|(from, event)| self.get(from, event))
    }

    pub(crate) fn len(&self) -> usize {
        self.order.len()
    }
}
