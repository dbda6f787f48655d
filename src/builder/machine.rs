//! Builder for constructing state machines.

use crate::builder::error::BuildError;
use crate::builder::transition::{TransitionBuilder, TransitionDraft};
use crate::core::{EntryHooks, Event, State};
use crate::diagnostics::{DiagnosticSink, TracingSink};
use crate::machine::{Machine, Transition, TransitionTable};
use std::collections::HashSet;
use std::sync::Arc;

/// Builder for constructing validated, initialized machines.
///
/// Transitions are described with [`transition`](Self::transition), which
/// hands out a phased builder attached to a draft slot in this builder.
/// State and event universes are inferred from the registered transitions.
///
/// # Example
///
/// ```rust
/// use waypoint::builder::MachineBuilder;
/// use waypoint::state_enum;
///
/// state_enum! {
///     enum Order {
///         Placed,
///         Paid,
///         Shipped,
///     }
/// }
///
/// let mut builder = MachineBuilder::new(Vec::<String>::new());
/// builder
///     .transition()
///     .from(Order::Placed)
///     .to(Order::Paid)
///     .on("pay")
///     .during(|audit: &mut Vec<String>| audit.push("charged card".into()));
/// builder.transition().from(Order::Paid).to(Order::Shipped).on("ship");
/// builder.on_enter(Order::Shipped, |audit| audit.push("notified customer".into()));
/// builder.set_initial_state(Order::Placed)?;
///
/// let mut machine = builder.build()?;
/// machine.fire("pay")?;
/// machine.fire("ship")?;
///
/// assert!(machine.is_current_state(&Order::Shipped));
/// assert_eq!(machine.context(), &vec!["charged card", "notified customer"]);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct MachineBuilder<S: State, E: Event, C> {
    context: C,
    drafts: Vec<TransitionDraft<S, E, C>>,
    initial: Option<S>,
    hooks: EntryHooks<S, C>,
    diagnostics: Arc<dyn DiagnosticSink<S, E>>,
}

impl<S: State, E: Event, C> MachineBuilder<S, E, C> {
    /// Create a builder whose machine will own `context`.
    pub fn new(context: C) -> Self {
        Self {
            context,
            drafts: Vec::new(),
            initial: None,
            hooks: EntryHooks::new(),
            diagnostics: Arc::new(TracingSink),
        }
    }

    /// Replace the default `tracing` sink.
    pub fn with_diagnostics<D>(mut self, sink: D) -> Self
    where
        D: DiagnosticSink<S, E> + 'static,
    {
        self.diagnostics = Arc::new(sink);
        self
    }

    /// Start describing a new transition.
    ///
    /// The draft is remembered even if the returned chain is abandoned, in
    /// which case [`build`](Self::build) fails with
    /// [`BuildError::IncompleteTransition`].
    pub fn transition(&mut self) -> TransitionBuilder<S, E, C, &mut TransitionDraft<S, E, C>> {
        let index = self.drafts.len();
        self.drafts.push(TransitionDraft::new());
        TransitionBuilder::attached(&mut self.drafts[index])
    }

    /// Add a pre-built transition.
    pub fn add_transition(&mut self, transition: Transition<S, E, C>) -> &mut Self {
        self.drafts.push(transition.into());
        self
    }

    /// Add multiple pre-built transitions at once.
    pub fn add_transitions<I>(&mut self, transitions: I) -> &mut Self
    where
        I: IntoIterator<Item = Transition<S, E, C>>,
    {
        self.drafts
            .extend(transitions.into_iter().map(TransitionDraft::from));
        self
    }

    /// Register the hook run whenever the machine enters `state`.
    pub fn on_enter<F>(&mut self, state: S, hook: F) -> &mut Self
    where
        F: Fn(&mut C) + Send + Sync + 'static,
    {
        self.hooks.register(state, hook);
        self
    }

    /// Set the initial state (required).
    ///
    /// The state must be the origin of at least one transition registered
    /// so far; a machine starting in a dead end is rejected.
    pub fn set_initial_state(&mut self, state: S) -> Result<&mut Self, BuildError> {
        let has_outgoing = self
            .drafts
            .iter()
            .any(|draft| draft.from.as_ref() == Some(&state));
        if !has_outgoing {
            return Err(BuildError::InvalidInitialState {
                state: Some(state.name().to_string()),
            });
        }
        self.initial = Some(state);
        Ok(self)
    }

    /// Build and initialize the machine.
    ///
    /// Fails on the first incomplete transition, with
    /// [`BuildError::InvalidInitialState`] when no initial state was set, or
    /// when some state is unreachable from the initial state.
    pub fn build(self) -> Result<Machine<S, E, C>, BuildError> {
        let mut table = TransitionTable::new();
        let mut states = HashSet::new();
        let mut events = HashSet::new();

        for (index, draft) in self.drafts.iter().enumerate() {
            let transition = draft
                .resolve()
                .ok_or_else(|| BuildError::IncompleteTransition {
                    index,
                    missing: draft.missing(),
                    draft: draft.to_string(),
                })?;
            states.insert(transition.from().clone());
            states.insert(transition.to().clone());
            events.insert(transition.event().clone());
            table.insert(transition);
        }

        let initial = self
            .initial
            .ok_or(BuildError::InvalidInitialState { state: None })?;

        let mut machine = Machine::new(
            table,
            states,
            events,
            initial,
            self.context,
            self.hooks,
            self.diagnostics,
        );
        machine.initialize()?;
        Ok(machine)
    }
}
