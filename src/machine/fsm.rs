//! Table-driven state machine with side-effects and entry hooks.

use crate::core::{EntryHooks, Event, State};
use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::machine::error::MachineError;
use crate::machine::graph::{self, GraphDescription};
use crate::machine::reachability::unreachable_states;
use crate::machine::table::TransitionTable;
use crate::machine::transition::Transition;
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

/// A finite state machine over caller-supplied states, events and context.
///
/// Machines are created by [`MachineBuilder`](crate::builder::MachineBuilder),
/// which fixes the transition table and the initial state. The machine owns
/// its context and hands it to every side-effect and entry hook.
pub struct Machine<S: State, E: Event, C> {
    table: TransitionTable<S, E, C>,
    states: HashSet<S>,
    events: HashSet<E>,
    current: S,
    initial: S,
    context: C,
    hooks: EntryHooks<S, C>,
    diagnostics: Arc<dyn DiagnosticSink<S, E>>,
}

impl<S: State, E: Event, C> Machine<S, E, C> {
    pub(crate) fn new(
        table: TransitionTable<S, E, C>,
        states: HashSet<S>,
        events: HashSet<E>,
        initial: S,
        context: C,
        hooks: EntryHooks<S, C>,
        diagnostics: Arc<dyn DiagnosticSink<S, E>>,
    ) -> Self {
        Self {
            table,
            states,
            events,
            current: initial.clone(),
            initial,
            context,
            hooks,
            diagnostics,
        }
    }

    /// Reset to the initial state and validate that every known state is
    /// reachable from it.
    ///
    /// Safe to call any number of times; the current state is reset even
    /// when validation fails. The initial state's entry hook is not run.
    pub fn initialize(&mut self) -> Result<(), MachineError> {
        self.current = self.initial.clone();

        let unreachable = unreachable_states(
            &self.table,
            &self.initial,
            &self.states,
            self.diagnostics.as_ref(),
        );
        if !unreachable.is_empty() {
            return Err(MachineError::UnreachableStates {
                states: unreachable.iter().map(|s| s.name().to_string()).collect(),
            });
        }

        self.diagnostics.record(&Diagnostic::Initialized {
            initial: &self.initial,
            states: self.states.len(),
            events: self.events.len(),
        });
        Ok(())
    }

    /// Check whether the machine currently sits in `state` (pure)
    pub fn is_current_state(&self, state: &S) -> bool {
        self.current == *state
    }

    /// Get current state (pure)
    pub fn current_state(&self) -> &S {
        &self.current
    }

    /// Get initial state (pure)
    pub fn initial_state(&self) -> &S {
        &self.initial
    }

    /// Fire `event` from the current state.
    ///
    /// Runs the transition's side-effect, moves to the destination state,
    /// then runs the destination's entry hook, in that order. Every error is
    /// detected before anything runs, so a failed call leaves the machine
    /// untouched. Panics raised by hooks are not caught.
    pub fn fire(&mut self, event: E) -> Result<(), MachineError> {
        self.diagnostics.record(&Diagnostic::EventReceived {
            current: &self.current,
            event: &event,
        });

        let transition = match resolve(
            &self.table,
            &self.states,
            &self.events,
            &self.current,
            &event,
        ) {
            Ok(transition) => transition,
            Err(error) => {
                self.diagnostics.record(&Diagnostic::EventRejected {
                    current: &self.current,
                    event: &event,
                    error: &error,
                });
                return Err(error);
            }
        };

        transition.transit(&mut self.context);
        self.current = transition.to().clone();
        let entry_hook = self.hooks.contains(&self.current);
        self.hooks.enter(&self.current, &mut self.context);

        self.diagnostics.record(&Diagnostic::TransitionCompleted {
            from: transition.from(),
            to: transition.to(),
            event: &event,
            entry_hook,
        });
        Ok(())
    }

    /// Render the transition graph in Graphviz dot notation.
    ///
    /// Produces `digraph g {`, one `FROM -> TO [label="EVENT"];` line per
    /// transition in registration order, then `}`.
    pub fn export_graph(&self) -> String
    where
        E: fmt::Display,
    {
        graph::to_dot(&self.table)
    }

    /// Structured, serializable view of the graph and current position.
    pub fn describe(&self) -> GraphDescription
    where
        E: fmt::Display,
    {
        graph::describe(
            &self.table,
            &self.states,
            &self.events,
            &self.initial,
            &self.current,
        )
    }

    pub fn context(&self) -> &C {
        &self.context
    }

    pub fn context_mut(&mut self) -> &mut C {
        &mut self.context
    }

    pub fn into_context(self) -> C {
        self.context
    }

    /// Known states, in no particular order.
    pub fn states(&self) -> impl Iterator<Item = &S> {
        self.states.iter()
    }

    /// Known events, in no particular order.
    pub fn events(&self) -> impl Iterator<Item = &E> {
        self.events.iter()
    }

    /// Transitions in the table, in registration order.
    pub fn transitions(&self) -> impl Iterator<Item = &Transition<S, E, C>> {
        self.table.iter()
    }

    /// Check whether `event` could fire from the current state (pure)
    pub fn can_fire(&self, event: &E) -> bool {
        self.table.get(&self.current, event).is_some()
    }
}

/// Look up the transition for `event` from `current`, checking that the
/// stored transition is consistent with the machine's universes.
fn resolve<'t, S: State, E: Event, C>(
    table: &'t TransitionTable<S, E, C>,
    states: &HashSet<S>,
    events: &HashSet<E>,
    current: &S,
    event: &E,
) -> Result<&'t Transition<S, E, C>, MachineError> {
    if !events.contains(event) {
        return Err(MachineError::UnknownEvent {
            event: format!("{event:?}"),
        });
    }

    let transition = table
        .get(current, event)
        .ok_or_else(|| MachineError::NoTransitionForEvent {
            state: current.name().to_string(),
            event: format!("{event:?}"),
        })?;

    if transition.from() != current || !states.contains(transition.from()) {
        return Err(MachineError::InvalidTransition {
            transition: format!("{transition:?}"),
            reason: format!("not valid from state {}", current.name()),
        });
    }
    if !states.contains(transition.to()) {
        return Err(MachineError::InvalidTransition {
            transition: format!("{transition:?}"),
            reason: format!("state {} is not found", transition.to().name()),
        });
    }

    Ok(transition)
}

impl<S: State, E: Event, C> fmt::Debug for Machine<S, E, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Machine")
            .field("current", &self.current.name())
            .field("initial", &self.initial.name())
            .field("states", &self.states.len())
            .field("events", &self.events.len())
            .field("transitions", &self.table.len())
            .field("entry_hooks", &self.hooks)
            .finish_non_exhaustive()
    }
}

/// Object-safe driving interface, for hosts that hold machines without
/// knowing their context type.
///
/// # Example
///
/// ```rust
/// use waypoint::builder::MachineBuilder;
/// use waypoint::machine::Driver;
/// use waypoint::state_enum;
///
/// state_enum! {
///     enum Switch {
///         Off,
///         On,
///     }
/// }
///
/// let mut builder = MachineBuilder::new(0u32);
/// builder.transition().from(Switch::Off).to(Switch::On).on("flip");
/// builder.transition().from(Switch::On).to(Switch::Off).on("flip");
/// builder.set_initial_state(Switch::Off).unwrap();
///
/// let mut driver: Box<dyn Driver<Switch, &str>> = Box::new(builder.build().unwrap());
/// driver.fire("flip").unwrap();
/// assert!(driver.is_current_state(&Switch::On));
/// ```
pub trait Driver<S, E> {
    fn initialize(&mut self) -> Result<(), MachineError>;
    fn fire(&mut self, event: E) -> Result<(), MachineError>;
    fn is_current_state(&self, state: &S) -> bool;
}

impl<S: State, E: Event, C> Driver<S, E> for Machine<S, E, C> {
    fn initialize(&mut self) -> Result<(), MachineError> {
        Machine::initialize(self)
    }

    fn fire(&mut self, event: E) -> Result<(), MachineError> {
        Machine::fire(self, event)
    }

    fn is_current_state(&self, state: &S) -> bool {
        Machine::is_current_state(self, state)
    }
}
