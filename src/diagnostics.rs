//! Diagnostic sinks for machine activity.
//!
//! A machine never logs through global state. It reports what it does to
//! the [`DiagnosticSink`] handed to its builder; the default sink forwards
//! everything to `tracing`, so output is controlled by whatever subscriber
//! the host installs.

use crate::core::{Event, State};
use crate::machine::MachineError;
use tracing::{debug, info, trace, warn};

/// One piece of machine activity, borrowed from the machine that produced it.
#[derive(Debug)]
pub enum Diagnostic<'a, S, E> {
    /// The machine was reset to its initial state and validated.
    Initialized {
        initial: &'a S,
        states: usize,
        events: usize,
    },

    /// The reachability walk followed an edge.
    EdgeWalked {
        from: &'a S,
        to: &'a S,
        event: &'a E,
    },

    /// `fire` was called.
    EventReceived {
        current: &'a S,
        event: &'a E,
    },

    /// A transition ran to completion, entry hook included.
    /// `entry_hook` is set when the target state had an entry hook to run.
    TransitionCompleted {
        from: &'a S,
        to: &'a S,
        event: &'a E,
        entry_hook: bool,
    },

    /// `fire` failed before touching the current state.
    EventRejected {
        current: &'a S,
        event: &'a E,
        error: &'a MachineError,
    },
}

/// Receiver of machine diagnostics.
///
/// Implemented for [`TracingSink`], [`SilentSink`] and any
/// `Fn(&Diagnostic<'_, S, E>)` closure.
///
/// # Example
///
/// ```rust
/// use std::sync::{Arc, Mutex};
/// use waypoint::diagnostics::{Diagnostic, DiagnosticSink};
/// use waypoint::state_enum;
///
/// state_enum! {
///     enum Phase {
///         Up,
///     }
/// }
///
/// let seen = Arc::new(Mutex::new(0));
/// let counter = Arc::clone(&seen);
/// let sink = move |_: &Diagnostic<'_, Phase, &'static str>| *counter.lock().unwrap() += 1;
///
/// sink.record(&Diagnostic::EventReceived {
///     current: &Phase::Up,
///     event: &"ping",
/// });
/// assert_eq!(*seen.lock().unwrap(), 1);
/// ```
pub trait DiagnosticSink<S: State, E: Event>: Send + Sync {
    fn record(&self, diagnostic: &Diagnostic<'_, S, E>);
}

impl<S, E, F> DiagnosticSink<S, E> for F
where
    S: State,
    E: Event,
    F: Fn(&Diagnostic<'_, S, E>) + Send + Sync,
{
    fn record(&self, diagnostic: &Diagnostic<'_, S, E>) {
        self(diagnostic)
    }
}

/// Forwards diagnostics to `tracing` with structured fields.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl<S: State, E: Event> DiagnosticSink<S, E> for TracingSink {
    fn record(&self, diagnostic: &Diagnostic<'_, S, E>) {
        match diagnostic {
            Diagnostic::Initialized {
                initial,
                states,
                events,
            } => info!(
                initial = initial.name(),
                states = *states,
                events = *events,
                "machine initialized"
            ),
            Diagnostic::EdgeWalked { from, to, event } => trace!(
                from = from.name(),
                to = to.name(),
                event = ?event,
                "walked edge"
            ),
            Diagnostic::EventReceived { current, event } => {
                debug!(state = current.name(), event = ?event, "event received")
            }
            Diagnostic::TransitionCompleted {
                from,
                to,
                event,
                entry_hook,
            } => debug!(
                from = from.name(),
                to = to.name(),
                event = ?event,
                entry_hook = *entry_hook,
                "transition complete"
            ),
            Diagnostic::EventRejected {
                current,
                event,
                error,
            } => warn!(
                state = current.name(),
                event = ?event,
                %error,
                "event rejected"
            ),
        }
    }
}

/// Discards every diagnostic.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentSink;

impl<S: State, E: Event> DiagnosticSink<S, E> for SilentSink {
    fn record(&self, _diagnostic: &Diagnostic<'_, S, E>) {}
}
