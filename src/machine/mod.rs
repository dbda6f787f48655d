//! The state machine proper.
//!
//! This module is the imperative shell around the [`core`](crate::core)
//! contracts: it owns the transition table and the context, fires events,
//! and runs side-effects and entry hooks.
//!
//! # Key Concepts
//!
//! - **Transitions**: immutable `(from, to, on, effect)` edges
//! - **Machine**: fires events against a table with last-registration-wins
//!   semantics per `(from, event)` pair
//! - **Reachability**: every known state must be reachable from the
//!   initial state, checked on each `initialize()`
//! - **Graph export**: Graphviz dot text and a serializable description

mod error;
mod fsm;
mod graph;
mod reachability;
mod table;
mod transition;

pub use error::MachineError;
pub use fsm::{Driver, Machine};
pub use graph::{EdgeDescription, GraphDescription};
pub use transition::Transition;

pub(crate) use table::TransitionTable;
