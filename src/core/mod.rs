//! Core state machine contracts.
//!
//! This module contains the caller-facing vocabulary of a machine:
//! - State and Event contracts via the `State` and `Event` traits
//! - Side-effect functions and per-state entry hooks
//!
//! Nothing in this module owns a transition table; see
//! [`machine`](crate::machine) for that.

mod hooks;
mod state;

pub use hooks::{Effect, EntryHooks};
pub use state::{Event, State};
