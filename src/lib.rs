//! Waypoint: a table-driven finite state machine library
//!
//! A machine is described as a set of transitions between caller-defined
//! states, triggered by caller-defined events. Each transition may carry a
//! side-effect, and each state may carry an entry hook; both receive a
//! context value owned by the machine.
//!
//! # Core Concepts
//!
//! - **State**: Hashable state values via the `State` trait
//! - **Transition**: Immutable `(from, to, on, effect)` edges, assembled by
//!   a phased builder that enforces the order at compile time
//! - **Machine**: Fires events against the transition table and validates
//!   that every state is reachable from the initial state
//! - **Diagnostics**: An injected sink, `tracing` by default
//!
//! # Example
//!
//! ```rust
//! use waypoint::builder::MachineBuilder;
//! use waypoint::{event_enum, state_enum};
//!
//! state_enum! {
//!     enum Turnstile {
//!         Locked,
//!         Unlocked,
//!     }
//! }
//!
//! event_enum! {
//!     enum Input {
//!         Coin,
//!         Push,
//!     }
//! }
//!
//! let mut builder = MachineBuilder::new(0u32);
//! builder
//!     .transition()
//!     .from(Turnstile::Locked)
//!     .to(Turnstile::Unlocked)
//!     .on(Input::Coin)
//!     .during(|coins: &mut u32| *coins += 1);
//! builder
//!     .transition()
//!     .from(Turnstile::Unlocked)
//!     .to(Turnstile::Locked)
//!     .on(Input::Push);
//! builder.set_initial_state(Turnstile::Locked)?;
//!
//! let mut machine = builder.build()?;
//! machine.fire(Input::Coin)?;
//! assert!(machine.is_current_state(&Turnstile::Unlocked));
//! assert_eq!(*machine.context(), 1);
//!
//! assert_eq!(
//!     machine.export_graph(),
//!     "digraph g {\nLocked -> Unlocked [label=\"Coin\"];\nUnlocked -> Locked [label=\"Push\"];\n}"
//! );
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod builder;
pub mod core;
pub mod diagnostics;
pub mod machine;

// Re-export commonly used types
pub use crate::builder::{BuildError, MachineBuilder, TransitionBuilder};
pub use crate::core::{Effect, EntryHooks, Event, State};
pub use crate::diagnostics::{Diagnostic, DiagnosticSink, SilentSink, TracingSink};
pub use crate::machine::{Driver, Machine, MachineError, Transition};
