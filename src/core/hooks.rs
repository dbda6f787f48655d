//! Side-effect and entry-hook functions.
//!
//! Hooks are the only place where a machine touches the outside world.
//! They receive the machine's context and nothing else.

use super::state::State;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Shared side-effect function receiving the machine context.
///
/// Stored behind an `Arc` so transitions stay cheap to clone and so two
/// transitions can be compared by hook identity.
pub type Effect<C> = Arc<dyn Fn(&mut C) + Send + Sync>;

/// Per-state entry hooks, looked up by the machine after it enters a state.
///
/// States without a registered hook have a no-op entry. Registering a
/// second hook for the same state replaces the first.
///
/// # Example
///
/// ```rust
/// use waypoint::core::{EntryHooks, State};
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug)]
/// enum Light {
///     On,
///     Off,
/// }
///
/// impl State for Light {
///     fn name(&self) -> &str {
///         match self {
///             Self::On => "On",
///             Self::Off => "Off",
///         }
///     }
/// }
///
/// let mut hooks = EntryHooks::new();
/// hooks.register(Light::On, |switched: &mut u32| *switched += 1);
///
/// let mut switched = 0;
/// hooks.enter(&Light::On, &mut switched);
/// hooks.enter(&Light::Off, &mut switched);
/// assert_eq!(switched, 1);
/// ```
pub struct EntryHooks<S: State, C> {
    hooks: HashMap<S, Effect<C>>,
}

impl<S: State, C> EntryHooks<S, C> {
    pub fn new() -> Self {
        Self {
            hooks: HashMap::new(),
        }
    }

    /// Register the hook run whenever the machine enters `state`.
    pub fn register<F>(&mut self, state: S, hook: F)
    where
        F: Fn(&mut C) + Send + Sync + 'static,
    {
        self.hooks.insert(state, Arc::new(hook));
    }

    /// Check whether `state` has an entry hook.
    pub fn contains(&self, state: &S) -> bool {
        self.hooks.contains_key(state)
    }

    /// Run the entry hook for `state`, if any.
    pub fn enter(&self, state: &S, context: &mut C) {
        if let Some(hook) = self.hooks.get(state) {
            hook(context);
        }
    }
}

impl<S: State, C> Default for EntryHooks<S, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State, C> Clone for EntryHooks<S, C> {
    fn clone(&self) -> Self {
        Self {
            hooks: self.hooks.clone(),
        }
    }
}

impl<S: State, C> fmt::Debug for EntryHooks<S, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set()
            .entries(self.hooks.keys().map(S::name))
            .finish()
    }
}
