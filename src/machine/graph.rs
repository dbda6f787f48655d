//! Graph export for inspection.
//!
//! Two projections of the same table: Graphviz dot text, which can be fed
//! to any dot renderer, and a serializable [`GraphDescription`] for tools
//! that prefer structured data.

use crate::core::{Event, State};
use crate::machine::table::TransitionTable;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt::Display;

/// Render the table as a Graphviz digraph, one labeled edge per transition.
pub(crate) fn to_dot<S, E, C>(table: &TransitionTable<S, E, C>) -> String
where
    S: State,
    E: Event + Display,
{
    let edges: Vec<String> = table
        .iter()
        .map(|t| {
            format!(
                "{} -> {} [label=\"{}\"];",
                t.from().name(),
                t.to().name(),
                t.event()
            )
        })
        .collect();
    format!("digraph g {{\n{}\n}}", edges.join("\n"))
}

/// Serializable view of a machine's graph.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphDescription {
    /// Name of the initial state
    pub initial: String,
    /// Name of the current state
    pub current: String,
    /// Known state names, sorted
    pub states: Vec<String>,
    /// Known event labels, sorted
    pub events: Vec<String>,
    /// Edges in table order
    pub edges: Vec<EdgeDescription>,
}

/// One edge of a [`GraphDescription`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeDescription {
    pub from: String,
    pub to: String,
    pub event: String,
    pub has_effect: bool,
}

pub(crate) fn describe<S, E, C>(
    table: &TransitionTable<S, E, C>,
    states: &HashSet<S>,
    events: &HashSet<E>,
    initial: &S,
    current: &S,
) -> GraphDescription
where
    S: State,
    E: Event + Display,
{
    let mut state_names: Vec<String> = states.iter().map(|s| s.name().to_string()).collect();
    state_names.sort();
    let mut event_labels: Vec<String> = events.iter().map(ToString::to_string).collect();
    event_labels.sort();

    GraphDescription {
        initial: initial.name().to_string(),
        current: current.name().to_string(),
        states: state_names,
        events: event_labels,
        edges: table
            .iter()
            .map(|t| EdgeDescription {
                from: t.from().name().to_string(),
                to: t.to().name().to_string(),
                event: t.event().to_string(),
                has_effect: t.has_effect(),
            })
            .collect(),
    }
}
