//! Reachability validation over the transition graph.

use crate::core::{Event, State};
use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::machine::table::TransitionTable;
use std::collections::HashSet;

/// Walk the graph depth-first from `initial` and return every known state
/// the walk never visits, sorted by name.
///
/// Uses an explicit stack instead of recursion, so graph depth is bounded
/// only by memory. A state is expanded at most once, which makes cycles
/// and diamonds terminate.
pub(crate) fn unreachable_states<S: State, E: Event, C>(
    table: &TransitionTable<S, E, C>,
    initial: &S,
    known: &HashSet<S>,
    sink: &dyn DiagnosticSink<S, E>,
) -> Vec<S> {
    let mut remaining: HashSet<&S> = known.iter().collect();
    let mut stack = vec![initial];

    while let Some(state) = stack.pop() {
        if !remaining.remove(state) {
            continue;
        }
        for transition in table.outgoing(state) {
            sink.record(&Diagnostic::EdgeWalked {
                from: transition.from(),
                to: transition.to(),
                event: transition.event(),
            });
            stack.push(transition.to());
        }
    }

    let mut unreachable: Vec<S> = remaining.into_iter().cloned().collect();
    unreachable.sort_by(|a, b| a.name().cmp(b.name()));
    unreachable
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::SilentSink;
    use crate::machine::Transition;
    use crate::state_enum;
    use std::sync::{Arc, Mutex};

    state_enum! {
        enum TestState {
            Top,
            Left,
            Right,
            Bottom,
            Island,
        }
    }

    fn table_of(
        edges: &[(TestState, TestState, &'static str)],
    ) -> (TransitionTable<TestState, &'static str, ()>, HashSet<TestState>) {
        let mut table = TransitionTable::new();
        let mut known = HashSet::new();
        for (from, to, on) in edges {
            known.insert(*from);
            known.insert(*to);
            table.insert(
                Transition::builder()
                    .from(*from)
                    .to(*to)
                    .on(*on)
                    .build(),
            );
        }
        (table, known)
    }

    #[test]
    fn diamond_is_fully_reachable() {
        let (table, known) = table_of(&[
            (TestState::Top, TestState::Left, "left"),
            (TestState::Top, TestState::Right, "right"),
            (TestState::Left, TestState::Bottom, "down"),
            (TestState::Right, TestState::Bottom, "down"),
        ]);

        let unreachable = unreachable_states(&table, &TestState::Top, &known, &SilentSink);
        assert!(unreachable.is_empty());
    }

    #[test]
    fn cycles_terminate() {
        let (table, known) = table_of(&[
            (TestState::Top, TestState::Left, "go"),
            (TestState::Left, TestState::Top, "back"),
            (TestState::Left, TestState::Left, "stay"),
        ]);

        let unreachable = unreachable_states(&table, &TestState::Top, &known, &SilentSink);
        assert!(unreachable.is_empty());
    }

    #[test]
    fn disconnected_states_are_reported_sorted() {
        let (table, known) = table_of(&[
            (TestState::Top, TestState::Right, "right"),
            (TestState::Left, TestState::Bottom, "down"),
            (TestState::Island, TestState::Island, "loop"),
        ]);

        let unreachable = unreachable_states(&table, &TestState::Top, &known, &SilentSink);
        assert_eq!(
            unreachable,
            vec![TestState::Bottom, TestState::Island, TestState::Left]
        );
    }

    #[test]
    fn walk_reports_each_expanded_edge_once() {
        let (table, known) = table_of(&[
            (TestState::Top, TestState::Left, "left"),
            (TestState::Top, TestState::Right, "right"),
            (TestState::Left, TestState::Bottom, "down"),
            (TestState::Right, TestState::Bottom, "down"),
            (TestState::Bottom, TestState::Top, "up"),
        ]);
        let walked = Arc::new(Mutex::new(0usize));
        let counter = Arc::clone(&walked);
        let sink = move |d: &Diagnostic<'_, TestState, &'static str>| {
            if matches!(d, Diagnostic::EdgeWalked { .. }) {
                *counter.lock().unwrap() += 1;
            }
        };

        unreachable_states(&table, &TestState::Top, &known, &sink);

        assert_eq!(*walked.lock().unwrap(), 5);
    }
}
