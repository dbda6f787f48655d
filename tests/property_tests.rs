//! Property-based tests for machine construction and firing.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated graphs and event sequences.

use proptest::prelude::*;
use std::collections::{HashMap, HashSet, VecDeque};
use waypoint::builder::{BuildError, MachineBuilder};
use waypoint::core::State;
use waypoint::diagnostics::SilentSink;
use waypoint::machine::{Machine, MachineError};
use waypoint::state_enum;

state_enum! {
    enum Node {
        A,
        B,
        C,
        D,
        E,
        F,
    }
}

const NODES: [Node; 6] = [Node::A, Node::B, Node::C, Node::D, Node::E, Node::F];

const NEXT: u8 = 0;
const BACK: u8 = 1;
const STAY: u8 = 2;
const UNKNOWN: u8 = 9;

/// A four-state ring whose effects and entry hooks append to a log.
fn ring() -> Machine<Node, u8, Vec<String>> {
    let ring = [Node::A, Node::B, Node::C, Node::D];
    let mut builder = MachineBuilder::new(Vec::new()).with_diagnostics(SilentSink);
    for (i, node) in ring.iter().copied().enumerate() {
        let next = ring[(i + 1) % ring.len()];
        let back = ring[(i + ring.len() - 1) % ring.len()];
        builder
            .transition()
            .from(node)
            .to(next)
            .on(NEXT)
            .during(move |log: &mut Vec<String>| log.push(format!("next->{}", next.name())));
        builder.transition().from(node).to(back).on(BACK);
        builder.transition().refresh(node).on(STAY);
        builder.on_enter(node, move |log| log.push(format!("enter {}", node.name())));
    }
    builder.set_initial_state(Node::A).unwrap();
    builder.build().unwrap()
}

/// Drive a machine, recording the state after each event.
fn run(machine: &mut Machine<Node, u8, Vec<String>>, events: &[u8]) -> Vec<Node> {
    events
        .iter()
        .map(|event| {
            let _ = machine.fire(*event);
            *machine.current_state()
        })
        .collect()
}

/// States reachable from `initial` by breadth-first search over the
/// last-registered edge for every (from, event) pair.
fn reference_reachable(edges: &[(usize, usize, u8)], initial: usize) -> HashSet<usize> {
    let mut table: HashMap<(usize, u8), usize> = HashMap::new();
    for (from, to, event) in edges {
        table.insert((*from, *event), *to);
    }

    let mut seen = HashSet::from([initial]);
    let mut queue = VecDeque::from([initial]);
    while let Some(node) = queue.pop_front() {
        for ((from, _), to) in &table {
            if *from == node && seen.insert(*to) {
                queue.push_back(*to);
            }
        }
    }
    seen
}

prop_compose! {
    fn arbitrary_edge()(from in 0..6usize, to in 0..6usize, event in 0..4u8) -> (usize, usize, u8) {
        (from, to, event)
    }
}

proptest! {
    #[test]
    fn firing_is_deterministic(events in prop::collection::vec(0..4u8, 0..40)) {
        let mut first = ring();
        let mut second = ring();

        let path1 = run(&mut first, &events);
        let path2 = run(&mut second, &events);

        prop_assert_eq!(path1, path2);
        prop_assert_eq!(first.context(), second.context());
    }

    #[test]
    fn rejected_events_leave_machine_untouched(events in prop::collection::vec(0..3u8, 0..20)) {
        let mut machine = ring();
        run(&mut machine, &events);
        let state = *machine.current_state();
        let log_len = machine.context().len();

        let result = machine.fire(UNKNOWN);

        prop_assert!(
            matches!(result, Err(MachineError::UnknownEvent { .. })),
            "expected UnknownEvent, got {:?}",
            result
        );
        prop_assert_eq!(*machine.current_state(), state);
        prop_assert_eq!(machine.context().len(), log_len);
    }

    #[test]
    fn initialize_is_idempotent(events in prop::collection::vec(0..3u8, 0..20)) {
        let mut machine = ring();
        run(&mut machine, &events);

        machine.initialize().unwrap();
        machine.initialize().unwrap();

        prop_assert!(machine.is_current_state(&Node::A));
    }

    #[test]
    fn every_fire_of_next_runs_effect_then_entry(steps in 1..12usize) {
        let mut machine = ring();
        let events = vec![NEXT; steps];

        run(&mut machine, &events);

        let log = machine.context();
        prop_assert_eq!(log.len(), steps * 2);
        for pair in log.chunks(2) {
            let target = pair[0].trim_start_matches("next->");
            prop_assert_eq!(&pair[1], &format!("enter {}", target));
        }
    }

    #[test]
    fn last_registration_wins(first_to in 1..6usize, second_to in 1..6usize) {
        let mut builder = MachineBuilder::new(()).with_diagnostics(SilentSink);
        builder.transition().from(Node::A).to(NODES[first_to]).on(NEXT);
        builder.transition().from(Node::A).to(NODES[second_to]).on(NEXT);
        // Keep every named state reachable regardless of the override
        for node in &NODES[1..] {
            builder.transition().from(Node::A).to(*node).on(10 + *node as u8);
        }
        builder.set_initial_state(Node::A).unwrap();
        let mut machine = builder.build().unwrap();

        machine.fire(NEXT).unwrap();

        prop_assert_eq!(*machine.current_state(), NODES[second_to]);
    }

    #[test]
    fn reachability_matches_breadth_first_search(
        edges in prop::collection::vec(arbitrary_edge(), 1..16)
    ) {
        let initial = edges[0].0;
        let mut builder = MachineBuilder::new(()).with_diagnostics(SilentSink);
        for (from, to, event) in &edges {
            builder.transition().from(NODES[*from]).to(NODES[*to]).on(*event);
        }
        builder.set_initial_state(NODES[initial]).unwrap();

        let known: HashSet<usize> = edges.iter().flat_map(|(f, t, _)| [*f, *t]).collect();
        let reachable = reference_reachable(&edges, initial);
        let mut expected: Vec<String> = known
            .difference(&reachable)
            .map(|i| NODES[*i].name().to_string())
            .collect();
        expected.sort();

        match builder.build() {
            Ok(machine) => {
                prop_assert!(expected.is_empty(), "expected unreachable {:?}", expected);
                prop_assert_eq!(machine.states().count(), known.len());
            }
            Err(BuildError::Validation(MachineError::UnreachableStates { states })) => {
                prop_assert_eq!(states, expected);
            }
            Err(other) => prop_assert!(false, "unexpected build error: {:?}", other),
        }
    }
}
