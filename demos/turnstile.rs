//! Coin-Operated Turnstile
//!
//! This example demonstrates the smallest useful machine: two states, two
//! events, one transition effect and one entry hook.
//!
//! Key concepts:
//! - Phased transition builder (from -> to -> on -> during)
//! - Context owned by the machine and mutated by effects
//! - Rejected events leave the machine where it was
//! - Graphviz export
//!
//! Run with: RUST_LOG=waypoint=debug cargo run --example turnstile

use tracing_subscriber::EnvFilter;
use waypoint::builder::MachineBuilder;
use waypoint::{event_enum, state_enum};

state_enum! {
    enum Turnstile {
        Locked,
        Unlocked,
    }
}

event_enum! {
    enum Input {
        Coin,
        Push,
    }
}

#[derive(Debug, Default)]
struct Counters {
    coins: u32,
    passages: u32,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Turnstile State Machine ===\n");

    let mut builder = MachineBuilder::new(Counters::default());
    builder
        .transition()
        .from(Turnstile::Locked)
        .to(Turnstile::Unlocked)
        .on(Input::Coin)
        .during(|counters: &mut Counters| counters.coins += 1);
    builder
        .transition()
        .from(Turnstile::Unlocked)
        .to(Turnstile::Locked)
        .on(Input::Push);
    builder.on_enter(Turnstile::Locked, |counters| counters.passages += 1);
    builder.set_initial_state(Turnstile::Locked)?;

    let mut machine = builder.build()?;
    println!("Initial state: {:?}\n", machine.current_state());

    for input in [
        Input::Coin,
        Input::Push,
        Input::Push,
        Input::Coin,
        Input::Push,
    ] {
        match machine.fire(input) {
            Ok(()) => println!("  {input:<5} -> {:?}", machine.current_state()),
            Err(e) => println!("  {input:<5} rejected: {e}"),
        }
    }

    let counters = machine.context();
    println!(
        "\nCoins collected: {}, passages: {}",
        counters.coins, counters.passages
    );

    println!("\nGraph:\n{}", machine.export_graph());

    println!("\n=== Example Complete ===");
    Ok(())
}
