//! Document Review Workflow
//!
//! This example demonstrates a review cycle with a revision loop, a refresh
//! transition and a custom diagnostic sink.
//!
//! Key concepts:
//! - Cycles (Review -> Draft -> Review)
//! - Refresh transitions re-run entry hooks without changing state
//! - Entry hooks observe effect output
//! - Plain functions as diagnostic sinks
//! - Structured graph description as JSON
//!
//! Run with: cargo run --example document_review

use waypoint::builder::MachineBuilder;
use waypoint::diagnostics::Diagnostic;
use waypoint::{event_enum, state_enum};

state_enum! {
    enum DocState {
        Draft,
        Review,
        Approved,
        Published,
    }
}

event_enum! {
    enum DocEvent {
        Submit,
        Comment,
        Reject,
        Approve,
        Publish,
    }
}

#[derive(Debug, Default)]
struct Document {
    revision: u32,
    comments: u32,
    audit: Vec<String>,
}

fn audit(doc: &mut Document, entry: &str) {
    println!("  [Audit] {entry}");
    doc.audit.push(entry.to_string());
}

fn report(diagnostic: &Diagnostic<'_, DocState, DocEvent>) {
    if let Diagnostic::EventRejected { event, error, .. } = diagnostic {
        println!("  [Diagnostic] {event} rejected: {error}");
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Document Review Workflow ===\n");

    let mut builder = MachineBuilder::new(Document::default()).with_diagnostics(report);

    builder
        .transition()
        .from(DocState::Draft)
        .to(DocState::Review)
        .on(DocEvent::Submit)
        .during(|doc: &mut Document| doc.revision += 1);
    builder
        .transition()
        .refresh(DocState::Review)
        .on(DocEvent::Comment)
        .during(|doc: &mut Document| doc.comments += 1);
    builder
        .transition()
        .from(DocState::Review)
        .to(DocState::Draft)
        .on(DocEvent::Reject);
    builder
        .transition()
        .from(DocState::Review)
        .to(DocState::Approved)
        .on(DocEvent::Approve);
    builder
        .transition()
        .from(DocState::Approved)
        .to(DocState::Published)
        .on(DocEvent::Publish);

    builder
        .on_enter(DocState::Review, |doc| {
            let entry = format!(
                "revision {} in review ({} comments)",
                doc.revision, doc.comments
            );
            audit(doc, &entry);
        })
        .on_enter(DocState::Draft, |doc| audit(doc, "returned to author"))
        .on_enter(DocState::Published, |doc| audit(doc, "published"));
    builder.set_initial_state(DocState::Draft)?;

    let mut machine = builder.build()?;

    let script = [
        DocEvent::Submit,
        DocEvent::Comment,
        DocEvent::Comment,
        DocEvent::Reject,
        DocEvent::Publish,
        DocEvent::Submit,
        DocEvent::Approve,
        DocEvent::Publish,
    ];
    for event in script {
        println!("{event}:");
        if machine.fire(event).is_ok() {
            println!("  now {:?}", machine.current_state());
        }
    }

    println!("\nDescription:");
    println!("{}", serde_json::to_string_pretty(&machine.describe())?);

    let document = machine.into_context();
    println!(
        "\nFinal revision {} with {} audit entries",
        document.revision,
        document.audit.len()
    );

    println!("\n=== Example Complete ===");
    Ok(())
}
