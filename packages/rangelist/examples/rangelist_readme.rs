//! Example that demonstrates the usage shown in the crate-level documentation.
//!
//! This collects range list strings into items and summarizes items back into range lists,
//! printing the diagnostic events of the calls to the terminal.

use rangelist::Summarizer;

fn main() {
    println!("=== Range List README Example ===");

    let items = rangelist::collect("1,3,6,7,8,12,13,14,15,21,22,23,24,31").unwrap();
    println!("Collected items: {items:?}");
    println!("As range list: {}", rangelist::summarize(&items));

    // Items are never sorted, each ascending run becomes its own range.
    let mixed = rangelist::collect("1-2, 7-9, 4-5").unwrap();
    println!("Mixed items: {mixed:?}");
    println!("As range list: {}", rangelist::summarize(&mixed));

    // Route the diagnostic events of these calls to a subscriber that prints them.
    let summarizer = Summarizer::builder()
        .diagnostics(
            tracing_subscriber::fmt()
                .with_max_level(tracing::Level::DEBUG)
                .finish(),
        )
        .build();

    match summarizer.collect("1,2,3,four,5") {
        Ok(items) => println!("Unexpectedly collected: {items:?}"),
        Err(error) => println!("Rejected as expected: {error}"),
    }

    println!("README example completed successfully!");
}
