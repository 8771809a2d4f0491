//! Example: Multiplexed Sources
//!
//! Reads the navaid and airport catalogues concurrently into one item stream
//! and dispatches on the item kind. Items from the two files interleave in
//! arrival order; each file's own records keep their file order.
//!
//! The stream ends after one terminal item (`Terminator` or `Error`) per
//! source, so a missing file does not keep the consumer waiting.
//!
//! Usage:
//!   cargo run --example multiplexed -- nav.dat.gz apt.dat.gz

use std::env;

use futures::StreamExt;
use navdat::prelude::*;

#[tokio::main]
async fn main() {
    init_tracing();

    let args: Vec<String> = env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <nav.dat.gz> <apt.dat.gz>", args[0]);
        std::process::exit(1);
    }

    let mut items = SourceMultiplexer::new()
        .add_source(SourceReader::navaids(&args[1]))
        .add_source(SourceReader::airports(&args[2]))
        .spawn();

    let mut last_airport = String::new();
    while let Some(item) = items.next().await {
        match item {
            StreamItem::Navaid(navaid) => {
                println!("nav {} at {:?}", navaid.identifier, navaid.pos)
            }
            StreamItem::Airport(airport) => {
                println!("airport {}", airport.code);
                last_airport = airport.code;
            }
            StreamItem::Runway(runway) => {
                println!(
                    "runway {} {}-{}",
                    last_airport, runway.ends[0].code, runway.ends[1].code
                )
            }
            StreamItem::Error(e) => eprintln!("Error {e}"),
            StreamItem::Terminator => {}
        }
    }

    eprintln!(
        "{} of {} sources finished",
        items.terminated_sources(),
        items.expected_sources()
    );
}
