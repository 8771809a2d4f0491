//! Example: Reactive Single-Source Read
//!
//! Reads one catalogue file synchronously and pushes each parsed record to an
//! `Observer`. No channel and no background task are involved: the reader
//! calls the observer directly, then finishes with exactly one of
//! `on_error` or `on_complete`.
//!
//! Usage:
//!   cargo run --example reactive_single -- nav.dat.gz
//!   cargo run --example reactive_single -- apt.dat.gz airports

use std::collections::BTreeMap;
use std::env;

use navdat::prelude::*;

/// Counts records per kind and remembers how the source ended
#[derive(Default)]
struct KindCounter {
    counts: BTreeMap<&'static str, usize>,
    outcome: Option<Result<(), SourceError>>,
}

impl Observer<Record> for KindCounter {
    fn on_next(&mut self, item: Record) {
        *self.counts.entry(item.kind_name()).or_default() += 1;
    }

    fn on_error(&mut self, error: SourceError) {
        self.outcome = Some(Err(error));
    }

    fn on_complete(&mut self) {
        self.outcome = Some(Ok(()));
    }
}

fn main() {
    init_tracing();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: {} <file.dat.gz> [navaids|airports]", args[0]);
        std::process::exit(1);
    }

    let format = match args.get(2).map(String::as_str) {
        None | Some("navaids") => SourceFormat::Navaids,
        Some("airports") => SourceFormat::Airports,
        Some(other) => {
            eprintln!("Unknown format: {other}");
            std::process::exit(1);
        }
    };

    let mut counter = KindCounter::default();
    let stats = SourceReader::new(&args[1], format).read(&mut counter);

    match counter.outcome {
        Some(Ok(())) => {
            for (kind, count) in &counter.counts {
                println!("{kind}: {count}");
            }
            println!("{} lines, {} skipped", stats.lines, stats.skipped);
        }
        Some(Err(e)) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
        None => unreachable!("reader always finishes with a terminal call"),
    }
}
