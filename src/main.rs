use futures::StreamExt;
use tokio::io::AsyncWriteExt;
use tracing::{info, warn};

use navdat::app::Listing;
use navdat::prelude::*;

const DEFAULT_NAVAIDS: &str = "nav.dat.gz";
const DEFAULT_AIRPORTS: &str = "apt.dat.gz";

/// Input files for one run
struct Inputs {
    navaids: String,
    airports: String,
}

#[tokio::main]
async fn main() {
    init_tracing();

    CliApp::new("navdat")
        .run(|writer| async move {
            let inputs = parse_args(std::env::args().collect())?;
            run_listing(writer, inputs).await
        })
        .await
}

/// Parse and validate command-line arguments
fn parse_args(args: Vec<String>) -> Result<Inputs, AppError> {
    if args.len() > 3 {
        return Err(AppError::InvalidArguments(
            "Usage: navdat [nav.dat.gz] [apt.dat.gz]".to_string(),
        ));
    }

    let mut rest = args.into_iter().skip(1);
    Ok(Inputs {
        navaids: rest.next().unwrap_or_else(|| DEFAULT_NAVAIDS.to_string()),
        airports: rest.next().unwrap_or_else(|| DEFAULT_AIRPORTS.to_string()),
    })
}

/// Read both catalogues concurrently and print every record
async fn run_listing(
    mut writer: tokio::io::BufWriter<tokio::io::Stdout>,
    inputs: Inputs,
) -> Result<(), AppError> {
    let mut items = SourceMultiplexer::new()
        .add_source(SourceReader::navaids(&inputs.navaids))
        .add_source(SourceReader::airports(&inputs.airports))
        .spawn();

    let mut listing = Listing::new();
    while let Some(item) = items.next().await {
        if let StreamItem::Error(e) = &item {
            // A failed source still counts as finished
            warn!(error = %e, "Skipping source");
            continue;
        }
        for line in listing.render(&item) {
            writer.write_all(line.as_bytes()).await?;
            writer.write_all(b"\n").await?;
        }
    }
    writer.flush().await?;

    for (source, stats) in items.join().await.into_iter().enumerate() {
        info!(
            source,
            lines = stats.lines,
            records = stats.records,
            skipped = stats.skipped,
            failed = stats.failed,
            "Source summary"
        );
    }

    Ok(())
}
