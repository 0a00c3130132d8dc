use anyhow::Result;
use consensus_service::{ConsensusEngine, JsonFileSource, RunOutcome};
use projection_cache::ProjectionStore;
use tokio::sync::mpsc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        eprintln!("Usage: run-consensus <cache-file> [source.json]...");
        eprintln!();
        eprintln!("With no source files, prints the cached table without fetching.");
        std::process::exit(2);
    }

    let cache_file = &args[0];
    let store = ProjectionStore::new(cache_file);
    let mut engine = ConsensusEngine::new(store);

    for (index, path) in args[1..].iter().enumerate() {
        engine.add_source(Box::new(JsonFileSource::new(format!("source-{}", index + 1), path)));
    }

    if args.len() == 1 {
        // Cache-only view, no fetch
        let table = engine.load_persisted().await?;
        if table.is_empty() {
            println!("No cached projections found at {cache_file} - supply source files first.");
            return Ok(());
        }
        println!(
            "Cached projections from {}:",
            table.last_updated.format("%b %d, %Y %H:%M UTC")
        );
        print_table(&table.records);
        return Ok(());
    }

    info!("Starting consensus run with {} source file(s)", args.len() - 1);

    // The engine runs on a background task; milestones stream back here
    let (tx, mut rx) = mpsc::unbounded_channel();
    let printer = tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            println!("... {msg}");
        }
    });

    let outcome = engine.run(tx).await?;
    let _ = printer.await;

    match outcome {
        RunOutcome::Completed(records) => {
            println!();
            print_table(&records);
            println!("\nTotal: {} players", records.len());
        }
        RunOutcome::NoData => {
            println!("No data available - every source came back empty and no cache exists.");
            std::process::exit(1);
        }
    }

    Ok(())
}

fn print_table(records: &[consensus::ConsensusRecord]) {
    println!(
        "{:<5} {:<5} {:<24} {:<5} {:<4} {:<5} {:>9} {:>7} {:>8}",
        "Rank", "PosRk", "Player", "Team", "Pos", "Opp", "Consensus", "Floor", "Ceiling"
    );
    println!("{}", "-".repeat(80));

    for record in records {
        println!(
            "{:<5} {:<5} {:<24} {:<5} {:<4} {:<5} {:>9.1} {:>7.1} {:>8.1}",
            record.overall_rank,
            record.pos_rank,
            record.player,
            record.team,
            record.position,
            record.opponent,
            record.consensus,
            record.floor,
            record.ceiling
        );
    }
}
