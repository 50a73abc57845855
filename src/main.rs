//! Entry point: parse CLI and dispatch to command handlers.

use anyhow::Context;
use clap::Parser;
use nba_trade_tree::{
    cli::{Commands, TradeTree},
    commands::{
        fetch::{handle_fetch, FetchParams},
        lineage::{handle_search, handle_trace, TraceParams},
        maintenance::{handle_dedupe, handle_rebuild_chains, handle_stats, handle_validate},
        seed::handle_seed,
    },
};
use tracing_subscriber::EnvFilter;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let app = TradeTree::parse();
    let db = app.db;

    match app.command {
        Commands::Seed => handle_seed(db).context("seeding failed")?,

        Commands::Trace {
            name,
            json,
            graph,
            root_trade,
        } => handle_trace(
            db,
            TraceParams {
                name,
                as_json: json,
                as_graph: graph,
                root_trade,
            },
        )?,

        Commands::Search { query, limit } => handle_search(db, &query, limit)?,

        Commands::Fetch {
            player,
            all,
            limit,
            save_file,
            file,
        } => handle_fetch(
            db,
            FetchParams {
                player,
                all,
                limit,
                save_file,
                file,
            },
        )
        .await
        .context("fetch failed")?,

        Commands::Validate { roster } => handle_validate(db, roster)?,

        Commands::RebuildChains => handle_rebuild_chains(db).context("rebuilding chains failed")?,

        Commands::Dedupe => handle_dedupe(db).context("merging duplicates failed")?,

        Commands::Stats => handle_stats(db)?,
    }

    Ok(())
}
