//! Fetch command implementation

use std::path::PathBuf;

use reqwest::Client;

use super::common::open_database;
use crate::{
    core::{build_client, verified_file_path, VerifiedFile},
    sources::{
        fetch_with_fallback, report_steps, save_transaction_report, BasketballReference,
        Politeness, ProSportsTransactions, TransactionSource,
    },
    storage::TradeTreeDatabase,
    Result,
};

/// Parameters for the fetch command
#[derive(Debug, Clone, Default)]
pub struct FetchParams {
    pub player: Option<String>,
    pub all: bool,
    pub limit: Option<usize>,
    pub save_file: bool,
    pub file: Option<PathBuf>,
}

/// Outcome of a batch fetch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FetchSummary {
    pub attempted: usize,
    /// Players some source returned transactions for
    pub found: usize,
    /// Players whose verified history was written to the database
    pub saved: usize,
}

/// Names the command should fetch
pub fn fetch_targets(db: &TradeTreeDatabase, params: &FetchParams) -> Result<Vec<String>> {
    if params.all {
        return db.list_player_names(params.limit);
    }
    Ok(params.player.iter().cloned().collect())
}

/// Fetch each player in turn and store what was found.
///
/// Fetch failures only skip the player; database errors abort the batch.
pub async fn fetch_players<P, S>(
    db: &mut TradeTreeDatabase,
    client: &Client,
    primary: &P,
    secondary: &S,
    names: &[String],
    politeness: Politeness,
    mut file: Option<&mut VerifiedFile>,
) -> Result<FetchSummary>
where
    P: TransactionSource,
    S: TransactionSource,
{
    let mut summary = FetchSummary::default();

    for (i, name) in names.iter().enumerate() {
        if i > 0 {
            tokio::time::sleep(politeness.between_players).await;
        }
        summary.attempted += 1;

        let Some(report) = fetch_with_fallback(client, primary, secondary, name, politeness).await
        else {
            println!("✗ {}: no transactions found", name);
            continue;
        };
        summary.found += 1;

        match save_transaction_report(db, &report)? {
            Some(steps) => {
                summary.saved += 1;
                println!("✓ {}: {} verified steps from {}", name, steps, report.source);
            }
            None => println!("⚠ {}: not in database, skipped", name),
        }

        if let Some(file) = file.as_deref_mut() {
            file.set_player(name, report_steps(&report));
        }
    }

    Ok(summary)
}

/// Handle the fetch command
pub async fn handle_fetch(db: Option<PathBuf>, params: FetchParams) -> Result<()> {
    let mut db = open_database(db)?;
    let names = fetch_targets(&db, &params)?;
    if names.is_empty() {
        println!("No players to fetch");
        return Ok(());
    }

    let file_path = params.file.clone().unwrap_or_else(verified_file_path);
    let mut file = if params.save_file {
        Some(VerifiedFile::load(&file_path)?)
    } else {
        None
    };

    println!("Fetching transactions for {} player(s)...", names.len());
    let client = build_client()?;
    // tarpaulin::skip - network I/O
    let summary = fetch_players(
        &mut db,
        &client,
        &BasketballReference,
        &ProSportsTransactions,
        &names,
        Politeness::default(),
        file.as_mut(),
    )
    .await?;

    if let Some(file) = file.as_mut() {
        file.save(&file_path)?;
        println!("Verified transactions written to {}", file_path.display());
    }

    println!(
        "Done: {} attempted, {} found, {} saved",
        summary.attempted, summary.found, summary.saved
    );
    Ok(())
}
