//! Seed command implementation

use std::path::PathBuf;

use super::common::open_database;
use crate::{seed::seed_database, Result};

/// Handle the seed command
pub fn handle_seed(db: Option<PathBuf>) -> Result<()> {
    let mut db = open_database(db)?;

    let summary = seed_database(&mut db)?;
    let counts = db.table_counts()?;

    println!(
        "✓ Seeded {} teams, {} players, {} trades",
        summary.teams, summary.players, summary.trades
    );
    println!(
        "  {} new acquisitions, {} new trade chains",
        summary.new_acquisitions, summary.new_chains
    );
    println!(
        "  Database now holds {} players, {} trades, {} chains",
        counts.players, counts.trades, counts.trade_chains
    );

    Ok(())
}
