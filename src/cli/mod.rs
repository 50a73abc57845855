//! CLI argument definitions and parsing.

pub mod types;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use types::TradeId;

#[derive(Debug, Parser)]
#[clap(name = "nba-trade-tree", version, about = "NBA trade tree lineage store")]
pub struct TradeTree {
    /// SQLite database file (or set `NBA_TRADE_TREE_DB` env var).
    #[clap(long, global = true)]
    pub db: Option<PathBuf>,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Load teams and the known trade trees. Safe to run repeatedly.
    Seed,

    /// Show how a player came to their current team.
    Trace {
        /// Player name, or a substring of it.
        name: String,

        /// Output the lineage as JSON.
        #[clap(long, conflicts_with = "graph")]
        json: bool,

        /// Output the lineage as a node/edge graph (JSON).
        #[clap(long)]
        graph: bool,

        /// Also report whether the lineage starts at this trade id.
        #[clap(long)]
        root_trade: Option<TradeId>,
    },

    /// Find players by name (case-insensitive).
    Search {
        query: String,

        /// Maximum number of results.
        #[clap(long, short, default_value_t = 10)]
        limit: usize,
    },

    /// Import transaction histories from Basketball-Reference, falling back
    /// to ProSportsTransactions.
    Fetch {
        /// A single player to fetch.
        #[clap(long, short, conflicts_with = "all", required_unless_present = "all")]
        player: Option<String>,

        /// Fetch every player in the database.
        #[clap(long)]
        all: bool,

        /// Only fetch the first N players (with `--all`).
        #[clap(long)]
        limit: Option<usize>,

        /// Also write results to the verified-transactions JSON file.
        #[clap(long)]
        save_file: bool,

        /// Location of the verified-transactions file.
        #[clap(long)]
        file: Option<PathBuf>,
    },

    /// Check referential integrity and, optionally, current teams against a
    /// roster file (`{"Player Name": "BOS", ...}`).
    Validate {
        #[clap(long)]
        roster: Option<PathBuf>,
    },

    /// Re-derive every stored trade chain from trades, picks and acquisitions.
    RebuildChains,

    /// Report players sharing a name and merge them into the oldest row.
    Dedupe,

    /// Print row counts for every table.
    Stats,
}
