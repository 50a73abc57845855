//! NBA Trade Tree Library
//!
//! A lineage store for NBA trades: teams, players, trades, the assets and
//! draft picks that changed hands, and how each player reached their current
//! team. From those rows the library derives a player's *trade chain*, the
//! ordered story from an origin trade to the player on the roster today.
//!
//! ## Features
//!
//! - **SQLite Storage**: Natural-key upserts for teams, players and trades
//! - **Lineage Resolution**: Player name to team, acquisition, origin trade and chain
//! - **Chain Derivation**: Chains rebuilt from trades, pick movements and drafts
//! - **Transaction Import**: Best-effort Basketball-Reference / ProSportsTransactions scraping
//! - **Maintenance**: Integrity checks, duplicate-player merging, table stats
//!
//! ## Quick Start
//!
//! ```rust
//! use nba_trade_tree::{seed::seed_database, storage::TradeTreeDatabase};
//!
//! # fn example() -> nba_trade_tree::Result<()> {
//! let mut db = TradeTreeDatabase::new_in_memory()?;
//! seed_database(&mut db)?;
//!
//! let lineage = db.resolve_lineage("Jayson Tatum")?.expect("seeded");
//! for step in &lineage.chain {
//!     println!("{}  {}  ({})", step.date, step.event, step.action);
//! }
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Environment Configuration
//!
//! Point the CLI at a database without passing `--db` every time:
//! ```bash
//! export NBA_TRADE_TREE_DB=~/nba_trades.db
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod lineage;
pub mod seed;
pub mod sources;
pub mod storage;

// Re-export commonly used types
pub use cli::types::{AcquisitionType, AssetKind, PickId, PlayerId, TeamAbbr, TeamId, TradeId};
pub use error::{Result, TradeTreeError};
pub use lineage::{derive_chain, LineageGraph};
pub use storage::{ChainStep, PlayerLineage, TradeTreeDatabase};

pub const DB_PATH_ENV_VAR: &str = "NBA_TRADE_TREE_DB";
