//! Storage layer for the NBA trade tree
//!
//! SQLite-backed store organized into logical components:
//! - `models`: Data structures
//! - `schema`: Database connection and schema management
//! - `queries`: Teams, players and trades
//! - `assets`: Draft picks and trade assets
//! - `lineage`: Acquisitions, trade chains and the lineage resolver
//! - `maintenance`: Integrity checks, duplicate merging and counts
//! - `verified`: Externally verified transaction histories

pub mod assets;
pub mod lineage;
pub mod maintenance;
pub mod models;
pub mod queries;
pub mod schema;
pub mod verified;


// Re-export the main types and database struct for easy access
pub use models::*;
pub use schema::TradeTreeDatabase;
