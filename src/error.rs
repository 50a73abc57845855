//! Error types for the NBA trade tree store

use thiserror::Error;

pub type Result<T> = std::result::Result<T, TradeTreeError>;

#[derive(Error, Debug)]
pub enum TradeTreeError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid date: {0}")]
    InvalidDate(#[from] chrono::ParseError),

    #[error("Invalid number: {0}")]
    InvalidNumber(#[from] std::num::ParseIntError),

    #[error("Database path not provided and no data directory could be determined (set {env_var})")]
    MissingDatabasePath { env_var: String },

    #[error("Team not found: {abbr}")]
    TeamNotFound { abbr: String },

    #[error("Player not found: {name}")]
    PlayerNotFound { name: String },

    #[error("Trade not found: {id}")]
    TradeNotFound { id: i64 },

    #[error("Invalid team abbreviation: {abbr}")]
    InvalidTeamAbbr { abbr: String },

    #[error("Invalid acquisition type: {value}")]
    InvalidAcquisitionType { value: String },

    #[error("Invalid trade asset: {reason}")]
    InvalidAsset { reason: String },

    #[error("Chain steps out of order: {later} comes after {earlier}")]
    UnorderedChain { earlier: String, later: String },

    #[error("Validation found {count} problem(s)")]
    ValidationFailed { count: usize },
}
