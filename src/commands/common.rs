//! Common utilities shared across commands.

use std::path::PathBuf;

use crate::{core::default_database_path, storage::ChainStep, storage::TradeTreeDatabase};
use crate::{Result, DB_PATH_ENV_VAR};

/// Resolve the database path: explicit flag, then env var, then the data directory
pub fn resolve_db_path(db: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = db {
        return Ok(path);
    }
    match std::env::var(DB_PATH_ENV_VAR) {
        Ok(path) if !path.trim().is_empty() => Ok(PathBuf::from(path.trim())),
        _ => default_database_path(),
    }
}

/// Open the database the command should work on
pub fn open_database(db: Option<PathBuf>) -> Result<TradeTreeDatabase> {
    let path = resolve_db_path(db)?;
    TradeTreeDatabase::open(&path)
}

/// Numbered, indented chain lines for terminal output
pub fn format_chain(steps: &[ChainStep]) -> Vec<String> {
    steps
        .iter()
        .enumerate()
        .map(|(i, step)| {
            format!(
                "  {}. {}  {}\n       -> {}",
                i + 1,
                step.date,
                step.event,
                step.action
            )
        })
        .collect()
}
