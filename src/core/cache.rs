//! File system locations and the standalone verified-transactions file
//!
//! The database lives under the platform data directory unless a path is
//! given explicitly. Verified histories can additionally be mirrored to a
//! JSON file keyed by player name.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{
    collections::BTreeMap,
    fs,
    io::{Read, Write},
    path::{Path, PathBuf},
};

use crate::storage::ChainStep;
use crate::{Result, TradeTreeError, DB_PATH_ENV_VAR};

const APP_DIR: &str = "nba-trade-tree";

fn data_dir() -> Option<PathBuf> {
    dirs::data_dir().map(|base| base.join(APP_DIR))
}

/// Path: <data_dir>/nba-trade-tree/nba_trades.db
pub fn default_database_path() -> Result<PathBuf> {
    data_dir()
        .map(|dir| dir.join("nba_trades.db"))
        .ok_or_else(|| TradeTreeError::MissingDatabasePath {
            env_var: DB_PATH_ENV_VAR.to_string(),
        })
}

/// Path: <data_dir>/nba-trade-tree/verified-transactions.json
pub fn verified_file_path() -> PathBuf {
    data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("verified-transactions.json")
}

/// Try to read a file into a String
pub fn try_read_to_string(path: &Path) -> Option<String> {
    let mut f = fs::File::open(path).ok()?;
    let mut s = String::new();

    f.read_to_string(&mut s).ok()?;

    Some(s)
}

/// Write a string to file, creating parent directories
pub fn write_string(path: &Path, contents: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut f = fs::File::create(path)?;
    f.write_all(contents.as_bytes())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerifiedMeta {
    pub last_updated: DateTime<Utc>,
}

impl Default for VerifiedMeta {
    fn default() -> Self {
        Self {
            last_updated: Utc::now(),
        }
    }
}

/// `{"_meta": {"last_updated": ...}, "players": {"<name>": [steps]}}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VerifiedFile {
    #[serde(rename = "_meta", default)]
    pub meta: VerifiedMeta,
    #[serde(default)]
    pub players: BTreeMap<String, Vec<ChainStep>>,
}

impl VerifiedFile {
    /// Load the file, or start empty when it does not exist yet
    pub fn load(path: &Path) -> Result<Self> {
        match try_read_to_string(path) {
            Some(contents) => Ok(serde_json::from_str(&contents)?),
            None => {
                tracing::debug!(path = %path.display(), "no verified file yet, starting empty");
                Ok(Self::default())
            }
        }
    }

    pub fn save(&mut self, path: &Path) -> Result<()> {
        self.meta.last_updated = Utc::now();
        let json = serde_json::to_string_pretty(self)?;
        write_string(path, &json)?;
        Ok(())
    }

    pub fn set_player(&mut self, name: &str, steps: Vec<ChainStep>) {
        self.players.insert(name.to_string(), steps);
    }
}
