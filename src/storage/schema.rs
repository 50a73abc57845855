//! Database schema and connection management

use crate::cli::types::{TeamAbbr, TeamId};
use crate::Result;
use lru::LruCache;
use rusqlite::Connection;
use std::cell::RefCell;
use std::num::NonZeroUsize;
use std::path::Path;

/// Enough slots for every franchise plus historical codes.
const TEAM_CACHE_CAPACITY: NonZeroUsize = match NonZeroUsize::new(64) {
    Some(n) => n,
    None => unreachable!(),
};

/// Full schema DDL; idempotent thanks to `IF NOT EXISTS`.
const SCHEMA: &str = "
PRAGMA foreign_keys = ON;

CREATE TABLE IF NOT EXISTS teams (
    id              INTEGER PRIMARY KEY AUTOINCREMENT,
    abbreviation    TEXT UNIQUE NOT NULL,
    name            TEXT NOT NULL,
    primary_color   TEXT,
    secondary_color TEXT
);

CREATE TABLE IF NOT EXISTS players (
    id              INTEGER PRIMARY KEY AUTOINCREMENT,
    name            TEXT NOT NULL,
    current_team_id INTEGER REFERENCES teams(id),
    draft_year      INTEGER,
    draft_round     INTEGER,
    draft_pick      INTEGER,
    headshot_url    TEXT
);

CREATE TABLE IF NOT EXISTS trades (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    date        TEXT NOT NULL,      -- YYYY-MM-DD
    description TEXT NOT NULL,
    source_url  TEXT
);

CREATE TABLE IF NOT EXISTS draft_picks (
    id               INTEGER PRIMARY KEY AUTOINCREMENT,
    year             INTEGER NOT NULL,
    round            INTEGER NOT NULL,
    number           INTEGER,
    original_team_id INTEGER NOT NULL REFERENCES teams(id),
    current_team_id  INTEGER NOT NULL REFERENCES teams(id),
    player_id        INTEGER REFERENCES players(id),
    UNIQUE (year, round, original_team_id)
);

CREATE TABLE IF NOT EXISTS trade_assets (
    id           INTEGER PRIMARY KEY AUTOINCREMENT,
    trade_id     INTEGER NOT NULL REFERENCES trades(id),
    team_from_id INTEGER NOT NULL REFERENCES teams(id),
    team_to_id   INTEGER NOT NULL REFERENCES teams(id),
    asset_type   TEXT NOT NULL CHECK (asset_type IN ('player', 'pick')),
    player_id    INTEGER REFERENCES players(id),
    pick_id      INTEGER REFERENCES draft_picks(id),
    pick_year    INTEGER,
    pick_round   INTEGER,
    pick_number  INTEGER,
    CHECK (team_from_id != team_to_id)
);

-- One row per player: the current acquisition, not a history.
CREATE TABLE IF NOT EXISTS acquisitions (
    id               INTEGER PRIMARY KEY AUTOINCREMENT,
    player_id        INTEGER NOT NULL UNIQUE REFERENCES players(id),
    team_id          INTEGER NOT NULL REFERENCES teams(id),
    acquisition_type TEXT NOT NULL CHECK (acquisition_type IN ('trade', 'draft', 'signing', 'waiver')),
    date             TEXT NOT NULL,
    trade_id         INTEGER REFERENCES trades(id),
    origin_trade_id  INTEGER REFERENCES trades(id),
    pick_id          INTEGER REFERENCES draft_picks(id),
    notes            TEXT
);

CREATE TABLE IF NOT EXISTS trade_chains (
    id                  INTEGER PRIMARY KEY AUTOINCREMENT,
    origin_trade_id     INTEGER NOT NULL REFERENCES trades(id),
    resulting_player_id INTEGER NOT NULL UNIQUE REFERENCES players(id),
    chain_json          TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS verified_transactions (
    id           INTEGER PRIMARY KEY AUTOINCREMENT,
    player_id    INTEGER NOT NULL UNIQUE REFERENCES players(id),
    chain_json   TEXT NOT NULL,
    source       TEXT NOT NULL,
    last_updated TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_players_name ON players(name);
CREATE UNIQUE INDEX IF NOT EXISTS idx_trades_natural_key ON trades(date, description);
CREATE INDEX IF NOT EXISTS idx_trade_assets_trade ON trade_assets(trade_id);
CREATE INDEX IF NOT EXISTS idx_trade_assets_pick ON trade_assets(pick_id);
";

/// Database connection manager for the trade tree store
pub struct TradeTreeDatabase {
    pub(crate) conn: Connection,
    /// Teams are never rewritten once inserted, so lookups can be cached.
    pub(crate) team_cache: RefCell<LruCache<TeamAbbr, TeamId>>,
}

impl TradeTreeDatabase {
    /// Open (or create) the database at `path` and ensure tables exist
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        tracing::debug!(path = %path.display(), "opening trade tree database");
        Self::from_connection(Connection::open(path)?)
    }

    /// Open an in-memory database, mainly for tests
    pub fn new_in_memory() -> Result<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        let db = Self {
            conn,
            team_cache: RefCell::new(LruCache::new(TEAM_CACHE_CAPACITY)),
        };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Initialize the database schema
    pub(crate) fn initialize_schema(&self) -> Result<()> {
        self.conn.execute_batch(SCHEMA)?;
        Ok(())
    }
}
