//! Data models for the storage layer

use crate::cli::types::{
    AcquisitionType, AssetId, AssetKind, PickId, PlayerId, TeamAbbr, TeamId, TradeId,
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Team reference data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub abbreviation: TeamAbbr,
    pub name: String,
    pub primary_color: Option<String>,
    pub secondary_color: Option<String>,
}

/// Team to be inserted; existing rows are never overwritten
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTeam {
    pub abbreviation: TeamAbbr,
    pub name: String,
    pub primary_color: String,
    pub secondary_color: String,
}

/// Player information stored in the database
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub current_team_id: Option<TeamId>,
    pub draft_year: Option<u16>,
    pub draft_round: Option<u8>,
    pub draft_pick: Option<u16>,
    pub headshot_url: Option<String>,
}

/// Player keyed by name for `upsert_player`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewPlayer {
    pub name: String,
    pub team: Option<TeamAbbr>,
    pub draft_year: Option<u16>,
    pub draft_round: Option<u8>,
    pub draft_pick: Option<u16>,
    pub headshot_url: Option<String>,
}

/// A single trade event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    pub id: TradeId,
    pub date: NaiveDate,
    pub description: String,
    pub source_url: Option<String>,
}

/// Trade keyed by `(date, description)` for `upsert_trade`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTrade {
    pub date: NaiveDate,
    pub description: String,
    pub source_url: Option<String>,
}

/// A draft pick as referenced from a trade asset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickRef {
    pub year: u16,
    pub round: u8,
    /// Unknown until the draft order is set
    pub number: Option<u16>,
    pub pick_id: Option<PickId>,
}

impl PickRef {
    /// Short label such as `2017 1st #3`
    pub fn label(&self) -> String {
        let round = match self.round {
            1 => "1st".to_string(),
            2 => "2nd".to_string(),
            r => format!("round {}", r),
        };
        match self.number {
            Some(n) => format!("{} {} #{}", self.year, round, n),
            None => format!("{} {}", self.year, round),
        }
    }
}

/// What moves in a trade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Asset {
    Player { player_id: PlayerId },
    Pick(PickRef),
}

impl Asset {
    pub fn kind(&self) -> AssetKind {
        match self {
            Asset::Player { .. } => AssetKind::Player,
            Asset::Pick(_) => AssetKind::Pick,
        }
    }
}

/// One asset changing hands within a trade
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeAsset {
    pub id: AssetId,
    pub trade_id: TradeId,
    pub team_from: TeamId,
    pub team_to: TeamId,
    pub asset: Asset,
}

/// A draft pick and who holds it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DraftPick {
    pub id: PickId,
    pub year: u16,
    pub round: u8,
    pub number: Option<u16>,
    pub original_team_id: TeamId,
    pub current_team_id: TeamId,
    pub player_id: Option<PlayerId>,
}

/// Draft pick keyed by `(year, round, original_team)`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewDraftPick {
    pub year: u16,
    pub round: u8,
    pub number: Option<u16>,
    pub original_team: TeamAbbr,
    pub current_team: TeamAbbr,
    pub player_id: Option<PlayerId>,
}

/// How a player joined their current team
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Acquisition {
    pub player_id: PlayerId,
    pub team_id: TeamId,
    pub acquisition_type: AcquisitionType,
    pub date: NaiveDate,
    /// Trade that moved the player (or their pick) directly
    pub trade_id: Option<TradeId>,
    /// Trade that started the chain leading to this player
    pub origin_trade_id: Option<TradeId>,
    pub pick_id: Option<PickId>,
    pub notes: Option<String>,
}

/// Acquisition to record; ignored when the player already has one
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAcquisition {
    pub player_id: PlayerId,
    pub team: TeamAbbr,
    pub acquisition_type: AcquisitionType,
    pub date: NaiveDate,
    pub trade_id: Option<TradeId>,
    pub origin_trade_id: Option<TradeId>,
    pub pick_id: Option<PickId>,
    pub notes: Option<String>,
}

/// One narrative step of a trade chain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainStep {
    pub event: String,
    pub date: NaiveDate,
    pub action: String,
}

/// Stored chain for a player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeChain {
    pub origin_trade_id: TradeId,
    pub player_id: PlayerId,
    pub steps: Vec<ChainStep>,
}

/// Externally sourced transaction history for a player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerifiedTransactions {
    pub player_id: PlayerId,
    pub steps: Vec<ChainStep>,
    pub source: String,
    pub last_updated: DateTime<Utc>,
}

/// Row of a player search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerSearchResult {
    pub id: PlayerId,
    pub name: String,
    pub draft_year: Option<u16>,
    pub draft_pick: Option<u16>,
    pub headshot_url: Option<String>,
    pub team_abbr: Option<TeamAbbr>,
    pub team_name: Option<String>,
    pub team_color: Option<String>,
}

/// Team as embedded in a lineage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamSummary {
    pub abbreviation: TeamAbbr,
    pub name: String,
    pub primary_color: Option<String>,
    pub secondary_color: Option<String>,
}

/// Player identity as embedded in a lineage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineagePlayer {
    pub id: PlayerId,
    pub name: String,
    pub draft_year: Option<u16>,
    pub draft_round: Option<u8>,
    pub draft_pick: Option<u16>,
    pub headshot_url: Option<String>,
    pub team: Option<TeamSummary>,
}

/// Date and description of the trade a lineage starts from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeSummary {
    pub id: TradeId,
    pub date: NaiveDate,
    pub description: String,
}

/// Acquisition as embedded in a lineage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineageAcquisition {
    pub acquisition_type: AcquisitionType,
    pub date: NaiveDate,
    pub trade_id: Option<TradeId>,
    pub origin_trade_id: Option<TradeId>,
    pub notes: Option<String>,
    pub origin_trade: Option<TradeSummary>,
}

/// Resolved acquisition chain for one player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerLineage {
    pub player: LineagePlayer,
    pub acquisition: Option<LineageAcquisition>,
    pub chain: Vec<ChainStep>,
}

impl PlayerLineage {
    /// Whether this lineage traces back to `root` through a non-empty chain
    pub fn has_full_lineage(&self, root: TradeId) -> bool {
        let from_root = self
            .acquisition
            .as_ref()
            .and_then(|a| a.origin_trade_id)
            .is_some_and(|id| id == root);
        from_root && !self.chain.is_empty()
    }
}

/// Row counts for every table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableCounts {
    pub teams: usize,
    pub players: usize,
    pub trades: usize,
    pub trade_assets: usize,
    pub draft_picks: usize,
    pub acquisitions: usize,
    pub trade_chains: usize,
    pub verified_transactions: usize,
}

/// Players sharing one name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuplicatePlayers {
    pub name: String,
    /// Ascending; the first id is the one kept by a merge
    pub ids: Vec<PlayerId>,
}

/// Referential and lineage problems found in the store
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntegrityReport {
    /// Acquisitions whose origin trade does not exist
    pub orphaned_acquisitions: Vec<PlayerId>,
    /// Chains whose player or origin trade does not exist
    pub orphaned_chains: Vec<PlayerId>,
    /// Assets moving between the same team
    pub invalid_assets: Vec<AssetId>,
    /// Picks whose current team cannot be reached from the original team
    pub broken_pick_trails: Vec<PickId>,
}

impl IntegrityReport {
    pub fn problem_count(&self) -> usize {
        self.orphaned_acquisitions.len()
            + self.orphaned_chains.len()
            + self.invalid_assets.len()
            + self.broken_pick_trails.len()
    }

    pub fn is_clean(&self) -> bool {
        self.problem_count() == 0
    }
}
