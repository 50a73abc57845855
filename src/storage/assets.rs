//! Draft pick and trade asset operations

use super::{models::*, queries::row_to_trade, schema::TradeTreeDatabase};
use crate::cli::types::{AssetId, AssetKind, PickId, PlayerId, TeamAbbr, TeamId, TradeId};
use crate::{Result, TradeTreeError};
use rusqlite::{params, OptionalExtension, Row};

const ASSET_COLUMNS: &str = "a.id, a.trade_id, a.team_from_id, a.team_to_id, a.asset_type,
                             a.player_id, a.pick_id, a.pick_year, a.pick_round, a.pick_number";

const PICK_COLUMNS: &str =
    "id, year, round, number, original_team_id, current_team_id, player_id";

impl TradeTreeDatabase {
    /// Insert a draft pick, or update holder/number/selection of the pick with
    /// the same `(year, round, original_team)`.
    pub fn upsert_draft_pick(&mut self, pick: &NewDraftPick) -> Result<PickId> {
        let original = self.require_team_id(&pick.original_team)?;
        let current = self.require_team_id(&pick.current_team)?;

        self.conn.execute(
            "INSERT INTO draft_picks
             (year, round, number, original_team_id, current_team_id, player_id)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)
             ON CONFLICT (year, round, original_team_id) DO UPDATE SET
                current_team_id = excluded.current_team_id,
                number = COALESCE(excluded.number, number),
                player_id = COALESCE(excluded.player_id, player_id)",
            params![
                pick.year,
                pick.round,
                pick.number,
                original.as_i64(),
                current.as_i64(),
                pick.player_id.map(|p| p.as_i64())
            ],
        )?;

        let id = self.conn.query_row(
            "SELECT id FROM draft_picks WHERE year = ?1 AND round = ?2 AND original_team_id = ?3",
            params![pick.year, pick.round, original.as_i64()],
            |row| row.get::<_, i64>(0),
        )?;
        Ok(PickId::new(id))
    }

    pub fn get_draft_pick(&self, id: PickId) -> Result<Option<DraftPick>> {
        let pick = self
            .conn
            .query_row(
                &format!("SELECT {PICK_COLUMNS} FROM draft_picks WHERE id = ?1"),
                params![id.as_i64()],
                row_to_draft_pick,
            )
            .optional()?;
        Ok(pick)
    }

    /// The pick a player was selected with, if recorded
    pub fn draft_pick_for_player(&self, player_id: PlayerId) -> Result<Option<DraftPick>> {
        let pick = self
            .conn
            .query_row(
                &format!(
                    "SELECT {PICK_COLUMNS} FROM draft_picks WHERE player_id = ?1 ORDER BY id LIMIT 1"
                ),
                params![player_id.as_i64()],
                row_to_draft_pick,
            )
            .optional()?;
        Ok(pick)
    }

    pub fn list_draft_picks(&self) -> Result<Vec<DraftPick>> {
        let mut stmt = self
            .conn
            .prepare(&format!("SELECT {PICK_COLUMNS} FROM draft_picks ORDER BY id"))?;
        let rows = stmt.query_map([], row_to_draft_pick)?;

        let mut picks = Vec::new();
        for row in rows {
            picks.push(row?);
        }
        Ok(picks)
    }

    /// Record an asset moving between two teams in a trade.
    ///
    /// Re-adding an identical asset returns the existing row.
    pub fn add_trade_asset(
        &mut self,
        trade_id: TradeId,
        team_from: &TeamAbbr,
        team_to: &TeamAbbr,
        asset: &Asset,
    ) -> Result<AssetId> {
        if team_from == team_to {
            return Err(TradeTreeError::InvalidAsset {
                reason: format!("{} cannot trade an asset to itself", team_from),
            });
        }

        let from = self.require_team_id(team_from)?;
        let to = self.require_team_id(team_to)?;

        let (player_id, pick_id, year, round, number) = match asset {
            Asset::Player { player_id } => (Some(player_id.as_i64()), None, None, None, None),
            Asset::Pick(pick) => (
                None,
                pick.pick_id.map(|p| p.as_i64()),
                Some(pick.year),
                Some(pick.round),
                pick.number,
            ),
        };

        let existing = self
            .conn
            .query_row(
                "SELECT id FROM trade_assets
                 WHERE trade_id = ?1 AND team_from_id = ?2 AND team_to_id = ?3
                   AND asset_type = ?4 AND player_id IS ?5 AND pick_id IS ?6
                   AND pick_year IS ?7 AND pick_round IS ?8 AND pick_number IS ?9",
                params![
                    trade_id.as_i64(),
                    from.as_i64(),
                    to.as_i64(),
                    asset.kind().as_str(),
                    player_id,
                    pick_id,
                    year,
                    round,
                    number
                ],
                |row| row.get::<_, i64>(0),
            )
            .optional()?;

        if let Some(id) = existing {
            return Ok(AssetId::new(id));
        }

        self.conn.execute(
            "INSERT INTO trade_assets
             (trade_id, team_from_id, team_to_id, asset_type, player_id, pick_id,
              pick_year, pick_round, pick_number)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            params![
                trade_id.as_i64(),
                from.as_i64(),
                to.as_i64(),
                asset.kind().as_str(),
                player_id,
                pick_id,
                year,
                round,
                number
            ],
        )?;
        Ok(AssetId::new(self.conn.last_insert_rowid()))
    }

    /// All assets of one trade, in insertion order
    pub fn trade_assets(&self, trade_id: TradeId) -> Result<Vec<TradeAsset>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {ASSET_COLUMNS} FROM trade_assets a WHERE a.trade_id = ?1 ORDER BY a.id"
        ))?;
        let rows = stmt.query_map(params![trade_id.as_i64()], |row| row_to_asset(row, 0))?;

        let mut assets = Vec::new();
        for row in rows {
            assets.push(row?);
        }
        Ok(assets)
    }

    /// Every trade that moved a pick, oldest first, with the moving asset
    pub fn pick_movements(&self, pick_id: PickId) -> Result<Vec<(Trade, TradeAsset)>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT t.id, t.date, t.description, t.source_url, {ASSET_COLUMNS}
             FROM trade_assets a
             JOIN trades t ON a.trade_id = t.id
             WHERE a.pick_id = ?1
             ORDER BY t.date ASC, a.id ASC"
        ))?;
        let rows = stmt.query_map(params![pick_id.as_i64()], |row| {
            Ok((row_to_trade(row)?, row_to_asset(row, 4)?))
        })?;

        let mut movements = Vec::new();
        for row in rows {
            movements.push(row?);
        }
        Ok(movements)
    }

    /// Holders of a pick from its original team through each recorded trade.
    ///
    /// The trail stops early at a movement whose sender is not the current
    /// holder; `check_integrity` reports such picks.
    pub fn pick_ownership_trail(&self, pick_id: PickId) -> Result<Vec<TeamId>> {
        let Some(pick) = self.get_draft_pick(pick_id)? else {
            return Ok(Vec::new());
        };

        let mut trail = vec![pick.original_team_id];
        for (trade, asset) in self.pick_movements(pick_id)? {
            let holder = trail[trail.len() - 1];
            if asset.team_from != holder {
                tracing::debug!(pick = %pick_id, trade = %trade.id, "pick moved by a team that did not hold it");
                break;
            }
            trail.push(asset.team_to);
        }
        Ok(trail)
    }
}

pub(crate) fn row_to_draft_pick(row: &Row) -> rusqlite::Result<DraftPick> {
    Ok(DraftPick {
        id: PickId::new(row.get(0)?),
        year: row.get(1)?,
        round: row.get(2)?,
        number: row.get(3)?,
        original_team_id: TeamId::new(row.get(4)?),
        current_team_id: TeamId::new(row.get(5)?),
        player_id: row.get::<_, Option<i64>>(6)?.map(PlayerId::new),
    })
}

/// Map `ASSET_COLUMNS` starting at column `offset`
pub(crate) fn row_to_asset(row: &Row, offset: usize) -> rusqlite::Result<TradeAsset> {
    let kind: String = row.get(offset + 4)?;
    let asset = if kind == AssetKind::Player.as_str() {
        let player_id: Option<i64> = row.get(offset + 5)?;
        let player_id = player_id.ok_or_else(|| {
            rusqlite::Error::InvalidColumnType(offset + 5, "player_id".to_string(), rusqlite::types::Type::Null)
        })?;
        Asset::Player {
            player_id: PlayerId::new(player_id),
        }
    } else {
        Asset::Pick(PickRef {
            pick_id: row.get::<_, Option<i64>>(offset + 6)?.map(PickId::new),
            year: row.get::<_, Option<u16>>(offset + 7)?.unwrap_or_default(),
            round: row.get::<_, Option<u8>>(offset + 8)?.unwrap_or_default(),
            number: row.get(offset + 9)?,
        })
    };

    Ok(TradeAsset {
        id: AssetId::new(row.get(offset)?),
        trade_id: TradeId::new(row.get(offset + 1)?),
        team_from: TeamId::new(row.get(offset + 2)?),
        team_to: TeamId::new(row.get(offset + 3)?),
        asset,
    })
}
