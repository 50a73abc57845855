//! Acquisitions, stored trade chains and the lineage resolver

use super::{models::*, schema::TradeTreeDatabase};
use crate::cli::types::{PickId, PlayerId, TeamAbbr, TeamId, TradeId};
use crate::lineage::{derive_chain, ensure_chronological, ChainInputs, PickMovement};
use crate::{Result, TradeTreeError};
use rusqlite::{params, OptionalExtension};

impl TradeTreeDatabase {
    /// Record how a player joined a team, unless they already have an acquisition.
    ///
    /// Returns whether a row was written.
    pub fn record_acquisition(&mut self, acquisition: &NewAcquisition) -> Result<bool> {
        if self.get_acquisition(acquisition.player_id)?.is_some() {
            tracing::debug!(player = %acquisition.player_id, "acquisition already exists");
            return Ok(false);
        }

        let team_id = self.require_team_id(&acquisition.team)?;
        self.conn.execute(
            "INSERT INTO acquisitions
             (player_id, team_id, acquisition_type, date, trade_id, origin_trade_id, pick_id, notes)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                acquisition.player_id.as_i64(),
                team_id.as_i64(),
                acquisition.acquisition_type,
                acquisition.date,
                acquisition.trade_id.map(|t| t.as_i64()),
                acquisition.origin_trade_id.map(|t| t.as_i64()),
                acquisition.pick_id.map(|p| p.as_i64()),
                acquisition.notes
            ],
        )?;
        Ok(true)
    }

    pub fn get_acquisition(&self, player_id: PlayerId) -> Result<Option<Acquisition>> {
        let acquisition = self
            .conn
            .query_row(
                "SELECT player_id, team_id, acquisition_type, date, trade_id,
                        origin_trade_id, pick_id, notes
                 FROM acquisitions WHERE player_id = ?1",
                params![player_id.as_i64()],
                |row| {
                    Ok(Acquisition {
                        player_id: PlayerId::new(row.get(0)?),
                        team_id: TeamId::new(row.get(1)?),
                        acquisition_type: row.get(2)?,
                        date: row.get(3)?,
                        trade_id: row.get::<_, Option<i64>>(4)?.map(TradeId::new),
                        origin_trade_id: row.get::<_, Option<i64>>(5)?.map(TradeId::new),
                        pick_id: row.get::<_, Option<i64>>(6)?.map(PickId::new),
                        notes: row.get(7)?,
                    })
                },
            )
            .optional()?;
        Ok(acquisition)
    }

    /// Remove a player's acquisition so a corrected one can be recorded
    pub fn delete_acquisition(&mut self, player_id: PlayerId) -> Result<bool> {
        let removed = self.conn.execute(
            "DELETE FROM acquisitions WHERE player_id = ?1",
            params![player_id.as_i64()],
        )?;
        Ok(removed > 0)
    }

    /// Players that have an acquisition row, by id
    pub fn players_with_acquisitions(&self) -> Result<Vec<PlayerId>> {
        let mut stmt = self
            .conn
            .prepare("SELECT player_id FROM acquisitions ORDER BY player_id")?;
        let rows = stmt.query_map([], |row| row.get::<_, i64>(0))?;

        let mut ids = Vec::new();
        for row in rows {
            ids.push(PlayerId::new(row?));
        }
        Ok(ids)
    }

    /// Store a chain for a player unless one exists. Returns whether a row was written.
    ///
    /// Steps must be in non-decreasing date order.
    pub fn record_trade_chain(
        &mut self,
        origin_trade_id: TradeId,
        player_id: PlayerId,
        steps: &[ChainStep],
    ) -> Result<bool> {
        ensure_chronological(steps)?;

        if self.get_trade_chain(player_id)?.is_some() {
            tracing::debug!(player = %player_id, "trade chain already exists");
            return Ok(false);
        }

        let chain_json = serde_json::to_string(steps)?;
        self.conn.execute(
            "INSERT INTO trade_chains (origin_trade_id, resulting_player_id, chain_json)
             VALUES (?1, ?2, ?3)",
            params![origin_trade_id.as_i64(), player_id.as_i64(), chain_json],
        )?;
        Ok(true)
    }

    pub fn get_trade_chain(&self, player_id: PlayerId) -> Result<Option<TradeChain>> {
        let row = self
            .conn
            .query_row(
                "SELECT origin_trade_id, chain_json FROM trade_chains WHERE resulting_player_id = ?1",
                params![player_id.as_i64()],
                |row| Ok((row.get::<_, i64>(0)?, row.get::<_, String>(1)?)),
            )
            .optional()?;

        match row {
            Some((origin, json)) => Ok(Some(TradeChain {
                origin_trade_id: TradeId::new(origin),
                player_id,
                steps: serde_json::from_str(&json)?,
            })),
            None => Ok(None),
        }
    }

    pub fn delete_trade_chain(&mut self, player_id: PlayerId) -> Result<bool> {
        let removed = self.conn.execute(
            "DELETE FROM trade_chains WHERE resulting_player_id = ?1",
            params![player_id.as_i64()],
        )?;
        Ok(removed > 0)
    }

    /// Resolve the lineage of the first player (by id) whose name contains `name`.
    ///
    /// Matching is case-sensitive. A missing acquisition or chain leaves the
    /// corresponding field empty; an unknown player yields `None`.
    pub fn resolve_lineage(&self, name: &str) -> Result<Option<PlayerLineage>> {
        let player = self
            .conn
            .query_row(
                "SELECT p.id, p.name, p.draft_year, p.draft_round, p.draft_pick, p.headshot_url,
                        t.abbreviation, t.name, t.primary_color, t.secondary_color
                 FROM players p
                 LEFT JOIN teams t ON p.current_team_id = t.id
                 WHERE instr(p.name, ?1) > 0
                 ORDER BY p.id
                 LIMIT 1",
                params![name],
                |row| {
                    let team = match row.get::<_, Option<TeamAbbr>>(6)? {
                        Some(abbreviation) => Some(TeamSummary {
                            abbreviation,
                            name: row.get(7)?,
                            primary_color: row.get(8)?,
                            secondary_color: row.get(9)?,
                        }),
                        None => None,
                    };
                    Ok(LineagePlayer {
                        id: PlayerId::new(row.get(0)?),
                        name: row.get(1)?,
                        draft_year: row.get(2)?,
                        draft_round: row.get(3)?,
                        draft_pick: row.get(4)?,
                        headshot_url: row.get(5)?,
                        team,
                    })
                },
            )
            .optional()?;

        let Some(player) = player else {
            tracing::debug!(query = name, "no player matches");
            return Ok(None);
        };

        let acquisition = match self.get_acquisition(player.id)? {
            Some(acq) => {
                let origin_trade = match acq.origin_trade_id {
                    Some(id) => self.get_trade(id)?.map(|t| TradeSummary {
                        id: t.id,
                        date: t.date,
                        description: t.description,
                    }),
                    None => None,
                };
                Some(LineageAcquisition {
                    acquisition_type: acq.acquisition_type,
                    date: acq.date,
                    trade_id: acq.trade_id,
                    origin_trade_id: acq.origin_trade_id,
                    notes: acq.notes,
                    origin_trade,
                })
            }
            None => None,
        };

        let chain = self
            .get_trade_chain(player.id)?
            .map(|c| c.steps)
            .unwrap_or_default();

        Ok(Some(PlayerLineage {
            player,
            acquisition,
            chain,
        }))
    }

    /// Gather the rows a player's chain is derived from.
    ///
    /// `None` when the player has no acquisition.
    pub fn chain_inputs(&self, player_id: PlayerId) -> Result<Option<ChainInputs>> {
        let Some(acquisition) = self.get_acquisition(player_id)? else {
            return Ok(None);
        };
        let player = self
            .get_player(player_id)?
            .ok_or_else(|| TradeTreeError::PlayerNotFound {
                name: player_id.to_string(),
            })?;
        let team = self
            .get_team(acquisition.team_id)?
            .ok_or_else(|| TradeTreeError::TeamNotFound {
                abbr: acquisition.team_id.to_string(),
            })?;

        let origin_trade = match acquisition.origin_trade_id {
            Some(id) => Some(self.require_trade(id)?),
            None => None,
        };
        let direct_trade = match acquisition.trade_id {
            Some(id) => Some(self.require_trade(id)?),
            None => None,
        };

        let (pick_trades, draft_pick) = match acquisition.pick_id {
            Some(pick_id) => {
                let trades = self
                    .pick_movements(pick_id)?
                    .into_iter()
                    .map(|(trade, _)| trade)
                    .collect();
                (trades, self.get_draft_pick(pick_id)?)
            }
            None => (Vec::new(), self.draft_pick_for_player(player_id)?),
        };

        let mut trade_ids: Vec<TradeId> = Vec::new();
        for trade in origin_trade.iter().chain(direct_trade.iter()).chain(pick_trades.iter()) {
            if !trade_ids.contains(&trade.id) {
                trade_ids.push(trade.id);
            }
        }

        let mut pick_movements = Vec::new();
        for trade_id in trade_ids {
            for asset in self.trade_assets(trade_id)? {
                let Asset::Pick(pick) = asset.asset else {
                    continue;
                };
                pick_movements.push(PickMovement {
                    trade_id,
                    from: self.team_abbreviation(asset.team_from)?,
                    to: self.team_abbreviation(asset.team_to)?,
                    pick,
                });
            }
        }

        Ok(Some(ChainInputs {
            player_name: player.name,
            team: team.abbreviation,
            acquisition,
            origin_trade,
            direct_trade,
            pick_trades,
            pick_movements,
            draft_pick,
        }))
    }

    /// Chain derived from current rows, without touching `trade_chains`
    pub fn derive_chain_for(&self, player_id: PlayerId) -> Result<Option<Vec<ChainStep>>> {
        Ok(self.chain_inputs(player_id)?.map(|inputs| derive_chain(&inputs)))
    }

    /// Replace a player's stored chain with a freshly derived one.
    ///
    /// Returns the number of steps written; zero when the player has no
    /// origin trade or the derived chain is empty.
    pub fn rebuild_trade_chain(&mut self, player_id: PlayerId) -> Result<usize> {
        let Some(inputs) = self.chain_inputs(player_id)? else {
            return Ok(0);
        };
        let Some(origin) = inputs.acquisition.origin_trade_id else {
            return Ok(0);
        };

        let steps = derive_chain(&inputs);
        self.delete_trade_chain(player_id)?;
        if steps.is_empty() {
            return Ok(0);
        }

        self.record_trade_chain(origin, player_id, &steps)?;
        Ok(steps.len())
    }

    /// Rebuild chains for every player with an acquisition; returns chains written
    pub fn rebuild_all_trade_chains(&mut self) -> Result<usize> {
        let mut written = 0;
        for player_id in self.players_with_acquisitions()? {
            if self.rebuild_trade_chain(player_id)? > 0 {
                written += 1;
            }
        }
        tracing::info!(chains = written, "rebuilt trade chains");
        Ok(written)
    }

    fn require_trade(&self, id: TradeId) -> Result<Trade> {
        self.get_trade(id)?
            .ok_or(TradeTreeError::TradeNotFound { id: id.as_i64() })
    }

    fn team_abbreviation(&self, id: TeamId) -> Result<TeamAbbr> {
        self.get_team(id)?
            .map(|t| t.abbreviation)
            .ok_or_else(|| TradeTreeError::TeamNotFound {
                abbr: id.to_string(),
            })
    }
}

