//! Seeding the store with teams and the well-known trade trees.
//!
//! Every step goes through the store's idempotent upserts, so seeding an
//! already seeded database changes nothing. Chains are never written from
//! the tables here; they are derived from the seeded rows.

pub mod data;


use crate::cli::types::{PickId, PlayerId, TeamAbbr, TradeId};
use crate::storage::{
    Asset, NewAcquisition, NewDraftPick, NewPlayer, NewTeam, NewTrade, PickRef, TradeTreeDatabase,
};
use crate::{Result, TradeTreeError};
use chrono::NaiveDate;
use data::{AssetSeed, PickKey, ACQUISITIONS, PICKS, PLAYERS, TEAMS, TRADES};
use serde::Serialize;
use std::collections::HashMap;

/// What a seeding run touched
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SeedSummary {
    pub teams: usize,
    pub players: usize,
    pub trades: usize,
    pub draft_picks: usize,
    pub trade_assets: usize,
    /// Acquisitions written by this run; existing ones are kept
    pub new_acquisitions: usize,
    /// Chains derived by this run for players that had none
    pub new_chains: usize,
}

fn parse_date(s: &str) -> Result<NaiveDate> {
    Ok(NaiveDate::parse_from_str(s, "%Y-%m-%d")?)
}

fn abbr(s: &str) -> Result<TeamAbbr> {
    s.parse()
}

/// Ids of the rows created from the static tables, by their seed handles
#[derive(Default)]
struct SeededIds {
    players: HashMap<&'static str, PlayerId>,
    trades: HashMap<&'static str, TradeId>,
    picks: HashMap<PickKey, (PickId, Option<u16>)>,
}

impl SeededIds {
    fn player(&self, name: &str) -> Result<PlayerId> {
        self.players
            .get(name)
            .copied()
            .ok_or_else(|| TradeTreeError::PlayerNotFound {
                name: name.to_string(),
            })
    }

    fn trade(&self, key: &str) -> Result<TradeId> {
        self.trades.get(key).copied().ok_or_else(|| TradeTreeError::InvalidAsset {
            reason: format!("unknown seed trade {}", key),
        })
    }

    fn pick(&self, key: &PickKey) -> Result<(PickId, Option<u16>)> {
        self.picks.get(key).copied().ok_or_else(|| TradeTreeError::InvalidAsset {
            reason: format!("unknown seed pick {} {}", key.year, key.original),
        })
    }
}

/// Seed teams, players, trades, picks, assets and acquisitions, then derive
/// chains for players that have none yet.
pub fn seed_database(db: &mut TradeTreeDatabase) -> Result<SeedSummary> {
    let mut summary = SeedSummary::default();
    let mut ids = SeededIds::default();

    for team in TEAMS {
        db.upsert_team(&NewTeam {
            abbreviation: abbr(team.abbr)?,
            name: team.name.to_string(),
            primary_color: team.primary.to_string(),
            secondary_color: team.secondary.to_string(),
        })?;
        summary.teams += 1;
    }

    for player in PLAYERS {
        let id = db.upsert_player(&NewPlayer {
            name: player.name.to_string(),
            team: Some(abbr(player.team)?),
            draft_year: player.draft.map(|(year, _, _)| year),
            draft_round: player.draft.map(|(_, round, _)| round),
            draft_pick: player.draft.map(|(_, _, pick)| pick),
            headshot_url: player.headshot.map(str::to_string),
        })?;
        ids.players.insert(player.name, id);
        summary.players += 1;
    }

    for trade in TRADES {
        let id = db.upsert_trade(&NewTrade {
            date: parse_date(trade.date)?,
            description: trade.description.to_string(),
            source_url: trade.source_url.map(str::to_string),
        })?;
        ids.trades.insert(trade.key, id);
        summary.trades += 1;
    }

    for pick in PICKS {
        let player_id = pick.player.map(|name| ids.player(name)).transpose()?;
        let id = db.upsert_draft_pick(&NewDraftPick {
            year: pick.key.year,
            round: pick.key.round,
            number: pick.number,
            original_team: abbr(pick.key.original)?,
            current_team: abbr(pick.current)?,
            player_id,
        })?;
        ids.picks.insert(pick.key, (id, pick.number));
        summary.draft_picks += 1;
    }

    for trade in TRADES {
        let trade_id = ids.trade(trade.key)?;
        for asset in trade.assets {
            let (from, to, asset) = match asset {
                AssetSeed::Player { name, from, to } => (
                    from,
                    to,
                    Asset::Player {
                        player_id: ids.player(name)?,
                    },
                ),
                AssetSeed::Pick { key, from, to } => {
                    let (pick_id, number) = ids.pick(key)?;
                    (
                        from,
                        to,
                        Asset::Pick(PickRef {
                            year: key.year,
                            round: key.round,
                            number,
                            pick_id: Some(pick_id),
                        }),
                    )
                }
            };
            db.add_trade_asset(trade_id, &abbr(from)?, &abbr(to)?, &asset)?;
            summary.trade_assets += 1;
        }
    }

    let mut acquired = Vec::new();
    for acquisition in ACQUISITIONS {
        let player_id = ids.player(acquisition.player)?;
        let written = db.record_acquisition(&NewAcquisition {
            player_id,
            team: abbr(acquisition.team)?,
            acquisition_type: acquisition.kind,
            date: parse_date(acquisition.date)?,
            trade_id: acquisition.trade.map(|key| ids.trade(key)).transpose()?,
            origin_trade_id: acquisition.origin.map(|key| ids.trade(key)).transpose()?,
            pick_id: acquisition
                .pick
                .map(|key| ids.pick(&key).map(|(id, _)| id))
                .transpose()?,
            notes: acquisition.notes.map(str::to_string),
        })?;
        if written {
            summary.new_acquisitions += 1;
        }
        acquired.push(player_id);
    }

    for player_id in acquired {
        if db.get_trade_chain(player_id)?.is_some() {
            continue;
        }
        if db.rebuild_trade_chain(player_id)? > 0 {
            summary.new_chains += 1;
        }
    }

    tracing::info!(
        teams = summary.teams,
        players = summary.players,
        trades = summary.trades,
        acquisitions = summary.new_acquisitions,
        chains = summary.new_chains,
        "seeded database"
    );
    Ok(summary)
}
