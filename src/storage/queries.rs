//! Basic database query operations for teams, players and trades

use super::{models::*, schema::TradeTreeDatabase};
use crate::cli::types::{PlayerId, TeamAbbr, TeamId, TradeId};
use crate::{Result, TradeTreeError};
use chrono::NaiveDate;
use rusqlite::{params, OptionalExtension, Row};

/// Searches shorter than this return nothing.
const MIN_SEARCH_LEN: usize = 2;

impl TradeTreeDatabase {
    /// Look up a team's id by abbreviation
    pub fn team_id(&self, abbr: &TeamAbbr) -> Result<Option<TeamId>> {
        if let Some(id) = self.team_cache.borrow_mut().get(abbr) {
            return Ok(Some(*id));
        }

        let id = self
            .conn
            .query_row(
                "SELECT id FROM teams WHERE abbreviation = ?1",
                params![abbr],
                |row| row.get::<_, i64>(0),
            )
            .optional()?
            .map(TeamId::new);

        if let Some(id) = id {
            self.team_cache.borrow_mut().put(abbr.clone(), id);
        }
        Ok(id)
    }

    pub(crate) fn require_team_id(&self, abbr: &TeamAbbr) -> Result<TeamId> {
        self.team_id(abbr)?
            .ok_or_else(|| TradeTreeError::TeamNotFound {
                abbr: abbr.to_string(),
            })
    }

    /// Insert a team if its abbreviation is new. Existing teams are left untouched.
    pub fn upsert_team(&mut self, team: &NewTeam) -> Result<TeamId> {
        self.conn.execute(
            "INSERT OR IGNORE INTO teams (abbreviation, name, primary_color, secondary_color)
             VALUES (?1, ?2, ?3, ?4)",
            params![
                team.abbreviation,
                team.name,
                team.primary_color,
                team.secondary_color
            ],
        )?;
        self.require_team_id(&team.abbreviation)
    }

    pub fn get_team(&self, id: TeamId) -> Result<Option<Team>> {
        let team = self
            .conn
            .query_row(
                "SELECT id, abbreviation, name, primary_color, secondary_color
                 FROM teams WHERE id = ?1",
                params![id.as_i64()],
                row_to_team,
            )
            .optional()?;
        Ok(team)
    }

    pub fn list_teams(&self) -> Result<Vec<Team>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, abbreviation, name, primary_color, secondary_color
             FROM teams ORDER BY abbreviation",
        )?;
        let rows = stmt.query_map([], row_to_team)?;

        let mut teams = Vec::new();
        for row in rows {
            teams.push(row?);
        }
        Ok(teams)
    }

    /// Insert a player, or fill in team and headshot of the player with the same name.
    ///
    /// Name is the natural key, so two different players sharing a name
    /// collapse into one row; see `find_duplicate_players` for the reverse case.
    pub fn upsert_player(&mut self, player: &NewPlayer) -> Result<PlayerId> {
        let team_id = match &player.team {
            Some(abbr) => {
                let id = self.team_id(abbr)?;
                if id.is_none() {
                    tracing::warn!(player = %player.name, team = %abbr, "unknown team, leaving player team unchanged");
                }
                id
            }
            None => None,
        };

        let existing = self
            .conn
            .query_row(
                "SELECT id FROM players WHERE name = ?1 ORDER BY id LIMIT 1",
                params![player.name],
                |row| row.get::<_, i64>(0),
            )
            .optional()?;

        match existing {
            Some(id) => {
                // A missing team or headshot means "not discovered", not "remove it".
                self.conn.execute(
                    "UPDATE players
                     SET current_team_id = COALESCE(?1, current_team_id),
                         headshot_url = COALESCE(?2, headshot_url)
                     WHERE id = ?3",
                    params![team_id.map(|t| t.as_i64()), player.headshot_url, id],
                )?;
                Ok(PlayerId::new(id))
            }
            None => {
                self.conn.execute(
                    "INSERT INTO players
                     (name, current_team_id, draft_year, draft_round, draft_pick, headshot_url)
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                    params![
                        player.name,
                        team_id.map(|t| t.as_i64()),
                        player.draft_year,
                        player.draft_round,
                        player.draft_pick,
                        player.headshot_url
                    ],
                )?;
                Ok(PlayerId::new(self.conn.last_insert_rowid()))
            }
        }
    }

    /// Fill in draft details discovered after the player was created
    pub fn update_player_draft_info(
        &mut self,
        id: PlayerId,
        year: Option<u16>,
        round: Option<u8>,
        pick: Option<u16>,
    ) -> Result<()> {
        self.conn.execute(
            "UPDATE players
             SET draft_year = COALESCE(?1, draft_year),
                 draft_round = COALESCE(?2, draft_round),
                 draft_pick = COALESCE(?3, draft_pick)
             WHERE id = ?4",
            params![year, round, pick, id.as_i64()],
        )?;
        Ok(())
    }

    pub fn get_player(&self, id: PlayerId) -> Result<Option<Player>> {
        let player = self
            .conn
            .query_row(
                "SELECT id, name, current_team_id, draft_year, draft_round, draft_pick, headshot_url
                 FROM players WHERE id = ?1",
                params![id.as_i64()],
                row_to_player,
            )
            .optional()?;
        Ok(player)
    }

    /// Exact name lookup; the lowest id wins if the name is duplicated
    pub fn find_player_by_name(&self, name: &str) -> Result<Option<Player>> {
        let player = self
            .conn
            .query_row(
                "SELECT id, name, current_team_id, draft_year, draft_round, draft_pick, headshot_url
                 FROM players WHERE name = ?1 ORDER BY id LIMIT 1",
                params![name],
                row_to_player,
            )
            .optional()?;
        Ok(player)
    }

    /// Player names in insertion order, optionally capped
    pub fn list_player_names(&self, limit: Option<usize>) -> Result<Vec<String>> {
        let limit = limit.map(|l| l as i64).unwrap_or(-1);
        let mut stmt = self
            .conn
            .prepare("SELECT name FROM players ORDER BY id LIMIT ?1")?;
        let rows = stmt.query_map(params![limit], |row| row.get::<_, String>(0))?;

        let mut names = Vec::new();
        for row in rows {
            names.push(row?);
        }
        Ok(names)
    }

    /// Current team abbreviation per player name
    pub fn player_teams(&self) -> Result<Vec<(String, Option<TeamAbbr>)>> {
        let mut stmt = self.conn.prepare(
            "SELECT p.name, t.abbreviation
             FROM players p
             LEFT JOIN teams t ON p.current_team_id = t.id
             ORDER BY p.id",
        )?;
        let rows = stmt.query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?;

        let mut result = Vec::new();
        for row in rows {
            result.push(row?);
        }
        Ok(result)
    }

    /// Case-insensitive name search for interactive lookups
    pub fn search_players(&self, query: &str, limit: usize) -> Result<Vec<PlayerSearchResult>> {
        let query = query.trim();
        if query.chars().count() < MIN_SEARCH_LEN {
            return Ok(Vec::new());
        }

        let mut stmt = self.conn.prepare(
            "SELECT p.id, p.name, p.draft_year, p.draft_pick, p.headshot_url,
                    t.abbreviation, t.name, t.primary_color
             FROM players p
             LEFT JOIN teams t ON p.current_team_id = t.id
             WHERE p.name LIKE ?1
             ORDER BY p.name ASC, p.id ASC
             LIMIT ?2",
        )?;

        let pattern = format!("%{}%", query);
        let rows = stmt.query_map(params![pattern, limit as i64], |row| {
            Ok(PlayerSearchResult {
                id: PlayerId::new(row.get(0)?),
                name: row.get(1)?,
                draft_year: row.get(2)?,
                draft_pick: row.get(3)?,
                headshot_url: row.get(4)?,
                team_abbr: row.get(5)?,
                team_name: row.get(6)?,
                team_color: row.get(7)?,
            })
        })?;

        let mut results = Vec::new();
        for row in rows {
            results.push(row?);
        }
        Ok(results)
    }

    /// Return the trade with this exact `(date, description)`, inserting it if absent.
    ///
    /// No normalisation happens: a one-character difference in the
    /// description creates a second trade.
    pub fn upsert_trade(&mut self, trade: &NewTrade) -> Result<TradeId> {
        if let Some(id) = self.find_trade(trade.date, &trade.description)? {
            tracing::debug!(trade = %id, "trade already exists");
            return Ok(id);
        }

        self.conn.execute(
            "INSERT INTO trades (date, description, source_url) VALUES (?1, ?2, ?3)",
            params![trade.date, trade.description, trade.source_url],
        )?;
        Ok(TradeId::new(self.conn.last_insert_rowid()))
    }

    pub fn find_trade(&self, date: NaiveDate, description: &str) -> Result<Option<TradeId>> {
        let id = self
            .conn
            .query_row(
                "SELECT id FROM trades WHERE date = ?1 AND description = ?2 ORDER BY id LIMIT 1",
                params![date, description],
                |row| row.get::<_, i64>(0),
            )
            .optional()?
            .map(TradeId::new);
        Ok(id)
    }

    pub fn get_trade(&self, id: TradeId) -> Result<Option<Trade>> {
        let trade = self
            .conn
            .query_row(
                "SELECT id, date, description, source_url FROM trades WHERE id = ?1",
                params![id.as_i64()],
                row_to_trade,
            )
            .optional()?;
        Ok(trade)
    }
}

pub(crate) fn row_to_team(row: &Row) -> rusqlite::Result<Team> {
    Ok(Team {
        id: TeamId::new(row.get(0)?),
        abbreviation: row.get(1)?,
        name: row.get(2)?,
        primary_color: row.get(3)?,
        secondary_color: row.get(4)?,
    })
}

pub(crate) fn row_to_player(row: &Row) -> rusqlite::Result<Player> {
    Ok(Player {
        id: PlayerId::new(row.get(0)?),
        name: row.get(1)?,
        current_team_id: row.get::<_, Option<i64>>(2)?.map(TeamId::new),
        draft_year: row.get(3)?,
        draft_round: row.get(4)?,
        draft_pick: row.get(5)?,
        headshot_url: row.get(6)?,
    })
}

pub(crate) fn row_to_trade(row: &Row) -> rusqlite::Result<Trade> {
    Ok(Trade {
        id: TradeId::new(row.get(0)?),
        date: row.get(1)?,
        description: row.get(2)?,
        source_url: row.get(3)?,
    })
}
