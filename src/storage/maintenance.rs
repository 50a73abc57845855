//! Integrity checks, duplicate merging and housekeeping

use super::{models::*, schema::TradeTreeDatabase};
use crate::cli::types::{AssetId, PlayerId};
use crate::Result;
use rusqlite::params;

/// Tables in child-before-parent order, safe for bulk deletes
const TABLES: [&str; 8] = [
    "verified_transactions",
    "trade_chains",
    "acquisitions",
    "trade_assets",
    "draft_picks",
    "players",
    "trades",
    "teams",
];

impl TradeTreeDatabase {
    /// Report referential and pick-ownership problems
    pub fn check_integrity(&self) -> Result<IntegrityReport> {
        let orphaned_acquisitions = self.player_ids(
            "SELECT a.player_id FROM acquisitions a
             LEFT JOIN trades t ON a.origin_trade_id = t.id
             LEFT JOIN players p ON a.player_id = p.id
             WHERE (a.origin_trade_id IS NOT NULL AND t.id IS NULL) OR p.id IS NULL
             ORDER BY a.player_id",
        )?;

        let orphaned_chains = self.player_ids(
            "SELECT c.resulting_player_id FROM trade_chains c
             LEFT JOIN trades t ON c.origin_trade_id = t.id
             LEFT JOIN players p ON c.resulting_player_id = p.id
             WHERE t.id IS NULL OR p.id IS NULL
             ORDER BY c.resulting_player_id",
        )?;

        let mut stmt = self
            .conn
            .prepare("SELECT id FROM trade_assets WHERE team_from_id = team_to_id ORDER BY id")?;
        let rows = stmt.query_map([], |row| row.get::<_, i64>(0))?;
        let mut invalid_assets = Vec::new();
        for row in rows {
            invalid_assets.push(AssetId::new(row?));
        }

        let mut broken_pick_trails = Vec::new();
        for pick in self.list_draft_picks()? {
            let movements = self.pick_movements(pick.id)?.len();
            let trail = self.pick_ownership_trail(pick.id)?;
            let complete = trail.len() == movements + 1;
            let reaches_holder = trail.last() == Some(&pick.current_team_id);
            if !(complete && reaches_holder) {
                tracing::warn!(pick = %pick.id, year = pick.year, "pick ownership trail is broken");
                broken_pick_trails.push(pick.id);
            }
        }

        Ok(IntegrityReport {
            orphaned_acquisitions,
            orphaned_chains,
            invalid_assets,
            broken_pick_trails,
        })
    }

    pub fn table_counts(&self) -> Result<TableCounts> {
        let count = |table: &str| -> Result<usize> {
            let n: i64 =
                self.conn
                    .query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |row| row.get(0))?;
            Ok(n as usize)
        };

        Ok(TableCounts {
            teams: count("teams")?,
            players: count("players")?,
            trades: count("trades")?,
            trade_assets: count("trade_assets")?,
            draft_picks: count("draft_picks")?,
            acquisitions: count("acquisitions")?,
            trade_chains: count("trade_chains")?,
            verified_transactions: count("verified_transactions")?,
        })
    }

    /// Names held by more than one player row
    pub fn find_duplicate_players(&self) -> Result<Vec<DuplicatePlayers>> {
        let mut stmt = self.conn.prepare(
            "SELECT name FROM players GROUP BY name HAVING COUNT(*) > 1 ORDER BY name",
        )?;
        let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;
        let mut names = Vec::new();
        for row in rows {
            names.push(row?);
        }

        let mut ids_stmt = self
            .conn
            .prepare("SELECT id FROM players WHERE name = ?1 ORDER BY id")?;
        let mut duplicates = Vec::new();
        for name in names {
            let rows = ids_stmt.query_map(params![name], |row| row.get::<_, i64>(0))?;
            let mut ids = Vec::new();
            for row in rows {
                ids.push(PlayerId::new(row?));
            }
            duplicates.push(DuplicatePlayers { name, ids });
        }
        Ok(duplicates)
    }

    /// Collapse same-name players onto the lowest id.
    ///
    /// References are repointed; acquisition, chain and verified rows move
    /// over only where the kept player has none. Runs in one transaction and
    /// returns the number of player rows removed.
    pub fn merge_duplicate_players(&mut self) -> Result<usize> {
        let duplicates = self.find_duplicate_players()?;
        if duplicates.is_empty() {
            return Ok(0);
        }

        let tx = self.conn.transaction()?;
        let mut removed = 0;

        for group in &duplicates {
            let Some((keep, rest)) = group.ids.split_first() else {
                continue;
            };
            let keep = keep.as_i64();

            for dup in rest {
                let dup = dup.as_i64();
                tx.execute(
                    "UPDATE trade_assets SET player_id = ?1 WHERE player_id = ?2",
                    params![keep, dup],
                )?;
                tx.execute(
                    "UPDATE draft_picks SET player_id = ?1 WHERE player_id = ?2",
                    params![keep, dup],
                )?;

                for (table, column) in [
                    ("acquisitions", "player_id"),
                    ("trade_chains", "resulting_player_id"),
                    ("verified_transactions", "player_id"),
                ] {
                    tx.execute(
                        &format!("UPDATE OR IGNORE {table} SET {column} = ?1 WHERE {column} = ?2"),
                        params![keep, dup],
                    )?;
                    tx.execute(
                        &format!("DELETE FROM {table} WHERE {column} = ?1"),
                        params![dup],
                    )?;
                }

                tx.execute(
                    "UPDATE players SET
                        current_team_id = COALESCE(current_team_id, (SELECT current_team_id FROM players WHERE id = ?2)),
                        draft_year = COALESCE(draft_year, (SELECT draft_year FROM players WHERE id = ?2)),
                        draft_round = COALESCE(draft_round, (SELECT draft_round FROM players WHERE id = ?2)),
                        draft_pick = COALESCE(draft_pick, (SELECT draft_pick FROM players WHERE id = ?2)),
                        headshot_url = COALESCE(headshot_url, (SELECT headshot_url FROM players WHERE id = ?2))
                     WHERE id = ?1",
                    params![keep, dup],
                )?;
                removed += tx.execute("DELETE FROM players WHERE id = ?1", params![dup])?;
            }

            tracing::info!(name = %group.name, kept = keep, merged = rest.len(), "merged duplicate players");
        }

        tx.commit()?;
        Ok(removed)
    }

    /// Delete every row from every table
    pub fn clear_all_data(&mut self) -> Result<()> {
        for table in TABLES {
            self.conn.execute(&format!("DELETE FROM {}", table), [])?;
        }
        self.team_cache.borrow_mut().clear();
        Ok(())
    }

    fn player_ids(&self, sql: &str) -> Result<Vec<PlayerId>> {
        let mut stmt = self.conn.prepare(sql)?;
        let rows = stmt.query_map([], |row| row.get::<_, i64>(0))?;

        let mut ids = Vec::new();
        for row in rows {
            ids.push(PlayerId::new(row?));
        }
        Ok(ids)
    }
}

