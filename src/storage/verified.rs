//! Externally verified transaction histories

use super::{models::*, schema::TradeTreeDatabase};
use crate::cli::types::PlayerId;
use crate::Result;
use chrono::{DateTime, Utc};
use rusqlite::{params, OptionalExtension};

impl TradeTreeDatabase {
    /// Replace the verified history of a player
    pub fn save_verified_transactions(
        &mut self,
        player_id: PlayerId,
        steps: &[ChainStep],
        source: &str,
    ) -> Result<()> {
        let chain_json = serde_json::to_string(steps)?;
        let now = Utc::now().to_rfc3339();

        let tx = self.conn.transaction()?;
        tx.execute(
            "DELETE FROM verified_transactions WHERE player_id = ?1",
            params![player_id.as_i64()],
        )?;
        tx.execute(
            "INSERT INTO verified_transactions (player_id, chain_json, source, last_updated)
             VALUES (?1, ?2, ?3, ?4)",
            params![player_id.as_i64(), chain_json, source, now],
        )?;
        tx.commit()?;
        Ok(())
    }

    pub fn get_verified_transactions(
        &self,
        player_id: PlayerId,
    ) -> Result<Option<VerifiedTransactions>> {
        let row = self
            .conn
            .query_row(
                "SELECT chain_json, source, last_updated FROM verified_transactions
                 WHERE player_id = ?1",
                params![player_id.as_i64()],
                |row| {
                    Ok((
                        row.get::<_, String>(0)?,
                        row.get::<_, String>(1)?,
                        row.get::<_, String>(2)?,
                    ))
                },
            )
            .optional()?;

        let Some((json, source, last_updated)) = row else {
            return Ok(None);
        };

        Ok(Some(VerifiedTransactions {
            player_id,
            steps: serde_json::from_str(&json)?,
            source,
            last_updated: DateTime::parse_from_rfc3339(&last_updated)?.with_timezone(&Utc),
        }))
    }
}
