//! Transaction importers
//!
//! Best-effort scrapers for external transaction histories. A failed or
//! empty fetch means "no data from this source", never a hard error.
//!
//! - `bbref`: Basketball-Reference player pages (primary)
//! - `prosports`: ProSportsTransactions search (secondary)
//! - `parse`: Free-text transaction and draft lines
//! - `html`: Minimal HTML scanning

pub mod bbref;
pub mod html;
pub mod parse;
pub mod prosports;
pub mod types;

#[cfg(test)]
mod tests;

pub use bbref::BasketballReference;
pub use parse::{bbref_id, extract_date, parse_draft_text, parse_transaction_text};
pub use prosports::ProSportsTransactions;
pub use types::{DraftInfo, Transaction, TransactionKind, TransactionReport};

use crate::storage::{ChainStep, TradeTreeDatabase};
use crate::Result;
use chrono::NaiveDate;
use reqwest::Client;
use std::time::Duration;

/// Month and day used for draft steps; the exact draft night is not scraped
const DRAFT_MONTH: u32 = 6;
const DRAFT_DAY: u32 = 25;

/// A site that can report a player's transaction history
#[allow(async_fn_in_trait)]
pub trait TransactionSource {
    fn name(&self) -> &'static str;

    async fn fetch(&self, client: &Client, player: &str) -> Result<Option<TransactionReport>>;
}

/// Pauses between requests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Politeness {
    pub after_primary: Duration,
    pub after_secondary: Duration,
    pub between_players: Duration,
}

impl Default for Politeness {
    fn default() -> Self {
        Self {
            after_primary: Duration::from_secs(1),
            after_secondary: Duration::from_millis(500),
            between_players: Duration::from_secs(2),
        }
    }
}

impl Politeness {
    /// No waiting at all, for tests and offline runs
    pub fn none() -> Self {
        Self {
            after_primary: Duration::ZERO,
            after_secondary: Duration::ZERO,
            between_players: Duration::ZERO,
        }
    }
}

async fn fetch_logged<S: TransactionSource>(
    source: &S,
    client: &Client,
    player: &str,
) -> Option<TransactionReport> {
    match source.fetch(client, player).await {
        Ok(Some(report)) if report.has_transactions() => {
            tracing::info!(
                player,
                source = source.name(),
                count = report.transactions.len(),
                "found transactions"
            );
            Some(report)
        }
        Ok(_) => {
            tracing::info!(player, source = source.name(), "no transactions found");
            None
        }
        Err(e) => {
            tracing::warn!(player, source = source.name(), error = %e, "fetch failed");
            None
        }
    }
}

/// Ask the primary source, then the secondary one only if the primary had nothing
pub async fn fetch_with_fallback<P, S>(
    client: &Client,
    primary: &P,
    secondary: &S,
    player: &str,
    politeness: Politeness,
) -> Option<TransactionReport>
where
    P: TransactionSource,
    S: TransactionSource,
{
    let report = fetch_logged(primary, client, player).await;
    tokio::time::sleep(politeness.after_primary).await;
    if report.is_some() {
        return report;
    }

    let report = fetch_logged(secondary, client, player).await;
    tokio::time::sleep(politeness.after_secondary).await;
    report
}

/// Verified chain steps of a report: the draft first, then trades and signings.
///
/// Transactions without a readable date are dropped.
pub fn report_steps(report: &TransactionReport) -> Vec<ChainStep> {
    let mut steps = Vec::new();

    if let Some(draft) = &report.draft {
        let date = draft
            .year
            .and_then(|y| NaiveDate::from_ymd_opt(i32::from(y), DRAFT_MONTH, DRAFT_DAY));
        if let Some(date) = date {
            let pick = draft
                .pick
                .map(|p| p.to_string())
                .unwrap_or_else(|| "?".to_string());
            steps.push(ChainStep {
                event: format!(
                    "Drafted #{} by {}",
                    pick,
                    draft.team.as_deref().unwrap_or("Unknown")
                ),
                date,
                action: format!("Round {}, Pick #{}", draft.round.unwrap_or(1), pick),
            });
        }
    }

    for transaction in &report.transactions {
        if !matches!(
            transaction.kind,
            TransactionKind::Trade | TransactionKind::Signing
        ) {
            continue;
        }
        let Some(date) = transaction.date else {
            tracing::debug!(description = %transaction.description, "skipping undated transaction");
            continue;
        };
        steps.push(ChainStep {
            event: transaction.description.clone(),
            date,
            action: transaction
                .notes
                .clone()
                .unwrap_or_else(|| transaction.kind.to_string()),
        });
    }

    steps
}

/// Replace the player's verified history with the report's steps and fill in
/// draft details.
///
/// Returns the number of steps stored, or `None` when the player is unknown.
pub fn save_transaction_report(
    db: &mut TradeTreeDatabase,
    report: &TransactionReport,
) -> Result<Option<usize>> {
    let Some(player) = db.find_player_by_name(&report.player)? else {
        tracing::warn!(player = %report.player, "player not in database");
        return Ok(None);
    };

    if let Some(draft) = &report.draft {
        db.update_player_draft_info(player.id, draft.year, draft.round, draft.pick)?;
    }

    let steps = report_steps(report);
    if steps.is_empty() {
        return Ok(Some(0));
    }

    db.save_verified_transactions(player.id, &steps, &report.source)?;
    Ok(Some(steps.len()))
}
