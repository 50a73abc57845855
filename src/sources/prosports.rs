//! ProSportsTransactions search results

use super::{
    html::table_rows,
    parse::extract_date,
    types::{Transaction, TransactionKind, TransactionReport},
    TransactionSource,
};
use crate::core::http::get_text;
use crate::Result;
use chrono::Utc;
use reqwest::Client;

pub const SEARCH_URL: &str =
    "https://www.prosportstransactions.com/basketball/Search/SearchResults.php";
pub const SOURCE_NAME: &str = "prosportstransactions";

const SEARCH_BEGIN_DATE: &str = "1990-01-01";

/// Secondary source: player movement search
#[derive(Debug, Clone, Default)]
pub struct ProSportsTransactions;

/// Names in result cells are prefixed with bullets
fn clean_name(cell: &str) -> String {
    cell.replace('•', " ").trim().to_string()
}

fn classify(notes: &str) -> TransactionKind {
    let lc = notes.to_lowercase();
    if lc.contains("trade") {
        TransactionKind::Trade
    } else if lc.contains("signed") {
        TransactionKind::Signing
    } else if lc.contains("waived") || lc.contains("released") {
        TransactionKind::Waiver
    } else if lc.contains("draft") {
        TransactionKind::Draft
    } else {
        TransactionKind::Unknown
    }
}

impl ProSportsTransactions {
    /// Query string of a player movement search up to today
    pub fn search_params(player: &str) -> Vec<(&'static str, String)> {
        let today = Utc::now().date_naive().format("%Y-%m-%d").to_string();
        vec![
            ("Player", player.to_string()),
            ("Team", String::new()),
            ("BeginDate", SEARCH_BEGIN_DATE.to_string()),
            ("EndDate", today),
            ("PlayerMovementChkBx", "yes".to_string()),
            ("submit", "Search".to_string()),
        ]
    }

    /// Rows are `date | team | acquired | relinquished | notes`
    pub fn parse_page(player: &str, html: &str) -> TransactionReport {
        let transactions = table_rows(html, "datatable")
            .into_iter()
            .filter(|cells| cells.len() >= 4 && !cells[0].eq_ignore_ascii_case("date"))
            .map(|cells| {
                let team = cells[1].trim();
                let acquired = clean_name(&cells[2]);
                let relinquished = clean_name(&cells[3]);
                let notes = cells.get(4).map(|n| n.trim().to_string()).unwrap_or_default();

                let mut parts = vec![team.to_string()];
                if !acquired.is_empty() {
                    parts.push(format!("acquired {}", acquired));
                }
                if !relinquished.is_empty() {
                    parts.push(format!("relinquished {}", relinquished));
                }

                Transaction {
                    date: extract_date(&cells[0]),
                    kind: classify(&notes),
                    description: parts.join(" "),
                    notes: (!notes.is_empty()).then_some(notes),
                }
            })
            .collect();

        TransactionReport {
            player: player.to_string(),
            source: SOURCE_NAME.to_string(),
            draft: None,
            transactions,
        }
    }
}

impl TransactionSource for ProSportsTransactions {
    fn name(&self) -> &'static str {
        SOURCE_NAME
    }

    async fn fetch(&self, client: &Client, player: &str) -> Result<Option<TransactionReport>> {
        let html = get_text(client, SEARCH_URL, &Self::search_params(player)).await?;
        Ok(Some(Self::parse_page(player, &html)))
    }
}
