//! Basketball-Reference player pages

use super::{
    html::{element_texts, section_by_id, uncomment},
    parse::{bbref_id, parse_draft_text, parse_transaction_text},
    types::TransactionReport,
    TransactionSource,
};
use crate::core::http::get_text;
use crate::Result;
use reqwest::Client;

pub const BBREF_BASE_URL: &str = "https://www.basketball-reference.com";
pub const SOURCE_NAME: &str = "basketball-reference";

/// Primary source: transaction list and draft line from the player page
#[derive(Debug, Clone, Default)]
pub struct BasketballReference;

impl BasketballReference {
    /// `/players/t/tatumja01.html`
    pub fn player_url(id: &str) -> Option<String> {
        let initial = id.chars().next()?;
        Some(format!("{}/players/{}/{}.html", BBREF_BASE_URL, initial, id))
    }

    /// Read transactions and draft info out of a player page
    pub fn parse_page(player: &str, html: &str) -> TransactionReport {
        let html = uncomment(html);

        let lines = match section_by_id(&html, "div", "all_transactions") {
            Some(section) => element_texts(section, "li"),
            None => section_by_id(&html, "div", "info")
                .map(|info| {
                    element_texts(info, "p")
                        .into_iter()
                        .filter(|t| {
                            let lc = t.to_lowercase();
                            t.contains("Draft:") || lc.contains("traded") || lc.contains("signed")
                        })
                        .collect()
                })
                .unwrap_or_default(),
        };
        let transactions = lines
            .iter()
            .filter_map(|line| parse_transaction_text(line))
            .collect();

        let draft = section_by_id(&html, "div", "meta").and_then(|meta| {
            element_texts(meta, "p")
                .into_iter()
                .find(|t| t.contains("Draft:"))
                .and_then(|t| parse_draft_text(&t))
        });

        TransactionReport {
            player: player.to_string(),
            source: SOURCE_NAME.to_string(),
            draft,
            transactions,
        }
    }
}

impl TransactionSource for BasketballReference {
    fn name(&self) -> &'static str {
        SOURCE_NAME
    }

    async fn fetch(&self, client: &Client, player: &str) -> Result<Option<TransactionReport>> {
        let Some(url) = bbref_id(player).and_then(|id| Self::player_url(&id)) else {
            tracing::warn!(player, "cannot derive a Basketball-Reference id");
            return Ok(None);
        };

        let html = get_text(client, &url, &[]).await?;
        Ok(Some(Self::parse_page(player, &html)))
    }
}
