//! Trace and search command implementations

use std::path::PathBuf;

use super::common::{format_chain, open_database};
use crate::{
    cli::types::TradeId,
    lineage::LineageGraph,
    storage::{PlayerLineage, PlayerSearchResult, TradeTreeDatabase},
    Result,
};

/// Output options for the trace command
#[derive(Debug, Clone, Default)]
pub struct TraceParams {
    pub name: String,
    pub as_json: bool,
    pub as_graph: bool,
    pub root_trade: Option<TradeId>,
}

fn render_text(lineage: &PlayerLineage, root_trade: Option<TradeId>) -> String {
    let player = &lineage.player;
    let mut lines = Vec::new();

    let team = player
        .team
        .as_ref()
        .map(|t| format!("{} ({})", t.name, t.abbreviation))
        .unwrap_or_else(|| "no team".to_string());
    lines.push(format!("{} - {}", player.name, team));

    if let (Some(year), Some(pick)) = (player.draft_year, player.draft_pick) {
        lines.push(format!("Drafted {} #{}", year, pick));
    }

    match &lineage.acquisition {
        Some(acq) => {
            lines.push(format!("Acquired via {} on {}", acq.acquisition_type, acq.date));
            if let Some(origin) = &acq.origin_trade {
                lines.push(format!(
                    "Origin trade #{} ({}): {}",
                    origin.id, origin.date, origin.description
                ));
            }
            if let Some(notes) = &acq.notes {
                lines.push(format!("Notes: {}", notes));
            }
        }
        None => lines.push("No acquisition recorded".to_string()),
    }

    if lineage.chain.is_empty() {
        lines.push("No trade chain recorded".to_string());
    } else {
        lines.push(format!("Trade chain ({} steps):", lineage.chain.len()));
        lines.extend(format_chain(&lineage.chain));
    }

    if let Some(root) = root_trade {
        let answer = if lineage.has_full_lineage(root) {
            "yes"
        } else {
            "no"
        };
        lines.push(format!("Full lineage from trade #{}: {}", root, answer));
    }

    lines.join("\n")
}

/// Render a player's lineage, or `None` when no player matches
pub fn render_trace(db: &TradeTreeDatabase, params: &TraceParams) -> Result<Option<String>> {
    let Some(lineage) = db.resolve_lineage(&params.name)? else {
        return Ok(None);
    };

    let output = if params.as_graph {
        serde_json::to_string_pretty(&LineageGraph::from_lineage(&lineage))?
    } else if params.as_json {
        serde_json::to_string_pretty(&lineage)?
    } else {
        render_text(&lineage, params.root_trade)
    };
    Ok(Some(output))
}

/// Handle the trace command
pub fn handle_trace(db: Option<PathBuf>, params: TraceParams) -> Result<()> {
    let db = open_database(db)?;

    match render_trace(&db, &params)? {
        Some(output) => println!("{}", output),
        None => println!("No player found matching '{}'", params.name),
    }
    Ok(())
}

/// One line per search hit
pub fn render_search(results: &[PlayerSearchResult]) -> String {
    results
        .iter()
        .map(|r| {
            let team = r
                .team_abbr
                .as_ref()
                .map(|t| t.to_string())
                .unwrap_or_else(|| "---".to_string());
            match (r.draft_year, r.draft_pick) {
                (Some(year), Some(pick)) => {
                    format!("{:>5}  {:<3}  {} ({} #{})", r.id.as_i64(), team, r.name, year, pick)
                }
                _ => format!("{:>5}  {:<3}  {}", r.id.as_i64(), team, r.name),
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Handle the search command
pub fn handle_search(db: Option<PathBuf>, query: &str, limit: usize) -> Result<()> {
    let db = open_database(db)?;
    let results = db.search_players(query, limit)?;

    if results.is_empty() {
        println!("No players match '{}'", query);
    } else {
        println!("{}", render_search(&results));
    }
    Ok(())
}
