//! Validate, rebuild-chains, dedupe and stats command implementations

use std::{
    collections::{BTreeMap, HashMap},
    fmt,
    path::{Path, PathBuf},
};

use super::common::open_database;
use crate::{
    cli::types::TeamAbbr,
    core::try_read_to_string,
    storage::{IntegrityReport, TradeTreeDatabase},
    Result, TradeTreeError,
};

/// A player whose stored team disagrees with the expected roster
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterMismatch {
    Missing {
        player: String,
        expected: TeamAbbr,
    },
    WrongTeam {
        player: String,
        expected: TeamAbbr,
        actual: Option<TeamAbbr>,
    },
}

impl fmt::Display for RosterMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RosterMismatch::Missing { player, expected } => {
                write!(f, "{}: expected {}, not in database", player, expected)
            }
            RosterMismatch::WrongTeam {
                player,
                expected,
                actual,
            } => match actual {
                Some(actual) => write!(f, "{}: expected {}, found {}", player, expected, actual),
                None => write!(f, "{}: expected {}, found no team", player, expected),
            },
        }
    }
}

/// Read a `{"Player Name": "ABBR"}` roster file; codes are normalised on parse
pub fn load_roster(path: &Path) -> Result<BTreeMap<String, TeamAbbr>> {
    let contents = try_read_to_string(path).ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("cannot read roster file {}", path.display()),
        )
    })?;
    Ok(serde_json::from_str(&contents)?)
}

/// Compare each expected player's team with the stored one
pub fn roster_mismatches(
    db: &TradeTreeDatabase,
    expected: &BTreeMap<String, TeamAbbr>,
) -> Result<Vec<RosterMismatch>> {
    let actual: HashMap<String, Option<TeamAbbr>> = db.player_teams()?.into_iter().collect();

    let mut mismatches = Vec::new();
    for (player, team) in expected {
        match actual.get(player) {
            None => mismatches.push(RosterMismatch::Missing {
                player: player.clone(),
                expected: team.clone(),
            }),
            Some(found) if found.as_ref() != Some(team) => {
                mismatches.push(RosterMismatch::WrongTeam {
                    player: player.clone(),
                    expected: team.clone(),
                    actual: found.clone(),
                })
            }
            Some(_) => {}
        }
    }
    Ok(mismatches)
}

fn print_integrity(report: &IntegrityReport) {
    let sections = [
        ("Orphaned acquisitions (player ids)", &report.orphaned_acquisitions),
        ("Orphaned trade chains (player ids)", &report.orphaned_chains),
    ];
    for (title, ids) in sections {
        if !ids.is_empty() {
            let ids: Vec<String> = ids.iter().map(|id| id.to_string()).collect();
            println!("✗ {}: {}", title, ids.join(", "));
        }
    }
    if !report.invalid_assets.is_empty() {
        let ids: Vec<String> = report.invalid_assets.iter().map(|id| id.to_string()).collect();
        println!("✗ Assets traded to their own team: {}", ids.join(", "));
    }
    if !report.broken_pick_trails.is_empty() {
        let ids: Vec<String> = report
            .broken_pick_trails
            .iter()
            .map(|id| id.to_string())
            .collect();
        println!("✗ Picks with broken ownership trails: {}", ids.join(", "));
    }
}

/// Handle the validate command; fails with `ValidationFailed` when anything is wrong
pub fn handle_validate(db: Option<PathBuf>, roster: Option<PathBuf>) -> Result<()> {
    let db = open_database(db)?;

    let report = db.check_integrity()?;
    print_integrity(&report);
    let mut problems = report.problem_count();

    if let Some(path) = roster {
        let expected = load_roster(&path)?;
        let mismatches = roster_mismatches(&db, &expected)?;
        for mismatch in &mismatches {
            println!("✗ {}", mismatch);
        }
        println!(
            "Roster: {} of {} players match",
            expected.len() - mismatches.len(),
            expected.len()
        );
        problems += mismatches.len();
    }

    if problems > 0 {
        return Err(TradeTreeError::ValidationFailed { count: problems });
    }
    println!("✓ No problems found");
    Ok(())
}

/// Handle the rebuild-chains command
pub fn handle_rebuild_chains(db: Option<PathBuf>) -> Result<()> {
    let mut db = open_database(db)?;
    let written = db.rebuild_all_trade_chains()?;
    println!("✓ Rebuilt {} trade chains", written);
    Ok(())
}

/// Handle the dedupe command
pub fn handle_dedupe(db: Option<PathBuf>) -> Result<()> {
    let mut db = open_database(db)?;

    let duplicates = db.find_duplicate_players()?;
    if duplicates.is_empty() {
        println!("✓ No duplicate players");
        return Ok(());
    }
    for group in &duplicates {
        let ids: Vec<String> = group.ids.iter().map(|id| id.to_string()).collect();
        println!("{}: ids {}", group.name, ids.join(", "));
    }

    let removed = db.merge_duplicate_players()?;
    println!("✓ Merged {} duplicate player rows", removed);
    Ok(())
}

/// Handle the stats command
pub fn handle_stats(db: Option<PathBuf>) -> Result<()> {
    let db = open_database(db)?;
    let counts = db.table_counts()?;

    let rows = [
        ("teams", counts.teams),
        ("players", counts.players),
        ("trades", counts.trades),
        ("trade_assets", counts.trade_assets),
        ("draft_picks", counts.draft_picks),
        ("acquisitions", counts.acquisitions),
        ("trade_chains", counts.trade_chains),
        ("verified_transactions", counts.verified_transactions),
    ];
    for (table, count) in rows {
        println!("{:<22} {:>6}", table, count);
    }
    Ok(())
}
