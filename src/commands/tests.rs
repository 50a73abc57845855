//! Tests for command helpers

use super::*;
use crate::seed::seed_database;
use crate::storage::TradeTreeDatabase;
use crate::DB_PATH_ENV_VAR;
use std::path::PathBuf;

fn seeded_db() -> TradeTreeDatabase {
    let mut db = TradeTreeDatabase::new_in_memory().unwrap();
    seed_database(&mut db).unwrap();
    db
}

#[cfg(test)]
mod common_tests {
    use super::*;
    use crate::storage::ChainStep;
    use chrono::NaiveDate;

    #[test]
    fn test_resolve_db_path() {
        let explicit = resolve_db_path(Some(PathBuf::from("/tmp/explicit.db"))).unwrap();
        assert_eq!(explicit, PathBuf::from("/tmp/explicit.db"));

        std::env::set_var(DB_PATH_ENV_VAR, "/tmp/from-env.db");
        let from_env = resolve_db_path(None).unwrap();
        assert_eq!(from_env, PathBuf::from("/tmp/from-env.db"));

        // Flag wins over env
        let flag = resolve_db_path(Some(PathBuf::from("flag.db"))).unwrap();
        assert_eq!(flag, PathBuf::from("flag.db"));

        std::env::remove_var(DB_PATH_ENV_VAR);
        if let Ok(default) = resolve_db_path(None) {
            assert!(default.ends_with("nba-trade-tree/nba_trades.db"));
        }
    }

    #[test]
    fn test_format_chain() {
        let steps = vec![ChainStep {
            event: "Celtics trade Kevin Garnett and Paul Pierce to Nets for future picks"
                .to_string(),
            date: NaiveDate::from_ymd_opt(2013, 6, 27).unwrap(),
            action: "BKN sent 2017 1st #1 to BOS".to_string(),
        }];

        let lines = format_chain(&steps);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("  1. 2013-06-27  Celtics trade"));
        assert!(lines[0].ends_with("-> BKN sent 2017 1st #1 to BOS"));
    }
}

#[cfg(test)]
mod lineage_command_tests {
    use super::*;
    use crate::commands::lineage::{render_search, render_trace, TraceParams};
    use crate::lineage::LineageGraph;
    use crate::storage::PlayerLineage;

    fn params(name: &str) -> TraceParams {
        TraceParams {
            name: name.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_render_trace_text() {
        let db = seeded_db();
        let origin = db
            .resolve_lineage("Jayson Tatum")
            .unwrap()
            .unwrap()
            .acquisition
            .unwrap()
            .origin_trade_id
            .unwrap();

        let output = render_trace(
            &db,
            &TraceParams {
                root_trade: Some(origin),
                ..params("Tatum")
            },
        )
        .unwrap()
        .unwrap();

        assert!(output.starts_with("Jayson Tatum - Boston Celtics (BOS)"));
        assert!(output.contains("Acquired via draft on 2017-06-22"));
        assert!(output.contains("Trade chain (3 steps):"));
        assert!(output.contains(&format!("Full lineage from trade #{}: yes", origin)));
    }

    #[test]
    fn test_render_trace_json() {
        let db = seeded_db();
        let output = render_trace(
            &db,
            &TraceParams {
                as_json: true,
                ..params("Jaylen Brown")
            },
        )
        .unwrap()
        .unwrap();

        let lineage: PlayerLineage = serde_json::from_str(&output).unwrap();
        assert_eq!(lineage.player.name, "Jaylen Brown");
        assert_eq!(lineage.chain.len(), 2);
    }

    #[test]
    fn test_render_trace_graph() {
        let db = seeded_db();
        let output = render_trace(
            &db,
            &TraceParams {
                as_graph: true,
                ..params("Jayson Tatum")
            },
        )
        .unwrap()
        .unwrap();

        let graph: LineageGraph = serde_json::from_str(&output).unwrap();
        for edge in &graph.edges {
            assert!(graph.node(&edge.source).is_some());
            assert!(graph.node(&edge.target).is_some());
        }
    }

    #[test]
    fn test_render_trace_unknown_player() {
        let db = seeded_db();
        assert!(render_trace(&db, &params("Nobody Atall")).unwrap().is_none());
    }

    #[test]
    fn test_render_search() {
        let db = seeded_db();
        let results = db.search_players("james", 10).unwrap();
        let output = render_search(&results);

        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("HOU  James Harden (2009 #3)"));
        assert!(lines[1].contains("BOS  James Young (2014 #17)"));
    }
}

#[cfg(test)]
mod maintenance_command_tests {
    use super::*;
    use crate::commands::maintenance::{load_roster, roster_mismatches, RosterMismatch};
    use std::collections::BTreeMap;
    use tempfile::tempdir;

    #[test]
    fn test_load_roster_normalises_codes() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("roster.json");
        std::fs::write(&path, r#"{"Kevin Garnett": "BRK", "Jayson Tatum": "bos"}"#).unwrap();

        let roster = load_roster(&path).unwrap();
        assert_eq!(roster["Kevin Garnett"].as_str(), "BKN");
        assert_eq!(roster["Jayson Tatum"].as_str(), "BOS");
    }

    #[test]
    fn test_load_roster_missing_file() {
        let dir = tempdir().unwrap();
        assert!(load_roster(&dir.path().join("missing.json")).is_err());
    }

    #[test]
    fn test_roster_mismatches() {
        let db = seeded_db();
        let mut expected = BTreeMap::new();
        expected.insert("Jayson Tatum".to_string(), "BOS".parse().unwrap());
        expected.insert("Kyrie Irving".to_string(), "DAL".parse().unwrap());
        expected.insert("Victor Wembanyama".to_string(), "SAS".parse().unwrap());

        let mismatches = roster_mismatches(&db, &expected).unwrap();
        assert_eq!(mismatches.len(), 2);
        assert!(mismatches.contains(&RosterMismatch::WrongTeam {
            player: "Kyrie Irving".to_string(),
            expected: "DAL".parse().unwrap(),
            actual: Some("BOS".parse().unwrap()),
        }));
        assert_eq!(
            mismatches
                .iter()
                .find(|m| matches!(m, RosterMismatch::Missing { .. }))
                .unwrap()
                .to_string(),
            "Victor Wembanyama: expected SAS, not in database"
        );
    }
}

#[cfg(test)]
mod fetch_command_tests {
    use super::*;
    use crate::commands::fetch::{fetch_players, fetch_targets, FetchParams};
    use crate::core::{build_client, VerifiedFile};
    use crate::sources::{
        parse_draft_text, parse_transaction_text, Politeness, TransactionReport,
        TransactionSource,
    };
    use crate::Result;
    use reqwest::Client;

    /// Knows Tatum only
    struct CannedSource;

    impl TransactionSource for CannedSource {
        fn name(&self) -> &'static str {
            "canned"
        }

        async fn fetch(&self, _client: &Client, player: &str) -> Result<Option<TransactionReport>> {
            if player != "Jayson Tatum" {
                return Ok(None);
            }
            Ok(Some(TransactionReport {
                player: player.to_string(),
                source: "canned".to_string(),
                draft: parse_draft_text(
                    "Draft: Boston Celtics, 1st round (3rd pick, 3rd overall), 2017 NBA Draft",
                ),
                transactions: vec![parse_transaction_text(
                    "July 6, 2022: Signed a 5 year contract extension",
                )
                .unwrap()],
            }))
        }
    }

    #[test]
    fn test_fetch_targets() {
        let db = seeded_db();

        let single = FetchParams {
            player: Some("Jayson Tatum".to_string()),
            ..Default::default()
        };
        assert_eq!(fetch_targets(&db, &single).unwrap(), vec!["Jayson Tatum"]);

        let all = FetchParams {
            all: true,
            limit: Some(3),
            ..Default::default()
        };
        assert_eq!(fetch_targets(&db, &all).unwrap().len(), 3);

        assert!(fetch_targets(&db, &FetchParams::default()).unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_fetch_players_saves_reports() {
        let mut db = seeded_db();
        let client = build_client().unwrap();
        let mut file = VerifiedFile::default();
        let names = vec!["Jayson Tatum".to_string(), "Jaylen Brown".to_string()];

        let summary = fetch_players(
            &mut db,
            &client,
            &CannedSource,
            &CannedSource,
            &names,
            Politeness::none(),
            Some(&mut file),
        )
        .await
        .unwrap();

        assert_eq!(summary.attempted, 2);
        assert_eq!(summary.found, 1);
        assert_eq!(summary.saved, 1);
        assert_eq!(file.players["Jayson Tatum"].len(), 2);

        let tatum = db.find_player_by_name("Jayson Tatum").unwrap().unwrap();
        let verified = db.get_verified_transactions(tatum.id).unwrap().unwrap();
        assert_eq!(verified.source, "canned");
    }
}
