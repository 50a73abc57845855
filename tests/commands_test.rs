//! Integration tests for command handlers

use clap::Parser;
use nba_trade_tree::{
    cli::{Commands, TradeTree},
    commands::{
        lineage::{render_trace, TraceParams},
        maintenance::{handle_stats, handle_validate},
        seed::handle_seed,
    },
    storage::TradeTreeDatabase,
    TradeTreeError,
};
use tempfile::tempdir;

#[test]
fn test_cli_parses_trace() {
    let app = TradeTree::parse_from([
        "nba-trade-tree",
        "--db",
        "/tmp/trades.db",
        "trace",
        "Jayson Tatum",
        "--root-trade",
        "3",
    ]);

    assert_eq!(app.db.unwrap().to_str(), Some("/tmp/trades.db"));
    match app.command {
        Commands::Trace {
            name,
            json,
            graph,
            root_trade,
        } => {
            assert_eq!(name, "Jayson Tatum");
            assert!(!json && !graph);
            assert_eq!(root_trade.map(|id| id.as_i64()), Some(3));
        }
        other => panic!("expected trace, got {:?}", other),
    }
}

#[test]
fn test_cli_fetch_requires_player_or_all() {
    assert!(TradeTree::try_parse_from(["nba-trade-tree", "fetch"]).is_err());
    assert!(TradeTree::try_parse_from(["nba-trade-tree", "fetch", "--all", "--player", "X"]).is_err());
    assert!(TradeTree::try_parse_from(["nba-trade-tree", "fetch", "--all", "--limit", "5"]).is_ok());
}

#[test]
fn test_cli_global_db_after_subcommand() {
    let app = TradeTree::parse_from(["nba-trade-tree", "stats", "--db", "x.db"]);
    assert!(matches!(app.command, Commands::Stats));
    assert!(app.db.is_some());
}

#[test]
fn test_seed_then_validate_file_database() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("trades.db");

    handle_seed(Some(path.clone())).unwrap();
    handle_validate(Some(path.clone()), None).unwrap();
    handle_stats(Some(path.clone())).unwrap();

    let db = TradeTreeDatabase::open(&path).unwrap();
    let output = render_trace(
        &db,
        &TraceParams {
            name: "Collin Sexton".to_string(),
            ..Default::default()
        },
    )
    .unwrap()
    .unwrap();
    assert!(output.contains("BOS sent 2018 1st #8 to CLE"));
}

#[test]
fn test_validate_fails_on_roster_mismatch() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("trades.db");
    let roster = dir.path().join("roster.json");
    std::fs::write(&roster, r#"{"Jayson Tatum": "BOS", "James Harden": "LAC"}"#).unwrap();

    handle_seed(Some(path.clone())).unwrap();
    let result = handle_validate(Some(path), Some(roster));

    match result {
        Err(TradeTreeError::ValidationFailed { count }) => assert_eq!(count, 1),
        other => panic!("expected ValidationFailed, got {:?}", other),
    }
}
