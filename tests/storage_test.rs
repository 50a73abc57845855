//! Integration tests for storage functionality

use chrono::NaiveDate;
use nba_trade_tree::{seed::seed_database, storage::*, TeamAbbr, TradeTreeError};
use tempfile::tempdir;

fn abbr(s: &str) -> TeamAbbr {
    s.parse().unwrap()
}

fn create_seeded_db() -> TradeTreeDatabase {
    let mut db = TradeTreeDatabase::new_in_memory().unwrap();
    seed_database(&mut db).unwrap();
    db
}

#[test]
fn test_database_persists_to_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("data").join("nba_trades.db");

    {
        let mut db = TradeTreeDatabase::open(&path).unwrap();
        seed_database(&mut db).unwrap();
    }

    let db = TradeTreeDatabase::open(&path).unwrap();
    let counts = db.table_counts().unwrap();
    assert_eq!(counts.teams, 30);
    assert!(db.resolve_lineage("Jayson Tatum").unwrap().is_some());
}

#[test]
fn test_seeded_counts() {
    let db = create_seeded_db();
    let counts = db.table_counts().unwrap();

    assert_eq!(counts.teams, 30);
    assert!(counts.players > 0);
    assert_eq!(counts.acquisitions, counts.trade_chains + 2);
    assert_eq!(counts.verified_transactions, 0);
}

#[test]
fn test_team_lookup_through_alias() {
    let db = create_seeded_db();
    let via_alias = db.team_id(&abbr("BRK")).unwrap();
    let canonical = db.team_id(&abbr("BKN")).unwrap();
    assert!(via_alias.is_some());
    assert_eq!(via_alias, canonical);
}

#[test]
fn test_list_teams_sorted() {
    let db = create_seeded_db();
    let teams = db.list_teams().unwrap();
    assert_eq!(teams.len(), 30);
    assert_eq!(teams[0].abbreviation.as_str(), "ATL");
    assert_eq!(teams[29].abbreviation.as_str(), "WAS");
}

#[test]
fn test_search_short_query_returns_nothing() {
    let db = create_seeded_db();
    assert!(db.search_players("J", 10).unwrap().is_empty());
    assert!(!db.search_players("ta", 10).unwrap().is_empty());
}

#[test]
fn test_trade_assets_of_celtics_nets_trade() {
    let db = create_seeded_db();
    let trade = db
        .find_trade(
            NaiveDate::from_ymd_opt(2013, 6, 27).unwrap(),
            "Celtics trade Kevin Garnett and Paul Pierce to Nets for future picks",
        )
        .unwrap()
        .unwrap();

    let assets = db.trade_assets(trade).unwrap();
    let picks = assets
        .iter()
        .filter(|a| matches!(a.asset, Asset::Pick(_)))
        .count();
    assert_eq!(picks, 4);
    assert_eq!(assets.len(), 13);
}

#[test]
fn test_same_team_asset_is_rejected() {
    let mut db = create_seeded_db();
    let trade = db
        .upsert_trade(&NewTrade {
            date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
            description: "Broken trade".to_string(),
            source_url: None,
        })
        .unwrap();
    let player = db.find_player_by_name("Jayson Tatum").unwrap().unwrap();

    let result = db.add_trade_asset(
        trade,
        &abbr("BOS"),
        &abbr("BOS"),
        &Asset::Player {
            player_id: player.id,
        },
    );
    assert!(matches!(result, Err(TradeTreeError::InvalidAsset { .. })));
}

#[test]
fn test_verified_transactions_round_trip() {
    let mut db = create_seeded_db();
    let player = db.find_player_by_name("Jaylen Brown").unwrap().unwrap();
    let steps = vec![ChainStep {
        event: "Drafted #3 by Boston Celtics".to_string(),
        date: NaiveDate::from_ymd_opt(2016, 6, 25).unwrap(),
        action: "Round 1, Pick #3".to_string(),
    }];

    db.save_verified_transactions(player.id, &steps, "basketball-reference")
        .unwrap();

    let verified = db.get_verified_transactions(player.id).unwrap().unwrap();
    assert_eq!(verified.steps, steps);
    assert_eq!(verified.source, "basketball-reference");
    assert_eq!(db.table_counts().unwrap().verified_transactions, 1);
}

#[test]
fn test_clear_all_data() {
    let mut db = create_seeded_db();
    db.clear_all_data().unwrap();
    assert_eq!(db.table_counts().unwrap(), TableCounts::default());
}
