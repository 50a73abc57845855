//! End-to-end lineage resolution against the store

use chrono::NaiveDate;
use nba_trade_tree::{
    storage::*, AcquisitionType, ChainStep, PlayerId, TeamAbbr, TradeId, TradeTreeDatabase,
};

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn abbr(s: &str) -> TeamAbbr {
    s.parse().unwrap()
}

struct Scenario {
    db: TradeTreeDatabase,
    trade: TradeId,
    tatum: PlayerId,
}

/// Teams BOS/BKN, the 2013 Celtics-Nets trade, and Tatum drafted from it
fn tatum_scenario() -> Scenario {
    let mut db = TradeTreeDatabase::new_in_memory().unwrap();
    for (code, name, primary, secondary) in [
        ("BOS", "Boston Celtics", "#007A33", "#BA9653"),
        ("BKN", "Brooklyn Nets", "#000000", "#FFFFFF"),
    ] {
        db.upsert_team(&NewTeam {
            abbreviation: abbr(code),
            name: name.to_string(),
            primary_color: primary.to_string(),
            secondary_color: secondary.to_string(),
        })
        .unwrap();
    }

    let trade = db
        .upsert_trade(&NewTrade {
            date: date("2013-06-27"),
            description: "Celtics trade Kevin Garnett and Paul Pierce to Nets for future picks"
                .to_string(),
            source_url: None,
        })
        .unwrap();

    let tatum = db
        .upsert_player(&NewPlayer {
            name: "Jayson Tatum".to_string(),
            team: Some(abbr("BOS")),
            draft_year: Some(2017),
            draft_round: Some(1),
            draft_pick: Some(3),
            headshot_url: None,
        })
        .unwrap();

    db.record_acquisition(&NewAcquisition {
        player_id: tatum,
        team: abbr("BOS"),
        acquisition_type: AcquisitionType::Draft,
        date: date("2017-06-22"),
        trade_id: None,
        origin_trade_id: Some(trade),
        pick_id: None,
        notes: None,
    })
    .unwrap();

    let steps = vec![
        ChainStep {
            event: "KG/Pierce traded to BKN".to_string(),
            date: date("2013-06-27"),
            action: "Received 2014, 2016, 2017, 2018 BKN 1sts".to_string(),
        },
        ChainStep {
            event: "2017 BKN pick swapped with PHI".to_string(),
            date: date("2017-06-19"),
            action: "Drafted Jayson Tatum".to_string(),
        },
    ];
    db.record_trade_chain(trade, tatum, &steps).unwrap();

    Scenario { db, trade, tatum }
}

#[test]
fn test_tatum_lineage_round_trip() {
    let scenario = tatum_scenario();
    let lineage = scenario.db.resolve_lineage("Jayson Tatum").unwrap().unwrap();

    assert_eq!(lineage.player.id, scenario.tatum);
    assert_eq!(lineage.player.team.as_ref().unwrap().abbreviation, abbr("BOS"));

    let acquisition = lineage.acquisition.as_ref().unwrap();
    assert_eq!(acquisition.acquisition_type, AcquisitionType::Draft);
    assert_eq!(
        acquisition.origin_trade.as_ref().unwrap().date,
        date("2013-06-27")
    );

    assert_eq!(lineage.chain.len(), 2);
    assert!(lineage.has_full_lineage(scenario.trade));
}

#[test]
fn test_unknown_player_resolves_to_none() {
    let scenario = tatum_scenario();
    assert!(scenario.db.resolve_lineage("Nobody Atall").unwrap().is_none());
}

#[test]
fn test_rerunning_the_scenario_writes_nothing_new() {
    let mut scenario = tatum_scenario();
    let before = scenario.db.table_counts().unwrap();

    let again = scenario
        .db
        .upsert_trade(&NewTrade {
            date: date("2013-06-27"),
            description: "Celtics trade Kevin Garnett and Paul Pierce to Nets for future picks"
                .to_string(),
            source_url: Some("https://www.basketball-reference.com/".to_string()),
        })
        .unwrap();
    assert_eq!(again, scenario.trade);

    let written = scenario
        .db
        .record_trade_chain(scenario.trade, scenario.tatum, &[])
        .unwrap();
    assert!(!written);

    assert_eq!(scenario.db.table_counts().unwrap(), before);
}

#[test]
fn test_integrity_holds_for_scenario() {
    let scenario = tatum_scenario();
    assert!(scenario.db.check_integrity().unwrap().is_clean());
}

#[test]
fn test_rebuilt_chain_replaces_hand_written_one() {
    let mut scenario = tatum_scenario();

    let steps = scenario.db.rebuild_trade_chain(scenario.tatum).unwrap();
    let chain = scenario.db.get_trade_chain(scenario.tatum).unwrap().unwrap();

    // Origin trade plus the draft itself
    assert_eq!(steps, 2);
    assert_eq!(chain.steps[0].date, date("2013-06-27"));
    assert_eq!(chain.steps[1].event, "BOS draft Jayson Tatum");
    assert_eq!(chain.steps[1].action, "Selected in the draft");
}
