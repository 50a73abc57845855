//! Unit tests for transaction importers

use super::*;
use crate::storage::{NewPlayer, NewTeam};
use crate::TradeTreeError;

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

#[cfg(test)]
mod parse_tests {
    use super::*;

    #[test]
    fn test_extract_date_long_form() {
        assert_eq!(
            extract_date("June 22, 2017: Drafted by the Boston Celtics"),
            Some(date("2017-06-22"))
        );
    }

    #[test]
    fn test_extract_date_iso_and_slash() {
        assert_eq!(extract_date("on 2013-06-27 the deal"), Some(date("2013-06-27")));
        assert_eq!(extract_date("6/19/2017"), Some(date("2017-06-19")));
    }

    #[test]
    fn test_extract_date_missing() {
        assert_eq!(extract_date("Signed a multi-year contract"), None);
    }

    #[test]
    fn test_parse_transaction_kinds() {
        let cases = [
            ("July 1, 2021: Traded by the Celtics to the Thunder", TransactionKind::Trade),
            ("July 6, 2021: Signed a 4 year contract", TransactionKind::Signing),
            ("March 1, 2020: Waived by the Knicks", TransactionKind::Waiver),
            ("June 22, 2017: Drafted by the Celtics", TransactionKind::Draft),
            ("Claimed off waivers by the Heat", TransactionKind::Unknown),
        ];
        for (text, kind) in cases {
            let transaction = parse_transaction_text(text).unwrap();
            assert_eq!(transaction.kind, kind, "{text}");
            assert_eq!(transaction.description, text);
        }
    }

    #[test]
    fn test_parse_transaction_blank() {
        assert!(parse_transaction_text("   ").is_none());
    }

    #[test]
    fn test_parse_draft_text() {
        let info = parse_draft_text(
            "Draft: Boston Celtics, 1st round (3rd pick, 3rd overall), 2017 NBA Draft",
        )
        .unwrap();
        assert_eq!(
            info,
            DraftInfo {
                year: Some(2017),
                round: Some(1),
                pick: Some(3),
                team: Some("Boston Celtics".to_string()),
            }
        );
    }

    #[test]
    fn test_parse_draft_text_unrelated() {
        assert!(parse_draft_text("Position: Forward").is_none());
    }

    #[test]
    fn test_bbref_id() {
        assert_eq!(bbref_id("LeBron James").as_deref(), Some("jamesle01"));
        assert_eq!(bbref_id("Luka Dončić").as_deref(), Some("doncilu01"));
        assert_eq!(bbref_id("Gary Trent Jr.").as_deref(), Some("trentga01"));
        assert_eq!(bbref_id("D'Angelo Russell").as_deref(), Some("russeda01"));
        assert_eq!(bbref_id("Nene"), None);
    }
}

#[cfg(test)]
mod page_tests {
    use super::*;

    const BBREF_PAGE: &str = r#"
        <div id="meta">
          <p><strong>Position:</strong> Forward</p>
          <p><strong>Draft:</strong> <a href="/teams/BOS/draft.html">Boston Celtics</a>, 1st round (3rd pick, 3rd overall), <a>2017 NBA Draft</a></p>
        </div>
        <!--
        <div id="all_transactions"><div class="table_container"><ul>
          <li><span>June 22, 2017</span>: Drafted by the Boston Celtics in the 1st round.</li>
          <li><span>July 6, 2022</span>: Signed a 5 year contract extension.</li>
        </ul></div></div>
        -->
    "#;

    #[test]
    fn test_bbref_parse_page() {
        let report = BasketballReference::parse_page("Jayson Tatum", BBREF_PAGE);

        assert_eq!(report.source, "basketball-reference");
        assert_eq!(report.transactions.len(), 2);
        assert_eq!(report.transactions[0].kind, TransactionKind::Draft);
        assert_eq!(report.transactions[1].kind, TransactionKind::Signing);
        assert_eq!(report.transactions[1].date, Some(date("2022-07-06")));

        let draft = report.draft.unwrap();
        assert_eq!(draft.year, Some(2017));
        assert_eq!(draft.pick, Some(3));
        assert_eq!(draft.team.as_deref(), Some("Boston Celtics"));
    }

    #[test]
    fn test_bbref_parse_page_without_sections() {
        let report = BasketballReference::parse_page("Nobody", "<html><body>404</body></html>");
        assert!(!report.has_transactions());
        assert!(report.draft.is_none());
    }

    #[test]
    fn test_bbref_player_url() {
        assert_eq!(
            BasketballReference::player_url("tatumja01").as_deref(),
            Some("https://www.basketball-reference.com/players/t/tatumja01.html")
        );
    }

    #[test]
    fn test_prosports_parse_page() {
        let html = r#"<table class="datatable center">
            <tr><td>Date</td><td>Team</td><td>Acquired</td><td>Relinquished</td><td>Notes</td></tr>
            <tr><td>2017-06-19</td><td>76ers</td><td></td><td>&bull; 2017 first round pick</td><td>trade with Celtics</td></tr>
            <tr><td>2017-06-22</td><td>Celtics</td><td>• Jayson Tatum</td><td></td><td>2017 NBA draft first round pick (#3 overall)</td></tr>
        </table>"#;
        let report = ProSportsTransactions::parse_page("Jayson Tatum", html);

        assert_eq!(report.transactions.len(), 2);
        assert_eq!(report.transactions[0].kind, TransactionKind::Trade);
        assert_eq!(report.transactions[0].date, Some(date("2017-06-19")));
        assert_eq!(report.transactions[1].kind, TransactionKind::Draft);
        assert_eq!(
            report.transactions[1].description,
            "Celtics acquired Jayson Tatum"
        );
        assert_eq!(
            report.transactions[1].notes.as_deref(),
            Some("2017 NBA draft first round pick (#3 overall)")
        );
    }

    #[test]
    fn test_prosports_search_params() {
        let params = ProSportsTransactions::search_params("Jayson Tatum");
        assert!(params.contains(&("Player", "Jayson Tatum".to_string())));
        assert!(params.iter().any(|(k, _)| *k == "EndDate"));
    }
}

#[cfg(test)]
mod report_tests {
    use super::*;

    fn report() -> TransactionReport {
        TransactionReport {
            player: "Jayson Tatum".to_string(),
            source: "basketball-reference".to_string(),
            draft: Some(DraftInfo {
                year: Some(2017),
                round: Some(1),
                pick: Some(3),
                team: Some("Boston Celtics".to_string()),
            }),
            transactions: vec![
                parse_transaction_text("June 22, 2017: Drafted by the Boston Celtics").unwrap(),
                parse_transaction_text("July 6, 2022: Signed a contract extension").unwrap(),
                parse_transaction_text("Traded at some point").unwrap(),
            ],
        }
    }

    fn create_test_db() -> TradeTreeDatabase {
        let mut db = TradeTreeDatabase::new_in_memory().unwrap();
        db.upsert_team(&NewTeam {
            abbreviation: "BOS".parse().unwrap(),
            name: "Boston Celtics".to_string(),
            primary_color: "#007A33".to_string(),
            secondary_color: "#BA9653".to_string(),
        })
        .unwrap();
        db
    }

    #[test]
    fn test_report_steps_draft_first() {
        let steps = report_steps(&report());

        assert_eq!(steps.len(), 2);
        assert_eq!(steps[0].event, "Drafted #3 by Boston Celtics");
        assert_eq!(steps[0].date, date("2017-06-25"));
        assert_eq!(steps[0].action, "Round 1, Pick #3");
        assert_eq!(steps[1].date, date("2022-07-06"));
        assert_eq!(steps[1].action, "signing");
    }

    #[test]
    fn test_report_steps_unknown_draft_details() {
        let mut report = report();
        report.draft = Some(DraftInfo {
            year: Some(2017),
            ..Default::default()
        });
        report.transactions.clear();

        let steps = report_steps(&report);
        assert_eq!(steps[0].event, "Drafted #? by Unknown");
        assert_eq!(steps[0].action, "Round 1, Pick #?");
    }

    #[test]
    fn test_save_transaction_report() {
        let mut db = create_test_db();
        let id = db
            .upsert_player(&NewPlayer {
                name: "Jayson Tatum".to_string(),
                team: Some("BOS".parse().unwrap()),
                ..Default::default()
            })
            .unwrap();

        assert_eq!(save_transaction_report(&mut db, &report()).unwrap(), Some(2));

        let verified = db.get_verified_transactions(id).unwrap().unwrap();
        assert_eq!(verified.source, "basketball-reference");
        assert_eq!(verified.steps.len(), 2);

        let player = db.get_player(id).unwrap().unwrap();
        assert_eq!(player.draft_year, Some(2017));
        assert_eq!(player.draft_pick, Some(3));
    }

    #[test]
    fn test_save_transaction_report_unknown_player() {
        let mut db = create_test_db();
        assert_eq!(save_transaction_report(&mut db, &report()).unwrap(), None);
    }
}

#[cfg(test)]
mod fallback_tests {
    use super::*;
    use crate::core::http::build_client;
    use std::cell::Cell;

    struct FakeSource {
        name: &'static str,
        outcome: fn(&str) -> Result<Option<TransactionReport>>,
        calls: Cell<usize>,
    }

    impl FakeSource {
        fn new(name: &'static str, outcome: fn(&str) -> Result<Option<TransactionReport>>) -> Self {
            Self {
                name,
                outcome,
                calls: Cell::new(0),
            }
        }
    }

    impl TransactionSource for FakeSource {
        fn name(&self) -> &'static str {
            self.name
        }

        async fn fetch(&self, _client: &Client, player: &str) -> Result<Option<TransactionReport>> {
            self.calls.set(self.calls.get() + 1);
            (self.outcome)(player)
        }
    }

    fn with_transactions(player: &str) -> Result<Option<TransactionReport>> {
        Ok(Some(TransactionReport {
            player: player.to_string(),
            source: "fake".to_string(),
            draft: None,
            transactions: vec![parse_transaction_text("July 6, 2022: Signed").unwrap()],
        }))
    }

    fn empty(player: &str) -> Result<Option<TransactionReport>> {
        Ok(Some(TransactionReport {
            player: player.to_string(),
            source: "empty".to_string(),
            draft: None,
            transactions: Vec::new(),
        }))
    }

    fn failing(_player: &str) -> Result<Option<TransactionReport>> {
        Err(TradeTreeError::PlayerNotFound {
            name: "offline".to_string(),
        })
    }

    #[tokio::test]
    async fn test_primary_wins_when_it_has_data() {
        let client = build_client().unwrap();
        let primary = FakeSource::new("primary", with_transactions);
        let secondary = FakeSource::new("secondary", with_transactions);

        let report = fetch_with_fallback(&client, &primary, &secondary, "Jayson Tatum", Politeness::none())
            .await
            .unwrap();

        assert_eq!(report.source, "fake");
        assert_eq!(secondary.calls.get(), 0);
    }

    #[tokio::test]
    async fn test_falls_back_on_empty_primary() {
        let client = build_client().unwrap();
        let primary = FakeSource::new("primary", empty);
        let secondary = FakeSource::new("secondary", with_transactions);

        let report = fetch_with_fallback(&client, &primary, &secondary, "Jayson Tatum", Politeness::none()).await;

        assert!(report.is_some());
        assert_eq!(primary.calls.get(), 1);
        assert_eq!(secondary.calls.get(), 1);
    }

    #[tokio::test]
    async fn test_errors_become_no_data() {
        let client = build_client().unwrap();
        let primary = FakeSource::new("primary", failing);
        let secondary = FakeSource::new("secondary", failing);

        let report = fetch_with_fallback(&client, &primary, &secondary, "Jayson Tatum", Politeness::none()).await;
        assert!(report.is_none());
    }

    #[test]
    fn test_default_politeness() {
        let politeness = Politeness::default();
        assert_eq!(politeness.after_primary, std::time::Duration::from_secs(1));
        assert_eq!(politeness.after_secondary, std::time::Duration::from_millis(500));
        assert_eq!(politeness.between_players, std::time::Duration::from_secs(2));
    }
}
