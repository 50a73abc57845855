//! Free-text parsing of transaction and draft lines

use super::types::{DraftInfo, Transaction, TransactionKind};
use chrono::NaiveDate;

const NAME_SUFFIXES: &[&str] = &["jr", "sr", "ii", "iii", "iv"];

/// Characters folded to ASCII when building source ids
const LATIN_FOLDS: &[(char, char)] = &[
    ('á', 'a'),
    ('à', 'a'),
    ('ā', 'a'),
    ('ä', 'a'),
    ('ć', 'c'),
    ('č', 'c'),
    ('é', 'e'),
    ('ē', 'e'),
    ('è', 'e'),
    ('ģ', 'g'),
    ('í', 'i'),
    ('ī', 'i'),
    ('ņ', 'n'),
    ('ñ', 'n'),
    ('ó', 'o'),
    ('ö', 'o'),
    ('š', 's'),
    ('ú', 'u'),
    ('ü', 'u'),
    ('ū', 'u'),
    ('ž', 'z'),
];

fn trim_punct(token: &str) -> &str {
    token.trim_matches(|c: char| !c.is_alphanumeric() && c != '-' && c != '/')
}

/// First date in `text`, as `Month D, YYYY`, `YYYY-MM-DD` or `M/D/YYYY`
pub fn extract_date(text: &str) -> Option<NaiveDate> {
    let tokens: Vec<&str> = text.split_whitespace().map(trim_punct).collect();

    for (i, token) in tokens.iter().enumerate() {
        if let [month, day, year] = tokens.get(i..i + 3).unwrap_or_default() {
            let candidate = format!("{} {} {}", month, day, year);
            if let Ok(date) = NaiveDate::parse_from_str(&candidate, "%B %d %Y") {
                return Some(date);
            }
        }
        if let Ok(date) = NaiveDate::parse_from_str(token, "%Y-%m-%d") {
            return Some(date);
        }
        if let Ok(date) = NaiveDate::parse_from_str(token, "%m/%d/%Y") {
            return Some(date);
        }
    }
    None
}

/// Classify a transaction line; blank text yields `None`
pub fn parse_transaction_text(text: &str) -> Option<Transaction> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    let lc = text.to_lowercase();
    let kind = if lc.contains("traded") {
        TransactionKind::Trade
    } else if lc.contains("signed") {
        TransactionKind::Signing
    } else if lc.contains("waived") || lc.contains("released") {
        TransactionKind::Waiver
    } else if lc.contains("draft") {
        TransactionKind::Draft
    } else {
        TransactionKind::Unknown
    };

    Some(Transaction {
        date: extract_date(text),
        kind,
        description: text.to_string(),
        notes: None,
    })
}

/// `3rd` -> 3
fn ordinal(token: &str) -> Option<u16> {
    let token = trim_punct(token).to_ascii_lowercase();
    let digits = token
        .strip_suffix("st")
        .or_else(|| token.strip_suffix("nd"))
        .or_else(|| token.strip_suffix("rd"))
        .or_else(|| token.strip_suffix("th"))?;
    digits.parse().ok()
}

/// Parse a line such as
/// `Draft: Boston Celtics, 1st round (3rd pick, 3rd overall), 2017 NBA Draft`.
pub fn parse_draft_text(text: &str) -> Option<DraftInfo> {
    let mut info = DraftInfo::default();

    let words: Vec<&str> = text.split_whitespace().collect();
    for pair in words.windows(2) {
        let next = trim_punct(pair[1]).to_ascii_lowercase();
        match next.as_str() {
            "round" if info.round.is_none() => {
                info.round = ordinal(pair[0]).and_then(|r| u8::try_from(r).ok());
            }
            "pick" if info.pick.is_none() => info.pick = ordinal(pair[0]),
            "nba" if info.year.is_none() => {
                let year = trim_punct(pair[0]);
                if year.len() == 4 {
                    info.year = year.parse().ok();
                }
            }
            _ => {}
        }
    }

    if let Some((_, rest)) = text.split_once("Draft:") {
        let team = rest.split(',').next().unwrap_or_default().trim();
        if !team.is_empty() {
            info.team = Some(team.to_string());
        }
    }

    if info.is_empty() {
        None
    } else {
        Some(info)
    }
}

fn fold(c: char) -> char {
    LATIN_FOLDS
        .iter()
        .find(|(from, _)| *from == c)
        .map(|(_, to)| *to)
        .unwrap_or(c)
}

fn slug_part(word: &str) -> String {
    word.chars()
        .flat_map(char::to_lowercase)
        .map(fold)
        .filter(|c| c.is_ascii_alphabetic())
        .collect()
}

/// Basketball-Reference player id: five letters of the surname, two of the
/// first name, then `01`. Generational suffixes are ignored.
///
/// # Examples
///
/// ```rust
/// use nba_trade_tree::sources::bbref_id;
///
/// assert_eq!(bbref_id("Jayson Tatum").as_deref(), Some("tatumja01"));
/// assert_eq!(bbref_id("Jaren Jackson Jr.").as_deref(), Some("jacksja01"));
/// assert_eq!(bbref_id("Nene"), None);
/// ```
pub fn bbref_id(name: &str) -> Option<String> {
    let mut parts: Vec<String> = name.split_whitespace().map(slug_part).collect();
    while parts
        .last()
        .is_some_and(|p| p.is_empty() || NAME_SUFFIXES.contains(&p.as_str()))
    {
        parts.pop();
    }
    if parts.len() < 2 {
        return None;
    }

    let first: String = parts[0].chars().take(2).collect();
    let last: String = parts[parts.len() - 1].chars().take(5).collect();
    if first.is_empty() || last.is_empty() {
        return None;
    }
    Some(format!("{}{}01", last, first))
}
