//! Team abbreviation type.

use crate::error::{Result, TradeTreeError};
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Historical and source-specific codes mapped onto the current franchise code.
const TEAM_ALIASES: &[(&str, &str)] = &[
    ("BRK", "BKN"),
    ("NJN", "BKN"),
    ("CHO", "CHA"),
    ("GS", "GSW"),
    ("NO", "NOP"),
    ("NOH", "NOP"),
    ("NY", "NYK"),
    ("PHO", "PHX"),
    ("SA", "SAS"),
    ("UTH", "UTA"),
    ("WSH", "WAS"),
];

/// Normalized NBA team abbreviation (`BOS`, `BKN`, ...).
///
/// Parsing upper-cases the input and folds known aliases, so `brk`, `NJN`
/// and `BKN` all parse to the same value.
///
/// # Examples
///
/// ```rust
/// use nba_trade_tree::TeamAbbr;
///
/// let nets: TeamAbbr = "brk".parse().unwrap();
/// assert_eq!(nets.as_str(), "BKN");
/// assert!("B0S".parse::<TeamAbbr>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TeamAbbr(String);

impl TeamAbbr {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TeamAbbr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TeamAbbr {
    type Err = TradeTreeError;

    fn from_str(s: &str) -> Result<Self> {
        let upper = s.trim().to_ascii_uppercase();
        let valid = (2..=3).contains(&upper.len()) && upper.chars().all(|c| c.is_ascii_uppercase());
        if !valid {
            return Err(TradeTreeError::InvalidTeamAbbr {
                abbr: s.to_string(),
            });
        }

        let normalized = TEAM_ALIASES
            .iter()
            .find(|(alias, _)| *alias == upper)
            .map(|(_, canonical)| canonical.to_string())
            .unwrap_or(upper);

        Ok(Self(normalized))
    }
}

impl TryFrom<String> for TeamAbbr {
    type Error = TradeTreeError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<TeamAbbr> for String {
    fn from(abbr: TeamAbbr) -> Self {
        abbr.0
    }
}

impl ToSql for TeamAbbr {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.0.as_str()))
    }
}

impl FromSql for TeamAbbr {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value
            .as_str()?
            .parse()
            .map_err(|e| FromSqlError::Other(Box::new(e)))
    }
}
