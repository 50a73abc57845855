//! Enumerations stored as text columns.

use crate::error::{Result, TradeTreeError};
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a player joined their current team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AcquisitionType {
    Trade,
    Draft,
    Signing,
    Waiver,
}

impl AcquisitionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AcquisitionType::Trade => "trade",
            AcquisitionType::Draft => "draft",
            AcquisitionType::Signing => "signing",
            AcquisitionType::Waiver => "waiver",
        }
    }
}

impl fmt::Display for AcquisitionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AcquisitionType {
    type Err = TradeTreeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "trade" => Ok(AcquisitionType::Trade),
            "draft" => Ok(AcquisitionType::Draft),
            "signing" => Ok(AcquisitionType::Signing),
            "waiver" => Ok(AcquisitionType::Waiver),
            _ => Err(TradeTreeError::InvalidAcquisitionType {
                value: s.to_string(),
            }),
        }
    }
}

impl ToSql for AcquisitionType {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for AcquisitionType {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value
            .as_str()?
            .parse()
            .map_err(|e| FromSqlError::Other(Box::new(e)))
    }
}

/// What kind of asset changes hands in a trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    Player,
    Pick,
}

impl AssetKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetKind::Player => "player",
            AssetKind::Pick => "pick",
        }
    }
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_acquisition_type_round_trips_through_str() {
        for kind in [
            AcquisitionType::Trade,
            AcquisitionType::Draft,
            AcquisitionType::Signing,
            AcquisitionType::Waiver,
        ] {
            assert_eq!(kind.to_string().parse::<AcquisitionType>().unwrap(), kind);
        }
    }

    #[test]
    fn test_acquisition_type_is_case_insensitive() {
        assert_eq!(
            "Draft".parse::<AcquisitionType>().unwrap(),
            AcquisitionType::Draft
        );
    }

    #[test]
    fn test_acquisition_type_rejects_unknown() {
        match "free-agent".parse::<AcquisitionType>() {
            Err(TradeTreeError::InvalidAcquisitionType { value }) => {
                assert_eq!(value, "free-agent")
            }
            other => panic!("Expected InvalidAcquisitionType, got {:?}", other),
        }
    }

    #[test]
    fn test_acquisition_type_serde_lowercase() {
        let json = serde_json::to_string(&AcquisitionType::Signing).unwrap();
        assert_eq!(json, "\"signing\"");
    }
}
