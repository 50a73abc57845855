//! Importer output types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of a scraped transaction line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Trade,
    Signing,
    Waiver,
    Draft,
    Unknown,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Trade => "trade",
            TransactionKind::Signing => "signing",
            TransactionKind::Waiver => "waiver",
            TransactionKind::Draft => "draft",
            TransactionKind::Unknown => "unknown",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// `None` when no recognisable date was found in the text
    pub date: Option<NaiveDate>,
    pub kind: TransactionKind,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Whatever could be read from a "Draft:" line
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftInfo {
    pub year: Option<u16>,
    pub round: Option<u8>,
    pub pick: Option<u16>,
    pub team: Option<String>,
}

impl DraftInfo {
    pub fn is_empty(&self) -> bool {
        self.year.is_none() && self.round.is_none() && self.pick.is_none() && self.team.is_none()
    }
}

/// One player's history as reported by a single source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionReport {
    pub player: String,
    pub source: String,
    pub draft: Option<DraftInfo>,
    pub transactions: Vec<Transaction>,
}

impl TransactionReport {
    pub fn has_transactions(&self) -> bool {
        !self.transactions.is_empty()
    }
}
