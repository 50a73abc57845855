//! Row ID types for the trade tree store.

use crate::error::{Result, TradeTreeError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

macro_rules! row_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl $name {
            pub fn new(id: i64) -> Self {
                Self(id)
            }

            pub fn as_i64(&self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = TradeTreeError;

            fn from_str(s: &str) -> Result<Self> {
                Ok(Self(s.trim().parse()?))
            }
        }
    };
}

row_id!(
    /// Surrogate key of a `teams` row.
    TeamId
);

row_id!(
    /// Surrogate key of a `players` row.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nba_trade_tree::PlayerId;
    ///
    /// let id: PlayerId = "42".parse().unwrap();
    /// assert_eq!(id.as_i64(), 42);
    /// assert_eq!(id.to_string(), "42");
    /// ```
    PlayerId
);

row_id!(
    /// Surrogate key of a `trades` row.
    TradeId
);

row_id!(
    /// Surrogate key of a `draft_picks` row.
    PickId
);

row_id!(
    /// Surrogate key of a `trade_assets` row.
    AssetId
);
