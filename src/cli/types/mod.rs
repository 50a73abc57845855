//! Type-safe wrappers and enums for trade tree data.

pub mod ids;
pub mod kinds;
pub mod team;

pub use ids::{AssetId, PickId, PlayerId, TeamId, TradeId};
pub use kinds::{AcquisitionType, AssetKind};
pub use team::TeamAbbr;
