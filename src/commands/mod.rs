//! Command implementations for the trade tree CLI

pub mod common;
pub mod fetch;
pub mod lineage;
pub mod maintenance;
pub mod seed;

#[cfg(test)]
mod tests;

pub use common::{format_chain, open_database, resolve_db_path};
