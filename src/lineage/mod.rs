//! Trade chain derivation and lineage graphs
//!
//! Chains stored in `trade_chains` are a cache: [`derive_chain`] rebuilds
//! them from trades, picks, assets and the acquisition row.

pub mod chain;
pub mod graph;


pub use chain::{derive_chain, ensure_chronological, ChainInputs, PickMovement};
pub use graph::{GraphEdge, GraphNode, LineageGraph, NodeKind};
