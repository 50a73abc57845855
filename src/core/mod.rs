//! Core utilities for the NBA trade tree
//!
//! - `cache`: File system locations and the verified-transactions file
//! - `http`: Shared HTTP client for transaction sources

pub mod cache;
pub mod http;

// Re-export commonly used items for convenience
pub use cache::{
    default_database_path, try_read_to_string, verified_file_path, write_string, VerifiedFile,
};
pub use http::{build_client, get_text};
