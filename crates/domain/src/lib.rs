//! # SearchAds Domain
//!
//! Wire-level data types and pure helpers for the SearchAds client.
//!
//! This crate contains:
//! - The Selector model sent to find-style endpoints
//! - The response envelope, pagination metadata and error body
//! - Resource payload shapes (campaigns, ad groups, keywords, reports)
//! - Configuration structures and the domain error type
//! - The compact filter/sort expression translator
//!
//! ## Architecture
//! - No dependencies on other SearchAds crates
//! - No I/O beyond what `serde` needs

pub mod config;
pub mod constants;
pub mod errors;
pub mod types;
pub mod utils;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
pub use utils::selector_parser::{
    parse_filter, parse_filters, parse_sort, parse_sorts, try_parse_filters, FilterParseError,
};
