//! # SearchAds Core
//!
//! Transport-agnostic request pipeline logic.
//!
//! This crate contains:
//! - Port interfaces (traits) for page sources and request observers
//! - The pagination traversal shared by every find-style resource
//!
//! ## Architecture Principles
//! - Only depends on `searchads-domain`
//! - No HTTP, filesystem or terminal code
//! - All external dependencies via traits

pub mod observability;
pub mod pagination;

pub use observability::ports::{NoopObserver, RequestEvent, RequestObserver, ResponseEvent};
pub use pagination::ports::{Page, PageSource};
pub use pagination::service::collect_all_pages;
