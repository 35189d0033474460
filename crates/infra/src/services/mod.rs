//! Resource services
//!
//! Thin typed wrappers over [`ApiClient`](crate::api::ApiClient): each
//! method builds a path, picks a payload shape and returns decoded data.
//! No business rules live here.

pub mod acls;
pub mod adgroups;
pub mod campaigns;
pub mod keywords;
pub mod negative_keywords;
pub mod reports;
pub mod search;

pub use acls::AclService;
pub use adgroups::AdGroupService;
pub use campaigns::CampaignService;
pub use keywords::KeywordService;
pub use negative_keywords::{NegativeKeywordScope, NegativeKeywordService};
pub use reports::{ReportKind, ReportService};
pub use search::SearchService;

use searchads_core::Page;

use crate::api::ApiResponse;

/// Turn a list/find response into a page; missing data is an empty page
pub(crate) fn into_page<T>(response: ApiResponse<Vec<T>>) -> Page<T> {
    Page::new(response.data.unwrap_or_default(), response.pagination)
}

/// Append the `limit`/`offset` query of a GET list call
pub(crate) fn paged(path: &str, limit: u32, offset: u32) -> String {
    format!("{path}?limit={limit}&offset={offset}")
}
