//! Uniform response envelope
//!
//! Every non-empty response body, success or failure, is shaped as
//! `{data, pagination, error}`. `data` is kept as raw JSON here; the
//! executor decodes it into the caller's type.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Wire-level response wrapper
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination: Option<PageInfo>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorBody>,
}

impl Envelope {
    /// First reported error, if the envelope carries any
    pub fn first_error(&self) -> Option<&ErrorDetail> {
        self.error.as_ref().and_then(ErrorBody::first)
    }
}

/// Pagination metadata returned alongside a page of results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub total_results: u32,
    pub start_index: u32,
    pub items_per_page: u32,
}

/// Server-reported failure list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub errors: Vec<ErrorDetail>,
}

impl ErrorBody {
    pub fn first(&self) -> Option<&ErrorDetail> {
        self.errors.first()
    }
}

/// One entry of an [`ErrorBody`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorDetail {
    pub message_code: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}
