//! Request pipeline for the Search Ads API
//!
//! This module provides the authenticated JSON client every resource
//! service goes through.
//!
//! # Architecture
//!
//! - Uses the shared [`HttpClient`](crate::http::HttpClient) (single attempt per send)
//! - OAuth client-credentials authentication with cached token refresh
//! - Rate-limit-only retry with exponential backoff
//! - Envelope decoding with a uniform error taxonomy
//! - Pagination traversal for find endpoints

pub mod auth;
pub mod client;
pub mod errors;

pub use auth::{AccessTokenProvider, AuthTransport, OAuthTokenSource};
pub use client::{ApiClient, ApiClientBuilder, ApiClientConfig, ApiResponse, FindEndpoint};
pub use errors::{ApiError, ApiErrorCategory};
