//! Application constants
//!
//! Centralized location for the domain-level defaults used by the client.

use std::time::Duration;

// API endpoints
pub const DEFAULT_BASE_URL: &str = "https://api.searchads.apple.com/api/v5";
pub const DEFAULT_TOKEN_URL: &str = "https://appleid.apple.com/auth/oauth2/token";
pub const DEFAULT_SCOPE: &str = "searchadsorg";

/// Header carrying the organization scope on every authenticated call
pub const ORG_CONTEXT_HEADER: &str = "X-AP-Context";

// Transport
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

// Selector pagination
pub const DEFAULT_PAGE_LIMIT: u32 = 20;

// Error/diagnostic truncation
pub const ERROR_BODY_EXCERPT_CHARS: usize = 500;
pub const VERBOSE_BODY_EXCERPT_CHARS: usize = 2000;

// Configuration
pub const DEFAULT_PROFILE: &str = "default";
pub const DEFAULT_CURRENCY: &str = "USD";
