//! Access-token acquisition and caching
//!
//! A [`TokenSource`] knows how to obtain a fresh token; a [`TokenManager`]
//! owns the cached token and refreshes it through the source when it is
//! missing or about to expire.
//!
//! ```text
//! caller ──► TokenManager ──(miss/expired)──► TokenSource ──► token endpoint
//!                 │
//!                 └── Mutex<Option<AccessToken>>
//! ```

pub mod token_manager;
pub mod traits;
pub mod types;

pub use token_manager::TokenManager;
pub use traits::TokenSource;
pub use types::{AccessToken, AuthError};
