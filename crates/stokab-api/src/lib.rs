//! Async Rust client for the Stokab fiber-network availability API.
//!
//! Authenticates with an OAuth2 client-credentials grant against
//! `/connect/token`, then exposes the `/api/1.3/` surface: availability
//! lookups by point id, real estate, or street address, plus framework
//! agreements, invoice groups, and price estimates. Responses come back
//! as the raw wire rows ([`types`]); the `stokab-core` crate turns those
//! into domain objects.
//!
//! The token is fetched once by [`ApiClient::connect`] and never renewed
//! behind the caller's back. Check [`Token::is_expired`] and call
//! [`ApiClient::reauthenticate`] explicitly when it matters.

pub mod auth;
pub mod client;
pub mod error;
pub mod transport;
pub mod types;

mod availability;
mod commerce;

pub use auth::{Credentials, Token};
pub use client::ApiClient;
pub use error::Error;
pub use transport::{TlsMode, TransportConfig};
