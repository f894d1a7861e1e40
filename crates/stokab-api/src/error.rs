use thiserror::Error;

/// Top-level error type for the `stokab-api` crate.
///
/// Covers every failure mode of the raw client: the token grant, the
/// HTTP transport, and the API's own error envelope. `stokab-core`
/// wraps these for domain consumers.
#[derive(Debug, Error)]
pub enum Error {
    // ── Authentication ──────────────────────────────────────────────
    /// The token grant was rejected, or its response was missing the
    /// expected fields.
    #[error("Authentication failed: {message}")]
    Authentication { message: String },

    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, timeout, non-2xx status).
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// TLS or client-builder failure.
    #[error("TLS error: {0}")]
    Tls(String),

    // ── API ─────────────────────────────────────────────────────────
    /// API-level error envelope: an object carrying a `message` field
    /// where a listing was expected.
    #[error("API error: {message}")]
    Api { message: String },

    // ── Data ────────────────────────────────────────────────────────
    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },
}
