// ── Core error types ──
//
// Domain-level failures for graph resolution, coordinate transforms,
// and pricing. Transport and API errors from `stokab-api` pass through
// untouched: this crate adds no retry and no status translation.

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Error surfaced by the API client (token grant, transport, or
    /// the `message` envelope).
    #[error(transparent)]
    Api(#[from] stokab_api::Error),

    /// Coordinate transform requested for an unregistered source
    /// reference system. No fallback projection exists.
    #[error("Unknown projection: {name}")]
    UnknownProjection { name: String },

    /// The projection library rejected a definition or a pair.
    #[error("Projection error: {0}")]
    Projection(#[from] proj4rs::errors::Error),

    /// Fetch-by-id answered with an empty array.
    #[error("Point not found: {point_id}")]
    PointNotFound { point_id: String },

    /// The related-point graph loops back through a point that is
    /// still being resolved.
    #[error("Cyclic point graph at {point_id}")]
    CyclicPointGraph { point_id: String },

    /// A price-estimate response with no estimate element.
    #[error("Price estimate response was empty")]
    EmptyEstimate,
}
