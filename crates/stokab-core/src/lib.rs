//! Domain layer for the Stokab fiber-network availability API.
//!
//! Builds on [`stokab_api`]'s raw client:
//!
//! - **[`StokabClient`]** — consumer-facing facade owning the
//!   authenticated session. Point lookups come back as fully resolved
//!   related-point graphs; commercial lookups come back as typed
//!   domain objects.
//! - **[`ProjectionRegistry`]** — explicit, overridable mapping from
//!   the API's named source reference systems to proj definitions.
//!   Point coordinates are re-expressed in WGS84 at construction; the
//!   projected pair is discarded.
//! - **Domain model** ([`model`]) — typed views over the wire rows
//!   ([`Point`], [`Address`], [`RealEstate`], [`PointInfo`],
//!   [`FrameworkAgreement`], [`InvoiceGroup`]), every field lifted at
//!   construction, nothing looked up lazily.
//! - **Pricing** — [`ProductList`] with cheapest-by-total selection
//!   over the products of a price estimate.
//!
//! One request is in flight at a time; nothing here spawns tasks,
//! retries, or renews tokens on its own.

pub mod client;
pub mod error;
pub mod geo;
pub mod model;

mod convert;
mod resolver;

pub use client::StokabClient;
pub use error::CoreError;
pub use geo::{Coordinates, ProjectionRegistry};
pub use model::{
    Address, FrameworkAgreement, InvoiceGroup, Point, PointInfo, PointKind, Price, Product,
    ProductList, RealEstate,
};

// Re-export what consumers need to connect without naming stokab-api.
pub use stokab_api::{ApiClient, Credentials, TlsMode, Token, TransportConfig};
