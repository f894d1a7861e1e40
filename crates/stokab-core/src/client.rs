// Consumer-facing facade
//
// Owns the authenticated `ApiClient` and the projection registry, and
// exposes the domain operations: point lookups as fully resolved
// graphs, commercial reference data, and price estimates. Each call is
// one traversal; nothing is cached across calls.

use std::sync::Arc;

use tracing::debug;
use url::Url;

use stokab_api::types::{EstimateRequest, PointRecord, PointRef};
use stokab_api::{ApiClient, Credentials, TransportConfig};

use crate::error::CoreError;
use crate::geo::ProjectionRegistry;
use crate::model::{FrameworkAgreement, InvoiceGroup, Point, ProductList};
use crate::resolver::PointResolver;

/// High-level client for the Stokab availability API.
pub struct StokabClient {
    api: ApiClient,
    projections: ProjectionRegistry,
}

impl StokabClient {
    /// Authenticate and return a ready client with the default
    /// transport and projection registry.
    pub async fn connect(base_url: Url, credentials: Credentials) -> Result<Self, CoreError> {
        let api = ApiClient::connect(base_url, credentials).await?;
        Ok(Self::from_api(api))
    }

    /// Authenticate with explicit transport settings.
    pub async fn connect_with_transport(
        base_url: Url,
        credentials: Credentials,
        transport: &TransportConfig,
    ) -> Result<Self, CoreError> {
        let api = ApiClient::connect_with_transport(base_url, credentials, transport).await?;
        Ok(Self::from_api(api))
    }

    /// Wrap an already connected [`ApiClient`].
    pub fn from_api(api: ApiClient) -> Self {
        Self {
            api,
            projections: ProjectionRegistry::default(),
        }
    }

    /// Replace the projection registry (see [`ProjectionRegistry`] for
    /// why the defaults may need overriding).
    pub fn with_projections(mut self, projections: ProjectionRegistry) -> Self {
        self.projections = projections;
        self
    }

    /// The underlying raw API client.
    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    /// Re-run the token grant. Never triggered automatically.
    pub async fn reauthenticate(&mut self) -> Result<(), CoreError> {
        self.api.reauthenticate().await?;
        Ok(())
    }

    // ── Points ───────────────────────────────────────────────────────

    /// Fetch a point by id and resolve its full related-point graph.
    /// Always a fresh fetch; nothing is reused from earlier calls.
    pub async fn get_point(&self, point_id: &str) -> Result<Arc<Point>, CoreError> {
        let mut resolver = PointResolver::new(&self.api, &self.projections);
        resolver.fetch(point_id).await
    }

    /// Every point on a real estate, each with its graph resolved.
    /// Rows embedded in the batch response are reused; only related
    /// points not present in the batch cost extra requests.
    pub async fn get_points_by_realestate(
        &self,
        realestate: &str,
        suffix: &str,
    ) -> Result<Vec<Arc<Point>>, CoreError> {
        let rows = self.api.get_by_estate(realestate, suffix).await?;
        self.resolve_rows(rows).await
    }

    /// Every point at a street address, via the same batch path.
    pub async fn get_points_by_address(
        &self,
        city: &str,
        street: &str,
        number: &str,
        littera: Option<&str>,
    ) -> Result<Vec<Arc<Point>>, CoreError> {
        let rows = self.api.get_by_address(city, street, number, littera).await?;
        self.resolve_rows(rows).await
    }

    async fn resolve_rows(&self, rows: Vec<PointRecord>) -> Result<Vec<Arc<Point>>, CoreError> {
        let mut resolver = PointResolver::new(&self.api, &self.projections);
        let mut points = Vec::with_capacity(rows.len());
        for row in rows {
            points.push(resolver.from_record(row).await?);
        }
        Ok(points)
    }

    // ── Commercial data ──────────────────────────────────────────────

    pub async fn get_framework_agreements(&self) -> Result<Vec<FrameworkAgreement>, CoreError> {
        let rows = self.api.framework_agreements().await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    pub async fn get_invoice_groups(&self) -> Result<Vec<InvoiceGroup>, CoreError> {
        let rows = self.api.invoice_groups().await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Price a circuit between two points under the given commercial
    /// terms. The product list comes from the first estimate element
    /// of the response; an estimate with no element at all is malformed
    /// and fails rather than pricing at zero.
    #[allow(clippy::too_many_arguments)]
    pub async fn estimate(
        &self,
        invoice_group_id: &str,
        framework_agreement_id: &str,
        from_point: &str,
        to_point: &str,
        customer_type: &str,
        years: u32,
        singles: u32,
        pairs: u32,
    ) -> Result<ProductList, CoreError> {
        let request = EstimateRequest {
            invoice_group_id: invoice_group_id.to_owned(),
            framework_agreement_id: framework_agreement_id.to_owned(),
            from: PointRef {
                point_id: from_point.to_owned(),
            },
            to: PointRef {
                point_id: to_point.to_owned(),
            },
            customer_type: customer_type.to_owned(),
            contract_period_years: years,
            no_of_single_fibers: singles,
            no_of_fiber_pairs: pairs,
        };

        debug!(from_point, to_point, years, "requesting price estimate");
        let mut estimates = self.api.price_estimate(&request).await?;
        if estimates.is_empty() {
            return Err(CoreError::EmptyEstimate);
        }
        let first = estimates.swap_remove(0);
        Ok(ProductList::new(
            first.products.into_iter().map(Into::into).collect(),
        ))
    }
}
