// Wire types for the availability API (v1.3)
//
// Models the JSON shapes verbatim, camelCase and all. Domain types with
// resolved graphs and WGS84 coordinates live in `stokab-core`; nothing
// here is more than the row the server sent.

use serde::{Deserialize, Serialize};

// ── Availability ─────────────────────────────────────────────────────

/// One point row from the `availability/*` endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointRecord {
    pub point_id: String,
    pub address: AddressRecord,
    pub real_estate: RealEstateRecord,
    /// Projected pair in the source system's native units.
    pub coordinates: CoordinatesRecord,
    pub district: String,
    pub city_area: String,
    /// Connectivity state code; the exact set is defined by the API.
    pub fiber_status: String,
    /// Ids of directly related points, in server order.
    #[serde(default)]
    pub related_point_ids: Vec<RelatedPointRef>,
    pub point_info: PointInfoRecord,
}

/// Entry of `relatedPointIds`: the API wraps each id in an object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelatedPointRef {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressRecord {
    pub city: String,
    pub street: String,
    pub number: String,
    /// Letter suffix distinguishing entrances (e.g. `"A"`).
    #[serde(default)]
    pub littera: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RealEstateRecord {
    pub name: String,
    #[serde(default)]
    pub suffix: Option<String>,
}

/// Projected coordinates as reported by the API. `projection` names the
/// source reference system; `latitude`/`longitude` are northing/easting
/// in that system's units, not WGS84 degrees.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoordinatesRecord {
    pub projection: String,
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointInfoRecord {
    /// Numeric point-type code (5 = house node, 12 = neutral,
    /// 14 = commercial house node).
    #[serde(default)]
    pub point_type: Option<i64>,
    #[serde(default)]
    pub a_node: Option<String>,
    #[serde(default)]
    pub o_node: Option<String>,
}

// ── Commercial reference data ────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameworkAgreementRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub valid_to: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceGroupRecord {
    pub id: String,
    pub name: String,
}

// ── Price estimates ──────────────────────────────────────────────────

/// POST body for `priceEstimate`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateRequest {
    pub invoice_group_id: String,
    pub framework_agreement_id: String,
    pub from: PointRef,
    pub to: PointRef,
    pub customer_type: String,
    pub contract_period_years: u32,
    pub no_of_single_fibers: u32,
    pub no_of_fiber_pairs: u32,
}

/// Point reference nested under `from` / `to` in an estimate request.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PointRef {
    pub point_id: String,
}

/// One element of a `priceEstimate` response; the priced products for
/// the requested circuit.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateRecord {
    #[serde(default)]
    pub products: Vec<ProductRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub comment: Option<String>,
    pub price: PriceRecord,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceRecord {
    pub contract_period_years: u32,
    pub one_time_fee: f64,
    pub monthly_fee: f64,
}
