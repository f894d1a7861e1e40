// ── Network point ──
//
// A fully resolved node in the fiber network graph. Related points are
// materialized `Arc`s, shared by id within one lookup; a point is never
// handed out half-built.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::premises::{Address, RealEstate};
use crate::geo::Coordinates;

/// Point-type code reported in `pointInfo`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub enum PointKind {
    /// Residential house node (code 5).
    HouseNode,
    /// Neutral point (code 12).
    Neutral,
    /// Commercial house node (code 14).
    CommercialHouseNode,
    /// Any code this library does not know.
    Other(i64),
}

impl From<i64> for PointKind {
    fn from(code: i64) -> Self {
        match code {
            5 => Self::HouseNode,
            12 => Self::Neutral,
            14 => Self::CommercialHouseNode,
            other => Self::Other(other),
        }
    }
}

impl From<PointKind> for i64 {
    fn from(kind: PointKind) -> Self {
        match kind {
            PointKind::HouseNode => 5,
            PointKind::Neutral => 12,
            PointKind::CommercialHouseNode => 14,
            PointKind::Other(code) => code,
        }
    }
}

/// Connectivity details for a point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointInfo {
    pub kind: Option<PointKind>,
    /// Upstream access node id.
    pub a_node: Option<String>,
    /// Optical node id.
    pub o_node: Option<String>,
}

impl fmt::Display for PointInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "aNode {}, oNode {}",
            self.a_node.as_deref().unwrap_or("-"),
            self.o_node.as_deref().unwrap_or("-"),
        )
    }
}

/// A node in the fiber network graph.
///
/// `related_points` mirrors the source row's `relatedPointIds` exactly:
/// same order, every entry fully resolved. Within one lookup, a shared
/// id resolves to the same `Arc`.
#[derive(Debug, Clone)]
pub struct Point {
    pub id: String,
    pub address: Address,
    pub realestate: RealEstate,
    /// WGS84 position; the source projection was applied at build time.
    pub coordinates: Coordinates,
    pub district: String,
    pub city_area: String,
    /// Connectivity state code as reported by the API.
    pub fiber_status: String,
    pub related_points: Vec<Arc<Point>>,
    pub info: PointInfo,
}

impl Point {
    /// Ids of the directly related points, in source order.
    pub fn related_ids(&self) -> impl Iterator<Item = &str> {
        self.related_points.iter().map(|p| p.id.as_str())
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}] {} ({} related)",
            self.id,
            self.fiber_status,
            self.address,
            self.related_points.len(),
        )
    }
}
