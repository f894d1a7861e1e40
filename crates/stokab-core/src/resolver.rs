// Point graph resolution
//
// Turns wire rows into fully materialized `Point` graphs. Two entries:
// fetch-by-id (one GET, the first row of a one-element array) and
// from-record (a row already in hand from a batch listing, no fetch for
// the point itself). Both run the same build step, which recurses into
// `relatedPointIds` in source order with strictly sequential awaits.
//
// Resolution is eager but memoized per traversal: each distinct id is
// fetched once and shared as an `Arc`. An id that loops back into
// itself while still being built is a cycle and fails instead of
// recursing without bound.

use std::collections::{HashMap, HashSet};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use tracing::{debug, trace};

use stokab_api::ApiClient;
use stokab_api::types::PointRecord;

use crate::error::CoreError;
use crate::geo::ProjectionRegistry;
use crate::model::Point;

pub(crate) struct PointResolver<'a> {
    api: &'a ApiClient,
    projections: &'a ProjectionRegistry,
    resolved: HashMap<String, Arc<Point>>,
    in_flight: HashSet<String>,
}

impl<'a> PointResolver<'a> {
    pub(crate) fn new(api: &'a ApiClient, projections: &'a ProjectionRegistry) -> Self {
        Self {
            api,
            projections,
            resolved: HashMap::new(),
            in_flight: HashSet::new(),
        }
    }

    /// Fetch-by-id entry: one GET per distinct id per traversal.
    pub(crate) async fn fetch(&mut self, point_id: &str) -> Result<Arc<Point>, CoreError> {
        if let Some(done) = self.resolved.get(point_id) {
            trace!(point_id, "already resolved, sharing");
            return Ok(Arc::clone(done));
        }
        if self.in_flight.contains(point_id) {
            return Err(CoreError::CyclicPointGraph {
                point_id: point_id.to_owned(),
            });
        }

        debug!(point_id, "fetching point");
        let mut rows = self.api.get_by_point_id(point_id).await?;
        if rows.is_empty() {
            return Err(CoreError::PointNotFound {
                point_id: point_id.to_owned(),
            });
        }
        if rows.len() > 1 {
            debug!(point_id, rows = rows.len(), "expected one row, using the first");
        }
        let record = rows.swap_remove(0);
        self.build(record).await
    }

    /// From-record entry: the row is already in hand, so the point
    /// itself costs no request. Related points still resolve over the
    /// network (or out of the memo).
    pub(crate) async fn from_record(
        &mut self,
        record: PointRecord,
    ) -> Result<Arc<Point>, CoreError> {
        if let Some(done) = self.resolved.get(&record.point_id) {
            return Ok(Arc::clone(done));
        }
        if self.in_flight.contains(&record.point_id) {
            return Err(CoreError::CyclicPointGraph {
                point_id: record.point_id,
            });
        }
        self.build(record).await
    }

    /// Shared build step. Keeps the in-flight set consistent on every
    /// exit path.
    async fn build(&mut self, record: PointRecord) -> Result<Arc<Point>, CoreError> {
        let point_id = record.point_id.clone();
        self.in_flight.insert(point_id.clone());

        let result = self.build_point(record).await;

        self.in_flight.remove(&point_id);

        let point = Arc::new(result?);
        self.resolved.insert(point_id, Arc::clone(&point));
        Ok(point)
    }

    /// Sub-objects first, scalars next, then the related-point
    /// recursion in source order. Boxed because the future recurses
    /// back through `fetch`.
    fn build_point<'s>(
        &'s mut self,
        record: PointRecord,
    ) -> Pin<Box<dyn Future<Output = Result<Point, CoreError>> + 's>> {
        Box::pin(async move {
            let PointRecord {
                point_id,
                address,
                real_estate,
                coordinates,
                district,
                city_area,
                fiber_status,
                related_point_ids,
                point_info,
            } = record;

            let coordinates = self.projections.transform(
                &coordinates.projection,
                coordinates.latitude,
                coordinates.longitude,
            )?;

            let mut related_points = Vec::with_capacity(related_point_ids.len());
            for related in related_point_ids {
                related_points.push(self.fetch(&related.name).await?);
            }

            Ok(Point {
                id: point_id,
                address: address.into(),
                realestate: real_estate.into(),
                coordinates,
                district,
                city_area,
                fiber_status,
                related_points,
                info: point_info.into(),
            })
        })
    }
}
