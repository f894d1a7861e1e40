// Availability endpoints
//
// Point lookups by id, real estate, and street address. Each method is
// a thin input → request → wire-row mapping; turning rows into resolved
// domain points happens in `stokab-core`.

use crate::client::ApiClient;
use crate::error::Error;
use crate::types::PointRecord;

impl ApiClient {
    /// Look up a single point by id.
    ///
    /// `GET availability/getByPointId?pointId=` — the API answers with
    /// a one-element array.
    pub async fn get_by_point_id(&self, point_id: &str) -> Result<Vec<PointRecord>, Error> {
        self.get_list(
            "availability/getByPointId",
            &[("pointId", point_id.to_owned())],
        )
        .await
    }

    /// List every point on a real estate.
    ///
    /// `GET availability/getByEstate?realestate=&estatesuffix=` — the
    /// suffix is sent even when empty; the API treats it as "no suffix".
    pub async fn get_by_estate(
        &self,
        realestate: &str,
        suffix: &str,
    ) -> Result<Vec<PointRecord>, Error> {
        self.get_list(
            "availability/getByEstate",
            &[
                ("realestate", realestate.to_owned()),
                ("estatesuffix", suffix.to_owned()),
            ],
        )
        .await
    }

    /// List every point at a street address.
    ///
    /// `GET availability/getByAddress?city=&street=&number=&littera=`
    pub async fn get_by_address(
        &self,
        city: &str,
        street: &str,
        number: &str,
        littera: Option<&str>,
    ) -> Result<Vec<PointRecord>, Error> {
        self.get_list(
            "availability/getByAddress",
            &[
                ("city", city.to_owned()),
                ("street", street.to_owned()),
                ("number", number.to_owned()),
                ("littera", littera.unwrap_or_default().to_owned()),
            ],
        )
        .await
    }
}
