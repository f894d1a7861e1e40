// Commercial endpoints
//
// Framework agreements and invoice groups parameterize a price
// estimate; all three live under the same `/api/1.3/` prefix.

use crate::client::ApiClient;
use crate::error::Error;
use crate::types::{EstimateRecord, EstimateRequest, FrameworkAgreementRecord, InvoiceGroupRecord};

impl ApiClient {
    /// List the framework agreements available to the account.
    ///
    /// `GET frameworkAgreement`
    pub async fn framework_agreements(&self) -> Result<Vec<FrameworkAgreementRecord>, Error> {
        self.get_list("frameworkAgreement", &[]).await
    }

    /// List the account's invoice groups.
    ///
    /// `GET invoiceGroup`
    pub async fn invoice_groups(&self) -> Result<Vec<InvoiceGroupRecord>, Error> {
        self.get_list("invoiceGroup", &[]).await
    }

    /// Price a prospective circuit between two points.
    ///
    /// `POST priceEstimate` with a JSON body.
    pub async fn price_estimate(
        &self,
        request: &EstimateRequest,
    ) -> Result<Vec<EstimateRecord>, Error> {
        self.post_list("priceEstimate", request).await
    }
}
