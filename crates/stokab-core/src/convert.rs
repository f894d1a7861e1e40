// ── Wire-to-domain conversions ──
//
// Bridges `stokab_api::types` rows into `model` types. Coordinates are
// deliberately absent: the transform needs the projection registry, so
// the resolver owns that step.

use stokab_api::types::{
    AddressRecord, FrameworkAgreementRecord, InvoiceGroupRecord, PointInfoRecord, PriceRecord,
    ProductRecord, RealEstateRecord,
};

use crate::model::{
    Address, FrameworkAgreement, InvoiceGroup, PointInfo, PointKind, Price, Product, RealEstate,
};

impl From<AddressRecord> for Address {
    fn from(rec: AddressRecord) -> Self {
        Self {
            city: rec.city,
            street: rec.street,
            number: rec.number,
            littera: rec.littera,
        }
    }
}

impl From<RealEstateRecord> for RealEstate {
    fn from(rec: RealEstateRecord) -> Self {
        Self {
            name: rec.name,
            suffix: rec.suffix,
        }
    }
}

impl From<PointInfoRecord> for PointInfo {
    fn from(rec: PointInfoRecord) -> Self {
        Self {
            kind: rec.point_type.map(PointKind::from),
            a_node: rec.a_node,
            o_node: rec.o_node,
        }
    }
}

impl From<FrameworkAgreementRecord> for FrameworkAgreement {
    fn from(rec: FrameworkAgreementRecord) -> Self {
        Self {
            id: rec.id,
            name: rec.name,
            valid_to: rec.valid_to,
        }
    }
}

impl From<InvoiceGroupRecord> for InvoiceGroup {
    fn from(rec: InvoiceGroupRecord) -> Self {
        Self {
            id: rec.id,
            name: rec.name,
        }
    }
}

impl From<PriceRecord> for Price {
    fn from(rec: PriceRecord) -> Self {
        Self {
            contract_period_years: rec.contract_period_years,
            one_time_fee: rec.one_time_fee,
            monthly_fee: rec.monthly_fee,
        }
    }
}

impl From<ProductRecord> for Product {
    fn from(rec: ProductRecord) -> Self {
        Self {
            id: rec.id,
            name: rec.name,
            kind: rec.kind,
            comment: rec.comment,
            price: rec.price.into(),
        }
    }
}
