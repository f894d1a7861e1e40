// ── Pricing ──
//
// A price estimate is an ordered list of candidate products; each
// product's total is the one-time fee plus the monthly fee over the
// whole contract.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Commercial terms for one product over a contract period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Price {
    pub contract_period_years: u32,
    pub one_time_fee: f64,
    pub monthly_fee: f64,
}

impl Price {
    /// Total cost over the whole contract: one-time fee plus monthly
    /// fee times months.
    pub fn total(&self) -> f64 {
        let months = f64::from(self.contract_period_years * 12);
        self.one_time_fee + self.monthly_fee * months
    }
}

/// A priced product candidate from an estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub kind: String,
    pub comment: Option<String>,
    pub price: Price,
}

impl Product {
    pub fn total(&self) -> f64 {
        self.price.total()
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {:.2} total ({:.2} + {:.2}/month over {}y)",
            self.name,
            self.total(),
            self.price.one_time_fee,
            self.price.monthly_fee,
            self.price.contract_period_years,
        )
    }
}

/// Ordered product candidates for a prospective circuit.
#[derive(Debug, Clone, Default)]
pub struct ProductList {
    products: Vec<Product>,
}

impl ProductList {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// The product with the strictly smallest total. Ties keep the
    /// first-seen candidate; an empty list has no answer.
    pub fn cheapest(&self) -> Option<&Product> {
        let mut best: Option<&Product> = None;
        for product in &self.products {
            if best.is_none_or(|current| product.total() < current.total()) {
                best = Some(product);
            }
        }
        best
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Product> {
        self.products.iter()
    }

    pub fn as_slice(&self) -> &[Product] {
        &self.products
    }
}

impl<'a> IntoIterator for &'a ProductList {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.products.iter()
    }
}

impl IntoIterator for ProductList {
    type Item = Product;
    type IntoIter = std::vec::IntoIter<Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.products.into_iter()
    }
}
