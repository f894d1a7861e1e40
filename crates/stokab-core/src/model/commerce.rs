// ── Commercial reference data ──

use std::fmt;

use serde::{Deserialize, Serialize};

/// A standing commercial contract type selectable when pricing a
/// circuit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameworkAgreement {
    pub id: String,
    pub name: String,
    pub valid_to: Option<String>,
}

impl fmt::Display for FrameworkAgreement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id)?;
        if let Some(valid_to) = self.valid_to.as_deref() {
            write!(f, " valid to {valid_to}")?;
        }
        Ok(())
    }
}

/// A billing grouping used when requesting a price estimate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceGroup {
    pub id: String,
    pub name: String,
}

impl fmt::Display for InvoiceGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}
