// ── Street address and real estate ──

use std::fmt;

use serde::{Deserialize, Serialize};

/// The street address a network point serves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub city: String,
    pub street: String,
    pub number: String,
    /// Letter suffix distinguishing entrances (e.g. `"A"`).
    pub littera: Option<String>,
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.street, self.number)?;
        if let Some(littera) = self.littera.as_deref().filter(|l| !l.is_empty()) {
            write!(f, "{littera}")?;
        }
        write!(f, ", {}", self.city)
    }
}

/// The real-estate designation a point sits on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RealEstate {
    pub name: String,
    pub suffix: Option<String>,
}

impl fmt::Display for RealEstate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if let Some(suffix) = self.suffix.as_deref().filter(|s| !s.is_empty()) {
            write!(f, " {suffix}")?;
        }
        Ok(())
    }
}
