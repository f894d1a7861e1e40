// Coordinate reference systems and the WGS84 transform
//
// The availability API reports point coordinates in a named source
// projection. The registry maps those names to proj definitions and
// re-expresses the pair in WGS84 degrees; the projected pair is not
// kept. Unknown names fail -- there is no fallback projection.

use std::collections::HashMap;
use std::fmt;

use proj4rs::Proj;
use tracing::trace;

use crate::error::CoreError;

/// proj definition of the WGS84 output system.
const WGS84: &str = "+proj=longlat +datum=WGS84 +no_defs";

/// EPSG:3021 (RT90 2.5 gon V), the grid the API reports point
/// coordinates in.
const EPSG_3021: &str = "+proj=tmerc +lat_0=0 +lon_0=15.80827777777778 +k=1 \
    +x_0=1500000 +y_0=0 +ellps=bessel \
    +towgs84=414.1,41.3,603.1,-0.855,2.141,-7.023,0 +units=m +no_defs";

/// A named source reference system and its proj definition.
#[derive(Debug, Clone)]
pub struct ProjectionEntry {
    /// EPSG label, informational only.
    pub code: String,
    /// proj definition string handed to the transform.
    pub definition: String,
}

/// Registry of known source reference systems.
///
/// The mapping is plain data on purpose. The upstream data set carries
/// two spellings of the RT90 2.5 gon V name, both resolving to
/// EPSG:3021; whether those were ever meant to diverge is not decidable
/// from the data, so both defaults are kept visible here and
/// [`insert`](Self::insert) overrides either one. Start from
/// [`empty`](Self::empty) to drop the defaults entirely.
#[derive(Debug, Clone)]
pub struct ProjectionRegistry {
    entries: HashMap<String, ProjectionEntry>,
}

impl Default for ProjectionRegistry {
    fn default() -> Self {
        let mut registry = Self::empty();
        registry.insert("RT90_2.5_GON_V_0:-15", "EPSG:3021", EPSG_3021);
        registry.insert("RT90_2.5_GON_V", "EPSG:3021", EPSG_3021);
        registry
    }
}

impl ProjectionRegistry {
    /// A registry with no entries; every transform fails until
    /// definitions are inserted.
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Register (or override) a named source system.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        code: impl Into<String>,
        definition: impl Into<String>,
    ) {
        self.entries.insert(
            name.into(),
            ProjectionEntry {
                code: code.into(),
                definition: definition.into(),
            },
        );
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Registered source-system names, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Re-express a projected (northing, easting) pair from the named
    /// source system in WGS84 degrees.
    pub fn transform(
        &self,
        name: &str,
        northing: f64,
        easting: f64,
    ) -> Result<Coordinates, CoreError> {
        let entry = self
            .entries
            .get(name)
            .ok_or_else(|| CoreError::UnknownProjection {
                name: name.to_owned(),
            })?;

        let source = Proj::from_proj_string(&entry.definition)?;
        let target = Proj::from_proj_string(WGS84)?;

        // proj works on (x, y) = (easting, northing); the geographic
        // side is in radians.
        let mut point = (easting, northing, 0.0);
        proj4rs::transform::transform(&source, &target, &mut point)?;

        let coordinates = Coordinates {
            latitude: point.1.to_degrees(),
            longitude: point.0.to_degrees(),
        };
        trace!(name, code = %entry.code, %coordinates, "projected to WGS84");
        Ok(coordinates)
    }
}

/// A point location in WGS84 degrees.
///
/// Only the transformed pair is kept; the source projection and its
/// native pair are dropped at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    /// A map link embedding the pair at fixed precision.
    pub fn map_url(&self) -> String {
        format!(
            "https://google.com/maps/?q={:.6},{:.6}",
            self.latitude, self.longitude
        )
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}, {:.6}", self.latitude, self.longitude)
    }
}
