use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// A Spatial Reference Identifier, naming the coordinate reference system of a geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Srid(pub u32);

impl Srid {
    /// GCS WGS 84.
    pub const WGS84: Srid = Srid(4326);

    /// UTM Zone 17N, NAD 27.
    pub const UTM_ZONE_17N_NAD27: Srid = Srid(26717);

    /// SPCS Tennessee Zone, NAD 83.
    pub const TENNESSEE_NAD83: Srid = Srid(6576);

    /// The raw identifier.
    pub fn code(&self) -> u32 {
        self.0
    }
}

impl From<u32> for Srid {
    fn from(value: u32) -> Self {
        Srid(value)
    }
}

impl From<Srid> for u32 {
    fn from(value: Srid) -> Self {
        value.0
    }
}

impl Display for Srid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SRID={}", self.0)
    }
}
