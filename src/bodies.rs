//! Identifiers for the solar-system bodies tracked by the rising-line engine.
//!
//! Body names follow the lowercase request vocabulary of the ephemeris
//! collaborator (`"sun"`, `"moon"`, `"mercury"`, …). Parsing is
//! case-insensitive; display and serde always emit the lowercase form.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::astrocarta_errors::AstrocartaError;

/// A solar-system body for which a rising line can be requested.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum CelestialBody {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
}

/// The standard request set: every tracked body except Pluto, whose
/// exclusion is a policy decision carried by [`crate::astrocarta::Astrocarta`].
pub const DEFAULT_BODIES: [CelestialBody; 9] = [
    CelestialBody::Sun,
    CelestialBody::Moon,
    CelestialBody::Mercury,
    CelestialBody::Venus,
    CelestialBody::Mars,
    CelestialBody::Jupiter,
    CelestialBody::Saturn,
    CelestialBody::Uranus,
    CelestialBody::Neptune,
];

impl CelestialBody {
    /// Lowercase name of the body, as used on the wire and by the
    /// ephemeris collaborator.
    pub fn name(&self) -> &'static str {
        match self {
            CelestialBody::Sun => "sun",
            CelestialBody::Moon => "moon",
            CelestialBody::Mercury => "mercury",
            CelestialBody::Venus => "venus",
            CelestialBody::Mars => "mars",
            CelestialBody::Jupiter => "jupiter",
            CelestialBody::Saturn => "saturn",
            CelestialBody::Uranus => "uranus",
            CelestialBody::Neptune => "neptune",
            CelestialBody::Pluto => "pluto",
        }
    }
}

impl std::fmt::Display for CelestialBody {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for CelestialBody {
    type Err = AstrocartaError;

    /// Parse a body from its name, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sun" => Ok(CelestialBody::Sun),
            "moon" => Ok(CelestialBody::Moon),
            "mercury" => Ok(CelestialBody::Mercury),
            "venus" => Ok(CelestialBody::Venus),
            "mars" => Ok(CelestialBody::Mars),
            "jupiter" => Ok(CelestialBody::Jupiter),
            "saturn" => Ok(CelestialBody::Saturn),
            "uranus" => Ok(CelestialBody::Uranus),
            "neptune" => Ok(CelestialBody::Neptune),
            "pluto" => Ok(CelestialBody::Pluto),
            _ => Err(AstrocartaError::UnknownBody(s.to_string())),
        }
    }
}
