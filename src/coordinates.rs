//! Geographic and equatorial coordinate types.
//!
//! Both types validate on construction and never clamp: a request carrying a
//! latitude of 91° is rejected outright rather than silently pulled back into
//! range. Fields stay public for read access; going through the constructors
//! is what keeps the range invariants alive.

use serde::{Deserialize, Serialize};

use crate::astrocarta_errors::AstrocartaError;
use crate::constants::Degree;

/// A point on the Earth, in degrees.
///
/// Used for the observer's birth location handed to the ephemeris
/// collaborator. Latitude is in [-90, 90], longitude in [-180, 180],
/// both finite.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoCoordinate {
    /// Geodetic latitude in degrees, north positive.
    pub lat: Degree,

    /// Geodetic longitude in degrees, east positive.
    pub lon: Degree,
}

impl GeoCoordinate {
    /// Build a validated geographic coordinate.
    ///
    /// Arguments
    /// ---------
    /// * `lat`: latitude in degrees, must lie in [-90, 90].
    /// * `lon`: longitude in degrees, must lie in [-180, 180].
    ///
    /// Return
    /// ------
    /// * The coordinate, or a range error. NaN and infinities are rejected
    ///   by the same range checks.
    pub fn new(lat: Degree, lon: Degree) -> Result<GeoCoordinate, AstrocartaError> {
        if !(-90.0..=90.0).contains(&lat) {
            return Err(AstrocartaError::LatitudeOutOfRange(lat));
        }
        if !(-180.0..=180.0).contains(&lon) {
            return Err(AstrocartaError::LongitudeOutOfRange(lon));
        }
        Ok(GeoCoordinate { lat, lon })
    }
}

/// Position of a body on the celestial sphere, in degrees.
///
/// Supplied per body and per request by the ephemeris collaborator and
/// treated as immutable input to the sweep.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EquatorialPosition {
    /// Right ascension in degrees, normalized to [0, 360).
    pub right_ascension: Degree,

    /// Declination in degrees, in [-90, 90].
    pub declination: Degree,
}

impl EquatorialPosition {
    /// Build an equatorial position, normalizing right ascension into
    /// [0, 360) and validating the declination range.
    pub fn new(
        right_ascension: Degree,
        declination: Degree,
    ) -> Result<EquatorialPosition, AstrocartaError> {
        if !right_ascension.is_finite() {
            return Err(AstrocartaError::NonFiniteRightAscension(right_ascension));
        }
        if !(-90.0..=90.0).contains(&declination) {
            return Err(AstrocartaError::DeclinationOutOfRange(declination));
        }
        Ok(EquatorialPosition {
            right_ascension: right_ascension.rem_euclid(360.0),
            declination,
        })
    }
}
