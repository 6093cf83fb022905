use std::collections::HashMap;

use hifitime::Epoch;

use astrocarta::astrocarta_errors::AstrocartaError;
use astrocarta::bodies::CelestialBody;
use astrocarta::coordinates::{EquatorialPosition, GeoCoordinate};
use astrocarta::ephemeris::Ephemeris;

/// Table-backed ephemeris double: serves fixed RA/Dec per body and fails
/// with `EphemerisUnavailable` for bodies absent from the table.
pub struct TableEphemeris {
    positions: HashMap<CelestialBody, EquatorialPosition>,
}

impl TableEphemeris {
    pub fn new(entries: &[(CelestialBody, f64, f64)]) -> Self {
        let positions = entries
            .iter()
            .map(|&(body, ra, dec)| (body, EquatorialPosition::new(ra, dec).unwrap()))
            .collect();
        TableEphemeris { positions }
    }

    /// Geocentric positions for 2025-02-09T12:00:00 UTC, good to the few
    /// arcminutes the sweep geometry cares about.
    pub fn for_2025_02_09() -> Self {
        TableEphemeris::new(&[
            (CelestialBody::Sun, 322.42, -14.57),
            (CelestialBody::Moon, 127.31, 23.18),
            (CelestialBody::Mercury, 327.69, -15.35),
            (CelestialBody::Venus, 1.45, 9.26),
            (CelestialBody::Mars, 110.07, 25.82),
            (CelestialBody::Jupiter, 69.93, 21.82),
            (CelestialBody::Saturn, 348.02, -6.63),
            (CelestialBody::Uranus, 54.72, 18.86),
            (CelestialBody::Neptune, 357.95, -1.23),
        ])
    }
}

impl Ephemeris for TableEphemeris {
    fn lookup(
        &self,
        body: CelestialBody,
        _epoch: &Epoch,
        _observer: &GeoCoordinate,
    ) -> Result<EquatorialPosition, AstrocartaError> {
        self.positions.get(&body).copied().ok_or_else(|| {
            AstrocartaError::EphemerisUnavailable {
                body: body.to_string(),
                reason: "body not in fixture table".to_string(),
            }
        })
    }
}
