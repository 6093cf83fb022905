//! Seam to the external ephemeris collaborator.
//!
//! The core never computes ephemerides itself: something outside the crate
//! (a remote service, a planetary-theory library, a fixture table in tests)
//! maps a body and an instant to an RA/Dec pair. This trait is that boundary.

use hifitime::Epoch;

use crate::astrocarta_errors::AstrocartaError;
use crate::bodies::CelestialBody;
use crate::coordinates::{EquatorialPosition, GeoCoordinate};

/// Provider of apparent equatorial positions for solar-system bodies.
///
/// Implementations fail with [`AstrocartaError::EphemerisUnavailable`] when
/// they hold no data for the body/instant pair; the orchestrator recovers
/// from that per body rather than failing the request.
pub trait Ephemeris {
    /// Look up the equatorial position of `body` at `epoch` as seen from
    /// `observer`.
    ///
    /// Arguments
    /// ---------
    /// * `body`: the body to resolve.
    /// * `epoch`: the instant of the request.
    /// * `observer`: the observer location; providers may use it for
    ///   topocentric corrections or ignore it.
    ///
    /// Return
    /// ------
    /// * The body's [`EquatorialPosition`], or
    ///   [`AstrocartaError::EphemerisUnavailable`] when no data exists.
    fn lookup(
        &self,
        body: CelestialBody,
        epoch: &Epoch,
        observer: &GeoCoordinate,
    ) -> Result<EquatorialPosition, AstrocartaError>;
}
