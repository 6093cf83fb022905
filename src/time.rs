//! Timestamp parsing and sidereal-time conversion.
//!
//! The request timestamp is parsed once into a [`hifitime::Epoch`] (UTC) and
//! threaded through the whole computation. Sidereal time is the **mean**
//! Greenwich sidereal time from the IAU 1982/2000 polynomial; UT1−UTC stays
//! below one second and is ignored, well inside the accuracy the rising-line
//! geometry needs.

use hifitime::Epoch;
use std::str::FromStr;

use crate::astrocarta_errors::AstrocartaError;
use crate::constants::{Degree, Hour, Radian, DEG_PER_HOUR, DPI, MJD, RADH, T2000};

/// Parse an ISO-8601 timestamp (e.g. `"2025-02-09T12:00:00"`) into an
/// [`Epoch`], interpreted as UTC when no time scale is given.
///
/// Arguments
/// ---------
/// * `timestamp`: the timestamp string from the request.
///
/// Return
/// ------
/// * The parsed [`Epoch`], or [`AstrocartaError::InvalidTimestamp`] if the
///   string is malformed.
pub fn parse_timestamp(timestamp: &str) -> Result<Epoch, AstrocartaError> {
    Epoch::from_str(timestamp).map_err(|e| {
        AstrocartaError::InvalidTimestamp(timestamp.to_string(), e.to_string())
    })
}

/// Compute the Greenwich Mean Sidereal Time (GMST) in radians
/// for a given Modified Julian Date.
///
/// This function implements the IAU 1982/2000 polynomial formula
/// for the mean sidereal time at 0h, plus the fractional-day
/// contribution of Earth's rotation.
///
/// # Arguments
/// * `tjm` - Modified Julian Date (MJD)
///
/// # Returns
/// * GMST angle in radians, normalized to the interval [0, 2π).
///
/// # References
/// * IAU 1982, IERS Conventions 1996/2000.
/// * Explanatory Supplement to the Astronomical Almanac (1992).
pub fn gmst(tjm: MJD) -> Radian {
    // Polynomial coefficients for GMST at 0h (in seconds)
    const C0: f64 = 24110.54841;
    const C1: f64 = 8640184.812866;
    const C2: f64 = 9.3104e-2;
    const C3: f64 = -6.2e-6;

    // Ratio of sidereal day to solar day
    const RAP: f64 = 1.00273790934;

    // Julian centuries since J2000.0 at 0h of the given date
    let day = tjm.floor();
    let frac = tjm - day;
    let t = (day - T2000) / 36525.0;

    // GMST at 0h in seconds, converted to radians (86400 seconds per day)
    let mut gmst0 = C0 + t * (C1 + t * (C2 + t * C3));
    gmst0 *= DPI / 86400.0;

    // Earth rotation over the fraction of the day, scaled to sidereal rate
    (gmst0 + frac * DPI * RAP).rem_euclid(DPI)
}

/// Compute the mean Local Sidereal Time (LST) in hours at the given
/// longitude for the given instant.
///
/// The longitude enters in hour units (15° per hour, east positive),
/// matching the standard relation LST = GMST + λ/15.
///
/// Arguments
/// ---------
/// * `epoch`: the instant, as parsed by [`parse_timestamp`].
/// * `longitude`: observer longitude in degrees, east positive.
///
/// Return
/// ------
/// * Local sidereal time in hours, in [0, 24).
pub fn local_sidereal_time(epoch: &Epoch, longitude: Degree) -> Hour {
    let gst_hours = gmst(epoch.to_mjd_utc_days()) / RADH;
    (gst_hours + longitude / DEG_PER_HOUR).rem_euclid(24.0)
}
