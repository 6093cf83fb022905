//! Rising-line construction: the per-body longitude sweep.
//!
//! A rising line is the locus of geographic points where a body sits on the
//! local horizon at a fixed instant. For each longitude of an evenly spaced
//! grid, the sweep derives the local hour angle from sidereal time and the
//! body's right ascension, then solves the horizon condition for latitude.
//! Samples without a crossing keep their grid longitude and a `None`
//! latitude, so a line always holds exactly one point per grid sample.

use serde::{Deserialize, Serialize};

use hifitime::Epoch;

use crate::astrocarta_errors::AstrocartaError;
use crate::bodies::CelestialBody;
use crate::constants::{Degree, DEG_PER_HOUR, LONGITUDE_MAX, LONGITUDE_MIN};
use crate::coordinates::EquatorialPosition;
use crate::horizon::solve_horizon_latitude;
use crate::time::local_sidereal_time;

/// One sample of a rising line.
///
/// `lat` is `None` when the horizon condition admits no crossing at this
/// longitude; it serializes to JSON `null`, never to a fabricated number.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RisingPoint {
    /// Latitude of the horizon crossing in degrees, if one exists.
    pub lat: Option<Degree>,

    /// Longitude of the sample in degrees.
    pub lon: Degree,
}

/// The rising line of one body at one instant.
///
/// Points are ordered by strictly ascending longitude, one per grid sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RisingLine {
    /// The body this line belongs to.
    pub body: CelestialBody,

    /// Horizon-crossing samples, ordered by ascending longitude.
    pub points: Vec<RisingPoint>,

    /// The body's equatorial position used for the sweep.
    pub equatorial_position: EquatorialPosition,
}

/// Build an evenly spaced longitude grid from -180° to 180° inclusive.
///
/// Arguments
/// ---------
/// * `samples`: number of grid points; 361 gives the default 1° resolution.
///
/// Return
/// ------
/// * The ascending grid, or
///   [`AstrocartaError::NotEnoughLongitudeSamples`] for fewer than 2 samples
///   (both sweep edges must be present).
pub fn longitude_grid(samples: usize) -> Result<Vec<Degree>, AstrocartaError> {
    if samples < 2 {
        return Err(AstrocartaError::NotEnoughLongitudeSamples(samples));
    }

    let step = (LONGITUDE_MAX - LONGITUDE_MIN) / (samples - 1) as f64;
    let mut grid: Vec<Degree> = (0..samples)
        .map(|i| LONGITUDE_MIN + i as f64 * step)
        .collect();

    // Pin the last sample to the exact eastern edge against rounding drift.
    grid[samples - 1] = LONGITUDE_MAX;
    Ok(grid)
}

/// Sweep the longitude grid and build the rising line of one body.
///
/// Per sample: local sidereal time at the longitude, hour angle
/// HA = (LST − RA/15)·15 in degrees, then the horizon-latitude solve.
/// Pure function of its inputs; identical calls yield identical lines.
///
/// Arguments
/// ---------
/// * `body`: identifier the line is built for.
/// * `equatorial_position`: the body's RA/Dec at `epoch`.
/// * `epoch`: the instant of the chart.
/// * `longitudes`: ascending longitude samples, typically from
///   [`longitude_grid`].
///
/// Return
/// ------
/// * The [`RisingLine`], with exactly one point per longitude sample.
pub fn build_rising_line(
    body: CelestialBody,
    equatorial_position: &EquatorialPosition,
    epoch: &Epoch,
    longitudes: &[Degree],
) -> RisingLine {
    let ra_hours = equatorial_position.right_ascension / DEG_PER_HOUR;
    let dec = equatorial_position.declination;

    let points = longitudes
        .iter()
        .map(|&lon| {
            let lst = local_sidereal_time(epoch, lon);
            let hour_angle = (lst - ra_hours) * DEG_PER_HOUR;
            RisingPoint {
                lat: solve_horizon_latitude(dec, hour_angle),
                lon,
            }
        })
        .collect();

    RisingLine {
        body,
        points,
        equatorial_position: *equatorial_position,
    }
}
