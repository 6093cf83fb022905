//! # Astrocarta: computation context and multi-body orchestration
//!
//! This module defines the [`Astrocarta`](crate::astrocarta::Astrocarta) struct, the stateless context
//! tying the per-body machinery together:
//!
//! 1. **Body policy** — which bodies are excluded from every request
//!    (by default Pluto, whose positions the usual ephemeris collaborators
//!    do not serve reliably).
//! 2. **Orchestration** — [`compute_rising_lines`](crate::astrocarta::Astrocarta::compute_rising_lines)
//!    resolves each requested body through the [`Ephemeris`](crate::ephemeris::Ephemeris)
//!    seam and runs the longitude sweep per body.
//!
//! The context carries no mutable state and no caches: every request is
//! computed from its own inputs and the result mapping is discarded by the
//! caller. Identical inputs therefore always produce identical output.
//!
//! ## Typical usage
//!
//! ```rust,no_run
//! use astrocarta::astrocarta::Astrocarta;
//! use astrocarta::bodies::DEFAULT_BODIES;
//! use astrocarta::coordinates::GeoCoordinate;
//! use astrocarta::rising_line::longitude_grid;
//! use astrocarta::time::parse_timestamp;
//! # struct MyEphemeris;
//! # impl astrocarta::ephemeris::Ephemeris for MyEphemeris {
//! #     fn lookup(
//! #         &self,
//! #         _: astrocarta::bodies::CelestialBody,
//! #         _: &hifitime::Epoch,
//! #         _: &GeoCoordinate,
//! #     ) -> Result<astrocarta::coordinates::EquatorialPosition, astrocarta::astrocarta_errors::AstrocartaError> {
//! #         unimplemented!()
//! #     }
//! # }
//!
//! let context = Astrocarta::new();
//! let epoch = parse_timestamp("2025-02-09T12:00:00")?;
//! let birth_location = GeoCoordinate::new(48.8575, 2.3514)?;
//! let grid = longitude_grid(361)?;
//!
//! let lines = context.compute_rising_lines(
//!     &MyEphemeris,
//!     &epoch,
//!     &DEFAULT_BODIES,
//!     &birth_location,
//!     &grid,
//! )?;
//! # Ok::<(), astrocarta::astrocarta_errors::AstrocartaError>(())
//! ```
//!
//! ## Result mapping
//!
//! Each non-excluded requested body gets exactly one entry: `Ok(RisingLine)`
//! on success, `Err` when its ephemeris lookup failed. Excluded bodies get
//! **no entry**, even when named explicitly, so callers can tell "lookup
//! failed" apart from "filtered by policy" and from "never requested".

use std::collections::BTreeMap;

use hifitime::Epoch;
use log::debug;

use crate::astrocarta_errors::AstrocartaError;
use crate::bodies::CelestialBody;
use crate::constants::Degree;
use crate::coordinates::GeoCoordinate;
use crate::ephemeris::Ephemeris;
use crate::rising_line::{build_rising_line, RisingLine};

/// Per-body outcome in the result mapping of
/// [`Astrocarta::compute_rising_lines`].
pub type RisingLineResult = Result<RisingLine, AstrocartaError>;

/// Stateless computation context for rising-line requests.
#[derive(Debug, Clone)]
pub struct Astrocarta {
    excluded_bodies: Vec<CelestialBody>,
}

impl Default for Astrocarta {
    fn default() -> Self {
        Astrocarta::new()
    }
}

impl Astrocarta {
    /// Context with the standard exclusion policy (Pluto filtered).
    pub fn new() -> Self {
        Astrocarta {
            excluded_bodies: vec![CelestialBody::Pluto],
        }
    }

    /// Context with a caller-chosen exclusion policy. An empty list lifts
    /// the filter entirely.
    pub fn with_excluded_bodies(excluded_bodies: Vec<CelestialBody>) -> Self {
        Astrocarta { excluded_bodies }
    }

    /// Whether `body` is filtered from every request by this context.
    pub fn is_excluded(&self, body: CelestialBody) -> bool {
        self.excluded_bodies.contains(&body)
    }

    /// Compute the rising lines of the requested bodies at one instant.
    ///
    /// Arguments
    /// ---------
    /// * `ephemeris`: the external position provider.
    /// * `epoch`: the instant of the chart.
    /// * `bodies`: requested bodies; duplicates collapse into one entry.
    /// * `observer`: validated birth location, forwarded to the ephemeris.
    /// * `longitudes`: ascending longitude grid, typically from
    ///   [`crate::rising_line::longitude_grid`].
    ///
    /// Return
    /// ------
    /// * A mapping from body to its per-body outcome. Request-level
    ///   validation failures ([`AstrocartaError::EmptyBodySet`],
    ///   [`AstrocartaError::NotEnoughLongitudeSamples`]) are returned as the
    ///   outer error; a failed per-body lookup lands as an `Err` entry in
    ///   the mapping instead of aborting the request.
    pub fn compute_rising_lines<E: Ephemeris>(
        &self,
        ephemeris: &E,
        epoch: &Epoch,
        bodies: &[CelestialBody],
        observer: &GeoCoordinate,
        longitudes: &[Degree],
    ) -> Result<BTreeMap<CelestialBody, RisingLineResult>, AstrocartaError> {
        if bodies.is_empty() {
            return Err(AstrocartaError::EmptyBodySet);
        }
        if longitudes.len() < 2 {
            return Err(AstrocartaError::NotEnoughLongitudeSamples(longitudes.len()));
        }

        let mut lines: BTreeMap<CelestialBody, RisingLineResult> = BTreeMap::new();

        for &body in bodies {
            if self.is_excluded(body) {
                debug!("skipping {body}: excluded by policy");
                continue;
            }
            if lines.contains_key(&body) {
                continue;
            }

            let outcome = match ephemeris.lookup(body, epoch, observer) {
                Ok(position) => {
                    Ok(build_rising_line(body, &position, epoch, longitudes))
                }
                Err(err) => {
                    debug!("ephemeris lookup failed for {body}: {err}");
                    Err(err)
                }
            };
            lines.insert(body, outcome);
        }

        Ok(lines)
    }
}

#[cfg(test)]
mod astrocarta_test {
    use super::*;
    use crate::coordinates::EquatorialPosition;
    use crate::rising_line::longitude_grid;
    use crate::time::parse_timestamp;

    /// Fixed-position provider for unit tests; integration tests carry a
    /// fuller table-backed double.
    struct ConstantEphemeris;

    impl Ephemeris for ConstantEphemeris {
        fn lookup(
            &self,
            body: CelestialBody,
            _epoch: &Epoch,
            _observer: &GeoCoordinate,
        ) -> Result<EquatorialPosition, AstrocartaError> {
            match body {
                CelestialBody::Pluto => Err(AstrocartaError::EphemerisUnavailable {
                    body: body.to_string(),
                    reason: "no position model".to_string(),
                }),
                _ => EquatorialPosition::new(322.3, -14.2),
            }
        }
    }

    #[test]
    fn test_empty_body_set_rejected() {
        let context = Astrocarta::new();
        let epoch = parse_timestamp("2025-02-09T12:00:00").unwrap();
        let observer = GeoCoordinate::new(0.0, 0.0).unwrap();
        let grid = longitude_grid(5).unwrap();

        let err = context
            .compute_rising_lines(&ConstantEphemeris, &epoch, &[], &observer, &grid)
            .unwrap_err();
        assert_eq!(err, AstrocartaError::EmptyBodySet);
    }

    #[test]
    fn test_degenerate_grid_rejected() {
        let context = Astrocarta::new();
        let epoch = parse_timestamp("2025-02-09T12:00:00").unwrap();
        let observer = GeoCoordinate::new(0.0, 0.0).unwrap();

        let err = context
            .compute_rising_lines(
                &ConstantEphemeris,
                &epoch,
                &[CelestialBody::Sun],
                &observer,
                &[0.0],
            )
            .unwrap_err();
        assert_eq!(err, AstrocartaError::NotEnoughLongitudeSamples(1));
    }

    #[test]
    fn test_excluded_body_gets_no_entry() {
        let context = Astrocarta::new();
        let epoch = parse_timestamp("2025-02-09T12:00:00").unwrap();
        let observer = GeoCoordinate::new(0.0, 0.0).unwrap();
        let grid = longitude_grid(5).unwrap();

        let lines = context
            .compute_rising_lines(
                &ConstantEphemeris,
                &epoch,
                &[CelestialBody::Sun, CelestialBody::Pluto],
                &observer,
                &grid,
            )
            .unwrap();

        assert_eq!(lines.len(), 1);
        assert!(lines.contains_key(&CelestialBody::Sun));
        assert!(!lines.contains_key(&CelestialBody::Pluto));
    }

    #[test]
    fn test_exclusion_policy_is_configurable() {
        // Lifting the filter surfaces the lookup failure as an Err entry
        // instead of silently dropping the body.
        let context = Astrocarta::with_excluded_bodies(vec![]);
        let epoch = parse_timestamp("2025-02-09T12:00:00").unwrap();
        let observer = GeoCoordinate::new(0.0, 0.0).unwrap();
        let grid = longitude_grid(5).unwrap();

        let lines = context
            .compute_rising_lines(
                &ConstantEphemeris,
                &epoch,
                &[CelestialBody::Pluto],
                &observer,
                &grid,
            )
            .unwrap();

        assert!(matches!(
            lines.get(&CelestialBody::Pluto),
            Some(Err(AstrocartaError::EphemerisUnavailable { .. }))
        ));
    }

    #[test]
    fn test_duplicate_bodies_collapse() {
        let context = Astrocarta::new();
        let epoch = parse_timestamp("2025-02-09T12:00:00").unwrap();
        let observer = GeoCoordinate::new(0.0, 0.0).unwrap();
        let grid = longitude_grid(5).unwrap();

        let lines = context
            .compute_rising_lines(
                &ConstantEphemeris,
                &epoch,
                &[CelestialBody::Moon, CelestialBody::Moon],
                &observer,
                &grid,
            )
            .unwrap();
        assert_eq!(lines.len(), 1);
    }
}
