//! # Constants and type definitions for astrocarta
//!
//! This module centralizes the **conversion factors**, **type aliases**, and
//! **sweep/solver defaults** used throughout the `astrocarta` library.
//!
//! ## Overview
//!
//! - Angle and time conversions (degrees ↔ radians ↔ hours)
//! - Core type aliases used across the crate
//! - Default longitude-sweep grid and horizon-solver tolerance
//!
//! These definitions are used by all main modules, including the sidereal-time
//! converter, the horizon solver, and the rising-line builder.

// -------------------------------------------------------------------------------------------------
// Unit conversions
// -------------------------------------------------------------------------------------------------

/// 2π, useful for trigonometric conversions
pub const DPI: f64 = 2. * std::f64::consts::PI;

/// MJD epoch of J2000.0 (2000-01-01 12:00:00 TT)
pub const T2000: f64 = 51544.5;

/// Degrees → radians
pub const RADEG: f64 = std::f64::consts::PI / 180.0;

/// Hours → radians
pub const RADH: f64 = DPI / 24.0;

/// Degrees of hour angle per hour of sidereal time
pub const DEG_PER_HOUR: f64 = 15.0;

// -------------------------------------------------------------------------------------------------
// Sweep grid and solver defaults
// -------------------------------------------------------------------------------------------------

/// Western edge of the longitude sweep (degrees)
pub const LONGITUDE_MIN: f64 = -180.0;

/// Eastern edge of the longitude sweep (degrees)
pub const LONGITUDE_MAX: f64 = 180.0;

/// Default number of longitude samples, 1° resolution from -180° to 180° inclusive
pub const DEFAULT_LONGITUDE_SAMPLES: usize = 361;

/// Convergence tolerance of the horizon-latitude solver, in degrees.
/// Far below the 0.01° smoothness requirement of the rising-line curves.
pub const HORIZON_SOLVER_EPS: f64 = 1e-9;

/// Iteration cap for the bracketing solver.
pub const HORIZON_SOLVER_MAX_ITER: usize = 100;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in degrees
pub type Degree = f64;
/// Angle in radians
pub type Radian = f64;
/// Sidereal time in hours
pub type Hour = f64;
/// Modified Julian Date (days)
pub type MJD = f64;
