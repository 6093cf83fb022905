//! Horizon-crossing solver.
//!
//! For a body of declination δ seen at hour angle H, its altitude above the
//! horizon at observer latitude φ follows the standard altitude formula
//!
//! ```text
//! sin(alt) = sin φ · sin δ + cos φ · cos δ · cos H
//! ```
//!
//! The body sits exactly on the horizon where this expression vanishes, so
//! [`solve_horizon_latitude`] finds a root of the right-hand side over
//! φ ∈ [-90°, 90°] with Brent's method. The bracketing requirement doubles
//! as the existence test: when the condition has the same sign at both poles
//! the body never crosses the horizon for this (δ, H) pair and the solver
//! reports [`None`] instead of extrapolating.

use roots::{find_root_brent, SimpleConvergency};

use crate::constants::{Degree, Radian, HORIZON_SOLVER_EPS, HORIZON_SOLVER_MAX_ITER};

/// Altitude-zero condition: sin φ sin δ + cos φ cos δ cos H.
///
/// All angles in radians. Zero exactly when the body is on the horizon at
/// latitude φ; positive above, negative below.
pub fn horizon_condition(phi: Radian, dec: Radian, ha: Radian) -> f64 {
    phi.sin() * dec.sin() + phi.cos() * dec.cos() * ha.cos()
}

/// Solve for the geographic latitude at which a body of declination `dec`
/// sits on the horizon when observed at hour angle `ha`.
///
/// Arguments
/// ---------
/// * `dec`: body declination in degrees.
/// * `ha`: hour angle in degrees.
///
/// Return
/// ------
/// * `Some(latitude)` in degrees when a horizon crossing exists in
///   [-90, 90], converged well below 0.01°.
/// * `None` when the horizon condition does not change sign across the
///   latitude interval, i.e. no crossing exists for this (dec, ha) pair.
pub fn solve_horizon_latitude(dec: Degree, ha: Degree) -> Option<Degree> {
    let dec_rad = dec.to_radians();
    let ha_rad = ha.to_radians();

    // Condition as a function of latitude in degrees, so that the root and
    // the convergence tolerance are both expressed in degrees directly.
    let f = |phi: f64| horizon_condition(phi.to_radians(), dec_rad, ha_rad);

    let f_south = f(-90.0);
    let f_north = f(90.0);

    // Exact zero at an endpoint: the pole itself is the crossing.
    if f_south == 0.0 {
        return Some(-90.0);
    }
    if f_north == 0.0 {
        return Some(90.0);
    }

    // No sign change means no horizon crossing at any latitude.
    if (f_south > 0.0) == (f_north > 0.0) {
        return None;
    }

    let mut convergency = SimpleConvergency {
        eps: HORIZON_SOLVER_EPS,
        max_iter: HORIZON_SOLVER_MAX_ITER,
    };

    find_root_brent(-90.0, 90.0, &f, &mut convergency).ok()
}
