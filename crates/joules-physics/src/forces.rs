// ─────────────────────────────────────────────────────────────────────
// SCPN Joules — Forces
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Newtonian force variants and moments.

use joules_math::conversion::to_radians;
use joules_types::error::{nonzero, JoulesResult};

/// Angle assumed between force and lever arm when none is given.
const PERPENDICULAR_DEG: f64 = 90.0;

/// Force [N] from mass and acceleration, `F = m a`.
pub fn force_v1(mass: f64, acceleration: f64) -> f64 {
    mass * acceleration
}

/// Spring force [N] from spring constant [N/m] and extension [m], `F = k x`.
pub fn force_v2(spring_constant: f64, extension: f64) -> f64 {
    spring_constant * extension
}

/// Force [N] as rate of change of momentum.
///
/// `F = (v - u) m / t`.
pub fn force_v3(
    initial_velocity: f64,
    final_velocity: f64,
    mass: f64,
    time: f64,
) -> JoulesResult<f64> {
    Ok(((final_velocity - initial_velocity) * mass) / nonzero(time)?)
}

/// Moment [N m] of a force about a pivot.
///
/// `angle` is between the force and the lever arm in degrees;
/// `None` means perpendicular (90°).
pub fn moment(force: f64, distance: f64, angle: Option<f64>) -> f64 {
    let angle = angle.unwrap_or(PERPENDICULAR_DEG);
    force * distance * to_radians(angle).sin()
}
