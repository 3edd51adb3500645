// ─────────────────────────────────────────────────────────────────────
// SCPN Joules — Kinematics
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Uniformly accelerated straight-line motion (SUVAT).
//!
//! Distances in metres, times in seconds, velocities in m/s,
//! accelerations in m/s^2.

use joules_types::error::{nonzero, JoulesResult};

/// Average speed [m/s], `distance / time`.
pub fn avg_speed(distance: f64, time: f64) -> JoulesResult<f64> {
    Ok(distance / nonzero(time)?)
}

/// Average velocity [m/s], `displacement / time`.
pub fn avg_velocity(displacement: f64, time: f64) -> JoulesResult<f64> {
    Ok(displacement / nonzero(time)?)
}

/// Acceleration [m/s^2].
///
/// `a = (v - u) / t`.
pub fn acceleration(initial_velocity: f64, final_velocity: f64, time: f64) -> JoulesResult<f64> {
    Ok((final_velocity - initial_velocity) / nonzero(time)?)
}

/// Final velocity from acceleration and time.
///
/// `v = u + a t`.
pub fn final_velocity_v1(initial_velocity: f64, acceleration: f64, time: f64) -> f64 {
    initial_velocity + (acceleration * time)
}

/// Final velocity from acceleration and displacement.
///
/// `v = (u^2 + 2 a s)^0.5`. Only the non-negative root is returned.
pub fn final_velocity_v2(initial_velocity: f64, acceleration: f64, displacement: f64) -> f64 {
    (initial_velocity.powi(2) + (2.0 * acceleration * displacement)).powf(0.5)
}

/// Final velocity from displacement and time.
///
/// `v = 2 s / t - u`.
pub fn final_velocity_v3(initial_velocity: f64, displacement: f64, time: f64) -> JoulesResult<f64> {
    Ok(((2.0 * displacement) / nonzero(time)?) - initial_velocity)
}

/// `s = 0.5 (u + v) t`.
pub fn displacement_v1(initial_velocity: f64, final_velocity: f64, time: f64) -> f64 {
    0.5 * (initial_velocity + final_velocity) * time
}

/// `s = u t + 0.5 a t^2`.
pub fn displacement_v2(initial_velocity: f64, acceleration: f64, time: f64) -> f64 {
    (initial_velocity * time) + (0.5 * acceleration * time.powi(2))
}

/// `s = v t - 0.5 a t^2`.
pub fn displacement_v3(final_velocity: f64, acceleration: f64, time: f64) -> f64 {
    (final_velocity * time) - (0.5 * acceleration * time.powi(2))
}
