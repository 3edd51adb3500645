// ─────────────────────────────────────────────────────────────────────
// SCPN Joules — Energy, Work and Power
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Mechanical energy, work done and power.
//!
//! Electrical power variants (`power_v2`..`power_v4`) live in
//! [`crate::electricity`].

use joules_math::conversion::to_radians;
use joules_types::constants::FREE_FALL_ACCELERATION;
use joules_types::error::{nonzero, JoulesResult};

/// Angle assumed between force and motion when none is given.
const PARALLEL_DEG: f64 = 0.0;

/// Gravitational potential energy [J], `m g h`.
pub fn gravitational_potential_energy(mass: f64, height: f64) -> f64 {
    mass * FREE_FALL_ACCELERATION * height
}

/// Elastic potential energy [J] stored in a spring, `0.5 k x^2`.
pub fn elastic_potential_energy(spring_constant: f64, extension: f64) -> f64 {
    0.5 * spring_constant * extension.powi(2)
}

/// Translational kinetic energy [J], `0.5 m v^2`.
pub fn kinetic_energy(mass: f64, velocity: f64) -> f64 {
    0.5 * mass * velocity.powi(2)
}

/// Work done [J] by a force over a displacement.
///
/// `W = F s cos(theta)`, `angle` in degrees, `None` meaning parallel (0°).
pub fn work_done(force: f64, displacement: f64, angle: Option<f64>) -> f64 {
    let angle = angle.unwrap_or(PARALLEL_DEG);
    force * displacement * to_radians(angle).cos()
}

/// Power [W] from work done over time.
pub fn power_v1(work_done: f64, time: f64) -> JoulesResult<f64> {
    Ok(work_done / nonzero(time)?)
}

/// Power [W] delivered by a force moving at `velocity`.
///
/// `P = F v cos(theta)`, `angle` in degrees, `None` meaning parallel (0°).
pub fn power_v5(force: f64, velocity: f64, angle: Option<f64>) -> f64 {
    let angle = angle.unwrap_or(PARALLEL_DEG);
    force * velocity * to_radians(angle).cos()
}

/// Energy efficiency as a percentage.
pub fn energy_efficiency(useful_energy_output: f64, energy_input: f64) -> JoulesResult<f64> {
    Ok((useful_energy_output / nonzero(energy_input)?) * 100.0)
}

/// Power efficiency as a percentage.
pub fn power_efficiency(useful_power_output: f64, power_input: f64) -> JoulesResult<f64> {
    Ok((useful_power_output / nonzero(power_input)?) * 100.0)
}
