// ─────────────────────────────────────────────────────────────────────
// SCPN Joules — Circular Motion
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Uniform circular motion and rotational dynamics.

use std::f64::consts::PI;

use joules_types::error::{nonzero, JoulesResult};

/// Angular velocity [rad/s] from linear velocity and radius.
///
/// `omega = v / r`.
pub fn angular_velocity_v1(linear_velocity: f64, radius: f64) -> JoulesResult<f64> {
    Ok(linear_velocity / nonzero(radius)?)
}

/// Angular velocity [rad/s] from frequency of rotation [Hz].
///
/// `omega = 2 pi f`.
pub fn angular_velocity_v2(frequency_of_rotation: f64) -> f64 {
    2.0 * PI * frequency_of_rotation
}

/// Angular acceleration [rad/s^2].
pub fn angular_acceleration(
    initial_angular_velocity: f64,
    final_angular_velocity: f64,
    time: f64,
) -> JoulesResult<f64> {
    Ok((final_angular_velocity - initial_angular_velocity) / nonzero(time)?)
}

/// Centripetal acceleration [m/s^2], `v^2 / r`.
pub fn centripetal_acceleration_v1(linear_velocity: f64, radius: f64) -> JoulesResult<f64> {
    Ok(linear_velocity.powf(2.0) / nonzero(radius)?)
}

/// Centripetal acceleration [m/s^2], `omega^2 r`.
pub fn centripetal_acceleration_v2(angular_velocity: f64, radius: f64) -> f64 {
    angular_velocity.powf(2.0) * radius
}

/// Centripetal acceleration [m/s^2], `v omega`.
pub fn centripetal_acceleration_v3(linear_velocity: f64, angular_velocity: f64) -> f64 {
    linear_velocity * angular_velocity
}

/// Centripetal force [N], `m v^2 / r`.
pub fn centripetal_force_v1(mass: f64, linear_velocity: f64, radius: f64) -> JoulesResult<f64> {
    Ok((mass * linear_velocity.powf(2.0)) / nonzero(radius)?)
}

/// Centripetal force [N], `m omega^2 r`.
pub fn centripetal_force_v2(mass: f64, angular_velocity: f64, radius: f64) -> f64 {
    mass * angular_velocity.powf(2.0) * radius
}

/// Centripetal force [N], `m v omega`.
pub fn centripetal_force_v3(mass: f64, linear_velocity: f64, angular_velocity: f64) -> f64 {
    mass * linear_velocity * angular_velocity
}

/// Angular momentum [kg m^2/s].
pub fn angular_momentum(moment_of_inertia: f64, angular_velocity: f64) -> f64 {
    moment_of_inertia * angular_velocity
}

/// Rotational kinetic energy [J].
///
/// `E = 0.5 I omega^2`.
pub fn angular_kinetic_energy(moment_of_inertia: f64, angular_velocity: f64) -> f64 {
    0.5 * moment_of_inertia * angular_velocity.powi(2)
}
