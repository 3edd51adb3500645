// ─────────────────────────────────────────────────────────────────────
// SCPN Joules — Oscillations
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Simple harmonic motion.

use std::f64::consts::PI;

use joules_types::constants::FREE_FALL_ACCELERATION;
use joules_types::error::{nonzero, JoulesResult};

/// Which root of the particle velocity to return.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RootSign {
    Positive,
    Negative,
}

/// Acceleration [m/s^2] of a particle at displacement `x` from equilibrium.
///
/// `a = -(omega^2) x`.
pub fn particle_acceleration(angular_velocity: f64, particle_displacement: f64) -> f64 {
    -angular_velocity.powf(2.0) * particle_displacement
}

/// Displacement [m] at time `t`, released from the amplitude.
///
/// `x = A cos(omega t)`.
pub fn particle_displacement(amplitude: f64, angular_velocity: f64, time: f64) -> f64 {
    amplitude * (angular_velocity * time).cos()
}

fn velocity_root(angular_velocity: f64, amplitude: f64, particle_displacement: f64) -> f64 {
    angular_velocity * (amplitude.powi(2) - particle_displacement.powi(2)).powf(0.5)
}

/// Both velocities [m/s] a particle can have at a given displacement,
/// ordered `[positive, negative]`.
///
/// `v = ±omega (A^2 - x^2)^0.5`. `|x| > A` gives `NaN` roots.
pub fn particle_velocity(
    angular_velocity: f64,
    amplitude: f64,
    particle_displacement: f64,
) -> [f64; 2] {
    let v = velocity_root(angular_velocity, amplitude, particle_displacement);
    [v, -v]
}

/// A single root of [`particle_velocity`] selected by `sign`.
pub fn particle_velocity_signed(
    angular_velocity: f64,
    amplitude: f64,
    particle_displacement: f64,
    sign: RootSign,
) -> f64 {
    let v = velocity_root(angular_velocity, amplitude, particle_displacement);
    match sign {
        RootSign::Positive => v,
        RootSign::Negative => -v,
    }
}

/// Maximum speed [m/s], reached at equilibrium.
pub fn max_particle_speed(angular_velocity: f64, amplitude: f64) -> f64 {
    angular_velocity * amplitude
}

/// Maximum acceleration magnitude [m/s^2], reached at the amplitude.
pub fn max_particle_acceleration(angular_velocity: f64, amplitude: f64) -> f64 {
    angular_velocity.powf(2.0) * amplitude
}

/// Period [s] of a mass-spring system.
///
/// `T = 2 pi (m / k)^0.5`.
pub fn time_period_v2(mass: f64, spring_constant: f64) -> JoulesResult<f64> {
    Ok(2.0 * PI * (mass / nonzero(spring_constant)?).powf(0.5))
}

/// Period [s] of a simple pendulum of length `L` [m].
///
/// `T = 2 pi (L / g)^0.5`.
pub fn time_period_v3(pendulum_length: f64) -> f64 {
    2.0 * PI * (pendulum_length / FREE_FALL_ACCELERATION).powf(0.5)
}
