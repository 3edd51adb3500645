// ─────────────────────────────────────────────────────────────────────
// SCPN Joules — Magnetic Fields
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Magnetic force, flux and electromagnetic induction.
//!
//! Angles are in degrees. Force formulas default to a field perpendicular
//! to the current or velocity (90°); flux defaults to a field normal to
//! the area (0°).

use std::f64::consts::PI;

use joules_math::conversion::to_radians;
use joules_types::constants::FREE_SPACE_PERMEABILITY;
use joules_types::error::{nonzero, JoulesResult};

const PERPENDICULAR_DEG: f64 = 90.0;
const NORMAL_DEG: f64 = 0.0;

/// Force [N] on a current-carrying conductor.
///
/// `F = B I l sin(theta)`.
pub fn magnetic_force_v1(
    flux_density: f64,
    current: f64,
    conductor_length: f64,
    angle: Option<f64>,
) -> f64 {
    let angle = angle.unwrap_or(PERPENDICULAR_DEG);
    flux_density * current * conductor_length * to_radians(angle).sin()
}

/// Force [N] on a moving charge.
///
/// `F = B Q v sin(theta)`.
pub fn magnetic_force_v2(flux_density: f64, charge: f64, velocity: f64, angle: Option<f64>) -> f64 {
    let angle = angle.unwrap_or(PERPENDICULAR_DEG);
    flux_density * charge * velocity * to_radians(angle).sin()
}

/// Magnetic flux [Wb] through an area.
///
/// `Phi = B A cos(theta)`.
pub fn magnetic_flux(flux_density: f64, area: f64, angle: Option<f64>) -> f64 {
    let angle = angle.unwrap_or(NORMAL_DEG);
    flux_density * area * to_radians(angle).cos()
}

/// Flux linkage [Wb turns], `N Phi`.
pub fn magnetic_flux_linkage(magnetic_flux: f64, number_of_coils: f64) -> f64 {
    magnetic_flux * number_of_coils
}

/// Magnitude of the induced e.m.f. [V] (Faraday's law).
pub fn induced_emf(flux_linkage_change: f64, time: f64) -> JoulesResult<f64> {
    Ok(flux_linkage_change / nonzero(time)?)
}

/// Flux density [T] at `distance` [m] from a long straight wire.
///
/// `B = mu_0 I / (2 pi r)`.
pub fn wire_flux_density(current: f64, distance: f64) -> JoulesResult<f64> {
    Ok((FREE_SPACE_PERMEABILITY * current) / (2.0 * PI * nonzero(distance)?))
}
