// ─────────────────────────────────────────────────────────────────────
// SCPN Joules — Gravitational Fields
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Newtonian gravitational fields of point masses.

use joules_types::constants::GRAVITATIONAL_CONSTANT;
use joules_types::error::{nonzero, JoulesResult};

/// Newtonian attraction [N] between two masses whose centres are
/// `distance` [m] apart.
///
/// `F = G m1 m2 / r^2`.
pub fn gravitational_force(object_mass1: f64, object_mass2: f64, distance: f64) -> JoulesResult<f64> {
    let distance_squared = nonzero(distance.powi(2))?;
    Ok((GRAVITATIONAL_CONSTANT * object_mass1 * object_mass2) / distance_squared)
}

/// Field strength [N/kg] as force per unit mass.
pub fn gravitational_field_strength_v1(force: f64, mass: f64) -> JoulesResult<f64> {
    Ok(force / nonzero(mass)?)
}

/// Radial field strength [N/kg], `g = G M / r^2`.
pub fn gravitational_field_strength_v2(mass: f64, distance: f64) -> JoulesResult<f64> {
    let distance_squared = nonzero(distance.powi(2))?;
    Ok((GRAVITATIONAL_CONSTANT * mass) / distance_squared)
}

/// Gravitational potential [J/kg], always `<= 0`.
///
/// `V = -G M / r`.
pub fn gravitational_potential(mass: f64, distance: f64) -> JoulesResult<f64> {
    Ok((-GRAVITATIONAL_CONSTANT * mass) / nonzero(distance)?)
}
