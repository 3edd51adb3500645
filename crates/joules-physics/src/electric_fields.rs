// ─────────────────────────────────────────────────────────────────────
// SCPN Joules — Electric Fields
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Uniform and radial electric fields.
//!
//! Radial-field formulas use the Coulomb factor `1 / (4 pi epsilon_0)`.

use std::f64::consts::PI;

use joules_types::constants::FREE_SPACE_PERMITTIVITY;
use joules_types::error::{nonzero, JoulesResult};

/// `4 pi epsilon_0 x`, rejected when it is exactly zero, including when
/// a tiny non-zero `x` underflows.
fn coulomb_denominator(x: f64) -> JoulesResult<f64> {
    nonzero(4.0 * PI * FREE_SPACE_PERMITTIVITY * x)
}

/// Field strength [V/m] between parallel plates `distance` [m] apart.
pub fn electric_field_strength_v1(voltage: f64, distance: f64) -> JoulesResult<f64> {
    Ok(voltage / nonzero(distance)?)
}

/// Field strength [N/C] as force per unit charge.
pub fn electric_field_strength_v2(force: f64, charge: f64) -> JoulesResult<f64> {
    Ok(force / nonzero(charge)?)
}

/// Radial field strength [N/C] at `distance` from a point charge.
///
/// `E = Q / (4 pi epsilon_0 r^2)`.
pub fn electric_field_strength_v3(charge: f64, distance: f64) -> JoulesResult<f64> {
    Ok(charge / coulomb_denominator(distance.powi(2))?)
}

/// Electric potential [V] at `distance` from a point charge.
///
/// `V = Q / (4 pi epsilon_0 r)`.
pub fn electric_potential(charge: f64, distance: f64) -> JoulesResult<f64> {
    Ok(charge / coulomb_denominator(distance)?)
}

/// Coulomb force [N] between two point charges.
///
/// `F = Q1 Q2 / (4 pi epsilon_0 r^2)`. Positive means repulsive.
pub fn electric_force(charge1: f64, charge2: f64, distance: f64) -> JoulesResult<f64> {
    Ok((charge1 * charge2) / coulomb_denominator(distance.powi(2))?)
}
