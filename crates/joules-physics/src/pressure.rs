// ─────────────────────────────────────────────────────────────────────
// SCPN Joules — Pressure
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Pressure on a surface and in a fluid column.

use joules_types::constants::FREE_FALL_ACCELERATION;
use joules_types::error::{nonzero, JoulesResult};

/// Pressure [Pa] from force [N] over area [m^2].
pub fn pressure(force: f64, area: f64) -> JoulesResult<f64> {
    Ok(force / nonzero(area)?)
}

/// Pressure [Pa] at depth `height` [m] in a fluid of `density` [kg/m^3].
///
/// `p = rho g h`.
pub fn hydrostatic_pressure(density: f64, height: f64) -> f64 {
    density * FREE_FALL_ACCELERATION * height
}
