// ─────────────────────────────────────────────────────────────────────
// SCPN Joules — Density
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Mass density.

use joules_types::error::{nonzero, JoulesResult};

/// Density [kg/m^3] from mass [kg] and volume [m^3].
pub fn density(mass: f64, volume: f64) -> JoulesResult<f64> {
    Ok(mass / nonzero(volume)?)
}
