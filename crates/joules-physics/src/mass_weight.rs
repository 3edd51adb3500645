// ─────────────────────────────────────────────────────────────────────
// SCPN Joules — Mass and Weight
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Weight and mass in the Earth's gravitational field.

use joules_types::constants::FREE_FALL_ACCELERATION;

/// Weight [N] of a mass [kg] in the Earth's field.
pub fn weight(mass: f64) -> f64 {
    mass * FREE_FALL_ACCELERATION
}

/// Mass [kg] from weight [N].
pub fn mass(weight: f64) -> f64 {
    weight / FREE_FALL_ACCELERATION
}
