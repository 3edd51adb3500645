// ─────────────────────────────────────────────────────────────────────
// SCPN Joules — Thermodynamics
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Heat capacity, latent heat and ideal gases.
//!
//! Ideal-gas temperatures are absolute (kelvins); use
//! [`joules_math::conversion::to_kelvins`] for celcius readings.

use joules_types::constants::{AVOGADRO_CONSTANT, BOLTZMANN_CONSTANT, MOLAR_GAS_CONSTANT};
use joules_types::error::{nonzero, JoulesResult};

/// Heat energy [J] to change the temperature of a mass.
///
/// `E = m c dT`.
pub fn energy_v1(mass: f64, specific_heat_capacity: f64, temperature_change: f64) -> f64 {
    mass * specific_heat_capacity * temperature_change
}

/// Heat energy [J] to change the state of a mass, `E = m L`.
pub fn energy_v2(mass: f64, specific_latent_heat: f64) -> f64 {
    mass * specific_latent_heat
}

/// Ideal gas pressure [Pa].
///
/// `p = n R T / V`.
pub fn gas_pressure(amount_of_substance: f64, temperature: f64, volume: f64) -> JoulesResult<f64> {
    Ok((amount_of_substance * MOLAR_GAS_CONSTANT * temperature) / nonzero(volume)?)
}

/// Mean translational kinetic energy [J] of one gas molecule, `1.5 k T`.
pub fn molecule_kinetic_energy(temperature: f64) -> f64 {
    1.5 * BOLTZMANN_CONSTANT * temperature
}

pub fn number_of_molecules(amount_of_substance: f64) -> f64 {
    amount_of_substance * AVOGADRO_CONSTANT
}
