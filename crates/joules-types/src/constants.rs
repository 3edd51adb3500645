// ─────────────────────────────────────────────────────────────────────
// SCPN Joules — Constants
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Physical constants shared by every formula module.
//!
//! Values are data-sheet values (three significant figures where the
//! data sheet gives three), not CODATA. Formulas must read them from here
//! so that every result is reproducible to the last bit.

use serde::Serialize;

use crate::error::JoulesResult;

/// Speed of light in free space (m/s)
pub const SPEED_OF_LIGHT: f64 = 3.00e8;

/// Permeability of free space (H/m)
pub const FREE_SPACE_PERMEABILITY: f64 = 4.0 * std::f64::consts::PI * 1e-7;

/// Permittivity of free space (F/m)
pub const FREE_SPACE_PERMITTIVITY: f64 = 8.85e-12;

/// Elementary charge (C)
pub const ELEMENTARY_CHARGE: f64 = 1.60e-19;

/// Planck constant (J s)
pub const PLANCK_CONSTANT: f64 = 6.63e-34;

/// Unified atomic mass unit (kg)
pub const UNIFIED_ATOMIC_MASS_UNIT: f64 = 1.661e-27;

/// Rest mass of electron (kg)
pub const ELECTRON_REST_MASS: f64 = 9.11e-31;

/// Rest mass of proton (kg)
pub const PROTON_REST_MASS: f64 = 1.673e-27;

/// Rest mass of neutron (kg)
pub const NEUTRON_REST_MASS: f64 = 1.675e-27;

/// Molar gas constant (J/(mol K))
pub const MOLAR_GAS_CONSTANT: f64 = 8.31;

/// Avogadro constant (1/mol)
pub const AVOGADRO_CONSTANT: f64 = 6.02e23;

/// Boltzmann constant (J/K)
pub const BOLTZMANN_CONSTANT: f64 = 1.38e-23;

/// Stefan constant (W/(m^2 K^4))
pub const STEFAN_CONSTANT: f64 = 5.67e-8;

/// Wien constant (m K)
pub const WIEN_CONSTANT: f64 = 2.90e-3;

/// Gravitational constant (N m^2/kg^2)
pub const GRAVITATIONAL_CONSTANT: f64 = 6.67e-11;

/// Acceleration of free fall near the Earth's surface (m/s^2)
pub const FREE_FALL_ACCELERATION: f64 = 9.81;

/// One row of the constants table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PhysicalConstant {
    pub name: &'static str,
    pub symbol: &'static str,
    pub value: f64,
    pub unit: &'static str,
}

const fn entry(
    name: &'static str,
    symbol: &'static str,
    value: f64,
    unit: &'static str,
) -> PhysicalConstant {
    PhysicalConstant {
        name,
        symbol,
        value,
        unit,
    }
}

/// Every constant above, keyed by its lowercase name.
pub const TABLE: &[PhysicalConstant] = &[
    entry("speed_of_light", "c", SPEED_OF_LIGHT, "m s^-1"),
    entry("free_space_permeability", "mu_0", FREE_SPACE_PERMEABILITY, "H m^-1"),
    entry("free_space_permittivity", "epsilon_0", FREE_SPACE_PERMITTIVITY, "F m^-1"),
    entry("elementary_charge", "e", ELEMENTARY_CHARGE, "C"),
    entry("planck_constant", "h", PLANCK_CONSTANT, "J s"),
    entry("unified_atomic_mass_unit", "u", UNIFIED_ATOMIC_MASS_UNIT, "kg"),
    entry("electron_rest_mass", "m_e", ELECTRON_REST_MASS, "kg"),
    entry("proton_rest_mass", "m_p", PROTON_REST_MASS, "kg"),
    entry("neutron_rest_mass", "m_n", NEUTRON_REST_MASS, "kg"),
    entry("molar_gas_constant", "R", MOLAR_GAS_CONSTANT, "J mol^-1 K^-1"),
    entry("avogadro_constant", "N_A", AVOGADRO_CONSTANT, "mol^-1"),
    entry("boltzmann_constant", "k", BOLTZMANN_CONSTANT, "J K^-1"),
    entry("stefan_constant", "sigma", STEFAN_CONSTANT, "W m^-2 K^-4"),
    entry("wien_constant", "b", WIEN_CONSTANT, "m K"),
    entry("gravitational_constant", "G", GRAVITATIONAL_CONSTANT, "N m^2 kg^-2"),
    entry("free_fall_acceleration", "g", FREE_FALL_ACCELERATION, "m s^-2"),
];

/// Find a constant by its table name, e.g. `"planck_constant"`.
pub fn lookup(name: &str) -> Option<&'static PhysicalConstant> {
    TABLE.iter().find(|c| c.name == name)
}

/// Pretty-printed JSON rendering of [`TABLE`].
pub fn table_json() -> JoulesResult<String> {
    Ok(serde_json::to_string_pretty(TABLE)?)
}
