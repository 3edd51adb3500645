// ─────────────────────────────────────────────────────────────────────
// SCPN Joules — Stress and Strain
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Tensile stress, strain and the Young modulus.

use joules_types::error::{nonzero, JoulesResult};

/// Tensile stress [Pa], force over cross-sectional area.
pub fn tensile_stress(force: f64, area: f64) -> JoulesResult<f64> {
    Ok(force / nonzero(area)?)
}

/// Tensile strain (dimensionless), extension over original length.
pub fn tensile_strain(extension: f64, length: f64) -> JoulesResult<f64> {
    Ok(extension / nonzero(length)?)
}

/// Young modulus [Pa], stress over strain.
pub fn young_modulus(tensile_stress: f64, tensile_strain: f64) -> JoulesResult<f64> {
    Ok(tensile_stress / nonzero(tensile_strain)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use joules_types::error::JoulesError;

    #[test]
    fn test_stress_strain_chain() {
        let stress = tensile_stress(98.0, 0.04).unwrap();
        let strain = tensile_strain(2.0, 10.0).unwrap();
        assert!((stress - 2450.0).abs() < 1e-9);
        assert!((strain - 0.2).abs() < 1e-15);
        assert!((young_modulus(2450.0, 0.2).unwrap() - 12250.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_divisors() {
        assert!(matches!(tensile_stress(1.0, 0.0), Err(JoulesError::DivisionByZero)));
        assert!(matches!(tensile_strain(1.0, 0.0), Err(JoulesError::DivisionByZero)));
        assert!(matches!(young_modulus(1.0, 0.0), Err(JoulesError::DivisionByZero)));
    }
}
