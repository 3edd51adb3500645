// ─────────────────────────────────────────────────────────────────────
// SCPN Joules — Electricity
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! DC circuits: current, resistance, capacitance, electrical power.
//!
//! Series/parallel combinations take the component values as a slice.
//! The reciprocal forms ([`resistance_in_parallel`],
//! [`capacitance_in_series`]) are undefined for zero components and
//! return [`JoulesError::EmptyInput`] on an empty slice; the direct sums
//! return `0.0`. A zero-valued component inside a reciprocal sum is not
//! rejected and drives the combination to `0.0`.

use joules_types::constants::FREE_SPACE_PERMITTIVITY;
use joules_types::error::{nonzero, JoulesError, JoulesResult};

fn reciprocal_sum(values: &[f64], what: &'static str) -> JoulesResult<f64> {
    if values.is_empty() {
        return Err(JoulesError::EmptyInput(what));
    }
    let total = values.iter().fold(0.0_f64, |acc, &v| acc + (1.0 / v));
    Ok(1.0 / total)
}

fn direct_sum(values: &[f64]) -> f64 {
    values.iter().fold(0.0_f64, |acc, &v| acc + v)
}

/// Current [A], rate of flow of charge.
pub fn current(charge: f64, time: f64) -> JoulesResult<f64> {
    Ok(charge / nonzero(time)?)
}

/// Charge [C] passed by a steady current in `time` [s].
pub fn charge(current: f64, time: f64) -> f64 {
    current * time
}

/// Resistance [ohm] from voltage and current, `R = V / I`.
pub fn resistance_v1(voltage: f64, current: f64) -> JoulesResult<f64> {
    Ok(voltage / nonzero(current)?)
}

/// Resistance [ohm] of a uniform wire.
///
/// `R = rho l / A`.
pub fn resistance_v2(
    resistivity: f64,
    wire_length: f64,
    cross_sectional_area: f64,
) -> JoulesResult<f64> {
    Ok((resistivity * wire_length) / nonzero(cross_sectional_area)?)
}

pub fn resistance_in_series(resistances: &[f64]) -> f64 {
    direct_sum(resistances)
}

/// Total resistance of resistors in parallel, `1 / sum(1 / R)`.
pub fn resistance_in_parallel(resistances: &[f64]) -> JoulesResult<f64> {
    reciprocal_sum(resistances, "resistances")
}

/// Capacitance [F] from charge and voltage, `C = Q / V`.
pub fn capacitance_v1(charge: f64, voltage: f64) -> JoulesResult<f64> {
    Ok(charge / nonzero(voltage)?)
}

/// Capacitance [F] of a parallel-plate capacitor.
///
/// `C = epsilon_r epsilon_0 A / d`.
pub fn capacitance_v2(
    relative_permittivity: f64,
    plate_area: f64,
    plate_separation: f64,
) -> JoulesResult<f64> {
    Ok((relative_permittivity * FREE_SPACE_PERMITTIVITY * plate_area) / nonzero(plate_separation)?)
}

/// Total capacitance of capacitors in series, `1 / sum(1 / C)`.
pub fn capacitance_in_series(capacitances: &[f64]) -> JoulesResult<f64> {
    reciprocal_sum(capacitances, "capacitances")
}

pub fn capacitance_in_parallel(capacitances: &[f64]) -> f64 {
    direct_sum(capacitances)
}

/// Energy [J] stored in a capacitor, `0.5 Q V`.
pub fn capacitor_energy_v1(charge: f64, voltage: f64) -> f64 {
    0.5 * charge * voltage
}

/// Energy [J] stored in a capacitor, `0.5 C V^2`.
pub fn capacitor_energy_v2(capacitance: f64, voltage: f64) -> f64 {
    0.5 * capacitance * voltage.powi(2)
}

/// Energy [J] stored in a capacitor, `0.5 Q^2 / C`.
pub fn capacitor_energy_v3(charge: f64, capacitance: f64) -> JoulesResult<f64> {
    Ok((0.5 * charge.powi(2)) / nonzero(capacitance)?)
}

/// Potential difference [V] as energy per unit charge.
pub fn voltage_v1(energy: f64, charge: f64) -> JoulesResult<f64> {
    Ok(energy / nonzero(charge)?)
}

/// Potential difference [V] from Ohm's law, `V = I R`.
pub fn voltage_v2(current: f64, resistance: f64) -> f64 {
    current * resistance
}

/// Power [W], `P = V I`.
pub fn power_v2(voltage: f64, current: f64) -> f64 {
    voltage * current
}

/// Power [W], `P = I^2 R`.
pub fn power_v3(current: f64, resistance: f64) -> f64 {
    current.powf(2.0) * resistance
}

/// Power [W], `P = V^2 / R`.
pub fn power_v4(voltage: f64, resistance: f64) -> JoulesResult<f64> {
    Ok(voltage.powf(2.0) / nonzero(resistance)?)
}

/// Electrical energy [J] transferred in `time` [s], `E = V I t`.
pub fn energy_v3(voltage: f64, current: f64, time: f64) -> f64 {
    power_v2(voltage, current) * time
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_and_charge() {
        assert_eq!(current(325.0, 5.0).unwrap(), 65.0);
        assert_eq!(charge(65.0, 5.0), 325.0);
        assert!(matches!(current(325.0, 0.0), Err(JoulesError::DivisionByZero)));
    }

    #[test]
    fn test_resistance_variants() {
        assert!((resistance_v1(1.8, 0.6).unwrap() - 3.0).abs() < 1e-12);
        assert!((resistance_v2(1e13, 250.0, 0.4).unwrap() - 6.25e15).abs() < 1.0);
        assert!(resistance_v1(1.8, 0.0).is_err());
        assert!(resistance_v2(1e13, 250.0, 0.0).is_err());
    }

    #[test]
    fn test_resistor_networks() {
        assert!((resistance_in_series(&[10.0, 5.0, 3.4, 6.3]) - 24.7).abs() < 1e-12);
        let r = resistance_in_parallel(&[0.5, 0.25, 0.125]).unwrap();
        assert!((r - 0.07142857142857142).abs() < 1e-15, "got {r}");
        assert_eq!(resistance_in_series(&[]), 0.0);
    }

    #[test]
    fn test_empty_reciprocal_combination_is_rejected() {
        match resistance_in_parallel(&[]) {
            Err(JoulesError::EmptyInput(what)) => assert_eq!(what, "resistances"),
            other => panic!("expected EmptyInput, got {other:?}"),
        }
        match capacitance_in_series(&[]) {
            Err(JoulesError::EmptyInput(what)) => assert_eq!(what, "capacitances"),
            other => panic!("expected EmptyInput, got {other:?}"),
        }
    }

    #[test]
    fn test_zero_component_shorts_parallel_network() {
        assert_eq!(resistance_in_parallel(&[10.0, 0.0]).unwrap(), 0.0);
    }

    #[test]
    fn test_capacitance() {
        assert!((capacitance_v1(2e-3, 100.0).unwrap() - 2.0e-5).abs() < 1e-18);
        let c = capacitance_v2(1.0, 0.2, 1e-3).unwrap();
        assert!((c - 1.77e-9).abs() < 1e-21, "got {c}");
        assert!(capacitance_v1(2e-3, 0.0).is_err());
        assert!(capacitance_v2(1.0, 0.2, 0.0).is_err());
        let c = capacitance_in_series(&[0.5, 0.25, 0.125]).unwrap();
        assert!((c - 0.07142857142857142).abs() < 1e-15);
        assert!((capacitance_in_parallel(&[10.0, 5.0, 3.4, 6.3]) - 24.7).abs() < 1e-12);
    }

    #[test]
    fn test_capacitor_energy_variants_agree() {
        // Q = 1.5 C, V = 30 V, C = 0.05 F
        assert_eq!(capacitor_energy_v1(1.5, 30.0), 22.5);
        assert!((capacitor_energy_v2(0.05, 30.0) - 22.5).abs() < 1e-12);
        assert!((capacitor_energy_v3(1.5, 0.05).unwrap() - 22.5).abs() < 1e-12);
        assert!(capacitor_energy_v3(1.5, 0.0).is_err());
    }

    #[test]
    fn test_voltage_and_power_variants() {
        assert!((voltage_v1(1.8, 0.6).unwrap() - 3.0).abs() < 1e-12);
        assert!((voltage_v2(0.6, 3.0) - 1.8).abs() < 1e-12);
        assert!(voltage_v1(1.8, 0.0).is_err());
        assert!((power_v2(1.8, 0.6) - 1.08).abs() < 1e-12);
        assert!((power_v3(0.6, 3.0) - 1.08).abs() < 1e-12);
        assert!((power_v4(1.8, 3.0).unwrap() - 1.08).abs() < 1e-12);
        assert!(power_v4(1.8, 0.0).is_err());
        assert!((energy_v3(1.8, 0.6, 5.0) - 5.4).abs() < 1e-12);
    }
}
