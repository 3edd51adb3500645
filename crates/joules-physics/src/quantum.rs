// ─────────────────────────────────────────────────────────────────────
// SCPN Joules — Quantum
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Photons, mass-energy, matter waves and black-body radiation.

use joules_math::geometry::sphere_surface_area;
use joules_types::constants::{PLANCK_CONSTANT, SPEED_OF_LIGHT, STEFAN_CONSTANT, WIEN_CONSTANT};
use joules_types::error::{nonzero, JoulesResult};

/// Photon energy [J], `E = h f`.
pub fn photon_energy(frequency: f64) -> f64 {
    PLANCK_CONSTANT * frequency
}

/// Rest energy [J] of a mass [kg], `E = m c^2`.
pub fn energy_v4(mass: f64) -> f64 {
    mass * SPEED_OF_LIGHT.powi(2)
}

/// de Broglie wavelength [m] of a particle with momentum [kg m/s].
pub fn de_broglie_wavelength(momentum: f64) -> JoulesResult<f64> {
    Ok(PLANCK_CONSTANT / nonzero(momentum)?)
}

/// Wavelength [m] of peak black-body emission at `temperature` [K]
/// (Wien's displacement law).
pub fn peak_wavelength(temperature: f64) -> JoulesResult<f64> {
    Ok(WIEN_CONSTANT / nonzero(temperature)?)
}

/// Luminosity [W] of a spherical black body (Stefan's law).
///
/// `L = sigma 4 pi r^2 T^4`, surface area via
/// [`sphere_surface_area`].
pub fn luminosity(radius: f64, temperature: f64) -> f64 {
    STEFAN_CONSTANT * sphere_surface_area(radius) * temperature.powi(4)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_photon_energy() {
        let e = photon_energy(509337860780984.75);
        assert!((e - 3.376910016977929e-19).abs() < 1e-32, "got {e:e}");
    }

    #[test]
    fn test_rest_energy() {
        assert!((energy_v4(0.002) - 1.8e14).abs() < 1.0);
    }

    #[test]
    fn test_de_broglie_wavelength() {
        let lambda = de_broglie_wavelength(1e-24).unwrap();
        assert!((lambda - 6.63e-10).abs() < 1e-22);
        assert!(de_broglie_wavelength(0.0).is_err());
    }

    #[test]
    fn test_black_body() {
        let lambda = peak_wavelength(5800.0).unwrap();
        assert!((lambda - 5.0e-7).abs() < 1e-18, "got {lambda}");
        assert!(peak_wavelength(0.0).is_err());
        let l = luminosity(7e8, 5800.0);
        assert!(((l - 3.950944937807722e26) / 3.950944937807722e26).abs() < 1e-12, "got {l:e}");
    }
}
