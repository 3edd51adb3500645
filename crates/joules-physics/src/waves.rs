// ─────────────────────────────────────────────────────────────────────
// SCPN Joules — Waves and Optics
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Wave relations, refraction, interference and diffraction.
//!
//! Angles are in degrees at the API boundary and converted with
//! [`to_radians`] / [`to_degrees`] internally.

use joules_math::conversion::{to_degrees, to_radians};
use joules_types::constants::SPEED_OF_LIGHT;
use joules_types::error::{nonzero, JoulesResult};

/// Wave speed [m/s], `v = f lambda`.
pub fn wave_speed(frequency: f64, wavelength: f64) -> f64 {
    frequency * wavelength
}

/// Wavelength [m], `lambda = v / f`.
pub fn wavelength(wave_speed: f64, frequency: f64) -> JoulesResult<f64> {
    Ok(wave_speed / nonzero(frequency)?)
}

/// Frequency [Hz] from wave speed and wavelength.
pub fn frequency_v1(wave_speed: f64, wavelength: f64) -> JoulesResult<f64> {
    Ok(wave_speed / nonzero(wavelength)?)
}

/// Frequency [Hz] from time period [s].
pub fn frequency_v2(time_period: f64) -> JoulesResult<f64> {
    Ok(1.0 / nonzero(time_period)?)
}

/// Time period [s] from frequency [Hz].
pub fn time_period_v1(frequency: f64) -> JoulesResult<f64> {
    Ok(1.0 / nonzero(frequency)?)
}

/// Refractive index from Snell's law at an interface with air.
///
/// `n = sin(i) / sin(r)`. Only a refraction angle whose sine evaluates to
/// exactly zero (0°) is rejected; 180° leaves a rounding residue in
/// `sin` and divides through to a very large index.
pub fn refractive_index_v1(incident_angle: f64, refracted_angle: f64) -> JoulesResult<f64> {
    let sin_r = to_radians(refracted_angle).sin();
    Ok(to_radians(incident_angle).sin() / nonzero(sin_r)?)
}

/// Absolute refractive index from the speed of light in the medium [m/s].
///
/// `n = c / v`.
pub fn refractive_index_v2(speed_in_medium: f64) -> JoulesResult<f64> {
    Ok(SPEED_OF_LIGHT / nonzero(speed_in_medium)?)
}

/// Critical angle [degrees] for total internal reflection into air.
///
/// `C = asin(1 / n)`. Indices below 1 give `NaN`, as there is no
/// critical angle.
pub fn critical_angle(refractive_index: f64) -> JoulesResult<f64> {
    Ok(to_degrees((1.0 / nonzero(refractive_index)?).asin()))
}

/// Young's double-slit fringe spacing [m].
///
/// `w = lambda D / s`.
pub fn fringe_spacing(
    wavelength: f64,
    screen_distance: f64,
    slit_separation: f64,
) -> JoulesResult<f64> {
    Ok((wavelength * screen_distance) / nonzero(slit_separation)?)
}

/// Wavelength [m] from a diffraction grating maximum.
///
/// `lambda = d sin(theta) / n`, with `slit_spacing` [m], `angle` in degrees
/// and `order` the order of the maximum.
pub fn grating_wavelength(slit_spacing: f64, angle: f64, order: f64) -> JoulesResult<f64> {
    Ok((slit_spacing * to_radians(angle).sin()) / nonzero(order)?)
}
