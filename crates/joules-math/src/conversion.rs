// ─────────────────────────────────────────────────────────────────────
// SCPN Joules — Conversion
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Angle, temperature and speed unit conversions.

use std::f64::consts::PI;

const KELVIN_OFFSET: f64 = 273.15;

/// Radians to degrees.
pub fn to_degrees(angle: f64) -> f64 {
    (angle * 180.0) / PI
}

/// Degrees to radians.
pub fn to_radians(angle: f64) -> f64 {
    (angle * PI) / 180.0
}

/// Celcius to kelvins.
pub fn to_kelvins(temperature: f64) -> f64 {
    temperature + KELVIN_OFFSET
}

/// Kelvins to celcius.
pub fn to_celcius(temperature: f64) -> f64 {
    temperature - KELVIN_OFFSET
}

/// km/h to m/s.
pub fn to_meters_per_second(velocity: f64) -> f64 {
    (velocity * 1000.0) / 3600.0
}

/// m/s to km/h.
pub fn to_kilometers_per_hour(velocity: f64) -> f64 {
    (velocity * 3600.0) / 1000.0
}
