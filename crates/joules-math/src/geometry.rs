// ─────────────────────────────────────────────────────────────────────
// SCPN Joules — Geometry
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Circle, sphere, cylinder and cone measures.
//!
//! Solids are built from [`circle_area`] and [`circumference`] so that
//! their rounding follows the composed path, e.g. a sphere volume is
//! `(4 * circle_area(r) * r) / 3` rather than `4/3 * pi * r^3`.
//! Results carry the unit of `radius` (squared/cubed as appropriate).

use std::f64::consts::PI;

/// Arc length of a circle, `central_angle` in radians.
pub fn arc_length(radius: f64, central_angle: f64) -> f64 {
    radius * central_angle
}

/// `C = 2 pi r`.
pub fn circumference(radius: f64) -> f64 {
    2.0 * PI * radius
}

/// `A = pi r^2`.
pub fn circle_area(radius: f64) -> f64 {
    PI * radius.powi(2)
}

pub fn sphere_surface_area(radius: f64) -> f64 {
    4.0 * circle_area(radius)
}

pub fn sphere_volume(radius: f64) -> f64 {
    (4.0 * circle_area(radius) * radius) / 3.0
}

/// Curved surface area of a cylinder, excluding the two ends.
///
/// `A = 2 pi r h`.
pub fn cylinder_surface_area(radius: f64, height: f64) -> f64 {
    circumference(radius) * height
}

pub fn cylinder_volume(radius: f64, height: f64) -> f64 {
    circle_area(radius) * height
}

/// Total surface area of a right circular cone given its slant height.
///
/// `A = pi r^2 + pi r l`.
pub fn cone_surface_area(radius: f64, slant_height: f64) -> f64 {
    circle_area(radius) + (PI * radius * slant_height)
}

pub fn cone_volume(radius: f64, height: f64) -> f64 {
    (circle_area(radius) * height) / 3.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(got: f64, expected: f64) {
        let tol = 1e-12 * expected.abs().max(1.0);
        assert!(
            (got - expected).abs() < tol,
            "got {got}, expected {expected}"
        );
    }

    #[test]
    fn test_circle_measures() {
        assert_close(arc_length(12.0, PI / 4.0), 9.42477796076938);
        assert_close(circumference(12.0), 75.39822368615503);
        assert_close(circle_area(12.0), 452.3893421169302);
    }

    #[test]
    fn test_sphere_measures() {
        assert_close(sphere_surface_area(12.0), 1809.5573684677208);
        assert_close(sphere_volume(12.0), 7238.229473870883);
    }

    #[test]
    fn test_cylinder_measures() {
        assert_close(cylinder_surface_area(6.5, 3.0), 122.52211349000194);
        assert_close(cylinder_volume(6.5, 3.0), 398.1968688425063);
    }

    #[test]
    fn test_cone_measures() {
        assert_close(cone_surface_area(6.5, 4.2), 218.49776905717013);
        assert_close(cone_volume(6.5, 3.0), 132.73228961416876);
    }

    #[test]
    fn test_zero_radius_is_degenerate() {
        assert_eq!(sphere_volume(0.0), 0.0);
        assert_eq!(cylinder_surface_area(0.0, 10.0), 0.0);
    }
}
