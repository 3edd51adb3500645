// ─────────────────────────────────────────────────────────────────────
// SCPN Joules — Momentum and Impulse
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Linear momentum and impulse.

/// Momentum [N s], `p = m v`.
pub fn momentum(mass: f64, velocity: f64) -> f64 {
    mass * velocity
}

/// Impulse [N s] from force and time.
pub fn impulse_v1(force: f64, time: f64) -> f64 {
    force * time
}

/// Impulse [N s] as change of momentum, `(v - u) m`.
pub fn impulse_v2(initial_velocity: f64, final_velocity: f64, mass: f64) -> f64 {
    (final_velocity - initial_velocity) * mass
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_momentum_and_impulse() {
        assert_eq!(momentum(12.5, 4.0), 50.0);
        assert_eq!(impulse_v1(25.0, 2.0), 50.0);
        assert_eq!(impulse_v2(20.0, 24.0, 12.5), 50.0);
        assert_eq!(impulse_v2(24.0, 20.0, 12.5), -50.0);
    }
}
