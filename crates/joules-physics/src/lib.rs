// ─────────────────────────────────────────────────────────────────────
// SCPN Joules — Physics
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Closed-form physics formulas, one module per topic.
//!
//! Mechanics: kinematics, circular motion, mass/weight, density, forces,
//! energy/work/power, momentum/impulse, pressure, stress/strain, oscillations.
//! Fields and matter: electricity, electric/magnetic/gravitational fields,
//! thermodynamics, waves and optics, quantum.
//!
//! Formulas that divide by a caller-supplied quantity return
//! [`JoulesResult`](joules_types::error::JoulesResult) and reject an exact
//! zero divisor with `DivisionByZero`; all others return a bare `f64`.

pub mod circular_motion;
pub mod density;
pub mod electric_fields;
pub mod electricity;
pub mod energy_work_power;
pub mod forces;
pub mod gravitational_fields;
pub mod kinematics;
pub mod magnetic_fields;
pub mod mass_weight;
pub mod momentum_impulse;
pub mod oscillations;
pub mod pressure;
pub mod quantum;
pub mod stress_strain;
pub mod thermodynamics;
pub mod waves;
