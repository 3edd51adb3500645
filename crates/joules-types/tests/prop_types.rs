// ─────────────────────────────────────────────────────────────────────
// SCPN Joules — Property-Based Tests (proptest) for joules-types
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Property-based tests for joules-types using proptest.
//!
//! Covers: divisor guard, constants table lookup.

use joules_types::constants::{lookup, TABLE};
use joules_types::error::{nonzero, JoulesError};
use proptest::prelude::*;

// ── Divisor Guard ────────────────────────────────────────────────────

proptest! {
    /// Any non-zero finite divisor passes through unchanged.
    #[test]
    fn nonzero_is_identity_off_zero(x in prop::num::f64::NORMAL) {
        let got = nonzero(x);
        prop_assert!(got.is_ok());
        prop_assert_eq!(got.unwrap(), x);
    }
}

#[test]
fn nonzero_rejects_zero() {
    assert!(matches!(nonzero(0.0), Err(JoulesError::DivisionByZero)));
}

// ── Constants Table ──────────────────────────────────────────────────

proptest! {
    /// Every table row is reachable by name and values are finite and positive.
    #[test]
    fn every_row_is_found_by_name(idx in 0usize..16) {
        prop_assume!(idx < TABLE.len());
        let row = &TABLE[idx];
        let found = lookup(row.name);
        prop_assert!(found.is_some());
        prop_assert_eq!(found.unwrap(), row);
        prop_assert!(row.value.is_finite() && row.value > 0.0);
    }
}
