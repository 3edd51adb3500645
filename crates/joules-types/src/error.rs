// ─────────────────────────────────────────────────────────────────────
// SCPN Joules — Error
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use thiserror::Error;

#[derive(Error, Debug)]
pub enum JoulesError {
    #[error("divided by 0")]
    DivisionByZero,

    #[error("empty list of {0}")]
    EmptyInput(&'static str),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type JoulesResult<T> = Result<T, JoulesError>;

/// Pass a caller-supplied divisor through, rejecting exact zero.
///
/// Both `0.0` and `-0.0` are rejected; any other value, however small,
/// is returned unchanged.
pub fn nonzero(divisor: f64) -> JoulesResult<f64> {
    if divisor == 0.0 {
        return Err(JoulesError::DivisionByZero);
    }
    Ok(divisor)
}
