//! Mathematical primitives for SCPN Joules.

pub mod conversion;
pub mod geometry;
