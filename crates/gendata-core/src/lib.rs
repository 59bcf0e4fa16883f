//! Deterministic matrix-multiply fixtures rendered as C headers.

pub mod domain;
pub mod modules;
pub mod numerics;
