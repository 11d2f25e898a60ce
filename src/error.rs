// src/error.rs

//! Error types for the input boundary and engine configuration.
//!
//! The formulas themselves never fail; these errors only come out of
//! parameter validation, shift-set construction and policy construction.

use thiserror::Error;

/// Errors raised outside the pure formulas.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RiskError {
    /// A position parameter is NaN or infinite.
    #[error("Parameter '{field}' must be finite, got {value}")]
    NonFiniteParameter { field: &'static str, value: f64 },

    /// A position parameter is finite but outside its domain.
    #[error("Parameter '{field}' must be {constraint}, got {value}")]
    OutOfDomain {
        field: &'static str,
        value: f64,
        constraint: &'static str,
    },

    /// A scenario shift set with no shifts.
    #[error("Scenario shift set is empty")]
    EmptyShiftSet,

    /// A scenario shift that is NaN or infinite.
    #[error("Scenario shift at index {index} must be finite, got {value}")]
    NonFiniteShift { index: usize, value: f64 },

    /// Margin fraction outside (0, 1].
    #[error("Max margin fraction must be in (0, 1], got {0}")]
    InvalidPolicy(f64),
}

pub type RiskResult<T> = Result<T, RiskError>;
