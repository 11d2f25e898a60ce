// src/lib.rs

//! Risk metrics for a single leveraged position: margin usage, unrealized
//! PnL, ROE, the safe position-size envelope under a 30% margin policy, and
//! a price-shift scenario curve.
//!
//! Everything is pure arithmetic on an immutable [`PositionParameters`].
//! Degenerate inputs (zero leverage, margin balance or price) propagate
//! IEEE infinities/NaN instead of failing; run [`prepare_inputs`] at the
//! input boundary to reject them up front.
//!
//! ```rust
//! use position_risk::{compute, scenario, PositionParameters};
//!
//! let params = PositionParameters::reference();
//! let metrics = compute(&params);
//! assert!(metrics.is_margin_safe);
//!
//! let curve = scenario(&params);
//! assert_eq!(curve.len(), 7);
//! assert_eq!(curve[3].roe, metrics.roe);
//! ```
//!
//! With the `python` feature the crate builds as a Python extension module
//! exposing `compute_metrics` and `scenario_curve`.

pub mod engine;
pub mod error;

pub use engine::{
    compute, compute_with_policy, prepare_inputs, scenario, DerivedMetrics, ExposureSnapshot,
    PositionParameters, RiskPolicy, ScenarioGenerator, ScenarioPoint, ScenarioShifts,
    DEFAULT_SHIFTS, MAX_MARGIN_FRACTION,
};
pub use error::{RiskError, RiskResult};

#[cfg(feature = "python")]
use pyo3::prelude::*;
#[cfg(feature = "python")]
use pyo3::wrap_pyfunction;

#[cfg(feature = "python")]
#[pymodule]
fn position_risk(_py: Python<'_>, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(engine::bindings::compute_metrics, m)?)?;
    m.add_function(wrap_pyfunction!(engine::bindings::scenario_curve, m)?)?;
    Ok(())
}
