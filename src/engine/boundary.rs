// src/engine/boundary.rs

//! Validated entry points for an input collaborator such as the Python module.

use crate::engine::metrics::{compute_with_policy, DerivedMetrics};
use crate::engine::policy::RiskPolicy;
use crate::engine::position::PositionParameters;
use crate::engine::prepare_inputs::prepare_inputs;
use crate::engine::scenario::{ScenarioGenerator, ScenarioPoint, ScenarioShifts};
use crate::error::RiskResult;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MetricsReport {
    pub metrics:           DerivedMetrics,
    pub threshold_percent: f64,  // warning line for the chart
}

pub fn checked_metrics(
    params: PositionParameters,
    max_margin_fraction: f64,
    rounded: bool,
) -> RiskResult<MetricsReport> {
    // 1) Reject bad inputs before any arithmetic
    let params = prepare_inputs(params)?;
    let policy = RiskPolicy::new(max_margin_fraction)?;

    // 2) Round only on the way out
    let raw = compute_with_policy(&params, &policy);
    Ok(MetricsReport {
        metrics:           if rounded { raw.rounded() } else { raw },
        threshold_percent: policy.threshold_percent(),
    })
}

/// `None` shifts means the default curve.
pub fn checked_curve(
    params: PositionParameters,
    shifts: Option<Vec<f64>>,
    rounded: bool,
) -> RiskResult<Vec<ScenarioPoint>> {
    let params = prepare_inputs(params)?;
    let shifts = match shifts {
        Some(s) => ScenarioShifts::new(s)?,
        None    => ScenarioShifts::default(),
    };

    Ok(ScenarioGenerator::new(shifts)
        .generate(&params)
        .into_iter()
        .map(|p| if rounded { p.rounded() } else { p })
        .collect())
}
