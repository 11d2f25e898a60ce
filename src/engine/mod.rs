// src/engine/mod.rs

pub mod position;
pub mod prepare_inputs;
pub mod exposure;
pub mod policy;
pub mod rounding;
pub mod metrics;
pub mod scenario;
pub mod boundary;

#[cfg(feature = "python")]
pub mod bindings;

pub use crate::engine::{
    exposure::ExposureSnapshot,
    metrics::{compute, compute_with_policy, DerivedMetrics},
    policy::{RiskPolicy, MAX_MARGIN_FRACTION},
    position::PositionParameters,
    prepare_inputs::prepare_inputs,
    scenario::{scenario, ScenarioGenerator, ScenarioPoint, ScenarioShifts, DEFAULT_SHIFTS},
};
