// src/engine/scenario.rs

use ndarray::Array2;
use rayon::prelude::*;
use tracing::debug;

use crate::engine::exposure::ExposureSnapshot;
use crate::engine::position::PositionParameters;
use crate::engine::rounding::{round_to, MONEY_DECIMALS};
use crate::error::{RiskError, RiskResult};

pub const DEFAULT_SHIFTS: [f64; 7] = [-10.0, -5.0, -2.5, 0.0, 2.5, 5.0, 10.0];

/// Column order of the scenario matrix.
pub const MATRIX_COLUMNS: [&str; 4] = [
    "price_shift_percent",
    "implied_price",
    "margin_usage_ratio",
    "roe",
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScenarioPoint {
    pub price_shift_percent: f64,
    pub implied_price:       f64,  // current price × (1 + shift/100)
    pub margin_usage_ratio:  f64,  // %, at the implied price
    pub roe:                 f64,  // %, over the scenario's own margin
}

impl ScenarioPoint {
    fn evaluate(params: &PositionParameters, shift: f64) -> Self {
        let implied_price = params.current_price * (1.0 + shift / 100.0);
        let exposure = ExposureSnapshot::at_price(params, implied_price);
        ScenarioPoint {
            price_shift_percent: shift,
            implied_price,
            margin_usage_ratio: exposure.margin_usage_ratio,
            roe: exposure.roe,
        }
    }

    /// Chart rounding: price to whole units, ratios to 2 decimals.
    pub fn rounded(&self) -> Self {
        ScenarioPoint {
            price_shift_percent: self.price_shift_percent,
            implied_price:       round_to(self.implied_price, 0),
            margin_usage_ratio:  round_to(self.margin_usage_ratio, MONEY_DECIMALS),
            roe:                 round_to(self.roe, MONEY_DECIMALS),
        }
    }

    /// Values keyed by column name, in [`MATRIX_COLUMNS`] order.
    pub fn fields(&self) -> [(&'static str, f64); 4] {
        [
            (MATRIX_COLUMNS[0], self.price_shift_percent),
            (MATRIX_COLUMNS[1], self.implied_price),
            (MATRIX_COLUMNS[2], self.margin_usage_ratio),
            (MATRIX_COLUMNS[3], self.roe),
        ]
    }
}

/// Ordered, non-empty list of finite price shifts in percent.
#[derive(Clone, Debug, PartialEq)]
pub struct ScenarioShifts(Vec<f64>);

// never empty, so no is_empty
#[allow(clippy::len_without_is_empty)]
impl ScenarioShifts {
    pub fn new(shifts: Vec<f64>) -> RiskResult<Self> {
        if shifts.is_empty() {
            return Err(RiskError::EmptyShiftSet);
        }
        if let Some((index, &value)) = shifts.iter().enumerate().find(|(_, s)| !s.is_finite()) {
            return Err(RiskError::NonFiniteShift { index, value });
        }
        Ok(Self(shifts))
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl Default for ScenarioShifts {
    fn default() -> Self {
        Self(DEFAULT_SHIFTS.to_vec())
    }
}

#[derive(Clone, Debug, Default)]
pub struct ScenarioGenerator {
    shifts: ScenarioShifts,
}

impl ScenarioGenerator {
    pub fn new(shifts: ScenarioShifts) -> Self {
        Self { shifts }
    }

    pub fn shifts(&self) -> &ScenarioShifts {
        &self.shifts
    }

    pub fn generate(&self, params: &PositionParameters) -> Vec<ScenarioPoint> {
        let points: Vec<ScenarioPoint> = self
            .shifts
            .as_slice()
            .iter()
            .map(|&shift| ScenarioPoint::evaluate(params, shift))
            .collect();
        debug!(points = self.shifts.len(), "generated scenario curve");
        points
    }

    /// Same curve as `generate`, points evaluated on the rayon pool.
    pub fn generate_par(&self, params: &PositionParameters) -> Vec<ScenarioPoint> {
        let points: Vec<ScenarioPoint> = self
            .shifts
            .as_slice()
            .par_iter()
            .map(|&shift| ScenarioPoint::evaluate(params, shift))
            .collect();
        debug!(points = self.shifts.len(), "generated scenario curve in parallel");
        points
    }

    pub fn generate_matrix(&self, params: &PositionParameters) -> Array2<f64> {
        points_to_matrix(&self.generate(params))
    }
}

pub fn scenario(params: &PositionParameters) -> Vec<ScenarioPoint> {
    ScenarioGenerator::default().generate(params)
}

/// `(n_points, 4)` matrix, one row per point, columns per [`MATRIX_COLUMNS`].
pub fn points_to_matrix(points: &[ScenarioPoint]) -> Array2<f64> {
    Array2::from_shape_fn((points.len(), MATRIX_COLUMNS.len()), |(i, j)| points[i].fields()[j].1)
}
