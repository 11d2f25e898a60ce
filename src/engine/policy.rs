// src/engine/policy.rs

use crate::error::{RiskError, RiskResult};

pub const MAX_MARGIN_FRACTION: f64 = 0.30;

/// Margin-usage policy: one fraction drives both the safe-size envelope and
/// the safety threshold.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RiskPolicy {
    max_margin_fraction: f64,
}

impl RiskPolicy {
    pub fn new(max_margin_fraction: f64) -> RiskResult<Self> {
        if !max_margin_fraction.is_finite()
            || max_margin_fraction <= 0.0
            || max_margin_fraction > 1.0
        {
            return Err(RiskError::InvalidPolicy(max_margin_fraction));
        }
        Ok(Self { max_margin_fraction })
    }

    pub fn max_margin_fraction(&self) -> f64 {
        self.max_margin_fraction
    }

    pub fn threshold_percent(&self) -> f64 {
        self.max_margin_fraction * 100.0
    }

    /// Inclusive: a ratio exactly at the threshold is still safe.
    pub fn is_within_limit(&self, margin_usage_ratio: f64) -> bool {
        margin_usage_ratio <= self.threshold_percent()
    }
}

impl Default for RiskPolicy {
    fn default() -> Self {
        Self {
            max_margin_fraction: MAX_MARGIN_FRACTION,
        }
    }
}
