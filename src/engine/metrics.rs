// src/engine/metrics.rs

use tracing::{debug, warn};

use crate::engine::exposure::ExposureSnapshot;
use crate::engine::policy::RiskPolicy;
use crate::engine::position::PositionParameters;
use crate::engine::rounding::{round_to, MONEY_DECIMALS, QUANTITY_DECIMALS};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DerivedMetrics {
    pub position_value:           f64,  // quantity × current price
    pub initial_margin:           f64,  // position_value / leverage
    pub margin_usage_ratio:       f64,  // % of margin balance committed
    pub unrealized_pnl:           f64,
    pub max_margin_usage:         f64,  // margin the policy allows
    pub max_position_value:       f64,
    pub max_quantity:             f64,  // largest size allowed at current price
    pub remaining_margin:         f64,  // headroom left given the held position
    pub remaining_position_value: f64,
    pub remaining_quantity:       f64,  // negative when already over the limit
    pub roe:                      f64,  // % return on committed margin
    pub is_margin_safe:           bool,
}

impl DerivedMetrics {
    /// Display copy: quantities to 6 decimals, everything else to 2.
    pub fn rounded(&self) -> Self {
        let money = |v: f64| round_to(v, MONEY_DECIMALS);
        let qty   = |v: f64| round_to(v, QUANTITY_DECIMALS);
        DerivedMetrics {
            position_value:           money(self.position_value),
            initial_margin:           money(self.initial_margin),
            margin_usage_ratio:       money(self.margin_usage_ratio),
            unrealized_pnl:           money(self.unrealized_pnl),
            max_margin_usage:         money(self.max_margin_usage),
            max_position_value:       money(self.max_position_value),
            max_quantity:             qty(self.max_quantity),
            remaining_margin:         money(self.remaining_margin),
            remaining_position_value: money(self.remaining_position_value),
            remaining_quantity:       qty(self.remaining_quantity),
            roe:                      money(self.roe),
            is_margin_safe:           self.is_margin_safe,
        }
    }

    /// Numeric outputs keyed by name, `is_margin_safe` excluded.
    pub fn fields(&self) -> [(&'static str, f64); 11] {
        [
            ("position_value",           self.position_value),
            ("initial_margin",           self.initial_margin),
            ("margin_usage_ratio",       self.margin_usage_ratio),
            ("unrealized_pnl",           self.unrealized_pnl),
            ("max_margin_usage",         self.max_margin_usage),
            ("max_position_value",       self.max_position_value),
            ("max_quantity",             self.max_quantity),
            ("remaining_margin",         self.remaining_margin),
            ("remaining_position_value", self.remaining_position_value),
            ("remaining_quantity",       self.remaining_quantity),
            ("roe",                      self.roe),
        ]
    }

    /// False when a degenerate configuration produced infinities or NaN.
    pub fn is_finite(&self) -> bool {
        [
            self.position_value,
            self.initial_margin,
            self.margin_usage_ratio,
            self.unrealized_pnl,
            self.max_quantity,
            self.remaining_quantity,
            self.roe,
        ]
        .iter()
        .all(|v| v.is_finite())
    }
}

pub fn compute(params: &PositionParameters) -> DerivedMetrics {
    compute_with_policy(params, &RiskPolicy::default())
}

/// Never fails: zero leverage, margin balance or price propagate as
/// infinities/NaN for the caller to detect.
pub fn compute_with_policy(params: &PositionParameters, policy: &RiskPolicy) -> DerivedMetrics {
    // 1) Exposure at the current price
    let exposure = ExposureSnapshot::at_price(params, params.current_price);

    // 2) Safe-size envelope, independent of the held position
    let max_margin_usage   = params.margin_balance * policy.max_margin_fraction();
    let max_position_value = max_margin_usage * params.leverage;
    let max_quantity       = max_position_value / params.current_price;

    // 3) Headroom given the held position
    let remaining_margin         = max_margin_usage - exposure.margin;
    let remaining_position_value = remaining_margin * params.leverage;
    let remaining_quantity       = remaining_position_value / params.current_price;

    let metrics = DerivedMetrics {
        position_value:     exposure.position_value,
        initial_margin:     exposure.margin,
        margin_usage_ratio: exposure.margin_usage_ratio,
        unrealized_pnl:     exposure.pnl,
        max_margin_usage,
        max_position_value,
        max_quantity,
        remaining_margin,
        remaining_position_value,
        remaining_quantity,
        roe:                exposure.roe,
        is_margin_safe:     policy.is_within_limit(exposure.margin_usage_ratio),
    };

    debug!(
        margin_usage_ratio = metrics.margin_usage_ratio,
        roe = metrics.roe,
        remaining_quantity = metrics.remaining_quantity,
        is_margin_safe = metrics.is_margin_safe,
        "computed position metrics"
    );
    if !metrics.is_finite() {
        warn!(
            leverage = params.leverage,
            margin_balance = params.margin_balance,
            current_price = params.current_price,
            "degenerate position parameters produced non-finite metrics"
        );
    }

    metrics
}
