// src/engine/exposure.rs

use crate::engine::position::PositionParameters;

/// Position exposure evaluated at one mark price.
///
/// Shared by the metrics calculator (mark = current price) and the scenario
/// generator (mark = shifted price). Full precision, never rounded.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ExposureSnapshot {
    pub mark_price:         f64,  // price the position is valued at
    pub position_value:     f64,  // quantity × mark
    pub margin:             f64,  // position_value / leverage
    pub margin_usage_ratio: f64,  // margin / margin_balance, in %
    pub pnl:                f64,  // quantity × (mark - entry)
    pub roe:                f64,  // pnl / margin, in %
}

impl ExposureSnapshot {
    /// Zero leverage, margin balance or margin give IEEE infinities/NaN.
    pub fn at_price(params: &PositionParameters, mark_price: f64) -> Self {
        let position_value     = position_value(params.quantity, mark_price);
        let margin             = margin_required(position_value, params.leverage);
        let margin_usage_ratio = margin_usage_ratio(margin, params.margin_balance);
        let pnl                = unrealized_pnl(params.quantity, mark_price, params.entry_price);
        let roe                = return_on_margin(pnl, margin);

        ExposureSnapshot {
            mark_price,
            position_value,
            margin,
            margin_usage_ratio,
            pnl,
            roe,
        }
    }
}

#[inline]
pub fn position_value(quantity: f64, price: f64) -> f64 {
    quantity * price
}

#[inline]
pub fn margin_required(position_value: f64, leverage: f64) -> f64 {
    position_value / leverage
}

#[inline]
pub fn margin_usage_ratio(margin: f64, margin_balance: f64) -> f64 {
    (margin / margin_balance) * 100.0
}

#[inline]
pub fn unrealized_pnl(quantity: f64, price: f64, entry_price: f64) -> f64 {
    quantity * (price - entry_price)
}

/// PnL over committed margin (not over notional), in %.
#[inline]
pub fn return_on_margin(pnl: f64, margin: f64) -> f64 {
    (pnl / margin) * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_snapshot_at_current_price() {
        let p = PositionParameters::reference();
        let s = ExposureSnapshot::at_price(&p, p.current_price);

        assert_relative_eq!(s.position_value, 488.974, max_relative = 1e-12);
        assert_relative_eq!(s.margin, 48.8974, max_relative = 1e-12);
        assert_relative_eq!(s.pnl, 2.0446, max_relative = 1e-9);
        assert!(s.roe.is_finite());
    }

    #[test]
    fn test_short_position_gains_when_price_falls() {
        let p = PositionParameters {
            quantity: -2.0,
            entry_price: 100.0,
            ..PositionParameters::reference()
        };
        let s = ExposureSnapshot::at_price(&p, 90.0);
        assert_relative_eq!(s.pnl, 20.0);
        assert!(s.position_value < 0.0);
    }

    #[test]
    fn test_zero_leverage_is_not_finite() {
        let p = PositionParameters {
            leverage: 0.0,
            ..PositionParameters::reference()
        };
        let s = ExposureSnapshot::at_price(&p, p.current_price);
        assert!(s.margin.is_infinite());
        assert!(s.margin_usage_ratio.is_infinite());
    }

    #[test]
    fn test_zero_quantity_roe_is_nan() {
        let p = PositionParameters {
            quantity: 0.0,
            ..PositionParameters::reference()
        };
        let s = ExposureSnapshot::at_price(&p, p.current_price);
        assert_eq!(s.margin, 0.0);
        assert!(s.roe.is_nan());
    }
}
