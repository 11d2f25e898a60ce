// src/engine/rounding.rs

//! Output-boundary rounding. Never applied inside a computation.

pub const MONEY_DECIMALS: i32 = 2;
pub const QUANTITY_DECIMALS: i32 = 6;

/// Round the exact binary value to `decimals` places, exact ties away from zero.
///
/// Matches what a display layer prints with fixed-point formatting: 100.005 is
/// stored below the tie and stays 100.00. Non-finite values pass through.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let places = decimals.max(0) as usize;

    // 1) Nearest decimal to the exact value; exact ties come out half-even
    let nearest: f64 = match format!("{:.*}", places, value).parse() {
        Ok(v) => v,
        Err(_) => return value,
    };

    // 2) Exact ties go away from zero instead
    if is_exact_tie(value, places) && nearest.abs() < value.abs() {
        let step = 10f64.powi(-(places as i32));
        let bumped = format!("{:.*}", places, nearest.abs() + step)
            .parse::<f64>()
            .unwrap_or(nearest.abs());
        return bumped.copysign(value);
    }
    nearest
}

// value × 10^d ends in exactly .5 iff value × 2^(d+1) is an odd integer
fn is_exact_tie(value: f64, places: usize) -> bool {
    let scaled = value.abs() * 2f64.powi(places as i32 + 1);
    scaled.is_finite() && scaled.fract() == 0.0 && scaled % 2.0 == 1.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_money() {
        assert_eq!(round_to(12.800366492146598, MONEY_DECIMALS), 12.8);
        assert_eq!(round_to(4.181408418443498, MONEY_DECIMALS), 4.18);
        assert_eq!(round_to(-106.46510175728494, MONEY_DECIMALS), -106.47);
    }

    #[test]
    fn test_round_quantity() {
        assert_eq!(round_to(0.01171841447602531, QUANTITY_DECIMALS), 0.011718);
        assert_eq!(round_to(0.006718414476025308, QUANTITY_DECIMALS), 0.006718);
    }

    #[test]
    fn test_near_tie_rounds_from_stored_value() {
        // stored as 100.00499999…, -943.30499999…, 1.00499999…
        assert_eq!(round_to(100.005, MONEY_DECIMALS), 100.0);
        assert_eq!(round_to(-943.305, MONEY_DECIMALS), -943.3);
        assert_eq!(round_to(1.005, MONEY_DECIMALS), 1.0);
        assert_eq!(round_to(0.0000005, QUANTITY_DECIMALS), 0.0);
    }

    #[test]
    fn test_exact_tie_rounds_away_from_zero() {
        assert_eq!(round_to(0.125, MONEY_DECIMALS), 0.13);
        assert_eq!(round_to(-0.125, MONEY_DECIMALS), -0.13);
        assert_eq!(round_to(2.5, 0), 3.0);
        assert_eq!(round_to(-2.5, 0), -3.0);
        assert_eq!(round_to(1234.5, 0), 1235.0);
        assert_eq!(round_to(0.5, 0), 1.0);
    }

    #[test]
    fn test_position_value_at_near_tie_price() {
        use crate::engine::{compute, PositionParameters};

        let m = compute(&PositionParameters {
            quantity: 1.0,
            current_price: 100.005,
            ..PositionParameters::reference()
        });
        assert_eq!(format!("{:.2}", m.rounded().position_value), "100.00");
    }

    #[test]
    fn test_non_finite_passthrough() {
        assert!(round_to(f64::NAN, 2).is_nan());
        assert_eq!(round_to(f64::INFINITY, 2), f64::INFINITY);
        assert_eq!(round_to(f64::NEG_INFINITY, 6), f64::NEG_INFINITY);
    }
}
