// src/engine/prepare_inputs.rs

use crate::engine::position::PositionParameters;
use crate::error::{RiskError, RiskResult};

/// Input-boundary check an input collaborator runs before calling the engine.
///
/// The engine itself accepts anything; this rejects non-finite values and
/// values outside each field's domain, first offending field wins.
pub fn prepare_inputs(params: PositionParameters) -> RiskResult<PositionParameters> {
    let fields = [
        ("margin_balance",     params.margin_balance),
        ("available_balance",  params.available_balance),
        ("quantity",           params.quantity),
        ("entry_price",        params.entry_price),
        ("current_price",      params.current_price),
        ("leverage",           params.leverage),
        ("maintenance_margin", params.maintenance_margin),
    ];
    for (field, value) in fields {
        if !value.is_finite() {
            return Err(RiskError::NonFiniteParameter { field, value });
        }
    }

    require_positive("margin_balance", params.margin_balance)?;
    require_non_negative("available_balance", params.available_balance)?;
    require_positive("entry_price", params.entry_price)?;
    require_positive("current_price", params.current_price)?;
    require_positive("leverage", params.leverage)?;
    require_non_negative("maintenance_margin", params.maintenance_margin)?;

    Ok(params)
}

fn require_positive(field: &'static str, value: f64) -> RiskResult<()> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(RiskError::OutOfDomain { field, value, constraint: "> 0" })
    }
}

fn require_non_negative(field: &'static str, value: f64) -> RiskResult<()> {
    if value >= 0.0 {
        Ok(())
    } else {
        Err(RiskError::OutOfDomain { field, value, constraint: ">= 0" })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_position_passes() {
        let p = PositionParameters::reference();
        assert_eq!(prepare_inputs(p), Ok(p));
    }

    #[test]
    fn test_signed_and_zero_quantity_pass() {
        let base = PositionParameters::reference();
        assert!(prepare_inputs(PositionParameters { quantity: -0.5, ..base }).is_ok());
        assert!(prepare_inputs(PositionParameters { quantity: 0.0, ..base }).is_ok());
    }

    #[test]
    fn test_rejects_non_finite() {
        let p = PositionParameters {
            quantity: f64::NAN,
            ..PositionParameters::reference()
        };
        match prepare_inputs(p) {
            Err(RiskError::NonFiniteParameter { field, .. }) => assert_eq!(field, "quantity"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_rejects_each_out_of_domain_field() {
        let base = PositionParameters::reference();
        let cases = [
            ("margin_balance",     PositionParameters { margin_balance: 0.0, ..base }),
            ("available_balance",  PositionParameters { available_balance: -1.0, ..base }),
            ("entry_price",        PositionParameters { entry_price: -3.0, ..base }),
            ("current_price",      PositionParameters { current_price: 0.0, ..base }),
            ("leverage",           PositionParameters { leverage: 0.0, ..base }),
            ("maintenance_margin", PositionParameters { maintenance_margin: -0.1, ..base }),
        ];
        for (expected, params) in cases {
            match prepare_inputs(params) {
                Err(RiskError::OutOfDomain { field, .. }) => assert_eq!(field, expected),
                other => panic!("{}: unexpected {:?}", expected, other),
            }
        }
    }
}
