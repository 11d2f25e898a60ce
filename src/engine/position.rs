// src/engine/position.rs

/// Snapshot of one leveraged position, as supplied by the input form.
///
/// Replaced wholesale on every edit; the engine never mutates it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PositionParameters {
    pub margin_balance:     f64,  // collateral allocated to the position
    pub available_balance:  f64,  // uncommitted balance, informational only
    pub quantity:           f64,  // units of the underlying, may be signed
    pub entry_price:        f64,  // price the position was opened at
    pub current_price:      f64,  // present market price
    pub leverage:           f64,  // margin multiplier
    pub maintenance_margin: f64,  // exchange minimum margin %, reserved
}

impl PositionParameters {
    /// The reference configuration the calculator opens with.
    pub fn reference() -> Self {
        Self {
            margin_balance:     382.0,
            available_balance:  333.2911,
            quantity:           0.005,
            entry_price:        97385.88,
            current_price:      97794.8,
            leverage:           10.0,
            maintenance_margin: 2.68,
        }
    }

    /// Same position re-marked at `price`.
    pub fn at_price(&self, price: f64) -> Self {
        Self {
            current_price: price,
            ..*self
        }
    }
}

impl Default for PositionParameters {
    fn default() -> Self {
        Self::reference()
    }
}
