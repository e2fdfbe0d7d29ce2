// 3.0: the pnl formula. sign(side) * (current - entry) / entry * notional * ratio.
// this is a display mirror of the program's accounting, denominated in USD
// notional rather than underlying units.

use crate::error::{InputViolation, RiskError};
use crate::types::{Price, Side, Usd};
use rust_decimal::Decimal;

/// Unrealized PnL for `closing_ratio` of the position (1.0 = whole position).
pub fn compute_position_pnl(
    side: Side,
    entry_price: Price,
    current_price: Price,
    position_size_usd: Usd,
    closing_ratio: Decimal,
) -> Result<Usd, RiskError> {
    if closing_ratio <= Decimal::ZERO {
        return Err(InputViolation::NonPositivePercentage {
            value: closing_ratio * Decimal::ONE_HUNDRED,
        }
        .into());
    }
    if closing_ratio > Decimal::ONE {
        return Err(InputViolation::PercentageAboveFull {
            value: closing_ratio * Decimal::ONE_HUNDRED,
        }
        .into());
    }

    let price_diff = side.sign() * (current_price.value() - entry_price.value());
    let pnl = price_diff / entry_price.value() * position_size_usd.value() * closing_ratio;
    Ok(Usd::new(pnl))
}
