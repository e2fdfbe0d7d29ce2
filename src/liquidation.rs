//! Liquidation price, mirrored from the external program for display.
//!
//! The price at which equity falls to the maintenance requirement:
//! required equity is a fixed fraction of position value, the shortfall
//! against posted collateral is spread over the underlying size, and a
//! small buffer is applied in the adverse direction. The long side clamps
//! at zero; the short side deliberately has no upper clamp (a short's
//! liquidation price can legitimately be far above entry).

use crate::error::{InputViolation, RiskError};
use crate::types::{Price, Side, Usd};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LiquidationParams {
    /// Minimum equity-to-notional ratio before liquidation triggers.
    pub maintenance_margin_rate: Decimal,
    /// Absolute price buffer applied toward the adverse side.
    pub liquidation_buffer: Decimal,
}

impl Default for LiquidationParams {
    fn default() -> Self {
        Self {
            maintenance_margin_rate: dec!(0.05),
            liquidation_buffer: dec!(0.005),
        }
    }
}

/// Price level at which the position gets liquidated. Returned as a plain
/// Decimal because the long side clamps to zero, which `Price` cannot hold.
pub fn compute_liquidation_price(
    collateral_usd: Usd,
    position_value_usd: Usd,
    position_size_underlying: Decimal,
    entry_price: Price,
    side: Side,
    params: &LiquidationParams,
) -> Result<Decimal, RiskError> {
    if position_size_underlying <= Decimal::ZERO {
        return Err(InputViolation::NonPositiveSize {
            value: position_size_underlying,
        }
        .into());
    }

    let required_equity = position_value_usd.value() * params.maintenance_margin_rate;
    let equity_deficit = required_equity - collateral_usd.value();
    let price_change_needed = equity_deficit / position_size_underlying;

    let liq_price = match side {
        Side::Long => {
            (entry_price.value() + price_change_needed - params.liquidation_buffer)
                .max(Decimal::ZERO)
        }
        // no upper clamp on the short side. the program leaves it unbounded
        // and the mirror preserves that, asymmetry and all.
        Side::Short => entry_price.value() - price_change_needed + params.liquidation_buffer,
    };

    Ok(liq_price)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn params() -> LiquidationParams {
        LiquidationParams::default()
    }

    #[test]
    fn long_10x_reference_scenario() {
        // entry $100, $1000 notional on $100 collateral, 10 units underlying.
        // required = 1000 * 0.05 = 50; deficit = 50 - 100 = -50; change = -5.
        // liq = 100 - 5 - 0.005 = 94.995
        let liq = compute_liquidation_price(
            Usd::new(dec!(100)),
            Usd::new(dec!(1000)),
            dec!(10),
            Price::new_unchecked(dec!(100)),
            Side::Long,
            &params(),
        )
        .unwrap();
        assert_eq!(liq, dec!(94.995));
    }

    #[test]
    fn short_mirrors_above_entry() {
        // same numbers flipped: liq = 100 + 5 + 0.005 = 105.005
        let liq = compute_liquidation_price(
            Usd::new(dec!(100)),
            Usd::new(dec!(1000)),
            dec!(10),
            Price::new_unchecked(dec!(100)),
            Side::Short,
            &params(),
        )
        .unwrap();
        assert_eq!(liq, dec!(105.005));
    }

    #[test]
    fn long_clamps_at_zero() {
        // collateral far above any possible loss: raw liq price goes negative
        let liq = compute_liquidation_price(
            Usd::new(dec!(10000)),
            Usd::new(dec!(1000)),
            dec!(10),
            Price::new_unchecked(dec!(100)),
            Side::Long,
            &params(),
        )
        .unwrap();
        assert_eq!(liq, Decimal::ZERO);
    }

    #[test]
    fn short_is_not_clamped_above() {
        // heavily over-collateralized short: liq price climbs well above entry
        let liq = compute_liquidation_price(
            Usd::new(dec!(10000)),
            Usd::new(dec!(1000)),
            dec!(10),
            Price::new_unchecked(dec!(100)),
            Side::Short,
            &params(),
        )
        .unwrap();
        // 100 - (50 - 10000)/10 + 0.005 = 100 + 995 + 0.005
        assert_eq!(liq, dec!(1095.005));
    }

    #[test]
    fn zero_underlying_size_is_invalid() {
        let result = compute_liquidation_price(
            Usd::new(dec!(100)),
            Usd::new(dec!(1000)),
            Decimal::ZERO,
            Price::new_unchecked(dec!(100)),
            Side::Long,
            &params(),
        );
        assert!(matches!(
            result,
            Err(RiskError::InvalidInput(
                InputViolation::NonPositiveSize { .. }
            ))
        ));
    }
}
