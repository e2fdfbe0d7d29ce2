//! Collateral add/remove preview.
//!
//! Recomputes leverage and liquidation price as if the program accepted the
//! change. A removal that would leave equity below the maintenance
//! requirement is rejected outright with `WouldLiquidate` rather than
//! previewed; equity at or below zero yields `DegenerateEquity` because no
//! leverage number is meaningful there.

use crate::error::{InputViolation, RiskError};
use crate::liquidation::{compute_liquidation_price, LiquidationParams};
use crate::position::Position;
use crate::types::{Leverage, Usd};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollateralAction {
    Add,
    Remove,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollateralAdjustment {
    pub new_collateral: Usd,
    pub new_leverage: Leverage,
    pub new_liquidation_price: Decimal,
}

pub fn apply_collateral_change(
    position: &Position,
    unrealized_pnl: Usd,
    delta_usd: Usd,
    action: CollateralAction,
    params: &LiquidationParams,
) -> Result<CollateralAdjustment, RiskError> {
    if delta_usd.value() <= Decimal::ZERO {
        return Err(InputViolation::NonPositiveAmount {
            value: delta_usd.value(),
        }
        .into());
    }

    let current = position.collateral_usd;
    let updated_collateral = match action {
        CollateralAction::Add => current.add(delta_usd),
        CollateralAction::Remove => Usd::new((current.value() - delta_usd.value()).max(Decimal::ZERO)),
    };

    let equity = updated_collateral.add(unrealized_pnl);
    if equity.value() <= Decimal::ZERO {
        return Err(RiskError::DegenerateEquity { equity });
    }

    // withdrawals that leave equity under the maintenance requirement are a
    // policy rejection, not a preview.
    let required = position.size_usd.mul(params.maintenance_margin_rate);
    if action == CollateralAction::Remove && equity < required {
        return Err(RiskError::WouldLiquidate { equity, required });
    }

    // over-collateralized positions read as 1x in the display
    let raw_leverage = position.size_usd.value() / equity.value();
    let new_leverage = Leverage::new(raw_leverage.max(Decimal::ONE))
        .ok_or(RiskError::DegenerateEquity { equity })?;

    let new_liquidation_price = compute_liquidation_price(
        updated_collateral,
        position.size_usd,
        position.size_underlying()?,
        position.entry_price,
        position.side,
        params,
    )?;

    Ok(CollateralAdjustment {
        new_collateral: updated_collateral,
        new_leverage,
        new_liquidation_price,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{OrderType, Price, Side, Timestamp};
    use rust_decimal_macros::dec;

    fn test_position(collateral: Decimal) -> Position {
        Position {
            side: Side::Long,
            entry_price: Price::new_unchecked(dec!(100)),
            size_usd: Usd::new(dec!(1000)),
            collateral_usd: Usd::new(collateral),
            leverage: Leverage::new(dec!(10)).unwrap(),
            order_type: OrderType::Market,
            trigger_price: None,
            is_active: true,
            opened_at: Timestamp::from_millis(0),
            updated_at: Timestamp::from_millis(0),
        }
    }

    #[test]
    fn adding_collateral_lowers_leverage() {
        let pos = test_position(dec!(100));
        let adj = apply_collateral_change(
            &pos,
            Usd::zero(),
            Usd::new(dec!(100)),
            CollateralAction::Add,
            &LiquidationParams::default(),
        )
        .unwrap();

        assert_eq!(adj.new_collateral.value(), dec!(200));
        assert_eq!(adj.new_leverage.value(), dec!(5)); // 1000 / 200
        // more collateral pushes the long liq price further below entry
        assert!(adj.new_liquidation_price < dec!(94.995));
    }

    #[test]
    fn removing_collateral_raises_leverage() {
        let pos = test_position(dec!(200));
        let adj = apply_collateral_change(
            &pos,
            Usd::zero(),
            Usd::new(dec!(100)),
            CollateralAction::Remove,
            &LiquidationParams::default(),
        )
        .unwrap();

        assert_eq!(adj.new_collateral.value(), dec!(100));
        assert_eq!(adj.new_leverage.value(), dec!(10));
        assert_eq!(adj.new_liquidation_price, dec!(94.995));
    }

    #[test]
    fn over_collateralized_preview_reads_one_x() {
        // equity above notional: raw ratio 1000/2100 is sub-1x, display
        // floors at 1x.
        let pos = test_position(dec!(100));
        let adj = apply_collateral_change(
            &pos,
            Usd::zero(),
            Usd::new(dec!(2000)),
            CollateralAction::Add,
            &LiquidationParams::default(),
        )
        .unwrap();
        assert_eq!(adj.new_leverage.value(), Decimal::ONE);
    }

    #[test]
    fn withdrawal_near_maintenance_is_rejected() {
        // collateral $50, pnl -$45: equity $5 = 0.5% of notional, below the
        // 5% threshold. any further withdrawal must be refused.
        let pos = test_position(dec!(51));
        let result = apply_collateral_change(
            &pos,
            Usd::new(dec!(-45)),
            Usd::new(dec!(1)),
            CollateralAction::Remove,
            &LiquidationParams::default(),
        );
        assert!(matches!(result, Err(RiskError::WouldLiquidate { .. })));
    }

    #[test]
    fn wiped_out_equity_is_degenerate() {
        let pos = test_position(dec!(100));
        let result = apply_collateral_change(
            &pos,
            Usd::new(dec!(-150)), // pnl swamps collateral
            Usd::new(dec!(10)),
            CollateralAction::Add,
            &LiquidationParams::default(),
        );
        assert!(matches!(result, Err(RiskError::DegenerateEquity { .. })));
    }

    #[test]
    fn removal_floors_collateral_at_zero() {
        // removing more than is posted: collateral floors at zero, equity is
        // whatever pnl is worth, and the maintenance check still runs.
        let pos = test_position(dec!(100));
        let result = apply_collateral_change(
            &pos,
            Usd::new(dec!(500)),
            Usd::new(dec!(100000)),
            CollateralAction::Remove,
            &LiquidationParams::default(),
        )
        .unwrap();
        assert_eq!(result.new_collateral.value(), Decimal::ZERO);
        assert_eq!(result.new_leverage.value(), dec!(2)); // 1000 / 500
    }

    #[test]
    fn zero_delta_is_invalid() {
        let pos = test_position(dec!(100));
        let result = apply_collateral_change(
            &pos,
            Usd::zero(),
            Usd::zero(),
            CollateralAction::Add,
            &LiquidationParams::default(),
        );
        assert!(matches!(
            result,
            Err(RiskError::InvalidInput(
                InputViolation::NonPositiveAmount { .. }
            ))
        ));
    }
}
