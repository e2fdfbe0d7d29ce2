// 6.0: RiskSnapshot. every number the position card displays, recomputed
// fresh on each render from (position, mark price, config). no identity,
// no hidden state: identical inputs produce identical snapshots.

use crate::config::RiskConfig;
use crate::error::RiskError;
use crate::fees::{compute_fees, hourly_borrow_fee};
use crate::liquidation::compute_liquidation_price;
use crate::pnl::compute_position_pnl;
use crate::position::Position;
use crate::types::{OrderType, Price, Usd};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskSnapshot {
    pub liquidation_price: Decimal,
    /// Exit fee for closing the whole position at market, right now.
    pub exit_fee: Usd,
    pub borrow_fee_hourly: Usd,
    pub collateral_usd: Usd,
    pub size_usd: Usd,
    pub pnl: Usd,
    /// Collateral plus pnl minus the exit fee: what the position is worth
    /// if closed at the mark.
    pub net_value: Usd,
}

pub fn compute_risk_snapshot(
    position: &Position,
    mark_price: Price,
    config: &RiskConfig,
) -> Result<RiskSnapshot, RiskError> {
    let liquidation_price = compute_liquidation_price(
        position.collateral_usd,
        position.size_usd,
        position.size_underlying()?,
        position.entry_price,
        position.side,
        &config.liquidation,
    )?;

    // unexecuted orders carry no PnL
    let pnl = if position.is_pending_limit() {
        Usd::zero()
    } else {
        compute_position_pnl(
            position.side,
            position.entry_price,
            mark_price,
            position.size_usd,
            dec!(1),
        )?
    };

    let fees = compute_fees(
        position.size_usd,
        Decimal::ONE_HUNDRED,
        OrderType::Market,
        &config.fees,
    )?;

    let net_value = position
        .collateral_usd
        .add(pnl)
        .sub(fees.exit_fee);

    Ok(RiskSnapshot {
        liquidation_price,
        exit_fee: fees.exit_fee,
        borrow_fee_hourly: hourly_borrow_fee(position.size_usd, &config.fees),
        collateral_usd: position.collateral_usd,
        size_usd: position.size_usd,
        pnl,
        net_value,
    })
}
