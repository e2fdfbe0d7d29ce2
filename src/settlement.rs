// 5.0: receive-amount on close. collateral back plus pnl minus fees, converted
// to the receive token. negative net proceeds clamp to zero: the display layer
// never shows a trader owing tokens on close. the program is the source of
// truth for actual settlement and may reject or adjust.

use crate::error::{PriceFault, RiskError};
use crate::fees::FeeBreakdown;
use crate::types::Usd;
use rust_decimal::Decimal;

/// Token amount the trader receives for the closed portion.
pub fn compute_receive_amount(
    collateral_return: Usd,
    pnl: Usd,
    fees: &FeeBreakdown,
    receive_token_price: Decimal,
) -> Result<Decimal, RiskError> {
    if receive_token_price <= Decimal::ZERO {
        return Err(PriceFault::NonPositiveTokenPrice {
            value: receive_token_price,
        }
        .into());
    }

    let total_usd = collateral_return.value() + pnl.value() - fees.total_fees.value();
    Ok((total_usd / receive_token_price).max(Decimal::ZERO))
}
