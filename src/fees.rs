// 4.0: exit fee, fixed transaction fee, hourly borrow fee. all display
// mirrors; the program's ledger is authoritative.
// 4.1: exit fee applies to market closes only. limit closes fill at the
// trigger and the program charges them differently, so the mirror shows zero.

use crate::error::{InputViolation, RiskError};
use crate::types::{OrderType, Usd};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeeParams {
    /// Fraction of the closing amount charged on market closes.
    pub exit_fee_rate: Decimal,
    /// Flat fee per close, regardless of size.
    pub fixed_tx_fee: Decimal,
    /// Hourly borrow rate on open notional, for the snapshot display.
    pub hourly_borrow_rate: Decimal,
}

impl Default for FeeParams {
    fn default() -> Self {
        Self {
            exit_fee_rate: dec!(0.001),
            fixed_tx_fee: dec!(0.01),
            hourly_borrow_rate: dec!(0.00005), // 0.005% per hour
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeBreakdown {
    pub exit_fee: Usd,
    pub transaction_fee: Usd,
    pub total_fees: Usd,
}

pub fn compute_fees(
    position_size_usd: Usd,
    closing_percentage: Decimal,
    order_type: OrderType,
    params: &FeeParams,
) -> Result<FeeBreakdown, RiskError> {
    if closing_percentage <= Decimal::ZERO {
        return Err(InputViolation::NonPositivePercentage {
            value: closing_percentage,
        }
        .into());
    }
    if closing_percentage > Decimal::ONE_HUNDRED {
        return Err(InputViolation::PercentageAboveFull {
            value: closing_percentage,
        }
        .into());
    }

    let closing_amount = position_size_usd.value() * closing_percentage / Decimal::ONE_HUNDRED;

    let exit_fee = match order_type {
        OrderType::Market => Usd::new(closing_amount * params.exit_fee_rate),
        OrderType::Limit => Usd::zero(),
    };
    let transaction_fee = Usd::new(params.fixed_tx_fee);

    Ok(FeeBreakdown {
        exit_fee,
        transaction_fee,
        total_fees: exit_fee.add(transaction_fee),
    })
}

/// USD cost per hour of keeping the position open at current notional.
pub fn hourly_borrow_fee(position_size_usd: Usd, params: &FeeParams) -> Usd {
    position_size_usd.mul(params.hourly_borrow_rate)
}
