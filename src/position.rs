// 2.0: read-only mirror of the position the external program owns. this crate
// never mutates it, only recomputes derived display fields from it. invariant
// assumed at open time: size_usd = collateral_usd * leverage.
// 2.1 has ClosingIntent, the ephemeral close-dialog value.

use crate::error::{InputViolation, RiskError};
use crate::types::{Leverage, OrderType, Price, ReceiveToken, Side, Timestamp, Usd};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Position {
    pub side: Side,
    pub entry_price: Price,
    /// USD notional of the leveraged exposure.
    pub size_usd: Usd,
    pub collateral_usd: Usd,
    pub leverage: Leverage,
    pub order_type: OrderType,
    /// Fill price a limit order is waiting at. None for market orders.
    pub trigger_price: Option<Price>,
    pub is_active: bool,
    pub opened_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Position {
    // units of the underlying asset. size_usd / entry_price, guarded because
    // every liquidation formula divides by it.
    pub fn size_underlying(&self) -> Result<Decimal, RiskError> {
        if self.size_usd.value() <= Decimal::ZERO {
            return Err(InputViolation::NonPositiveSize {
                value: self.size_usd.value(),
            }
            .into());
        }
        Ok(self.size_usd.value() / self.entry_price.value())
    }

    // a limit order that the program has not filled yet. carries no PnL.
    pub fn is_pending_limit(&self) -> bool {
        self.order_type == OrderType::Limit && !self.is_active
    }

    // USD notional still open after closing `percentage` of the position.
    pub fn remaining_after_close(&self, percentage: Decimal) -> Usd {
        let closed = self.size_usd.value() * percentage / Decimal::ONE_HUNDRED;
        Usd::new(self.size_usd.value() - closed)
    }
}

// 2.1: what the close dialog submits. exists only for the duration of one
// user interaction, never persisted.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ClosingIntent {
    /// 0 < p <= 100, validated before any math runs.
    pub close_percentage: Decimal,
    pub receive_token: ReceiveToken,
}

impl ClosingIntent {
    pub fn closing_ratio(&self) -> Decimal {
        self.close_percentage / Decimal::ONE_HUNDRED
    }
}
