//! Error taxonomy for the calculator.
//!
//! Four kinds, nothing else: bad inputs, unusable prices, degenerate equity,
//! and the maintenance-margin policy rejection. Every division in the crate
//! is guarded and each guard failure maps to exactly one of these. The
//! calculator never talks to the network and never retries; retry/backoff
//! belongs to the collaborators' client wrappers.

use crate::types::Usd;
use rust_decimal::Decimal;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RiskError {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InputViolation),

    #[error("price unavailable: {0}")]
    PriceUnavailable(#[from] PriceFault),

    // equity at or below zero. caller must treat as "position would be
    // liquidated" rather than render a leverage number.
    #[error("equity at or below zero ({equity})")]
    DegenerateEquity { equity: Usd },

    #[error(
        "this withdrawal would put your position at risk of liquidation \
         (equity {equity}, required {required})"
    )]
    WouldLiquidate { equity: Usd, required: Usd },
}

// Details about why an input was rejected. messages are user-facing:
// the UI surfaces them as inline validation text.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InputViolation {
    #[error("percentage must be a positive number, got {value}")]
    NonPositivePercentage { value: Decimal },

    #[error("percentage cannot exceed 100, got {value}")]
    PercentageAboveFull { value: Decimal },

    #[error("amount {requested} exceeds remaining position size {remaining}")]
    AmountExceedsPosition { requested: Usd, remaining: Usd },

    #[error("position size must be positive, got {value}")]
    NonPositiveSize { value: Decimal },

    #[error("amount must be a positive number, got {value}")]
    NonPositiveAmount { value: Decimal },

    #[error("leverage {value}x is outside the allowed range [{min}x, {max}x]")]
    LeverageOutOfBounds {
        value: Decimal,
        min: Decimal,
        max: Decimal,
    },
}

// Details about why a price could not be used.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PriceFault {
    #[error("token price must be positive, got {value}")]
    NonPositiveTokenPrice { value: Decimal },

    #[error("quote is {age_secs}s old, maximum is {max_age_secs}s")]
    StaleQuote { age_secs: i64, max_age_secs: i64 },

    #[error("exponent {exponent} outside supported range [{min}, {max}]")]
    ExponentOutOfRange { exponent: i32, min: i32, max: i32 },

    #[error("price {price} outside sanity band [{min}, {max}]")]
    OutsideSanityBand {
        price: Decimal,
        min: Decimal,
        max: Decimal,
    },

    #[error("quote mantissa must be positive, got {mantissa}")]
    NonPositiveMantissa { mantissa: i64 },
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn messages_are_user_facing() {
        let err = RiskError::from(InputViolation::NonPositivePercentage { value: dec!(-5) });
        assert_eq!(
            err.to_string(),
            "invalid input: percentage must be a positive number, got -5"
        );

        let err = RiskError::WouldLiquidate {
            equity: Usd::new(dec!(5)),
            required: Usd::new(dec!(50)),
        };
        assert!(err.to_string().contains("risk of liquidation"));
    }

    #[test]
    fn price_fault_wraps_into_risk_error() {
        let err: RiskError = PriceFault::StaleQuote {
            age_secs: 120,
            max_age_secs: 60,
        }
        .into();
        assert!(matches!(
            err,
            RiskError::PriceUnavailable(PriceFault::StaleQuote { .. })
        ));
    }
}
