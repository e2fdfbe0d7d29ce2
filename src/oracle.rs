//! Oracle quote boundary.
//!
//! The price service returns an integer mantissa scaled by `10^exponent`;
//! human price = mantissa * 10^exponent. Consumers must reject stale quotes,
//! exponents outside a sane range, and prices outside a per-instrument
//! sanity band before any of the calculator runs on them. This module does
//! the rejecting; fetching belongs to the client wrapper that owns the HTTP
//! call.

use crate::error::{PriceFault, RiskError};
use crate::types::{Price, Timestamp};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct OracleQuote {
    /// Integer price mantissa, scaled by `10^exponent`.
    pub mantissa: i64,
    pub exponent: i32,
    /// Confidence interval in the same scaling, if the source provides one.
    pub confidence: Option<u64>,
    /// Unix seconds at which the source published this quote.
    pub publish_time: i64,
}

// per-instrument plausibility band. quotes outside it are treated as feed
// faults, not market moves.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SanityBand {
    pub min: Decimal,
    pub max: Decimal,
}

impl SanityBand {
    pub fn new(min: Decimal, max: Decimal) -> Self {
        debug_assert!(min < max);
        Self { min, max }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OracleGuards {
    pub max_age_secs: i64,
    pub min_exponent: i32,
    pub max_exponent: i32,
}

impl Default for OracleGuards {
    fn default() -> Self {
        Self {
            max_age_secs: 60,
            min_exponent: -20,
            max_exponent: 10,
        }
    }
}

impl OracleQuote {
    /// Validated human price. Every guard failure maps to a `PriceFault`.
    pub fn to_price(
        &self,
        guards: &OracleGuards,
        band: &SanityBand,
        now: Timestamp,
    ) -> Result<Price, RiskError> {
        let age_secs = now.as_secs() - self.publish_time;
        if age_secs > guards.max_age_secs {
            return Err(PriceFault::StaleQuote {
                age_secs,
                max_age_secs: guards.max_age_secs,
            }
            .into());
        }

        if self.exponent < guards.min_exponent || self.exponent > guards.max_exponent {
            return Err(PriceFault::ExponentOutOfRange {
                exponent: self.exponent,
                min: guards.min_exponent,
                max: guards.max_exponent,
            }
            .into());
        }

        if self.mantissa <= 0 {
            return Err(PriceFault::NonPositiveMantissa {
                mantissa: self.mantissa,
            }
            .into());
        }

        // a magnitude Decimal cannot hold is above every configured band
        let price = match scale_mantissa(self.mantissa, self.exponent) {
            Some(price) => price,
            None => {
                return Err(PriceFault::OutsideSanityBand {
                    price: Decimal::MAX,
                    min: band.min,
                    max: band.max,
                }
                .into())
            }
        };

        if price < band.min || price > band.max {
            return Err(PriceFault::OutsideSanityBand {
                price,
                min: band.min,
                max: band.max,
            }
            .into());
        }

        // mantissa > 0 and exponent is bounded, so the scaled value is positive
        Price::new(price).ok_or_else(|| {
            PriceFault::OutsideSanityBand {
                price,
                min: band.min,
                max: band.max,
            }
            .into()
        })
    }
}

// mantissa * 10^exponent as a Decimal, or None when the product exceeds
// Decimal's 96-bit magnitude. exponent is pre-checked to [-20, 10].
fn scale_mantissa(mantissa: i64, exponent: i32) -> Option<Decimal> {
    if exponent >= 0 {
        let mut value = Decimal::from(mantissa);
        for _ in 0..exponent {
            value = value.checked_mul(dec!(10))?;
        }
        Some(value)
    } else {
        Some(Decimal::new(mantissa, exponent.unsigned_abs()))
    }
}
