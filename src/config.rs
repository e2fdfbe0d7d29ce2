// 10.0 config.rs: all settings in one place. liquidation params, fee rates,
// oracle guards, leverage band, per-instrument sanity bands.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::fees::FeeParams;
use crate::liquidation::LiquidationParams;
use crate::oracle::{OracleGuards, SanityBand};
use crate::validate::{MAX_LEVERAGE, MIN_LEVERAGE};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskConfig {
    pub liquidation: LiquidationParams,
    pub fees: FeeParams,
    pub oracle: OracleGuards,
    // Leverage band the UI accepts. The program enforces its own limits.
    pub min_leverage: Decimal,
    pub max_leverage: Decimal,
    // Plausibility band per instrument symbol (e.g. "SOL-PERP").
    pub sanity_bands: HashMap<String, SanityBand>,
}

impl Default for RiskConfig {
    fn default() -> Self {
        let mut sanity_bands = HashMap::new();
        sanity_bands.insert("SOL-PERP".to_string(), SanityBand::new(dec!(1), dec!(10000)));
        sanity_bands.insert(
            "BTC-PERP".to_string(),
            SanityBand::new(dec!(1000), dec!(10_000_000)),
        );
        sanity_bands.insert(
            "ETH-PERP".to_string(),
            SanityBand::new(dec!(10), dec!(1_000_000)),
        );

        Self {
            liquidation: LiquidationParams::default(),
            fees: FeeParams::default(),
            oracle: OracleGuards::default(),
            min_leverage: MIN_LEVERAGE,
            max_leverage: MAX_LEVERAGE,
            sanity_bands,
        }
    }
}

impl RiskConfig {
    pub fn band(&self, symbol: &str) -> Option<&SanityBand> {
        self.sanity_bands.get(symbol)
    }

    // Validate the configuration for internal consistency.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.liquidation.maintenance_margin_rate <= Decimal::ZERO
            || self.liquidation.maintenance_margin_rate >= Decimal::ONE
        {
            return Err(ConfigError::InvalidLiquidation {
                reason: "maintenance margin rate must be between 0 and 1".to_string(),
            });
        }

        if self.liquidation.liquidation_buffer < Decimal::ZERO {
            return Err(ConfigError::InvalidLiquidation {
                reason: "liquidation buffer cannot be negative".to_string(),
            });
        }

        if self.fees.exit_fee_rate < Decimal::ZERO || self.fees.exit_fee_rate > dec!(0.01) {
            return Err(ConfigError::InvalidFees {
                reason: "exit fee rate must be within [0, 1%]".to_string(),
            });
        }

        if self.fees.fixed_tx_fee < Decimal::ZERO {
            return Err(ConfigError::InvalidFees {
                reason: "transaction fee cannot be negative".to_string(),
            });
        }

        if self.min_leverage < Decimal::ONE || self.min_leverage >= self.max_leverage {
            return Err(ConfigError::InvalidLeverageBand {
                min: self.min_leverage,
                max: self.max_leverage,
            });
        }

        if self.oracle.max_age_secs <= 0 {
            return Err(ConfigError::InvalidOracle {
                reason: "max quote age must be positive".to_string(),
            });
        }

        if self.oracle.min_exponent > self.oracle.max_exponent {
            return Err(ConfigError::InvalidOracle {
                reason: "exponent range is inverted".to_string(),
            });
        }

        for (symbol, band) in &self.sanity_bands {
            if band.min <= Decimal::ZERO || band.min >= band.max {
                return Err(ConfigError::InvalidBand {
                    symbol: symbol.clone(),
                });
            }
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid liquidation params: {reason}")]
    InvalidLiquidation { reason: String },

    #[error("invalid fee params: {reason}")]
    InvalidFees { reason: String },

    #[error("invalid leverage band [{min}, {max}]")]
    InvalidLeverageBand { min: Decimal, max: Decimal },

    #[error("invalid oracle guards: {reason}")]
    InvalidOracle { reason: String },

    #[error("invalid sanity band for {symbol}")]
    InvalidBand { symbol: String },
}
