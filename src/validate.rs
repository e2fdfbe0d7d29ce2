// 7.0: bounds checks that run before any calculator math. reject, never
// clamp: a zero or negative close percentage is a user error the form must
// surface, not a value to silently fix.

use crate::error::{InputViolation, RiskError};
use crate::types::Usd;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// UI leverage band. the program enforces its own limits; these are the
/// bounds the form accepts.
pub const MIN_LEVERAGE: Decimal = dec!(1.1);
pub const MAX_LEVERAGE: Decimal = dec!(100);

pub fn close_percentage(value: Decimal) -> Result<(), RiskError> {
    if value <= Decimal::ZERO {
        return Err(InputViolation::NonPositivePercentage { value }.into());
    }
    if value > Decimal::ONE_HUNDRED {
        return Err(InputViolation::PercentageAboveFull { value }.into());
    }
    Ok(())
}

pub fn close_amount(requested: Usd, remaining: Usd) -> Result<(), RiskError> {
    if requested.value() <= Decimal::ZERO {
        return Err(InputViolation::NonPositiveAmount {
            value: requested.value(),
        }
        .into());
    }
    if requested > remaining {
        return Err(InputViolation::AmountExceedsPosition {
            requested,
            remaining,
        }
        .into());
    }
    Ok(())
}

pub fn leverage(value: Decimal) -> Result<(), RiskError> {
    if value < MIN_LEVERAGE || value > MAX_LEVERAGE {
        return Err(InputViolation::LeverageOutOfBounds {
            value,
            min: MIN_LEVERAGE,
            max: MAX_LEVERAGE,
        }
        .into());
    }
    Ok(())
}

pub fn collateral_delta(value: Decimal) -> Result<(), RiskError> {
    if value <= Decimal::ZERO {
        return Err(InputViolation::NonPositiveAmount { value }.into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn percentage_bounds() {
        assert!(close_percentage(dec!(0.01)).is_ok());
        assert!(close_percentage(dec!(100)).is_ok());

        assert!(matches!(
            close_percentage(dec!(0)),
            Err(RiskError::InvalidInput(
                InputViolation::NonPositivePercentage { .. }
            ))
        ));
        assert!(matches!(
            close_percentage(dec!(-10)),
            Err(RiskError::InvalidInput(
                InputViolation::NonPositivePercentage { .. }
            ))
        ));
        assert!(matches!(
            close_percentage(dec!(100.5)),
            Err(RiskError::InvalidInput(
                InputViolation::PercentageAboveFull { .. }
            ))
        ));
    }

    #[test]
    fn amount_must_fit_remaining_size() {
        let remaining = Usd::new(dec!(500));
        assert!(close_amount(Usd::new(dec!(500)), remaining).is_ok());
        assert!(matches!(
            close_amount(Usd::new(dec!(500.01)), remaining),
            Err(RiskError::InvalidInput(
                InputViolation::AmountExceedsPosition { .. }
            ))
        ));
        assert!(close_amount(Usd::zero(), remaining).is_err());
    }

    #[test]
    fn leverage_band() {
        assert!(leverage(dec!(1.1)).is_ok());
        assert!(leverage(dec!(100)).is_ok());
        assert!(leverage(dec!(1.09)).is_err());
        assert!(leverage(dec!(100.1)).is_err());
    }

    #[test]
    fn collateral_delta_positive() {
        assert!(collateral_delta(dec!(10)).is_ok());
        assert!(collateral_delta(dec!(0)).is_err());
    }
}
