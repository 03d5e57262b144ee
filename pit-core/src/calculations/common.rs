//! Common utility functions for tax calculations.
//!
//! This module provides shared functionality used across the insurance,
//! salary and business calculators, including rounding and input clamping.

use rust_decimal::{Decimal, RoundingStrategy};
use tracing::warn;

/// Rounds an amount to whole đồng using half-up rounding.
///
/// The calculators keep exact decimal values; rounding is applied only when
/// presenting results.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use pit_core::calculations::common::round_vnd;
///
/// assert_eq!(round_vnd(dec!(123.4)), dec!(123));
/// assert_eq!(round_vnd(dec!(123.5)), dec!(124));
/// assert_eq!(round_vnd(dec!(-123.5)), dec!(-124)); // Away from zero
/// ```
pub fn round_vnd(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Returns the maximum of two decimal values.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use pit_core::calculations::common::max;
///
/// assert_eq!(max(dec!(100), dec!(200)), dec!(200));
/// assert_eq!(max(dec!(-100), dec!(0)), dec!(0));
/// ```
pub fn max(
    a: Decimal,
    b: Decimal,
) -> Decimal {
    if a > b { a } else { b }
}

/// Clamps a caller-supplied amount to zero, logging when it was negative.
///
/// `field` names the input in the warning so malformed callers can be traced.
pub(crate) fn non_negative(
    field: &'static str,
    value: Decimal,
) -> Decimal {
    if value < Decimal::ZERO {
        warn!(field, value = %value, "negative input clamped to zero");
        return Decimal::ZERO;
    }
    value
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    // =========================================================================
    // round_vnd tests
    // =========================================================================

    #[test]
    fn round_vnd_rounds_down_below_midpoint() {
        let result = round_vnd(dec!(967500.49));

        assert_eq!(result, dec!(967500));
    }

    #[test]
    fn round_vnd_rounds_up_at_midpoint() {
        let result = round_vnd(dec!(967500.5));

        assert_eq!(result, dec!(967501));
    }

    #[test]
    fn round_vnd_handles_negative_values() {
        let result = round_vnd(dec!(-0.5));

        assert_eq!(result, dec!(-1));
    }

    #[test]
    fn round_vnd_preserves_whole_amounts() {
        let result = round_vnd(dec!(2850000));

        assert_eq!(result, dec!(2850000));
    }

    // =========================================================================
    // max tests
    // =========================================================================

    #[test]
    fn max_returns_larger_value() {
        assert_eq!(max(dec!(100.00), dec!(200.00)), dec!(200.00));
        assert_eq!(max(dec!(200.00), dec!(100.00)), dec!(200.00));
    }

    #[test]
    fn max_handles_equal_values() {
        assert_eq!(max(dec!(150.00), dec!(150.00)), dec!(150.00));
    }

    #[test]
    fn max_clamps_negative_against_zero() {
        assert_eq!(max(dec!(-50.00), Decimal::ZERO), Decimal::ZERO);
    }

    // =========================================================================
    // non_negative tests
    // =========================================================================

    #[test]
    fn non_negative_passes_positive_values_through() {
        assert_eq!(non_negative("gross_income", dec!(1000)), dec!(1000));
    }

    #[test]
    fn non_negative_clamps_negative_values() {
        assert_eq!(non_negative("gross_income", dec!(-1000)), Decimal::ZERO);
    }
}
