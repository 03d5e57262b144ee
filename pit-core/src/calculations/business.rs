//! Flat-rate tax for individual business households.
//!
//! Households with annual revenue at or below the exemption threshold owe
//! nothing. Above the threshold the flat rate applies to the *entire*
//! revenue, not just the excess, so crossing the threshold by one đồng
//! makes the whole revenue taxable.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use pit_core::calculations::compute_business_tax;
//!
//! let tax = compute_business_tax(dec!(501000000), dec!(1.5), dec!(500000000));
//!
//! assert_eq!(tax, dec!(7515000));
//! ```

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculations::common::non_negative;

/// Inputs to [`compute_business_tax`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessTaxInput {
    pub annual_revenue: Decimal,
    /// Flat rate in percent (1.5 = 1.5%).
    pub flat_rate_percent: Decimal,
    pub exemption_threshold: Decimal,
}

impl BusinessTaxInput {
    pub fn compute(&self) -> Decimal {
        compute_business_tax(
            self.annual_revenue,
            self.flat_rate_percent,
            self.exemption_threshold,
        )
    }
}

/// Computes annual flat-rate business tax.
///
/// Returns exactly zero when `annual_revenue <= exemption_threshold`.
pub fn compute_business_tax(
    annual_revenue: Decimal,
    flat_rate_percent: Decimal,
    exemption_threshold: Decimal,
) -> Decimal {
    let annual_revenue = non_negative("annual_revenue", annual_revenue);

    if annual_revenue <= exemption_threshold {
        debug!(
            annual_revenue = %annual_revenue,
            exemption_threshold = %exemption_threshold,
            "revenue at or below exemption threshold; no business tax due"
        );
        return Decimal::ZERO;
    }

    annual_revenue * (flat_rate_percent / dec!(100))
}
