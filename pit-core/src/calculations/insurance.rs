//! Mandatory employee insurance contributions.
//!
//! Employees contribute to three funds on their declared insurance base
//! salary. The funds are capped independently:
//!
//! | Fund | Rate | Base cap |
//! |------|------|----------|
//! | Social insurance | 8% | 20 × national base salary |
//! | Health insurance | 1.5% | 20 × national base salary |
//! | Unemployment insurance | 1% | 20 × regional minimum wage |
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use pit_core::calculations::compute_insurance;
//!
//! // 60M declared in Region I: social/health capped at 46.8M, unemployment not capped
//! let result = compute_insurance(dec!(60000000), dec!(4960000));
//!
//! assert_eq!(result.social_health_contribution, dec!(4446000));
//! assert_eq!(result.unemployment_contribution, dec!(600000));
//! assert_eq!(result.total, dec!(5046000));
//! assert!(!result.is_unemployment_capped);
//! ```

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculations::common::non_negative;

/// National base salary from 1 July 2024.
pub const NATIONAL_BASE_SALARY: Decimal = dec!(2340000);

/// Employee social insurance rate.
pub const SOCIAL_RATE: Decimal = dec!(0.08);

/// Employee health insurance rate.
pub const HEALTH_RATE: Decimal = dec!(0.015);

/// Employee unemployment insurance rate.
pub const UNEMPLOYMENT_RATE: Decimal = dec!(0.01);

/// Contribution bases are capped at this multiple of their reference wage.
pub const CONTRIBUTION_CAP_MULTIPLIER: Decimal = dec!(20);

/// Inputs to [`compute_insurance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsuranceInput {
    /// Declared salary used for contributions; may differ from gross income.
    pub insurance_base_salary: Decimal,
    /// Monthly regional minimum wage (see [`crate::Region::min_wage`]).
    pub regional_min_wage: Decimal,
}

impl InsuranceInput {
    pub fn compute(&self) -> InsuranceResult {
        compute_insurance(self.insurance_base_salary, self.regional_min_wage)
    }
}

/// Employee-side insurance contributions for one month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InsuranceResult {
    /// Social plus health insurance contribution.
    pub social_health_contribution: Decimal,

    /// Unemployment insurance contribution.
    pub unemployment_contribution: Decimal,

    /// Sum of both contributions.
    pub total: Decimal,

    /// Maximum base for social and health insurance.
    pub social_health_cap: Decimal,

    /// Maximum base for unemployment insurance.
    pub unemployment_cap: Decimal,

    /// Whether the declared base exceeds the unemployment cap.
    ///
    /// Advisory only; the cap is already reflected in the contribution.
    pub is_unemployment_capped: bool,
}

/// Computes employee insurance contributions.
///
/// Negative inputs are clamped to zero and logged.
pub fn compute_insurance(
    insurance_base_salary: Decimal,
    regional_min_wage: Decimal,
) -> InsuranceResult {
    let insurance_base_salary = non_negative("insurance_base_salary", insurance_base_salary);
    let regional_min_wage = non_negative("regional_min_wage", regional_min_wage);

    let social_health_cap = NATIONAL_BASE_SALARY * CONTRIBUTION_CAP_MULTIPLIER;
    let social_health_base = insurance_base_salary.min(social_health_cap);
    let social_health_contribution = social_health_base * (SOCIAL_RATE + HEALTH_RATE);

    let unemployment_cap = regional_min_wage * CONTRIBUTION_CAP_MULTIPLIER;
    let unemployment_base = insurance_base_salary.min(unemployment_cap);
    let unemployment_contribution = unemployment_base * UNEMPLOYMENT_RATE;

    let total = social_health_contribution + unemployment_contribution;

    debug!(
        insurance_base_salary = %insurance_base_salary,
        social_health_contribution = %social_health_contribution,
        unemployment_contribution = %unemployment_contribution,
        total = %total,
        "computed insurance contributions"
    );

    InsuranceResult {
        social_health_contribution,
        unemployment_contribution,
        total,
        social_health_cap,
        unemployment_cap,
        is_unemployment_capped: insurance_base_salary > unemployment_cap,
    }
}
