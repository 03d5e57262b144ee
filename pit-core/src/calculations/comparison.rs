//! Side-by-side comparison of the current and revised laws.
//!
//! The same inputs are run through each [`Regime`] independently; nothing is
//! shared between the two runs. Deltas are always `revised - current`, so a
//! negative tax delta means the revised law taxes less.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::calculations::business::compute_business_tax;
use crate::calculations::insurance::InsuranceInput;
use crate::calculations::salary::{SalaryTaxInput, SalaryTaxResult, compute_salary_tax};
use crate::models::Regime;

/// One salary earner's monthly situation, independent of regime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryProfile {
    pub gross_income: Decimal,
    pub insurance_base_salary: Decimal,
    pub regional_min_wage: Decimal,
    pub dependents_count: u32,
}

impl SalaryProfile {
    /// A profile declaring insurance on the full gross income.
    pub fn full_insurance(
        gross_income: Decimal,
        regional_min_wage: Decimal,
        dependents_count: u32,
    ) -> Self {
        Self {
            gross_income,
            insurance_base_salary: gross_income,
            regional_min_wage,
            dependents_count,
        }
    }

    pub fn input_for(
        &self,
        regime: Regime,
    ) -> SalaryTaxInput {
        SalaryTaxInput {
            gross_income: self.gross_income,
            insurance: InsuranceInput {
                insurance_base_salary: self.insurance_base_salary,
                regional_min_wage: self.regional_min_wage,
            },
            dependents_count: self.dependents_count,
            regime,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SalaryComparison {
    pub current: SalaryTaxResult,
    pub revised: SalaryTaxResult,
}

impl SalaryComparison {
    pub fn tax_delta(&self) -> Decimal {
        self.revised.total_tax - self.current.total_tax
    }

    pub fn net_income_delta(&self) -> Decimal {
        self.revised.net_income - self.current.net_income
    }

    pub fn taxable_income_delta(&self) -> Decimal {
        self.revised.taxable_income - self.current.taxable_income
    }

    /// True when the revised law leaves strictly more take-home pay.
    pub fn revised_is_better(&self) -> bool {
        self.net_income_delta() > Decimal::ZERO
    }
}

/// Runs a salary profile through both regimes.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use pit_core::calculations::{SalaryProfile, compare_salary};
///
/// let profile = SalaryProfile::full_insurance(dec!(30000000), dec!(4960000), 1);
/// let comparison = compare_salary(&profile);
///
/// assert_eq!(comparison.current.total_tax, dec!(967500));
/// assert_eq!(comparison.revised.total_tax, dec!(257500));
/// assert_eq!(comparison.net_income_delta(), dec!(710000));
/// ```
pub fn compare_salary(profile: &SalaryProfile) -> SalaryComparison {
    SalaryComparison {
        current: compute_salary_tax(&profile.input_for(Regime::Current)),
        revised: compute_salary_tax(&profile.input_for(Regime::Revised)),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BusinessComparison {
    pub annual_revenue: Decimal,
    pub flat_rate_percent: Decimal,
    pub current_tax: Decimal,
    pub revised_tax: Decimal,
}

impl BusinessComparison {
    /// Average monthly revenue.
    pub fn monthly_revenue(&self) -> Decimal {
        self.annual_revenue / dec!(12)
    }

    pub fn tax_delta(&self) -> Decimal {
        self.revised_tax - self.current_tax
    }

    pub fn exempt_under_current(&self) -> bool {
        self.annual_revenue <= Regime::Current.constants().business_exemption_threshold
    }

    pub fn exempt_under_revised(&self) -> bool {
        self.annual_revenue <= Regime::Revised.constants().business_exemption_threshold
    }
}

/// Computes business tax under both regimes' exemption thresholds.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use pit_core::calculations::compare_business;
///
/// let comparison = compare_business(dec!(450000000), dec!(1.5));
///
/// assert_eq!(comparison.current_tax, dec!(6750000));
/// assert_eq!(comparison.revised_tax, dec!(0));
/// assert!(comparison.exempt_under_revised());
/// ```
pub fn compare_business(
    annual_revenue: Decimal,
    flat_rate_percent: Decimal,
) -> BusinessComparison {
    let tax_under = |regime: Regime| {
        compute_business_tax(
            annual_revenue,
            flat_rate_percent,
            regime.constants().business_exemption_threshold,
        )
    };

    BusinessComparison {
        annual_revenue,
        flat_rate_percent,
        current_tax: tax_under(Regime::Current),
        revised_tax: tax_under(Regime::Revised),
    }
}
