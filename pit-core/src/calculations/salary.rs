//! Progressive personal income tax on salary and wages.
//!
//! # Calculation Structure
//!
//! | Step | Description |
//! |------|-------------|
//! | 1    | Employee insurance contributions (see [`super::insurance`]) |
//! | 2    | Family deductions: self deduction + dependents × dependent deduction |
//! | 3    | Taxable income: gross − insurance − family deductions (minimum 0) |
//! | 4    | Progressive tax: walk the regime's bracket table from the bottom |
//! | 5    | Net income: gross − insurance − tax |
//!
//! All amounts are monthly and in VND. No intermediate rounding is applied.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use pit_core::Regime;
//! use pit_core::calculations::{InsuranceInput, SalaryTaxInput, compute_salary_tax};
//!
//! let input = SalaryTaxInput {
//!     gross_income: dec!(30000000),
//!     insurance: InsuranceInput {
//!         insurance_base_salary: dec!(30000000),
//!         regional_min_wage: dec!(4960000),
//!     },
//!     dependents_count: 1,
//!     regime: Regime::Current,
//! };
//!
//! let result = compute_salary_tax(&input);
//!
//! assert_eq!(result.insurance.total, dec!(3150000));
//! assert_eq!(result.taxable_income, dec!(11450000));
//! assert_eq!(result.total_tax, dec!(967500));
//! assert_eq!(result.net_income, dec!(25882500));
//! ```

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculations::common::{max, non_negative};
use crate::calculations::insurance::{InsuranceInput, InsuranceResult, compute_insurance};
use crate::models::{BracketTax, Regime, TaxBracket};

/// Inputs to [`compute_salary_tax`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryTaxInput {
    /// Monthly gross income.
    pub gross_income: Decimal,
    pub insurance: InsuranceInput,
    pub dependents_count: u32,
    pub regime: Regime,
}

/// Itemized result of a salary tax calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SalaryTaxResult {
    pub regime: Regime,

    /// Gross income after clamping negative input to zero.
    pub gross_income: Decimal,

    pub insurance: InsuranceResult,

    /// Self deduction plus all dependent deductions.
    pub total_deductions: Decimal,

    /// Income subject to the bracket table; never negative.
    pub taxable_income: Decimal,

    /// Sum of every entry in `bracket_breakdown`.
    pub total_tax: Decimal,

    /// Gross income minus insurance and tax.
    pub net_income: Decimal,

    /// Tax per bracket actually reached, lowest first.
    ///
    /// Brackets lying entirely above the taxable income are omitted.
    pub bracket_breakdown: Vec<BracketTax>,
}

/// Computes salary tax under the input's regime.
pub fn compute_salary_tax(input: &SalaryTaxInput) -> SalaryTaxResult {
    let constants = input.regime.constants();
    let gross_income = non_negative("gross_income", input.gross_income);

    let insurance = compute_insurance(
        input.insurance.insurance_base_salary,
        input.insurance.regional_min_wage,
    );

    let total_deductions = family_deductions(
        constants.self_deduction,
        constants.dependent_deduction,
        input.dependents_count,
    );

    let taxable_income = taxable_income(gross_income, insurance.total, total_deductions);

    let bracket_breakdown = progressive_tax(taxable_income, constants.brackets);
    let total_tax: Decimal = bracket_breakdown.iter().map(|b| b.tax).sum();

    let net_income = gross_income - insurance.total - total_tax;

    debug!(
        regime = input.regime.as_str(),
        taxable_income = %taxable_income,
        total_tax = %total_tax,
        net_income = %net_income,
        "computed salary tax"
    );

    SalaryTaxResult {
        regime: input.regime,
        gross_income,
        insurance,
        total_deductions,
        taxable_income,
        total_tax,
        net_income,
        bracket_breakdown,
    }
}

/// Walks a bracket table and attributes taxable income to each bracket.
///
/// The table must satisfy [`crate::validate_brackets`]. The walk stops as
/// soon as all taxable income is allocated, so the returned breakdown holds
/// only brackets that received a positive amount.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use pit_core::Regime;
/// use pit_core::calculations::progressive_tax;
///
/// let breakdown = progressive_tax(dec!(11750000), Regime::Current.constants().brackets);
///
/// assert_eq!(breakdown.len(), 3);
/// assert_eq!(breakdown[2].taxable_amount, dec!(1750000));
/// assert_eq!(breakdown.iter().map(|b| b.tax).sum::<rust_decimal::Decimal>(), dec!(1012500));
/// ```
pub fn progressive_tax(
    taxable_income: Decimal,
    brackets: &[TaxBracket],
) -> Vec<BracketTax> {
    let mut breakdown = Vec::new();
    let mut remaining = taxable_income;
    let mut previous_upper_bound = Decimal::ZERO;

    for (index, bracket) in brackets.iter().enumerate() {
        if remaining <= Decimal::ZERO {
            break;
        }

        let amount_in_range = match bracket.upper_bound {
            Some(upper_bound) => remaining.min(upper_bound - previous_upper_bound),
            None => remaining,
        };

        if amount_in_range > Decimal::ZERO {
            breakdown.push(BracketTax {
                level: index + 1,
                label: bracket.label,
                rate_percent: bracket.rate * dec!(100),
                taxable_amount: amount_in_range,
                tax: amount_in_range * bracket.rate,
            });
        }

        remaining -= amount_in_range;
        if let Some(upper_bound) = bracket.upper_bound {
            previous_upper_bound = upper_bound;
        }
    }

    breakdown
}

/// Self deduction plus one dependent deduction per dependent.
fn family_deductions(
    self_deduction: Decimal,
    dependent_deduction: Decimal,
    dependents_count: u32,
) -> Decimal {
    self_deduction + dependent_deduction * Decimal::from(dependents_count)
}

/// Gross income less insurance and deductions, floored at zero.
fn taxable_income(
    gross_income: Decimal,
    insurance_total: Decimal,
    total_deductions: Decimal,
) -> Decimal {
    max(gross_income - insurance_total - total_deductions, Decimal::ZERO)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const REGION_1: Decimal = dec!(4960000);

    fn input(
        gross_income: Decimal,
        dependents_count: u32,
        regime: Regime,
    ) -> SalaryTaxInput {
        SalaryTaxInput {
            gross_income,
            insurance: InsuranceInput {
                insurance_base_salary: gross_income,
                regional_min_wage: REGION_1,
            },
            dependents_count,
            regime,
        }
    }

    /// Initializes a tracing subscriber so clamp warnings show up in test output.
    fn init_test_tracing() -> tracing::subscriber::DefaultGuard {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_test_writer()
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    // =========================================================================
    // progressive_tax tests
    // =========================================================================

    #[test]
    fn progressive_tax_current_table_three_brackets() {
        let breakdown = progressive_tax(dec!(11750000), Regime::Current.constants().brackets);

        let taxes: Vec<Decimal> = breakdown.iter().map(|b| b.tax).collect();
        assert_eq!(taxes, vec![dec!(250000), dec!(500000), dec!(262500)]);

        let total: Decimal = taxes.iter().sum();
        assert_eq!(total, dec!(1012500));
    }

    #[test]
    fn progressive_tax_revised_table_first_bracket_only() {
        let breakdown = progressive_tax(dec!(5450000), Regime::Revised.constants().brackets);

        assert_eq!(breakdown.len(), 1);
        assert_eq!(breakdown[0].level, 1);
        assert_eq!(breakdown[0].rate_percent, dec!(5));
        assert_eq!(breakdown[0].tax, dec!(272500));
    }

    #[test]
    fn progressive_tax_zero_income_has_empty_breakdown() {
        let breakdown = progressive_tax(Decimal::ZERO, Regime::Current.constants().brackets);

        assert!(breakdown.is_empty());
    }

    #[test]
    fn progressive_tax_exact_boundary_stops_at_that_bracket() {
        let breakdown = progressive_tax(dec!(10000000), Regime::Current.constants().brackets);

        assert_eq!(breakdown.len(), 2);
        assert_eq!(breakdown[1].taxable_amount, dec!(5000000));
    }

    #[test]
    fn progressive_tax_reaches_unbounded_top_bracket() {
        let breakdown = progressive_tax(dec!(100000000), Regime::Current.constants().brackets);

        assert_eq!(breakdown.len(), 7);
        let top = &breakdown[6];
        assert_eq!(top.level, 7);
        assert_eq!(top.taxable_amount, dec!(20000000));
        assert_eq!(top.tax, dec!(7000000));

        let allocated: Decimal = breakdown.iter().map(|b| b.taxable_amount).sum();
        assert_eq!(allocated, dec!(100000000));
    }

    #[test]
    fn progressive_tax_levels_are_one_based_and_ordered() {
        let breakdown = progressive_tax(dec!(45000000), Regime::Revised.constants().brackets);

        let levels: Vec<usize> = breakdown.iter().map(|b| b.level).collect();
        assert_eq!(levels, vec![1, 2, 3]);
        assert_eq!(breakdown[2].label, "Level 3 (30M - 60M)");
    }

    // =========================================================================
    // compute_salary_tax tests
    // =========================================================================

    #[test]
    fn current_regime_reference_scenario() {
        let result = compute_salary_tax(&input(dec!(30000000), 1, Regime::Current));

        assert_eq!(result.insurance.total, dec!(3150000));
        assert_eq!(result.total_deductions, dec!(15400000));
        assert_eq!(result.taxable_income, dec!(11450000));
        assert_eq!(result.total_tax, dec!(967500));
        assert_eq!(result.net_income, dec!(25882500));
    }

    #[test]
    fn revised_regime_reference_scenario() {
        let result = compute_salary_tax(&input(dec!(30000000), 1, Regime::Revised));

        assert_eq!(result.total_deductions, dec!(21700000));
        assert_eq!(result.taxable_income, dec!(5150000));
        assert_eq!(result.total_tax, dec!(257500));
        assert_eq!(result.net_income, dec!(26592500));
    }

    #[test]
    fn income_below_deductions_is_not_taxed() {
        let result = compute_salary_tax(&input(dec!(12000000), 2, Regime::Current));

        assert_eq!(result.taxable_income, Decimal::ZERO);
        assert_eq!(result.total_tax, Decimal::ZERO);
        assert!(result.bracket_breakdown.is_empty());
        assert_eq!(result.net_income, dec!(12000000) - result.insurance.total);
    }

    #[test]
    fn insurance_base_may_differ_from_gross() {
        let mut low_base = input(dec!(30000000), 0, Regime::Current);
        low_base.insurance.insurance_base_salary = dec!(5000000);

        let result = compute_salary_tax(&low_base);

        assert_eq!(result.insurance.total, dec!(525000));
        assert_eq!(result.taxable_income, dec!(18475000));
    }

    #[test]
    fn breakdown_sums_to_total_tax() {
        for regime in Regime::ALL {
            for gross in [dec!(20000000), dec!(55555555), dec!(250000000)] {
                let result = compute_salary_tax(&input(gross, 1, regime));
                let sum: Decimal = result.bracket_breakdown.iter().map(|b| b.tax).sum();

                assert_eq!(sum, result.total_tax);
            }
        }
    }

    #[test]
    fn tax_never_decreases_as_income_rises() {
        for regime in Regime::ALL {
            let mut previous = Decimal::ZERO;
            let mut gross = Decimal::ZERO;
            while gross <= dec!(300000000) {
                let result = compute_salary_tax(&input(gross, 2, regime));

                assert!(result.taxable_income >= Decimal::ZERO);
                assert!(result.total_tax >= previous, "{regime:?} at {gross}");
                previous = result.total_tax;
                gross += dec!(1250000);
            }
        }
    }

    #[test]
    fn net_income_identity_holds() {
        let result = compute_salary_tax(&input(dec!(123456789), 3, Regime::Revised));

        assert_eq!(
            result.net_income,
            result.gross_income - result.insurance.total - result.total_tax
        );
    }

    #[test]
    fn negative_gross_is_clamped_to_zero() {
        let _guard = init_test_tracing();

        let mut negative = input(Decimal::ZERO, 0, Regime::Current);
        negative.gross_income = dec!(-1000000);

        let result = compute_salary_tax(&negative);

        assert_eq!(result.gross_income, Decimal::ZERO);
        assert_eq!(result.total_tax, Decimal::ZERO);
        assert_eq!(result.net_income, Decimal::ZERO);
    }
}
