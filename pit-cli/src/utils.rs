use pit_core::{BusinessCategory, Region, SalaryProfile};
use rust_decimal::Decimal;
use thiserror::Error;

/// Error returned when a command-line amount cannot be used.
#[derive(Debug, Error)]
pub enum ParseAmountError {
    #[error("invalid amount '{input}': {source}")]
    Invalid {
        input: String,
        #[source]
        source: rust_decimal::Error,
    },

    #[error("amount must not be negative, got '{0}'")]
    Negative(String),
}

/// Normalizes input for decimal parsing: trims whitespace and removes commas (thousands separator).
fn normalize_decimal_input(s: &str) -> String {
    s.trim().replace(',', "")
}

/// Parses a VND amount such as `30,000,000` or `30000000`.
///
/// Empty input is treated as 0. Negative amounts are rejected so the engine
/// only ever sees sanitized values.
pub fn parse_amount(s: &str) -> Result<Decimal, ParseAmountError> {
    let normalized = normalize_decimal_input(s);
    if normalized.is_empty() {
        return Ok(Decimal::ZERO);
    }
    let amount: Decimal = normalized
        .parse()
        .map_err(|source| ParseAmountError::Invalid {
            input: s.to_string(),
            source,
        })?;
    if amount < Decimal::ZERO {
        return Err(ParseAmountError::Negative(s.to_string()));
    }
    Ok(amount)
}

/// Error returned when the declared insurance base is larger than the gross income.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("insurance base {insurance_base_salary} exceeds gross income {gross_income}")]
pub struct InsuranceBaseExceedsGross {
    pub gross_income: Decimal,
    pub insurance_base_salary: Decimal,
}

/// Builds a salary profile from command-line values.
///
/// A missing insurance base declares insurance on the full gross income.
pub fn salary_profile(
    gross_income: Decimal,
    insurance_base_salary: Option<Decimal>,
    region: Region,
    dependents_count: u32,
) -> Result<SalaryProfile, InsuranceBaseExceedsGross> {
    let insurance_base_salary = insurance_base_salary.unwrap_or(gross_income);
    if insurance_base_salary > gross_income {
        return Err(InsuranceBaseExceedsGross {
            gross_income,
            insurance_base_salary,
        });
    }

    Ok(SalaryProfile {
        gross_income,
        insurance_base_salary,
        regional_min_wage: region.min_wage(),
        dependents_count,
    })
}

pub fn parse_region(s: &str) -> Result<Region, String> {
    Region::parse(s).ok_or_else(|| format!("unknown region '{s}', expected 1-4 or I-IV"))
}

pub fn parse_category(s: &str) -> Result<BusinessCategory, String> {
    BusinessCategory::parse(s).ok_or_else(|| {
        let known: Vec<&str> = BusinessCategory::ALL.iter().map(|c| c.as_str()).collect();
        format!("unknown business category '{s}', expected one of: {}", known.join(", "))
    })
}

/// Formats a VND amount rounded to whole đồng with comma thousands separators.
pub fn format_vnd(amount: Decimal) -> String {
    let rounded = pit_core::round_vnd(amount);
    let digits = rounded.abs().trunc().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Formats a signed delta with an explicit `+` for increases.
pub fn format_delta(amount: Decimal) -> String {
    if pit_core::round_vnd(amount) > Decimal::ZERO {
        format!("+{}", format_vnd(amount))
    } else {
        format_vnd(amount)
    }
}
