//! Rendering of comparison results as terminal tables, JSON and CSV.

use std::io::Write;

use pit_core::{
    BusinessCategory, BusinessComparison, Region, SalaryComparison, SalaryProfile, SalaryTaxResult,
};
use serde::Serialize;
use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Style, object::Columns},
};

use crate::utils::{format_delta, format_vnd};

/// One line of the salary comparison table.
#[derive(Debug, Clone, PartialEq, Eq, Tabled)]
pub struct SalaryRow {
    #[tabled(rename = "Item")]
    pub item: String,

    #[tabled(rename = "Current law")]
    pub current: String,

    #[tabled(rename = "Revised law")]
    pub revised: String,

    #[tabled(rename = "Difference")]
    pub difference: String,
}

impl SalaryRow {
    fn amounts(
        item: &str,
        current: rust_decimal::Decimal,
        revised: rust_decimal::Decimal,
    ) -> Self {
        Self {
            item: item.to_string(),
            current: format_vnd(current),
            revised: format_vnd(revised),
            difference: format_delta(revised - current),
        }
    }
}

/// One line of a per-bracket breakdown table.
#[derive(Debug, Clone, PartialEq, Eq, Tabled)]
pub struct BracketRow {
    #[tabled(rename = "Level")]
    pub level: usize,

    #[tabled(rename = "Bracket")]
    pub label: String,

    #[tabled(rename = "Rate")]
    pub rate: String,

    #[tabled(rename = "Taxed amount")]
    pub taxable_amount: String,

    #[tabled(rename = "Tax")]
    pub tax: String,
}

pub fn salary_rows(comparison: &SalaryComparison) -> Vec<SalaryRow> {
    let (current, revised) = (&comparison.current, &comparison.revised);

    vec![
        SalaryRow::amounts("Gross income", current.gross_income, revised.gross_income),
        SalaryRow::amounts(
            "Insurance",
            current.insurance.total,
            revised.insurance.total,
        ),
        SalaryRow::amounts(
            "Family deductions",
            current.total_deductions,
            revised.total_deductions,
        ),
        SalaryRow::amounts(
            "Taxable income",
            current.taxable_income,
            revised.taxable_income,
        ),
        SalaryRow::amounts("Income tax", current.total_tax, revised.total_tax),
        SalaryRow::amounts("Net income", current.net_income, revised.net_income),
    ]
}

pub fn bracket_rows(result: &SalaryTaxResult) -> Vec<BracketRow> {
    result
        .bracket_breakdown
        .iter()
        .map(|b| BracketRow {
            level: b.level,
            label: b.label.to_string(),
            rate: format!("{}%", b.rate_percent.normalize()),
            taxable_amount: format_vnd(b.taxable_amount),
            tax: format_vnd(b.tax),
        })
        .collect()
}

fn render<T: Tabled>(rows: &[T]) -> String {
    Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Columns::new(1..)).with(Alignment::right()))
        .to_string()
}

pub fn salary_heading(
    region: Region,
    dependents_count: u32,
) -> String {
    format!(
        "SALARY TAX COMPARISON ({}, dependents: {})",
        region.label(),
        dependents_count
    )
}

/// Prints the salary comparison followed by each regime's bracket breakdown.
pub fn print_salary(
    comparison: &SalaryComparison,
    region: Region,
    dependents_count: u32,
) {
    let insurance = &comparison.current.insurance;

    println!();
    println!("{}", salary_heading(region, dependents_count));
    println!("{}", render(&salary_rows(comparison)));

    if insurance.is_unemployment_capped {
        println!(
            "Note: unemployment insurance base capped at {} (20 x regional minimum wage).",
            format_vnd(insurance.unemployment_cap)
        );
    }

    for result in [&comparison.current, &comparison.revised] {
        println!();
        println!("{} brackets", result.regime);
        let rows = bracket_rows(result);
        if rows.is_empty() {
            println!("No taxable income; no tax due.");
        } else {
            println!("{}", render(&rows));
        }
    }

    println!();
    if comparison.revised_is_better() {
        println!(
            "Revised law increases take-home pay by {} per month.",
            format_vnd(comparison.net_income_delta())
        );
    } else {
        println!("Revised law does not increase take-home pay.");
    }
}

pub fn print_business(
    comparison: &BusinessComparison,
    category: BusinessCategory,
) {
    let rows = vec![
        SalaryRow::amounts(
            "Annual revenue",
            comparison.annual_revenue,
            comparison.annual_revenue,
        ),
        SalaryRow::amounts("Business tax", comparison.current_tax, comparison.revised_tax),
    ];

    println!();
    println!(
        "BUSINESS TAX COMPARISON ({}, {}%)",
        category.label(),
        comparison.flat_rate_percent.normalize()
    );
    println!("(about {} per month)", format_vnd(comparison.monthly_revenue()));
    println!("{}", render(&rows));
    println!();

    if comparison.exempt_under_revised() {
        println!("Exempt under the revised law: no business tax due.");
    } else {
        println!("Taxed on 100% of revenue under both laws.");
    }
}

pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Flat record written per scenario by the batch command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparisonRecord {
    pub gross_income: String,
    pub insurance_base_salary: String,
    pub region: String,
    pub dependents: u32,
    pub insurance_total: String,
    pub current_taxable_income: String,
    pub current_tax: String,
    pub current_net_income: String,
    pub revised_taxable_income: String,
    pub revised_tax: String,
    pub revised_net_income: String,
    pub net_income_delta: String,
}

impl ComparisonRecord {
    pub fn new(
        region: Region,
        profile: &SalaryProfile,
        comparison: &SalaryComparison,
    ) -> Self {
        let (current, revised) = (&comparison.current, &comparison.revised);
        let whole = |d| pit_core::round_vnd(d).to_string();

        Self {
            gross_income: whole(current.gross_income),
            insurance_base_salary: whole(profile.insurance_base_salary),
            region: region.as_str().to_string(),
            dependents: profile.dependents_count,
            insurance_total: whole(current.insurance.total),
            current_taxable_income: whole(current.taxable_income),
            current_tax: whole(current.total_tax),
            current_net_income: whole(current.net_income),
            revised_taxable_income: whole(revised.taxable_income),
            revised_tax: whole(revised.total_tax),
            revised_net_income: whole(revised.net_income),
            net_income_delta: whole(comparison.net_income_delta()),
        }
    }
}

pub fn write_csv<W: Write>(
    records: &[ComparisonRecord],
    writer: W,
) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for record in records {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(())
}
