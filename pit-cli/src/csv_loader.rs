//! CSV loader for batch salary scenarios.
//!
//! ## CSV Format
//!
//! Columns are matched by header name; order does not matter.
//!
//! | Column                  | Required | Type    | Notes                                   |
//! |-------------------------|----------|---------|-----------------------------------------|
//! | `gross_income`          | yes      | decimal | Monthly gross income in VND             |
//! | `insurance_base_salary` | no       | decimal | At most the gross; empty = full gross   |
//! | `region`                | yes      | string  | `1`-`4` or `I`-`IV`                     |
//! | `dependents`            | yes      | integer | Number of registered dependents         |
//!
//! ### Example
//!
//! ```csv
//! gross_income,insurance_base_salary,region,dependents
//! 30000000,,1,1
//! 45000000,5000000,II,2
//! ```
use std::fs::File;
use std::io::Read;
use std::path::Path;

use pit_core::{Region, SalaryProfile};
use rust_decimal::Decimal;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct CsvRow {
    gross_income: Decimal,
    insurance_base_salary: Option<Decimal>,
    region: String,
    dependents: u32,
}

/// Errors that can occur while loading scenario CSV data.
#[derive(Debug, thiserror::Error)]
pub enum CsvLoadError {
    #[error("failed to open '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Bad structure, missing required column, type mismatch, etc.
    #[error("CSV parse error: {0}")]
    Parse(#[from] csv::Error),

    /// `row` is 1-based, counting the first data row as 1.
    #[error("unrecognised region '{region}' on row {row}")]
    InvalidRegion { region: String, row: usize },

    #[error("negative {field} on row {row}")]
    NegativeAmount { field: &'static str, row: usize },

    #[error("insurance_base_salary exceeds gross_income on row {row}")]
    InsuranceBaseExceedsGross { row: usize },
}

/// A parsed scenario with the region kept for reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    pub region: Region,
    pub profile: SalaryProfile,
}

fn convert_row(
    row: CsvRow,
    row_number: usize,
) -> Result<Scenario, CsvLoadError> {
    let region = Region::parse(&row.region).ok_or_else(|| CsvLoadError::InvalidRegion {
        region: row.region.clone(),
        row: row_number,
    })?;

    if row.gross_income < Decimal::ZERO {
        return Err(CsvLoadError::NegativeAmount {
            field: "gross_income",
            row: row_number,
        });
    }
    let insurance_base_salary = row.insurance_base_salary.unwrap_or(row.gross_income);
    if insurance_base_salary < Decimal::ZERO {
        return Err(CsvLoadError::NegativeAmount {
            field: "insurance_base_salary",
            row: row_number,
        });
    }
    if insurance_base_salary > row.gross_income {
        return Err(CsvLoadError::InsuranceBaseExceedsGross { row: row_number });
    }

    Ok(Scenario {
        region,
        profile: SalaryProfile {
            gross_income: row.gross_income,
            insurance_base_salary,
            regional_min_wage: region.min_wage(),
            dependents_count: row.dependents,
        },
    })
}

/// Parses scenarios from any reader. Stops at the first invalid row.
pub fn load_from_reader<R: Read>(reader: R) -> Result<Vec<Scenario>, CsvLoadError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut scenarios = Vec::new();
    for (index, result) in csv_reader.deserialize::<CsvRow>().enumerate() {
        scenarios.push(convert_row(result?, index + 1)?);
    }

    tracing::debug!(count = scenarios.len(), "loaded salary scenarios");
    Ok(scenarios)
}

pub fn load_from_file(path: &Path) -> Result<Vec<Scenario>, CsvLoadError> {
    let file = File::open(path).map_err(|source| CsvLoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    load_from_reader(file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    const HEADER: &str = "gross_income,insurance_base_salary,region,dependents\n";

    fn load(body: &str) -> Result<Vec<Scenario>, CsvLoadError> {
        load_from_reader(format!("{HEADER}{body}").as_bytes())
    }

    #[test]
    fn empty_insurance_base_defaults_to_gross() {
        let scenarios = load("30000000,,1,1\n").unwrap();

        assert_eq!(scenarios.len(), 1);
        assert_eq!(scenarios[0].region, Region::One);
        assert_eq!(
            scenarios[0].profile,
            SalaryProfile::full_insurance(dec!(30000000), dec!(4960000), 1)
        );
    }

    #[test]
    fn explicit_insurance_base_is_kept() {
        let scenarios = load("45000000,5000000,II,2\n").unwrap();

        assert_eq!(scenarios[0].profile.insurance_base_salary, dec!(5000000));
        assert_eq!(scenarios[0].profile.regional_min_wage, dec!(4410000));
        assert_eq!(scenarios[0].profile.dependents_count, 2);
    }

    #[test]
    fn header_only_yields_no_scenarios() {
        assert!(load("").unwrap().is_empty());
    }

    #[test]
    fn cells_are_trimmed() {
        let scenarios = load(" 30000000 , , iv , 0 \n").unwrap();

        assert_eq!(scenarios[0].region, Region::Four);
    }

    #[test]
    fn invalid_region_reports_row_number() {
        let err = load("30000000,,1,0\n30000000,,9,0\n").unwrap_err();

        match err {
            CsvLoadError::InvalidRegion { region, row } => {
                assert_eq!(region, "9");
                assert_eq!(row, 2);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn negative_dependents_fail_to_parse() {
        let err = load("30000000,,1,-1\n").unwrap_err();

        assert!(matches!(err, CsvLoadError::Parse(_)));
    }

    #[test]
    fn negative_gross_is_rejected() {
        let err = load("-1,,1,0\n").unwrap_err();

        assert!(matches!(
            err,
            CsvLoadError::NegativeAmount {
                field: "gross_income",
                row: 1
            }
        ));
    }

    #[test]
    fn insurance_base_above_gross_is_rejected() {
        let err = load("30000000,,1,0\n1000000,46800000,1,0\n").unwrap_err();

        assert!(matches!(
            err,
            CsvLoadError::InsuranceBaseExceedsGross { row: 2 }
        ));
    }

    #[test]
    fn missing_required_column_is_a_parse_error() {
        let err = load_from_reader("gross_income,region\n30000000,1\n".as_bytes()).unwrap_err();

        assert!(matches!(err, CsvLoadError::Parse(_)));
    }
}
