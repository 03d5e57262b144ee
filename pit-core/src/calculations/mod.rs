//! Tax and insurance calculations for Vietnamese personal income tax.
//!
//! Every calculator here is a pure function over its inputs and the
//! compiled-in regime constants. The current and revised laws are run through
//! the same functions and compared in [`comparison`].

pub mod business;
pub mod common;
pub mod comparison;
pub mod insurance;
pub mod salary;

pub use business::{BusinessTaxInput, compute_business_tax};
pub use comparison::{
    BusinessComparison, SalaryComparison, SalaryProfile, compare_business, compare_salary,
};
pub use insurance::{InsuranceInput, InsuranceResult, compute_insurance};
pub use salary::{SalaryTaxInput, SalaryTaxResult, compute_salary_tax, progressive_tax};
