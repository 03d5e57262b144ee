pub mod calculations;
pub mod models;

pub use calculations::common::round_vnd;
pub use calculations::{
    BusinessComparison, BusinessTaxInput, InsuranceInput, InsuranceResult, SalaryComparison,
    SalaryProfile, SalaryTaxInput, SalaryTaxResult, compare_business, compare_salary,
    compute_business_tax, compute_insurance, compute_salary_tax, progressive_tax,
};
pub use models::*;
