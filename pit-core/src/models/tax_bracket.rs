use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;

/// One row of a progressive bracket table.
///
/// Brackets are stored by their upper bound only; the lower bound is the
/// previous bracket's upper bound (or zero for the first bracket).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaxBracket {
    /// Inclusive upper bound of monthly taxable income, `None` for the top bracket.
    pub upper_bound: Option<Decimal>,
    /// Marginal rate as a fraction (0.05 = 5%).
    pub rate: Decimal,
    pub label: &'static str,
}

/// Tax attributed to a single bracket during the progressive walk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BracketTax {
    /// 1-based position of the bracket in its table.
    pub level: usize,
    pub label: &'static str,
    pub rate_percent: Decimal,
    /// Portion of taxable income falling inside this bracket.
    pub taxable_amount: Decimal,
    pub tax: Decimal,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BracketTableError {
    #[error("bracket table is empty")]
    Empty,

    #[error("bracket {level} upper bound {upper_bound} does not exceed the previous bound {previous}")]
    NotIncreasing {
        level: usize,
        upper_bound: Decimal,
        previous: Decimal,
    },

    #[error("bracket {0} is unbounded but is not the last bracket")]
    UnboundedNotLast(usize),

    #[error("last bracket must be unbounded")]
    LastBounded,

    #[error("bracket {level} rate must be between 0 and 1, got {rate}")]
    InvalidRate { level: usize, rate: Decimal },
}

/// Checks that a bracket table is contiguous, starts at zero and ends unbounded.
///
/// # Errors
///
/// Returns [`BracketTableError`] if:
/// - the table is empty
/// - any upper bound is not strictly greater than the one before it (the
///   first bound must be positive)
/// - an unbounded bracket appears anywhere but last, or the last is bounded
/// - a rate is outside [0, 1]
///
/// # Example
///
/// ```
/// use pit_core::{validate_brackets, Regime};
///
/// for regime in Regime::ALL {
///     assert_eq!(validate_brackets(regime.constants().brackets), Ok(()));
/// }
/// ```
pub fn validate_brackets(brackets: &[TaxBracket]) -> Result<(), BracketTableError> {
    let Some(last) = brackets.last() else {
        return Err(BracketTableError::Empty);
    };

    let mut previous = Decimal::ZERO;
    for (index, bracket) in brackets.iter().enumerate() {
        let level = index + 1;

        if bracket.rate < Decimal::ZERO || bracket.rate > Decimal::ONE {
            return Err(BracketTableError::InvalidRate {
                level,
                rate: bracket.rate,
            });
        }

        match bracket.upper_bound {
            Some(upper_bound) if upper_bound <= previous => {
                return Err(BracketTableError::NotIncreasing {
                    level,
                    upper_bound,
                    previous,
                });
            }
            Some(upper_bound) => previous = upper_bound,
            None if level != brackets.len() => {
                return Err(BracketTableError::UnboundedNotLast(level));
            }
            None => {}
        }
    }

    if last.upper_bound.is_some() {
        return Err(BracketTableError::LastBounded);
    }

    Ok(())
}
