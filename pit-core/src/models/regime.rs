use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::TaxBracket;

/// A version of the personal income tax law.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Regime {
    /// The law currently in force (Resolution 954/2020 deductions).
    Current,
    /// The revised law passed on 10 December 2025.
    Revised,
}

impl Regime {
    /// Both regimes, in the order they are compared.
    pub const ALL: [Regime; 2] = [Regime::Current, Regime::Revised];

    pub fn constants(&self) -> &'static RegimeConstants {
        match self {
            Self::Current => &CURRENT,
            Self::Revised => &REVISED,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Current => "current",
            Self::Revised => "revised",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "current" => Some(Self::Current),
            "revised" => Some(Self::Revised),
            _ => None,
        }
    }
}

impl std::fmt::Display for Regime {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        f.write_str(self.constants().name)
    }
}

/// Regulatory constants for one [`Regime`].
///
/// Deductions and bracket bounds are monthly amounts in VND; the business
/// exemption threshold is annual revenue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegimeConstants {
    pub name: &'static str,
    pub self_deduction: Decimal,
    pub dependent_deduction: Decimal,
    pub business_exemption_threshold: Decimal,
    pub brackets: &'static [TaxBracket],
}

static CURRENT_BRACKETS: [TaxBracket; 7] = [
    TaxBracket {
        upper_bound: Some(dec!(5000000)),
        rate: dec!(0.05),
        label: "Level 1 (up to 5M)",
    },
    TaxBracket {
        upper_bound: Some(dec!(10000000)),
        rate: dec!(0.10),
        label: "Level 2 (5M - 10M)",
    },
    TaxBracket {
        upper_bound: Some(dec!(18000000)),
        rate: dec!(0.15),
        label: "Level 3 (10M - 18M)",
    },
    TaxBracket {
        upper_bound: Some(dec!(32000000)),
        rate: dec!(0.20),
        label: "Level 4 (18M - 32M)",
    },
    TaxBracket {
        upper_bound: Some(dec!(52000000)),
        rate: dec!(0.25),
        label: "Level 5 (32M - 52M)",
    },
    TaxBracket {
        upper_bound: Some(dec!(80000000)),
        rate: dec!(0.30),
        label: "Level 6 (52M - 80M)",
    },
    TaxBracket {
        upper_bound: None,
        rate: dec!(0.35),
        label: "Level 7 (over 80M)",
    },
];

static REVISED_BRACKETS: [TaxBracket; 5] = [
    TaxBracket {
        upper_bound: Some(dec!(10000000)),
        rate: dec!(0.05),
        label: "Level 1 (up to 10M)",
    },
    TaxBracket {
        upper_bound: Some(dec!(30000000)),
        rate: dec!(0.10),
        label: "Level 2 (10M - 30M)",
    },
    TaxBracket {
        upper_bound: Some(dec!(60000000)),
        rate: dec!(0.20),
        label: "Level 3 (30M - 60M)",
    },
    TaxBracket {
        upper_bound: Some(dec!(100000000)),
        rate: dec!(0.30),
        label: "Level 4 (60M - 100M)",
    },
    TaxBracket {
        upper_bound: None,
        rate: dec!(0.35),
        label: "Level 5 (over 100M)",
    },
];

static CURRENT: RegimeConstants = RegimeConstants {
    name: "Current law",
    self_deduction: dec!(11000000),
    dependent_deduction: dec!(4400000),
    business_exemption_threshold: dec!(100000000),
    brackets: &CURRENT_BRACKETS,
};

static REVISED: RegimeConstants = RegimeConstants {
    name: "Revised law",
    self_deduction: dec!(15500000),
    dependent_deduction: dec!(6200000),
    business_exemption_threshold: dec!(500000000),
    brackets: &REVISED_BRACKETS,
};
