use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Regional minimum-wage tier (Decree 74/2024/ND-CP).
///
/// The regional minimum wage caps the unemployment insurance base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Region {
    #[default]
    One,
    Two,
    Three,
    Four,
}

impl Region {
    pub const ALL: [Region; 4] = [Region::One, Region::Two, Region::Three, Region::Four];

    /// Monthly regional minimum wage in VND.
    pub fn min_wage(&self) -> Decimal {
        match self {
            Self::One => dec!(4960000),
            Self::Two => dec!(4410000),
            Self::Three => dec!(3860000),
            Self::Four => dec!(3450000),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::One => "Region I",
            Self::Two => "Region II",
            Self::Three => "Region III",
            Self::Four => "Region IV",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::One => "1",
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
        }
    }

    /// Accepts `1`-`4` or roman numerals `I`-`IV` (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "1" | "I" => Some(Self::One),
            "2" | "II" => Some(Self::Two),
            "3" | "III" => Some(Self::Three),
            "4" | "IV" => Some(Self::Four),
            _ => None,
        }
    }
}
