use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Activity category of an individual business household.
///
/// Each category carries a flat rate applied to gross revenue. The rate is
/// the same under both regimes; only the exemption threshold changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BusinessCategory {
    /// Distribution and supply of goods.
    #[default]
    Distribution,
    /// Manufacturing, transport and services bundled with goods.
    Production,
    /// Services and construction without supplied materials.
    Services,
    /// Property leasing and lottery agents.
    Leasing,
}

impl BusinessCategory {
    pub const ALL: [BusinessCategory; 4] = [
        BusinessCategory::Distribution,
        BusinessCategory::Production,
        BusinessCategory::Services,
        BusinessCategory::Leasing,
    ];

    /// Combined flat rate in percent (1.5 = 1.5%).
    pub fn flat_rate_percent(&self) -> Decimal {
        match self {
            Self::Distribution => dec!(1.5),
            Self::Production => dec!(3.0),
            Self::Services => dec!(4.5),
            Self::Leasing => dec!(7.0),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Distribution => "Distribution, supply of goods",
            Self::Production => "Production, transport, goods-related services",
            Self::Services => "Services, construction without materials",
            Self::Leasing => "Property leasing, lottery agents",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Distribution => "distribution",
            Self::Production => "production",
            Self::Services => "services",
            Self::Leasing => "leasing",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "distribution" => Some(Self::Distribution),
            "production" => Some(Self::Production),
            "services" => Some(Self::Services),
            "leasing" => Some(Self::Leasing),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn flat_rates_by_category() {
        assert_eq!(BusinessCategory::Distribution.flat_rate_percent(), dec!(1.5));
        assert_eq!(BusinessCategory::Production.flat_rate_percent(), dec!(3.0));
        assert_eq!(BusinessCategory::Services.flat_rate_percent(), dec!(4.5));
        assert_eq!(BusinessCategory::Leasing.flat_rate_percent(), dec!(7.0));
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(
            BusinessCategory::parse("Leasing"),
            Some(BusinessCategory::Leasing)
        );
        assert_eq!(BusinessCategory::parse("retail"), None);
    }

    #[test]
    fn as_str_round_trips() {
        for category in BusinessCategory::ALL {
            assert_eq!(BusinessCategory::parse(category.as_str()), Some(category));
        }
    }
}
