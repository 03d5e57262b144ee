mod business_category;
mod regime;
mod region;
mod tax_bracket;

pub use business_category::BusinessCategory;
pub use regime::{Regime, RegimeConstants};
pub use region::Region;
pub use tax_bracket::{BracketTableError, BracketTax, TaxBracket, validate_brackets};
