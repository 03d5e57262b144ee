pub mod csv_loader;
pub mod logging;
pub mod report;
pub mod utils;

pub use csv_loader::{CsvLoadError, Scenario};
