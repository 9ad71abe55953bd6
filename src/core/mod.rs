pub mod aggregator;
pub mod estimator;
pub mod report;
pub mod table;

pub use crate::domain::model::{Listings, Report, ReportRow, SalaryBounds, SalaryStats};
pub use crate::domain::ports::VacancySource;
pub use crate::utils::error::Result;
