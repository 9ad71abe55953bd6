pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::{HeadHunterSource, SuperJobSource};
pub use crate::config::AppConfig;
pub use crate::core::report::ReportBuilder;
pub use crate::domain::model::{Report, ReportRow};
pub use crate::utils::error::{ReportError, Result};
