#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::{CliConfig, SourceSelection};

use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_number, validate_range, validate_required_field,
    validate_unique_terms, validate_url, Validate,
};
use serde::{Deserialize, Serialize};

/// Environment variable holding the SuperJob application key.
pub const SUPERJOB_TOKEN_VAR: &str = "TOKEN_SUPERJOB";

pub const DEFAULT_LANGUAGES: [&str; 8] = [
    "JavaScript",
    "Java",
    "Python",
    "Ruby",
    "PHP",
    "C++",
    "C",
    "C#",
];

const MAX_CONCURRENCY: usize = 16;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub languages: Vec<String>,
    pub concurrency: usize,
    pub request_timeout_seconds: u64,
    pub user_agent: String,
    pub headhunter: HeadHunterConfig,
    pub superjob: SuperJobConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HeadHunterConfig {
    pub enabled: bool,
    pub title: String,
    pub endpoint: String,
    /// Region id, 1 is Moscow.
    pub area: u32,
    /// Recency window in days.
    pub period: u32,
    pub per_page: usize,
    pub only_with_salary: bool,
    /// The only currency whose salaries are counted.
    pub currency: String,
    pub keyword_prefix: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SuperJobConfig {
    pub enabled: bool,
    pub title: String,
    pub endpoint: String,
    pub town: String,
    pub per_page: usize,
    pub keyword_prefix: String,
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            languages: DEFAULT_LANGUAGES.iter().map(|l| l.to_string()).collect(),
            concurrency: 1,
            request_timeout_seconds: 30,
            user_agent: concat!("salary-stats/", env!("CARGO_PKG_VERSION")).to_string(),
            headhunter: HeadHunterConfig::default(),
            superjob: SuperJobConfig::default(),
        }
    }
}

impl Default for HeadHunterConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            title: "HeadHunter Москва".to_string(),
            endpoint: "https://api.hh.ru/vacancies".to_string(),
            area: 1,
            period: 30,
            per_page: 100,
            only_with_salary: true,
            currency: "RUR".to_string(),
            keyword_prefix: "программист".to_string(),
        }
    }
}

impl Default for SuperJobConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            title: "SuperJob Москва".to_string(),
            endpoint: "https://api.superjob.ru/2.0/vacancies/".to_string(),
            town: "Москва".to_string(),
            per_page: 100,
            keyword_prefix: "программист".to_string(),
            api_key: None,
        }
    }
}

impl AppConfig {
    /// Fills the SuperJob key from the environment when the file did not set
    /// one, or left an unresolved `${VAR}` in its place. Call after `.env` has
    /// been loaded.
    pub fn resolve_secrets(&mut self) {
        self.resolve_secrets_from(SUPERJOB_TOKEN_VAR);
    }

    /// Same as `resolve_secrets`, reading the key from `token_var`.
    pub fn resolve_secrets_from(&mut self, token_var: &str) {
        let configured = self
            .superjob
            .api_key
            .as_deref()
            .is_some_and(|key| !key.trim().is_empty() && !key.starts_with("${"));

        if !configured {
            self.superjob.api_key = std::env::var(token_var)
                .ok()
                .filter(|key| !key.trim().is_empty());
        }
    }
}

/// Joins the keyword prefix and the query term the way both services expect.
pub fn search_text(prefix: &str, term: &str) -> String {
    if prefix.trim().is_empty() {
        term.to_string()
    } else {
        format!("{} {}", prefix.trim(), term)
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        validate_unique_terms("languages", &self.languages)?;
        validate_range("concurrency", self.concurrency, 1, MAX_CONCURRENCY)?;
        validate_positive_number(
            "request_timeout_seconds",
            self.request_timeout_seconds as usize,
            1,
        )?;
        validate_non_empty_string("user_agent", &self.user_agent)?;

        if self.headhunter.enabled {
            self.headhunter.validate()?;
        }
        if self.superjob.enabled {
            self.superjob.validate()?;
        }

        Ok(())
    }
}

impl Validate for HeadHunterConfig {
    fn validate(&self) -> Result<()> {
        validate_url("headhunter.endpoint", &self.endpoint)?;
        validate_positive_number("headhunter.per_page", self.per_page, 1)?;
        validate_non_empty_string("headhunter.currency", &self.currency)?;
        Ok(())
    }
}

impl Validate for SuperJobConfig {
    fn validate(&self) -> Result<()> {
        validate_url("superjob.endpoint", &self.endpoint)?;
        validate_positive_number("superjob.per_page", self.per_page, 1)?;
        let api_key = validate_required_field("superjob.api_key", &self.api_key)?;
        validate_non_empty_string("superjob.api_key", api_key)?;
        Ok(())
    }
}
