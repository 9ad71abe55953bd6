use crate::config::AppConfig;
use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SourceSelection {
    All,
    Headhunter,
    Superjob,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "salary-stats")]
#[command(about = "Average programmer salaries per language from HeadHunter and SuperJob")]
pub struct CliConfig {
    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Comma separated list of languages to search for
    #[arg(long, value_delimiter = ',')]
    pub languages: Vec<String>,

    /// Which job boards to query
    #[arg(long, value_enum, default_value = "all")]
    pub source: SourceSelection,

    /// Number of languages fetched at the same time
    #[arg(long)]
    pub concurrency: Option<usize>,

    #[arg(long)]
    pub hh_endpoint: Option<String>,

    #[arg(long)]
    pub superjob_endpoint: Option<String>,

    /// Print the reports as JSON instead of tables
    #[arg(long)]
    pub json: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub log_json: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Command line values override whatever the file provided.
    pub fn apply_overrides(&self, config: &mut AppConfig) {
        if !self.languages.is_empty() {
            config.languages = self
                .languages
                .iter()
                .map(|language| language.trim().to_string())
                .collect();
        }

        if let Some(concurrency) = self.concurrency {
            config.concurrency = concurrency;
        }

        if let Some(endpoint) = &self.hh_endpoint {
            config.headhunter.endpoint = endpoint.clone();
        }

        if let Some(endpoint) = &self.superjob_endpoint {
            config.superjob.endpoint = endpoint.clone();
        }

        match self.source {
            SourceSelection::All => {}
            SourceSelection::Headhunter => config.superjob.enabled = false,
            SourceSelection::Superjob => config.headhunter.enabled = false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_leave_config_untouched() {
        let cli = CliConfig::parse_from(["salary-stats"]);
        let mut config = AppConfig::default();
        cli.apply_overrides(&mut config);

        assert_eq!(config.languages.len(), 8);
        assert!(config.headhunter.enabled);
        assert!(config.superjob.enabled);
        assert!(!cli.json);
    }

    #[test]
    fn test_overrides() {
        let cli = CliConfig::parse_from([
            "salary-stats",
            "--languages",
            "Rust, Go",
            "--source",
            "headhunter",
            "--concurrency",
            "4",
            "--hh-endpoint",
            "http://localhost:9000/vacancies",
        ]);
        let mut config = AppConfig::default();
        cli.apply_overrides(&mut config);

        assert_eq!(config.languages, vec!["Rust", "Go"]);
        assert_eq!(config.concurrency, 4);
        assert_eq!(config.headhunter.endpoint, "http://localhost:9000/vacancies");
        assert!(config.headhunter.enabled);
        assert!(!config.superjob.enabled);
    }

    #[test]
    fn test_superjob_only() {
        let cli = CliConfig::parse_from(["salary-stats", "--source", "superjob", "--json"]);
        let mut config = AppConfig::default();
        cli.apply_overrides(&mut config);

        assert!(!config.headhunter.enabled);
        assert!(config.superjob.enabled);
        assert!(cli.json);
    }
}
