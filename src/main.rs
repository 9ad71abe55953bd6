use clap::Parser;
use salary_stats::utils::{logger, validation::Validate};
use salary_stats::{
    adapters::http::build_client, AppConfig, CliConfig, HeadHunterSource, Report, ReportBuilder,
    Result, SuperJobSource,
};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = CliConfig::parse();

    if cli.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    if dotenvy::dotenv().is_ok() {
        tracing::debug!("Loaded environment from .env");
    }

    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            match AppConfig::from_file(path) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("❌ Failed to load config file '{}': {}", path, e);
                    eprintln!("💡 Make sure the file exists and is valid TOML format");
                    std::process::exit(1);
                }
            }
        }
        None => AppConfig::default(),
    };

    cli.apply_overrides(&mut config);
    config.resolve_secrets();

    if cli.verbose {
        tracing::debug!("Effective config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }

    if let Err(e) = run(&config, cli.json).await {
        tracing::error!(
            "❌ Report failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        std::process::exit(e.exit_code());
    }

    Ok(())
}

/// Builds and prints each enabled board's report. A failure stops the run, so a
/// report is only printed once it is complete.
async fn run(config: &AppConfig, json: bool) -> Result<()> {
    let client = build_client(config)?;
    let builder =
        ReportBuilder::new(config.languages.clone()).with_concurrency(config.concurrency);

    if config.headhunter.enabled {
        let source = HeadHunterSource::new(client.clone(), config.headhunter.clone());
        let report = builder.build(Arc::new(source)).await?;
        print_report(&report, json)?;
    }

    if config.superjob.enabled {
        let source = SuperJobSource::new(client, config.superjob.clone())?;
        let report = builder.build(Arc::new(source)).await?;
        print_report(&report, json)?;
    }

    Ok(())
}

fn print_report(report: &Report, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        println!("{}", report.render());
    }
    Ok(())
}
