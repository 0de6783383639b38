use clap::Parser;
use vessel_tracker::utils::error::{ErrorSeverity, TrackerError};
use vessel_tracker::utils::{logger, validation::Validate};
use vessel_tracker::{CliConfig, StatusReport, TrackerConfig, VesselTracker};

fn exit_code(e: &TrackerError) -> i32 {
    match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}

fn fail(e: TrackerError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(exit_code(&e).max(1));
}

fn load_config(cli: &CliConfig) -> vessel_tracker::Result<TrackerConfig> {
    let mut config = TrackerConfig::load_or_default(&cli.config)?;
    if let Some(source) = &cli.only {
        config.restrict_to(source)?;
    }
    config.validate()?;
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting vessel-tracker");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config = load_config(&cli).unwrap_or_else(|e| fail(e));
    tracing::info!(
        "Sources enabled: {}",
        config
            .available_sources()
            .iter()
            .map(|s| s.key())
            .collect::<Vec<_>>()
            .join(", ")
    );

    let tracker = VesselTracker::from_config(&config).unwrap_or_else(|e| fail(e));
    let (status, resolution) = tracker.resolve().await;

    for attempt in &resolution.attempts {
        tracing::debug!(
            "{}: {:?}{}",
            attempt.source,
            attempt.outcome,
            attempt
                .message
                .as_deref()
                .map(|m| format!(" ({})", m))
                .unwrap_or_default()
        );
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&status)?);
    } else {
        println!("{}", StatusReport::from_status(&status));
    }

    if !status.ok {
        std::process::exit(exit_code(&TrackerError::SourcesExhausted).max(1));
    }

    Ok(())
}
