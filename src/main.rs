use booking_service::{
    cli::{self, Cli},
    config::AppConfig,
};
use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = AppConfig::from_env().and_then(|c| c.with_today(cli.today));
    let config = match config {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return ExitCode::from(cli::output::EXIT_SYSTEM_FAILURE);
        }
    };

    // Initialize tracing (stderr, stdout is reserved for JSON output)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Some(today) = config.today {
        tracing::info!("Clock pinned to {}", today);
    }

    let deps = cli::build_dependencies(&config);

    let (output, exit_code) = cli::render(cli::execute(&deps, cli.command).await);
    println!("{}", output);

    ExitCode::from(exit_code)
}
