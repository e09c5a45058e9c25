mod args;
mod config;
mod error;
mod progress;
mod render;
mod search;
mod session;
mod theme;
mod ui;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use args::Cli;
use config::Config;
use progress::SpinnerLog;
use search::SearchEngine;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let spinners = SpinnerLog::default();
    // Logs share the terminal with the cards, so only warnings show by default.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(spinners.clone())
        .with_ansi(false)
        .init();

    let cli = Cli::parse();
    let config = Config::from_env()?.with_cli(&cli)?;
    info!(
        endpoint = %config.api.endpoint,
        timeout_ms = config.api.timeout.as_millis(),
        fallback_delay_ms = config.fallback_delay.as_millis(),
        theme = %config.theme,
        "configuration loaded"
    );

    let engine = SearchEngine::from_config(&config)?;

    match cli.one_shot_query() {
        Some(query) => {
            let mut out = std::io::stdout();
            ui::run_once(&engine, &spinners, config.theme, &query, cli.json, &mut out).await?
        }
        None => ui::run_interactive(&engine, &spinners, config.theme).await?,
    }
    Ok(())
}
