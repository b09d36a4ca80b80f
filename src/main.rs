//! ICPC Scoreboard - Application Entry Point
//!
//! Reads commands from stdin (or `SCOREBOARD_INPUT`) and prints results to stdout.

use tokio::io::{AsyncBufRead, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use scoreboard::{
    config::{Config, LogFormat},
    export, handlers,
    state::ContestState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    // Initialize tracing; stdout is reserved for scoreboard output
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| config.logging.rust_log.clone().into());
    let registry = tracing_subscriber::registry().with(filter);
    match config.logging.format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init(),
        LogFormat::Text => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init(),
    }

    tracing::info!("Starting ICPC scoreboard...");

    let reader: Box<dyn AsyncBufRead + Unpin> = match &config.io.input_path {
        Some(path) => {
            tracing::info!(path = %path.display(), "Reading commands from file");
            Box::new(BufReader::new(tokio::fs::File::open(path).await?))
        }
        None => Box::new(BufReader::new(tokio::io::stdin())),
    };

    let mut state = ContestState::new();
    let standings = handlers::process_commands(&mut state, reader, tokio::io::stdout()).await?;

    if let (Some(path), Some(standings)) = (&config.io.standings_path, standings) {
        export::write_standings(path, &standings).await?;
    }

    Ok(())
}
