mod catalog;
mod config;
mod errors;
mod models;
mod session;
mod suggestion;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::session::run_session;

fn main() -> Result<()> {
    // Load configuration first (RUST_LOG only; nothing is required)
    let config = Config::from_env()?;

    // Initialize structured logging on stderr so stdout carries only the transcript
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting Compass v{}", env!("CARGO_PKG_VERSION"));

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let summary = run_session(&mut stdin.lock(), &mut stdout.lock())?;

    match summary.career {
        Some(career) => info!("Session {} finished: suggested {career}", summary.session_id),
        None => info!("Session {} finished with no suggestion", summary.session_id),
    }

    Ok(())
}
