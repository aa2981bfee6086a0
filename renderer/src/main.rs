//! FitTrack dashboard renderer
//!
//! Loads a profile from config and prints the dashboard JSON to stdout.

use anyhow::Result;
use fittrack_renderer::{render_dashboard, RendererConfig};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    init_tracing();

    let config = RendererConfig::load()?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        env = if RendererConfig::is_production() { "production" } else { "development" },
        "Starting FitTrack renderer"
    );

    let json = render_dashboard(&config)?;
    println!("{json}");

    Ok(())
}

/// Initialize tracing/logging
///
/// Logs go to stderr so stdout carries only the dashboard JSON.
fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if RendererConfig::is_production() {
            "fittrack_renderer=info,fittrack_shared=info".into()
        } else {
            "fittrack_renderer=debug,fittrack_shared=debug".into()
        }
    });

    let subscriber = tracing_subscriber::registry().with(env_filter);

    if RendererConfig::is_production() {
        subscriber
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        subscriber
            .with(tracing_subscriber::fmt::layer().pretty().with_writer(std::io::stderr))
            .init();
    }
}
