//! Dashboard rendering
//!
//! Builds the dashboard for the configured profile and serializes it as the
//! JSON document the page loads.

use fittrack_shared::{Dashboard, FitError};
use rand::rngs::StdRng;
use rand::SeedableRng;
use thiserror::Error;
use tracing::{debug, info};

use crate::config::RendererConfig;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error(transparent)]
    Fit(#[from] FitError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Generator for exercise picks: seeded when configured, entropy otherwise
fn exercise_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => {
            debug!(seed, "Using seeded exercise selection");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    }
}

/// Build the dashboard for `config.profile`
pub fn build_dashboard(config: &RendererConfig) -> Result<Dashboard, RenderError> {
    let mut rng = exercise_rng(config.exercise.seed);
    Ok(Dashboard::build(&config.profile, &mut rng)?)
}

/// Build the dashboard and serialize it to JSON
pub fn render_dashboard(config: &RendererConfig) -> Result<String, RenderError> {
    let dashboard = build_dashboard(config)?;

    let json = if config.output.pretty {
        serde_json::to_string_pretty(&dashboard)?
    } else {
        serde_json::to_string(&dashboard)?
    };

    info!(bytes = json.len(), "Dashboard rendered");
    Ok(json)
}
