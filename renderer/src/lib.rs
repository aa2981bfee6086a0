//! FitTrack Renderer
//!
//! Renders the dashboard for a configured profile as JSON, without a browser.

pub mod config;
pub mod render;

pub use config::RendererConfig;
pub use render::{build_dashboard, render_dashboard, RenderError};
