//! FitTrack Shared Library
//!
//! The computation core behind the FitTrack dashboard: profile validation,
//! health metrics, the numeric series behind each chart, and the chart
//! configurations themselves. Used by the WASM module and the native
//! renderer.

pub mod charts;
pub mod dashboard;
pub mod diet;
pub mod errors;
pub mod exercise;
pub mod health_metrics;
pub mod hydration;
pub mod macronutrients;
pub mod meals;
pub mod models;
pub mod projection;
pub mod rounding;
pub mod validation;
pub mod widgets;

// Re-export commonly used items
pub use charts::{ChartConfig, ChartKind};
pub use dashboard::Dashboard;
pub use errors::{FitError, Result};
pub use health_metrics::*;
pub use hydration::{hydration_curve, HydrationPoint};
pub use macronutrients::{convert_macros, MacroEnergyBreakdown, MacroGrams};
pub use meals::{split_calories, Meal, MealAllocation};
pub use models::{ActivityLevel, BiologicalSex, GoalType, ProfileInput};
pub use projection::{project_weight, SampleLabel, WeightSample};
pub use validation::{validate_profile, ValidationError, ValidationFailure};
