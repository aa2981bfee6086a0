//! Hourly hydration curve
//!
//! Cumulative ideal intake over the sixteen waking hours from 8am to 11pm.
//! The hourly tiers front-load the morning and add up to 108% of the
//! recommended volume, so the curve ends above the daily recommendation.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{ensure_positive, Result};
use crate::rounding::round_half_up_1dp;

/// First waking hour on the curve
pub const FIRST_HOUR: u32 = 8;

/// Number of hourly points
pub const HOURS: usize = 16;

/// Hourly rate tiers as (first index, last index, share of daily volume)
pub const HOURLY_TIERS: [(usize, usize, f64); 4] = [
    (0, 3, 0.10),
    (4, 7, 0.08),
    (8, 11, 0.06),
    (12, 15, 0.03),
];

/// One hour on the cumulative curve
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HydrationPoint {
    pub hour: String,
    pub cumulative_liters: f64,
}

/// Share of the daily volume consumed during the hour at `index`
pub fn hourly_rate(index: usize) -> f64 {
    HOURLY_TIERS
        .iter()
        .find(|(first, last, _)| (*first..=*last).contains(&index))
        .map(|(_, _, rate)| *rate)
        .unwrap_or(0.0)
}

/// Clock label such as `8am` or `12pm`
pub fn hour_label(index: usize) -> String {
    NaiveTime::from_hms_opt(FIRST_HOUR + index as u32, 0, 0)
        .map(|t| t.format("%-I%P").to_string())
        .unwrap_or_default()
}

/// Build the cumulative curve for a daily recommendation in liters
pub fn hydration_curve(recommended_liters: f64) -> Result<Vec<HydrationPoint>> {
    let recommended_ml = ensure_positive("recommended_water", recommended_liters)? * 1000.0;

    let mut cumulative_ml = 0.0;
    let points: Vec<HydrationPoint> = (0..HOURS)
        .map(|index| {
            cumulative_ml += recommended_ml * hourly_rate(index);
            HydrationPoint {
                hour: hour_label(index),
                cumulative_liters: round_half_up_1dp(cumulative_ml / 1000.0),
            }
        })
        .collect();

    debug!(recommended_liters, points = points.len(), "Hydration curve built");
    Ok(points)
}

/// Upper bound of the water chart's y-axis
pub fn axis_max(recommended_liters: f64) -> f64 {
    recommended_liters.ceil()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_hour_labels() {
        let labels: Vec<String> = (0..HOURS).map(hour_label).collect();
        assert_eq!(
            labels,
            vec![
                "8am", "9am", "10am", "11am", "12pm", "1pm", "2pm", "3pm", "4pm", "5pm", "6pm",
                "7pm", "8pm", "9pm", "10pm", "11pm"
            ]
        );
    }

    #[test]
    fn test_tiers() {
        assert_eq!(hourly_rate(0), 0.10);
        assert_eq!(hourly_rate(4), 0.08);
        assert_eq!(hourly_rate(11), 0.06);
        assert_eq!(hourly_rate(15), 0.03);
        assert_eq!(hourly_rate(16), 0.0);
        let total: f64 = (0..HOURS).map(hourly_rate).sum();
        assert!((total - 1.08).abs() < 1e-9);
    }

    #[test]
    fn test_two_liter_curve() {
        let curve = hydration_curve(2.0).unwrap();
        assert_eq!(curve.len(), 16);
        assert_eq!(curve[0].cumulative_liters, 0.2);
        assert_eq!(curve[3].cumulative_liters, 0.8);
        assert_eq!(curve[15].hour, "11pm");
        assert_eq!(curve[15].cumulative_liters, 2.2);
    }

    #[test]
    fn test_overshoot_is_not_capped() {
        let curve = hydration_curve(3.0).unwrap();
        // 3.0 L * 108% = 3.24 L
        assert_eq!(curve[15].cumulative_liters, 3.2);
        assert!(curve[15].cumulative_liters > 3.0);
        assert_eq!(axis_max(3.0), 3.0);
    }

    #[test]
    fn test_invalid_volume_rejected() {
        assert!(hydration_curve(0.0).is_err());
        assert!(hydration_curve(f64::INFINITY).is_err());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_curve_non_decreasing(liters in 0.5f64..8.0) {
            let curve = hydration_curve(liters).unwrap();
            for pair in curve.windows(2) {
                prop_assert!(pair[1].cumulative_liters >= pair[0].cumulative_liters);
            }
        }
    }
}
