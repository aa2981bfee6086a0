//! Weekly weight projection
//!
//! Projects the weight curve from the current weight toward the goal at
//! 0.5 kg per week. The series always ends with the goal weight verbatim,
//! so a goal that is not a multiple of 0.5 kg away shows a short final
//! step (or a plateau when the last week already lands on it).

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::Result;
use crate::health_metrics::WEEKLY_CHANGE_KG;
use crate::rounding::round_half_up_1dp;
use crate::validation::{validate_weight_kg, ValidationError, ValidationFailure};

/// Position of a sample in the projected series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "week", rename_all = "lowercase")]
pub enum SampleLabel {
    Now,
    Week(u32),
    Goal,
}

impl std::fmt::Display for SampleLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SampleLabel::Now => write!(f, "Now"),
            SampleLabel::Week(n) => write!(f, "Week {}", n),
            SampleLabel::Goal => write!(f, "Goal"),
        }
    }
}

/// One point of the projected weight curve
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightSample {
    pub label: SampleLabel,
    pub weight_kg: f64,
}

fn check_weight(field: &str, weight_kg: f64) -> Result<()> {
    validate_weight_kg(field, weight_kg)
        .map_err(|message| ValidationFailure::single(ValidationError::new(field, &message)).into())
}

/// Project weekly weights from `current_kg` to `goal_kg`
pub fn project_weight(current_kg: f64, goal_kg: f64) -> Result<Vec<WeightSample>> {
    check_weight("weight_kg", current_kg)?;
    check_weight("goal_weight_kg", goal_kg)?;

    let delta = goal_kg - current_kg;
    let step = WEEKLY_CHANGE_KG.copysign(delta);
    let weeks = (delta.abs() / WEEKLY_CHANGE_KG).ceil() as u32;

    let mut samples = Vec::with_capacity(weeks as usize + 2);
    samples.push(WeightSample {
        label: SampleLabel::Now,
        weight_kg: current_kg,
    });
    samples.extend((1..=weeks).map(|week| WeightSample {
        label: SampleLabel::Week(week),
        weight_kg: round_half_up_1dp(current_kg + step * week as f64),
    }));
    samples.push(WeightSample {
        label: SampleLabel::Goal,
        weight_kg: goal_kg,
    });

    debug!(current_kg, goal_kg, weeks, "Weight projection built");
    Ok(samples)
}

/// Suggested y-axis bounds for the progress chart
pub fn axis_bounds(current_kg: f64, goal_kg: f64) -> (f64, f64) {
    (current_kg.min(goal_kg) - 2.0, current_kg.max(goal_kg) + 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::FitError;
    use proptest::prelude::*;

    #[test]
    fn test_loss_projection() {
        let samples = project_weight(80.0, 75.0).unwrap();
        assert_eq!(samples.len(), 12);
        assert_eq!(samples[0].label, SampleLabel::Now);
        assert_eq!(samples[0].weight_kg, 80.0);
        assert_eq!(samples[1].label, SampleLabel::Week(1));
        assert_eq!(samples[1].weight_kg, 79.5);
        assert_eq!(samples[10].weight_kg, 75.0);
        let last = samples.last().unwrap();
        assert_eq!(last.label, SampleLabel::Goal);
        assert_eq!(last.weight_kg, 75.0);
    }

    #[test]
    fn test_identity_projection() {
        let samples = project_weight(70.0, 70.0).unwrap();
        assert_eq!(
            samples,
            vec![
                WeightSample { label: SampleLabel::Now, weight_kg: 70.0 },
                WeightSample { label: SampleLabel::Goal, weight_kg: 70.0 },
            ]
        );
    }

    #[test]
    fn test_gain_overshoot_is_kept() {
        // 1.2 kg gain -> 3 weeks, the third overshoots to 61.5 before the goal
        let samples = project_weight(60.0, 61.2).unwrap();
        let weights: Vec<f64> = samples.iter().map(|s| s.weight_kg).collect();
        assert_eq!(weights, vec![60.0, 60.5, 61.0, 61.5, 61.2]);
    }

    #[test]
    fn test_labels_render() {
        let labels: Vec<String> = project_weight(80.0, 79.0)
            .unwrap()
            .iter()
            .map(|s| s.label.to_string())
            .collect();
        assert_eq!(labels, vec!["Now", "Week 1", "Week 2", "Goal"]);
    }

    #[test]
    fn test_out_of_range_weight_rejected() {
        let err = project_weight(25.0, 75.0).unwrap_err();
        match err {
            FitError::Validation(failure) => assert_eq!(failure.fields(), vec!["weight_kg"]),
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(project_weight(80.0, f64::NAN).is_err());
    }

    #[test]
    fn test_axis_bounds() {
        assert_eq!(axis_bounds(80.0, 75.0), (73.0, 82.0));
        assert_eq!(axis_bounds(60.0, 65.0), (58.0, 67.0));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_endpoints_and_length(current in 30.0f64..=300.0, goal in 30.0f64..=300.0) {
            let samples = project_weight(current, goal).unwrap();
            let weeks = ((goal - current).abs() / 0.5).ceil() as usize;
            prop_assert_eq!(samples.len(), weeks + 2);
            prop_assert_eq!(samples[0].weight_kg, current);
            prop_assert_eq!(samples[samples.len() - 1].weight_kg, goal);
        }

        #[test]
        fn prop_weekly_steps_move_toward_goal(current in 40.0f64..=150.0, goal in 40.0f64..=150.0) {
            let samples = project_weight(current, goal).unwrap();
            let weekly = &samples[1..samples.len() - 1];
            for pair in weekly.windows(2) {
                let step = pair[1].weight_kg - pair[0].weight_kg;
                prop_assert!((step.abs() - 0.5).abs() < 0.11);
                prop_assert!(step.signum() == (goal - current).signum());
            }
        }
    }
}
