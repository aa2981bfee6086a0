//! Dashboard assembly
//!
//! Computes every widget for a profile in one pass, the way the page does
//! when it loads.

use rand::Rng;
use serde::Serialize;
use tracing::info;

use crate::charts::{bmi_chart, calorie_chart, macro_chart, progress_chart, water_chart, ChartConfig};
use crate::diet::{diet_plan, DietPlan};
use crate::errors::Result;
use crate::exercise::{recommend_exercises, ExercisePlan, ExerciseProfile};
use crate::health_metrics::{assess, calculate_bmi, HealthAssessment};
use crate::models::ProfileInput;
use crate::widgets::{WaterFillAnimation, WaterFrame};

#[derive(Debug, Clone, Serialize)]
pub struct DashboardCharts {
    pub progress: ChartConfig,
    pub calories: ChartConfig,
    pub water: ChartConfig,
    pub bmi: ChartConfig,
    pub macros: ChartConfig,
}

#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    pub profile: ProfileInput,
    pub assessment: HealthAssessment,
    pub charts: DashboardCharts,
    pub diet: DietPlan,
    pub exercise: ExercisePlan,
    pub water_fill: Vec<WaterFrame>,
}

impl Dashboard {
    /// Validate the profile and build every dashboard widget
    pub fn build<R: Rng + ?Sized>(profile: &ProfileInput, rng: &mut R) -> Result<Self> {
        let assessment = assess(profile)?;
        let diet = diet_plan(assessment.goal_type, assessment.calorie_target)?;

        let charts = DashboardCharts {
            progress: progress_chart(profile.weight_kg, profile.goal_weight_kg)?,
            calories: calorie_chart(assessment.calorie_target)?,
            water: water_chart(assessment.water_liters)?,
            bmi: bmi_chart(assessment.bmi)?,
            macros: macro_chart(diet.macros)?,
        };

        // Exercise thresholds compare against the unrounded BMI
        let exercise = recommend_exercises(
            &ExerciseProfile {
                goal: assessment.goal_type,
                bmi: calculate_bmi(profile.weight_kg, profile.height_cm),
                age: profile.age,
                activity_level: profile.activity_level,
            },
            rng,
        );

        let water_fill = WaterFillAnimation::new(assessment.water_liters)?.collect();

        info!(
            goal = %assessment.goal_type,
            calorie_target = assessment.calorie_target,
            exercises = exercise.exercises.len(),
            "Dashboard built"
        );

        Ok(Self {
            profile: profile.clone(),
            assessment,
            charts,
            diet,
            exercise,
            water_fill,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::FitError;
    use crate::models::{ActivityLevel, GoalType};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_build_default_profile() {
        let mut rng = StdRng::seed_from_u64(42);
        let dashboard = Dashboard::build(&ProfileInput::default(), &mut rng).unwrap();

        assert_eq!(dashboard.assessment.goal_type, GoalType::Loss);
        assert_eq!(dashboard.charts.progress.data.labels.len(), 12);
        assert_eq!(dashboard.charts.calories.values(), &[565.0, 791.0, 678.0, 226.0]);
        assert_eq!(dashboard.charts.water.data.labels.len(), 16);
        assert_eq!(dashboard.charts.macros.data.labels.len(), 3);
        assert!(!dashboard.water_fill.is_empty());
        assert_eq!(dashboard.exercise.exercises.len(), 6);
    }

    #[test]
    fn test_build_rejects_invalid_profile() {
        let profile = ProfileInput {
            age: 8,
            ..ProfileInput::default()
        };
        let err = Dashboard::build(&profile, &mut StdRng::seed_from_u64(1)).unwrap_err();
        assert!(matches!(err, FitError::Validation(_)));
        assert_eq!(err.to_string(), "Please enter a valid age between 12 and 100.");
    }

    #[test]
    fn test_bmi_just_over_threshold_avoids_high_impact() {
        // 120.01kg at 200cm is BMI 30.0025, shown as 30.0
        let profile = ProfileInput {
            weight_kg: 120.01,
            goal_weight_kg: 100.0,
            height_cm: 200.0,
            activity_level: ActivityLevel::Active,
            ..ProfileInput::default()
        };
        for seed in 0..100 {
            let dashboard = Dashboard::build(&profile, &mut StdRng::seed_from_u64(seed)).unwrap();
            assert_eq!(dashboard.assessment.bmi, 30.0);
            assert!(dashboard
                .exercise
                .exercises
                .iter()
                .all(|e| e.name != "Running" && e.name != "Jumping Rope"));
        }
    }

    #[test]
    fn test_dashboard_serializes() {
        let dashboard =
            Dashboard::build(&ProfileInput::default(), &mut StdRng::seed_from_u64(5)).unwrap();
        let json = serde_json::to_value(&dashboard).unwrap();
        assert_eq!(json["charts"]["bmi"]["type"], "bar");
        assert_eq!(json["assessment"]["goal_type"], "loss");
    }
}
