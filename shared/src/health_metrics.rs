//! Health metrics calculations module
//!
//! BMI and its four display bands, Mifflin-St Jeor BMR, TDEE, the daily
//! calorie target and the recommended water intake derived from the
//! profile form.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{ensure_positive, Result};
use crate::models::{ActivityLevel, BiologicalSex, GoalType, ProfileInput};
use crate::rounding::round_ties_even_to;
use crate::validation::{validate_profile, ValidationFailure};

// ============================================================================
// BMI
// ============================================================================

/// BMI category shown on the dashboard bar chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

/// One band of the BMI chart
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BmiBand {
    pub category: BmiCategory,
    /// Inclusive upper bound; `INFINITY` for the last band
    pub upper_bound: f64,
    /// Fixed bar height drawn for the band
    pub display_value: f64,
    pub color: &'static str,
}

/// Contiguous, exhaustive bands in ascending order
pub const BMI_BANDS: [BmiBand; 4] = [
    BmiBand {
        category: BmiCategory::Underweight,
        upper_bound: 18.5,
        display_value: 16.0,
        color: "#FFC107",
    },
    BmiBand {
        category: BmiCategory::Normal,
        upper_bound: 24.9,
        display_value: 21.7,
        color: "#4CAF50",
    },
    BmiBand {
        category: BmiCategory::Overweight,
        upper_bound: 29.9,
        display_value: 27.5,
        color: "#FF9800",
    },
    BmiBand {
        category: BmiCategory::Obese,
        upper_bound: f64::INFINITY,
        display_value: 35.0,
        color: "#F44336",
    },
];

impl BmiCategory {
    pub fn label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }

    /// Position of this category in [`BMI_BANDS`]
    pub fn index(&self) -> usize {
        match self {
            BmiCategory::Underweight => 0,
            BmiCategory::Normal => 1,
            BmiCategory::Overweight => 2,
            BmiCategory::Obese => 3,
        }
    }

    pub fn band(&self) -> &'static BmiBand {
        &BMI_BANDS[self.index()]
    }
}

/// Calculate BMI from weight and height
///
/// Formula: BMI = weight(kg) / height(m)²
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

/// Classify a BMI value into the first band whose upper bound covers it
pub fn classify_bmi(bmi: f64) -> Result<BmiCategory> {
    let bmi = ensure_positive("bmi", bmi)?;
    let category = BMI_BANDS
        .iter()
        .find(|band| bmi <= band.upper_bound)
        .map(|band| band.category)
        .unwrap_or(BmiCategory::Obese);
    Ok(category)
}

// ============================================================================
// BMR, TDEE and calorie target
// ============================================================================

/// Calculate Basal Metabolic Rate using Mifflin-St Jeor equation
///
/// Men: BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) + 5
/// Women: BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) - 161
pub fn calculate_bmr_mifflin(weight_kg: f64, height_cm: f64, age_years: u32, sex: BiologicalSex) -> f64 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * age_years as f64;
    match sex {
        BiologicalSex::Male => base + 5.0,
        BiologicalSex::Female => base - 161.0,
    }
}

/// Total Daily Energy Expenditure, rounded to whole calories
pub fn calculate_tdee(bmr: f64, activity_level: ActivityLevel) -> f64 {
    (bmr * activity_level.tdee_factor()).round_ties_even()
}

/// Floor applied to weight-loss targets
pub const MIN_LOSS_CALORIES: f64 = 1200.0;

/// Daily deficit/surplus for roughly 0.5 kg per week
pub const DAILY_CALORIE_ADJUSTMENT: f64 = 500.0;

/// Daily calorie target for a goal, from unrounded TDEE
pub fn calorie_target(tdee: f64, goal: GoalType) -> f64 {
    match goal {
        GoalType::Loss => (tdee - DAILY_CALORIE_ADJUSTMENT)
            .round_ties_even()
            .max(MIN_LOSS_CALORIES),
        GoalType::Gain => (tdee + DAILY_CALORIE_ADJUSTMENT).round_ties_even(),
        GoalType::Maintain => tdee.round_ties_even(),
    }
}

/// Weekly weight change assumed by the projection and the time estimate
pub const WEEKLY_CHANGE_KG: f64 = 0.5;

/// Whole weeks needed to reach the goal at [`WEEKLY_CHANGE_KG`]
pub fn weeks_to_goal(current_kg: f64, goal_kg: f64) -> u32 {
    let diff = (goal_kg - current_kg).abs();
    if diff == 0.0 {
        return 0;
    }
    (diff / WEEKLY_CHANGE_KG).round_ties_even() as u32
}

// ============================================================================
// Hydration
// ============================================================================

/// Baseline water intake per kg of body weight
pub const WATER_ML_PER_KG: f64 = 35.0;

/// Recommended daily water intake in liters, one decimal
pub fn recommended_water_liters(weight_kg: f64, activity_level: ActivityLevel) -> f64 {
    let adjusted_ml = weight_kg * WATER_ML_PER_KG * activity_level.water_factor();
    round_ties_even_to(adjusted_ml / 1000.0, 1)
}

// ============================================================================
// Assessment
// ============================================================================

/// Everything the dashboard derives from a validated profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthAssessment {
    /// BMI rounded to two decimals
    pub bmi: f64,
    pub bmi_category: BmiCategory,
    pub bmr: f64,
    pub tdee: f64,
    pub calorie_target: f64,
    pub goal_type: GoalType,
    pub weeks_to_goal: u32,
    pub water_liters: f64,
}

/// Validate the profile and derive its health figures
pub fn assess(profile: &ProfileInput) -> std::result::Result<HealthAssessment, ValidationFailure> {
    validate_profile(profile)?;

    let bmi = round_ties_even_to(calculate_bmi(profile.weight_kg, profile.height_cm), 2);
    let bmr = calculate_bmr_mifflin(
        profile.weight_kg,
        profile.height_cm,
        profile.age,
        profile.sex,
    );
    let raw_tdee = bmr * profile.activity_level.tdee_factor();
    let goal_type = GoalType::from_weight_diff(profile.goal_weight_kg - profile.weight_kg);

    let assessment = HealthAssessment {
        bmi,
        // Validated height and weight keep BMI within (0, 300]
        bmi_category: classify_bmi(bmi).unwrap_or(BmiCategory::Obese),
        bmr,
        tdee: calculate_tdee(bmr, profile.activity_level),
        calorie_target: calorie_target(raw_tdee, goal_type),
        goal_type,
        weeks_to_goal: weeks_to_goal(profile.weight_kg, profile.goal_weight_kg),
        water_liters: recommended_water_liters(profile.weight_kg, profile.activity_level),
    };

    debug!(
        bmi = assessment.bmi,
        tdee = assessment.tdee,
        calorie_target = assessment.calorie_target,
        goal = %assessment.goal_type,
        "Profile assessed"
    );

    Ok(assessment)
}
