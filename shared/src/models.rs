//! Data models for the FitTrack dashboard

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use validator::Validate;

use crate::errors::FitError;

/// Biological sex for physiological calculations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BiologicalSex {
    #[default]
    Male,
    Female,
}

impl FromStr for BiologicalSex {
    type Err = FitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "male" => Ok(BiologicalSex::Male),
            "female" => Ok(BiologicalSex::Female),
            other => Err(FitError::invalid(
                "sex",
                format!("must be \"male\" or \"female\", got \"{}\"", other),
            )),
        }
    }
}

/// Self-reported activity level from the profile form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days/week
    Light,
    /// Moderate exercise 3-5 days/week
    #[default]
    Moderate,
    /// Hard exercise 6-7 days/week
    Active,
    /// Very hard exercise or physical job
    VeryActive,
}

impl ActivityLevel {
    /// Multiplier applied to BMR to get TDEE
    pub fn tdee_factor(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Active => 1.725,
            ActivityLevel::VeryActive => 1.9,
        }
    }

    /// Multiplier applied to the weight-based water baseline
    pub fn water_factor(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.0,
            ActivityLevel::Light => 1.1,
            ActivityLevel::Moderate => 1.2,
            ActivityLevel::Active => 1.3,
            ActivityLevel::VeryActive => 1.4,
        }
    }

    /// Beginners get the gentler exercise pool
    pub fn is_beginner(&self) -> bool {
        matches!(self, ActivityLevel::Sedentary | ActivityLevel::Light)
    }
}

impl FromStr for ActivityLevel {
    type Err = FitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sedentary" => Ok(ActivityLevel::Sedentary),
            "light" => Ok(ActivityLevel::Light),
            "moderate" => Ok(ActivityLevel::Moderate),
            "active" => Ok(ActivityLevel::Active),
            "very_active" => Ok(ActivityLevel::VeryActive),
            other => Err(FitError::invalid(
                "activity_level",
                format!("is not a known activity level: \"{}\"", other),
            )),
        }
    }
}

/// Direction of the user's weight goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalType {
    Loss,
    Gain,
    Maintain,
}

impl GoalType {
    /// Derive the goal from `goal_weight - current_weight`
    pub fn from_weight_diff(diff_kg: f64) -> Self {
        if diff_kg < 0.0 {
            GoalType::Loss
        } else if diff_kg > 0.0 {
            GoalType::Gain
        } else {
            GoalType::Maintain
        }
    }
}

impl fmt::Display for GoalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GoalType::Loss => "loss",
            GoalType::Gain => "gain",
            GoalType::Maintain => "maintain",
        };
        write!(f, "{}", s)
    }
}

/// Profile form input
///
/// Range checks run through [`crate::validation::validate_profile`], which
/// reports every failing field in form order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct ProfileInput {
    #[validate(range(min = 12, max = 100))]
    pub age: u32,
    #[validate(range(min = 30.0, max = 300.0))]
    pub weight_kg: f64,
    #[validate(range(min = 30.0, max = 300.0))]
    pub goal_weight_kg: f64,
    #[validate(range(min = 100.0, max = 250.0))]
    pub height_cm: f64,
    #[serde(default)]
    pub sex: BiologicalSex,
    #[serde(default)]
    pub activity_level: ActivityLevel,
}

impl Default for ProfileInput {
    fn default() -> Self {
        Self {
            age: 30,
            weight_kg: 80.0,
            goal_weight_kg: 75.0,
            height_cm: 180.0,
            sex: BiologicalSex::Male,
            activity_level: ActivityLevel::Moderate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_goal_type_from_diff() {
        assert_eq!(GoalType::from_weight_diff(-5.0), GoalType::Loss);
        assert_eq!(GoalType::from_weight_diff(3.0), GoalType::Gain);
        assert_eq!(GoalType::from_weight_diff(0.0), GoalType::Maintain);
    }

    #[test]
    fn test_activity_factors_increase() {
        let levels = [
            ActivityLevel::Sedentary,
            ActivityLevel::Light,
            ActivityLevel::Moderate,
            ActivityLevel::Active,
            ActivityLevel::VeryActive,
        ];
        for pair in levels.windows(2) {
            assert!(pair[1].tdee_factor() > pair[0].tdee_factor());
            assert!(pair[1].water_factor() > pair[0].water_factor());
        }
    }

    #[test]
    fn test_profile_deserializes_with_defaults() {
        let profile: ProfileInput = serde_json::from_str(
            r#"{"age": 25, "weight_kg": 60.0, "goal_weight_kg": 65.0, "height_cm": 165.0}"#,
        )
        .unwrap();
        assert_eq!(profile.sex, BiologicalSex::Male);
        assert_eq!(profile.activity_level, ActivityLevel::Moderate);
    }

    #[test]
    fn test_form_values_parse() {
        assert_eq!("female".parse::<BiologicalSex>().unwrap(), BiologicalSex::Female);
        assert_eq!("male".parse::<BiologicalSex>().unwrap(), BiologicalSex::Male);
        assert_eq!(
            "very_active".parse::<ActivityLevel>().unwrap(),
            ActivityLevel::VeryActive
        );
    }

    #[test]
    fn test_unknown_form_values_rejected() {
        let err = "M".parse::<BiologicalSex>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid input: sex must be \"male\" or \"female\", got \"M\""
        );
        let err = "athletic".parse::<ActivityLevel>().unwrap_err();
        assert!(matches!(err, FitError::InvalidInput { field: "activity_level", .. }));
    }

    #[test]
    fn test_activity_level_serde_names() {
        let json = serde_json::to_string(&ActivityLevel::VeryActive).unwrap();
        assert_eq!(json, "\"very_active\"");
        let level: ActivityLevel = serde_json::from_str("\"light\"").unwrap();
        assert_eq!(level, ActivityLevel::Light);
    }
}
