//! Input validation functions
//!
//! Range checks for the profile form. The `validator` derive on
//! [`ProfileInput`] flags out-of-range fields; NaN and infinities are caught
//! here since they slip through plain range comparisons.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;
use validator::Validate;

use crate::models::ProfileInput;

pub const AGE_RANGE: (u32, u32) = (12, 100);
pub const WEIGHT_RANGE_KG: (f64, f64) = (30.0, 300.0);
pub const HEIGHT_RANGE_CM: (f64, f64) = (100.0, 250.0);

/// Profile form fields in the order their messages are reported
pub const FORM_FIELDS: &[&str] = &["age", "weight_kg", "goal_weight_kg", "height_cm"];

/// Validate a body weight (current or goal) in kg
pub fn validate_weight_kg(field: &str, weight_kg: f64) -> Result<(), String> {
    if !in_range(weight_kg, WEIGHT_RANGE_KG) {
        return Err(range_message(field));
    }
    Ok(())
}

fn in_range(value: f64, (min, max): (f64, f64)) -> bool {
    value.is_finite() && value >= min && value <= max
}

/// User-facing rejection text for a form field
pub fn range_message(field: &str) -> String {
    match field {
        "age" => format!(
            "Please enter a valid age between {} and {}.",
            AGE_RANGE.0, AGE_RANGE.1
        ),
        "weight_kg" | "current_weight_kg" => format!(
            "Please enter a valid weight between {}kg and {}kg.",
            WEIGHT_RANGE_KG.0, WEIGHT_RANGE_KG.1
        ),
        "goal_weight_kg" => format!(
            "Please enter a valid goal weight between {}kg and {}kg.",
            WEIGHT_RANGE_KG.0, WEIGHT_RANGE_KG.1
        ),
        "height_cm" => format!(
            "Please enter a valid height between {}cm and {}cm.",
            HEIGHT_RANGE_CM.0, HEIGHT_RANGE_CM.1
        ),
        other => format!("Please enter a valid {}.", get_field_display_label(other)),
    }
}

/// Map technical field names to user-friendly display labels
pub fn get_field_display_label(field_name: &str) -> &str {
    match field_name {
        "age" => "Age",
        "weight_kg" | "current_weight_kg" => "Current Weight",
        "goal_weight_kg" => "Goal Weight",
        "height_cm" => "Height",
        "sex" => "Biological Sex",
        "activity_level" => "Activity Level",
        _ => field_name,
    }
}

/// Validation error with field context
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
    pub display_label: String,
}

impl ValidationError {
    pub fn new(field: &str, message: &str) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
            display_label: get_field_display_label(field).to_string(),
        }
    }

    /// Out-of-range error carrying the standard form message
    pub fn out_of_range(field: &str) -> Self {
        Self::new(field, &range_message(field))
    }
}

/// Every field that failed validation, in form order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationFailure {
    pub errors: Vec<ValidationError>,
}

impl ValidationFailure {
    pub fn single(error: ValidationError) -> Self {
        Self {
            errors: vec![error],
        }
    }

    pub fn fields(&self) -> Vec<&str> {
        self.errors.iter().map(|e| e.field.as_str()).collect()
    }
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = self.errors.iter().map(|e| e.message.as_str()).collect();
        write!(f, "{}", messages.join(" "))
    }
}

impl std::error::Error for ValidationFailure {}

/// Validate the whole profile form, collecting every failing field
pub fn validate_profile(profile: &ProfileInput) -> Result<(), ValidationFailure> {
    let flagged: Vec<String> = match profile.validate() {
        Ok(()) => Vec::new(),
        Err(errors) => errors.field_errors().keys().map(|k| k.to_string()).collect(),
    };

    let finite = [
        true,
        profile.weight_kg.is_finite(),
        profile.goal_weight_kg.is_finite(),
        profile.height_cm.is_finite(),
    ];

    let errors: Vec<ValidationError> = FORM_FIELDS
        .iter()
        .zip(finite)
        .filter(|(field, is_finite)| !is_finite || flagged.iter().any(|f| f == *field))
        .map(|(field, _)| ValidationError::out_of_range(field))
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        warn!(fields = ?errors.iter().map(|e| &e.field).collect::<Vec<_>>(), "Profile rejected");
        Err(ValidationFailure { errors })
    }
}
