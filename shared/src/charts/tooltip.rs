//! Tooltip text builders
//!
//! Plain formatting over (label, value, total); percentages go through
//! [`percent_share`] so an all-zero chart reads 0% instead of NaN.

use crate::macronutrients::percent_share;

pub fn weight_label(weight_kg: f64) -> String {
    format!("Weight: {}kg", weight_kg)
}

pub fn water_label(liters: f64) -> String {
    format!("Water: {}L", liters)
}

pub fn meal_calories_label(label: &str, calories: f64, total: f64) -> String {
    format!(
        "{}: {} calories ({}%)",
        label,
        calories,
        percent_share(calories, total)
    )
}

pub fn macro_share_label(label: &str, calories: f64, total: f64) -> String {
    format!(
        "{}: {}% ({} calories)",
        label,
        percent_share(calories, total),
        calories
    )
}

pub fn grams_label(grams: f64) -> String {
    format!("{}g", grams)
}

pub fn your_bmi_label(bmi: f64) -> String {
    format!("Your BMI: {}", bmi)
}
