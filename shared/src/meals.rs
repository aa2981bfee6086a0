//! Caloric distribution across the four daily meal slots

use serde::{Deserialize, Serialize};

use crate::errors::{ensure_positive, Result};
use crate::rounding::round_half_up;

/// A daily meal slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Meal {
    Breakfast,
    Lunch,
    Dinner,
    Snacks,
}

impl Meal {
    pub fn label(&self) -> &'static str {
        match self {
            Meal::Breakfast => "Breakfast",
            Meal::Lunch => "Lunch",
            Meal::Dinner => "Dinner",
            Meal::Snacks => "Snacks",
        }
    }

    /// Share of the daily calorie target
    pub fn portion(&self) -> f64 {
        MEAL_PORTIONS
            .iter()
            .find(|(meal, _)| meal == self)
            .map(|(_, portion)| *portion)
            .unwrap_or(0.0)
    }
}

/// Fixed split of the daily target, in display order
pub const MEAL_PORTIONS: [(Meal, f64); 4] = [
    (Meal::Breakfast, 0.25),
    (Meal::Lunch, 0.35),
    (Meal::Dinner, 0.30),
    (Meal::Snacks, 0.10),
];

/// Calories assigned to one meal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealAllocation {
    pub meal: Meal,
    pub calories: i64,
}

/// Split a daily target across meals.
///
/// Each slot is rounded on its own, so the sum may drift from the target
/// by a calorie or two.
pub fn split_calories(target: f64) -> Result<[MealAllocation; 4]> {
    let target = ensure_positive("calorie_target", target)?;
    Ok(MEAL_PORTIONS.map(|(meal, portion)| MealAllocation {
        meal,
        calories: round_half_up(target * portion) as i64,
    }))
}
