//! Macro-nutrient energy conversion

use serde::{Deserialize, Serialize};

use crate::errors::{ensure_non_negative, Result};
use crate::rounding::round_half_up;

/// A macro-nutrient with a fixed energy density
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Macro {
    Protein,
    Fat,
    Carbs,
}

impl Macro {
    pub const ALL: [Macro; 3] = [Macro::Protein, Macro::Fat, Macro::Carbs];

    /// kcal per gram
    pub fn kcal_per_gram(&self) -> f64 {
        match self {
            Macro::Protein => 4.0,
            Macro::Fat => 9.0,
            Macro::Carbs => 4.0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Macro::Protein => "Protein",
            Macro::Fat => "Fat",
            Macro::Carbs => "Carbs",
        }
    }
}

/// Daily macro amounts in grams
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroGrams {
    pub protein: f64,
    pub fat: f64,
    pub carbs: f64,
}

impl MacroGrams {
    pub fn grams(&self, nutrient: Macro) -> f64 {
        match nutrient {
            Macro::Protein => self.protein,
            Macro::Fat => self.fat,
            Macro::Carbs => self.carbs,
        }
    }
}

/// Calories contributed by one macro and its share of the total
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroContribution {
    pub nutrient: Macro,
    pub grams: f64,
    pub calories: f64,
    /// Whole percent, rounded independently of the other shares
    pub percent: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacroEnergyBreakdown {
    pub contributions: [MacroContribution; 3],
    pub total_calories: f64,
}

impl MacroEnergyBreakdown {
    pub fn contribution(&self, nutrient: Macro) -> &MacroContribution {
        // ALL and contributions share the same order
        &self.contributions[Macro::ALL.iter().position(|m| *m == nutrient).unwrap_or(0)]
    }
}

/// Whole-percent share of `value` in `total`; zero when the total is zero
pub fn percent_share(value: f64, total: f64) -> u32 {
    if total <= 0.0 {
        return 0;
    }
    round_half_up(value / total * 100.0) as u32
}

/// Convert gram amounts into calorie contributions
pub fn convert_macros(grams: MacroGrams) -> Result<MacroEnergyBreakdown> {
    ensure_non_negative("protein", grams.protein)?;
    ensure_non_negative("fat", grams.fat)?;
    ensure_non_negative("carbs", grams.carbs)?;

    let calories_of = |m: Macro| grams.grams(m) * m.kcal_per_gram();
    let total_calories: f64 = Macro::ALL.iter().map(|m| calories_of(*m)).sum();

    let contributions = Macro::ALL.map(|nutrient| {
        let calories = calories_of(nutrient);
        MacroContribution {
            nutrient,
            grams: grams.grams(nutrient),
            calories,
            percent: percent_share(calories, total_calories),
        }
    });

    Ok(MacroEnergyBreakdown {
        contributions,
        total_calories,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_conversion() {
        let breakdown = convert_macros(MacroGrams {
            protein: 150.0,
            fat: 70.0,
            carbs: 200.0,
        })
        .unwrap();

        assert_eq!(breakdown.contribution(Macro::Protein).calories, 600.0);
        assert_eq!(breakdown.contribution(Macro::Fat).calories, 630.0);
        assert_eq!(breakdown.contribution(Macro::Carbs).calories, 800.0);
        assert_eq!(breakdown.total_calories, 2030.0);

        let shares: Vec<u32> = breakdown.contributions.iter().map(|c| c.percent).collect();
        assert_eq!(shares, vec![30, 31, 39]);
    }

    #[test]
    fn test_zero_total_gives_zero_shares() {
        let breakdown = convert_macros(MacroGrams {
            protein: 0.0,
            fat: 0.0,
            carbs: 0.0,
        })
        .unwrap();
        assert_eq!(breakdown.total_calories, 0.0);
        assert!(breakdown.contributions.iter().all(|c| c.percent == 0));
    }

    #[test]
    fn test_shares_may_not_sum_to_100() {
        // 1/3 each rounds to 33 + 33 + 33
        let breakdown = convert_macros(MacroGrams {
            protein: 9.0,
            fat: 4.0,
            carbs: 9.0,
        })
        .unwrap();
        let sum: u32 = breakdown.contributions.iter().map(|c| c.percent).sum();
        assert_eq!(sum, 99);
    }

    #[test]
    fn test_negative_grams_rejected() {
        let result = convert_macros(MacroGrams {
            protein: -1.0,
            fat: 10.0,
            carbs: 10.0,
        });
        assert!(result.is_err());
    }
}
