//! Diet recommendations
//!
//! Macro targets, per-meal calories, food suggestions, example meals and
//! tips for the user's goal. Everything except the numbers is static text.

use serde::Serialize;

use crate::errors::{ensure_positive, Result};
use crate::macronutrients::{Macro, MacroGrams};
use crate::meals::{Meal, MEAL_PORTIONS};
use crate::models::GoalType;

/// Share of calories from (protein, fat, carbs)
pub fn macro_ratios(goal: GoalType) -> (f64, f64, f64) {
    match goal {
        GoalType::Loss => (0.35, 0.25, 0.40),
        GoalType::Gain => (0.30, 0.25, 0.45),
        GoalType::Maintain => (0.30, 0.30, 0.40),
    }
}

/// Gram targets for a calorie target, rounded to whole grams
pub fn macro_targets(calorie_target: f64, goal: GoalType) -> MacroGrams {
    let (protein, fat, carbs) = macro_ratios(goal);
    let grams = |ratio: f64, nutrient: Macro| {
        (calorie_target * ratio / nutrient.kcal_per_gram()).round_ties_even()
    };
    MacroGrams {
        protein: grams(protein, Macro::Protein),
        fat: grams(fat, Macro::Fat),
        carbs: grams(carbs, Macro::Carbs),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MealPlanEntry {
    pub meal: Meal,
    pub portion: f64,
    pub calories: i64,
    pub description: &'static str,
    pub image_url: &'static str,
    pub example: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FoodItem {
    pub name: &'static str,
    pub info: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FoodGroup {
    pub group: &'static str,
    pub items: &'static [FoodItem],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DietPlan {
    pub goal: GoalType,
    pub macros: MacroGrams,
    pub meals: Vec<MealPlanEntry>,
    pub food_groups: Vec<FoodGroup>,
    pub tips: &'static [&'static str],
}

fn meal_copy(meal: Meal) -> (&'static str, &'static str) {
    match meal {
        Meal::Breakfast => (
            "Start your day with a balanced breakfast to fuel your morning activities.",
            "https://images.unsplash.com/photo-1504754524776-8f4f37790ca0",
        ),
        Meal::Lunch => (
            "A substantial midday meal to maintain energy levels throughout the afternoon.",
            "https://images.unsplash.com/photo-1447078806655-40579c2520d6",
        ),
        Meal::Dinner => (
            "A satisfying evening meal that aligns with your nutritional goals.",
            "https://images.unsplash.com/photo-1523049673857-eb18f1d7b578",
        ),
        Meal::Snacks => (
            "Healthy snacks between meals to maintain energy and control hunger.",
            "https://images.unsplash.com/photo-1518635017498-87f514b751ba",
        ),
    }
}

/// Example meal for a slot and goal
pub fn meal_example(meal: Meal, goal: GoalType) -> &'static str {
    match (goal, meal) {
        (GoalType::Loss, Meal::Breakfast) => "Greek yogurt with berries and a tablespoon of chia seeds",
        (GoalType::Loss, Meal::Lunch) => {
            "Grilled chicken salad with mixed greens, cherry tomatoes, cucumber, and light vinaigrette"
        }
        (GoalType::Loss, Meal::Dinner) => "Baked salmon with steamed broccoli and a small portion of quinoa",
        (GoalType::Loss, Meal::Snacks) => "Apple slices with a tablespoon of natural almond butter",
        (GoalType::Gain, Meal::Breakfast) => {
            "Oatmeal made with milk, topped with banana, nuts, and a scoop of protein powder"
        }
        (GoalType::Gain, Meal::Lunch) => {
            "Turkey and avocado sandwich on whole grain bread with a side of sweet potato wedges"
        }
        (GoalType::Gain, Meal::Dinner) => "Lean steak with roasted vegetables and brown rice",
        (GoalType::Gain, Meal::Snacks) => {
            "Protein smoothie with milk, banana, peanut butter, and protein powder"
        }
        (GoalType::Maintain, Meal::Breakfast) => "Two eggs with whole grain toast and half an avocado",
        (GoalType::Maintain, Meal::Lunch) => "Tuna wrap with mixed vegetables and a side of fruit",
        (GoalType::Maintain, Meal::Dinner) => {
            "Stir-fried chicken and vegetables with a moderate portion of brown rice"
        }
        (GoalType::Maintain, Meal::Snacks) => "A small handful of mixed nuts and a piece of fruit",
    }
}

const PROTEIN_SOURCES: &[FoodItem] = &[
    FoodItem { name: "Chicken Breast", info: "Lean protein source, low in fat, high in protein." },
    FoodItem { name: "Greek Yogurt", info: "High protein dairy option, good for snacks or breakfast." },
    FoodItem { name: "Eggs", info: "Complete protein source with essential nutrients." },
    FoodItem { name: "Tofu", info: "Plant-based protein option, versatile for many dishes." },
    FoodItem { name: "Fish", info: "Lean protein with healthy omega-3 fatty acids." },
];

const CARB_SOURCES: &[FoodItem] = &[
    FoodItem { name: "Brown Rice", info: "Whole grain option with more fiber than white rice." },
    FoodItem { name: "Sweet Potatoes", info: "Nutrient-dense complex carbohydrate." },
    FoodItem { name: "Quinoa", info: "Complete protein and complex carb source." },
    FoodItem { name: "Oats", info: "Fiber-rich breakfast option that helps with satiety." },
    FoodItem { name: "Whole Grain Bread", info: "Better option than refined white bread." },
];

const FAT_SOURCES: &[FoodItem] = &[
    FoodItem { name: "Avocado", info: "Healthy monounsaturated fats and fiber." },
    FoodItem { name: "Nuts", info: "Healthy fats, protein, and fiber in a convenient package." },
    FoodItem { name: "Olive Oil", info: "Healthy cooking oil rich in monounsaturated fats." },
    FoodItem { name: "Chia Seeds", info: "Omega-3 fatty acids and fiber." },
    FoodItem { name: "Fatty Fish", info: "Salmon and mackerel provide protein and omega-3s." },
];

const VEGETABLES: &[FoodItem] = &[
    FoodItem { name: "Leafy Greens", info: "Spinach, kale, etc. - low calorie, nutrient-dense options." },
    FoodItem { name: "Broccoli", info: "High in fiber, vitamins, and has some protein." },
    FoodItem { name: "Bell Peppers", info: "High in vitamin C and adds color to meals." },
    FoodItem { name: "Cauliflower", info: "Versatile vegetable that can substitute for higher-carb options." },
    FoodItem { name: "Zucchini", info: "Low in calories, can be used in many dishes." },
];

const FRUITS: &[FoodItem] = &[
    FoodItem { name: "Berries", info: "Lower in sugar than many fruits, high in antioxidants." },
    FoodItem { name: "Apples", info: "Portable, filling, and contain fiber." },
    FoodItem { name: "Citrus Fruits", info: "High in vitamin C and other nutrients." },
    FoodItem { name: "Bananas", info: "Good source of potassium and convenient pre/post workout." },
    FoodItem { name: "Pears", info: "High in fiber and water content." },
];

pub fn food_groups() -> Vec<FoodGroup> {
    vec![
        FoodGroup { group: "protein_sources", items: PROTEIN_SOURCES },
        FoodGroup { group: "carb_sources", items: CARB_SOURCES },
        FoodGroup { group: "fat_sources", items: FAT_SOURCES },
        FoodGroup { group: "vegetables", items: VEGETABLES },
        FoodGroup { group: "fruits", items: FRUITS },
    ]
}

/// Nutrition tips for a goal
pub fn tips(goal: GoalType) -> &'static [&'static str] {
    match goal {
        GoalType::Loss => &[
            "Focus on protein-rich foods to maintain muscle while losing fat",
            "Include fiber-rich vegetables to help you feel full on fewer calories",
            "Drink water before meals to help control portion sizes",
            "Limit processed foods and added sugars",
            "Consider intermittent fasting if it works with your lifestyle",
            "Plan meals ahead to avoid impulsive high-calorie choices",
        ],
        GoalType::Gain => &[
            "Eat more frequently throughout the day (5-6 smaller meals)",
            "Prioritize calorie-dense foods like nuts, avocados, and healthy oils",
            "Consume protein before and after workouts to support muscle growth",
            "Include liquid calories like smoothies for easier consumption",
            "Focus on nutrient-dense foods rather than empty calories",
            "Gradually increase portions to avoid digestive discomfort",
        ],
        GoalType::Maintain => &[
            "Balance your macronutrients for optimal health and energy",
            "Practice mindful eating - pay attention to hunger and fullness cues",
            "Adjust your calories based on activity levels each day",
            "Include a variety of foods to ensure proper nutrient intake",
            "Limit ultra-processed foods in favor of whole food options",
            "Consider meal prep to maintain consistency throughout the week",
        ],
    }
}

/// Assemble the diet plan for a goal and daily calorie target
pub fn diet_plan(goal: GoalType, calorie_target: f64) -> Result<DietPlan> {
    let calorie_target = ensure_positive("calorie_target", calorie_target)?;

    // Plan figures round ties to even, unlike the half-up chart slices
    let meals = MEAL_PORTIONS
        .iter()
        .map(|&(meal, portion)| {
            let (description, image_url) = meal_copy(meal);
            MealPlanEntry {
                meal,
                portion,
                calories: (calorie_target * portion).round_ties_even() as i64,
                description,
                image_url,
                example: meal_example(meal, goal),
            }
        })
        .collect();

    Ok(DietPlan {
        goal,
        macros: macro_targets(calorie_target, goal),
        meals,
        food_groups: food_groups(),
        tips: tips(goal),
    })
}
