//! Exercise recommendations
//!
//! Picks cardio, strength and flexibility exercises for the profile and
//! attaches a weekly schedule. Selection is random; callers pass the
//! generator so a seeded one reproduces the same plan.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;
use tracing::debug;

use crate::models::{ActivityLevel, GoalType};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExerciseCategory {
    Cardio,
    Strength,
    Flexibility,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Exercise {
    pub name: &'static str,
    pub category: ExerciseCategory,
    pub description: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sets: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reps: Option<&'static str>,
    pub frequency: &'static str,
    pub intensity: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calories_burned: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focus: Option<&'static str>,
    pub image_url: &'static str,
}

const fn cardio(
    name: &'static str,
    description: &'static str,
    duration: &'static str,
    frequency: &'static str,
    intensity: &'static str,
    calories_burned: &'static str,
    image_url: &'static str,
) -> Exercise {
    Exercise {
        name,
        category: ExerciseCategory::Cardio,
        description,
        duration: Some(duration),
        sets: None,
        reps: None,
        frequency,
        intensity,
        calories_burned: Some(calories_burned),
        focus: None,
        image_url,
    }
}

const fn strength(
    name: &'static str,
    description: &'static str,
    sets: &'static str,
    reps: &'static str,
    frequency: &'static str,
    intensity: &'static str,
    image_url: &'static str,
) -> Exercise {
    Exercise {
        name,
        category: ExerciseCategory::Strength,
        description,
        duration: None,
        sets: Some(sets),
        reps: Some(reps),
        frequency,
        intensity,
        calories_burned: None,
        focus: None,
        image_url,
    }
}

const fn flexibility(
    name: &'static str,
    description: &'static str,
    duration: &'static str,
    frequency: &'static str,
    intensity: &'static str,
    focus: &'static str,
    image_url: &'static str,
) -> Exercise {
    Exercise {
        name,
        category: ExerciseCategory::Flexibility,
        description,
        duration: Some(duration),
        sets: None,
        reps: None,
        frequency,
        intensity,
        calories_burned: None,
        focus: Some(focus),
        image_url,
    }
}

pub const CARDIO: &[Exercise] = &[
    cardio(
        "Brisk Walking",
        "A low-impact cardio exercise good for beginners.",
        "30-45 minutes",
        "5-7 days per week",
        "Moderate",
        "150-300 calories",
        "https://images.unsplash.com/photo-1483721310020-03333e577078",
    ),
    cardio(
        "Cycling",
        "Excellent low-impact cardio that strengthens lower body.",
        "30-60 minutes",
        "3-5 days per week",
        "Moderate to High",
        "300-600 calories",
        "https://images.unsplash.com/photo-1518644961665-ed172691aaa1",
    ),
    cardio(
        "Swimming",
        "Full-body workout that's gentle on joints.",
        "30-45 minutes",
        "2-4 days per week",
        "Moderate to High",
        "400-700 calories",
        "https://images.unsplash.com/photo-1464925257126-6450e871c667",
    ),
    cardio(
        "Running",
        "High-intensity cardio that burns calories efficiently.",
        "20-40 minutes",
        "3-4 days per week",
        "High",
        "400-800 calories",
        "https://images.unsplash.com/photo-1518310383802-640c2de311b2",
    ),
    cardio(
        "Jumping Rope",
        "Simple but effective cardio workout.",
        "15-30 minutes",
        "3-5 days per week",
        "High",
        "200-400 calories",
        "https://images.unsplash.com/photo-1518644961665-ed172691aaa1",
    ),
];

pub const STRENGTH: &[Exercise] = &[
    strength(
        "Bodyweight Squats",
        "Basic lower body exercise targeting quads, hamstrings and glutes.",
        "3-4 sets",
        "12-15 reps",
        "2-3 days per week",
        "Low to Moderate",
        "https://images.unsplash.com/photo-1518459031867-a89b944bffe4",
    ),
    strength(
        "Push-ups",
        "Classic upper body exercise for chest, shoulders and triceps.",
        "3-4 sets",
        "10-15 reps",
        "2-3 days per week",
        "Moderate",
        "https://images.unsplash.com/photo-1541534741688-6078c6bfb5c5",
    ),
    strength(
        "Planks",
        "Core strengthening isometric exercise.",
        "3 sets",
        "30-60 seconds",
        "3-4 days per week",
        "Moderate",
        "https://images.unsplash.com/photo-1518611012118-696072aa579a",
    ),
    strength(
        "Dumbbell Rows",
        "Upper back and bicep strengthening exercise.",
        "3 sets",
        "10-12 reps per side",
        "2 days per week",
        "Moderate",
        "https://images.unsplash.com/photo-1518644961665-ed172691aaa1",
    ),
    strength(
        "Lunges",
        "Lower body exercise for balance and strength.",
        "3 sets",
        "10-12 reps per leg",
        "2-3 days per week",
        "Moderate",
        "https://images.unsplash.com/photo-1483721310020-03333e577078",
    ),
];

pub const FLEXIBILITY: &[Exercise] = &[
    flexibility(
        "Yoga",
        "Combines strength, flexibility and mindfulness.",
        "20-60 minutes",
        "3-7 days per week",
        "Low to Moderate",
        "Full body flexibility and relaxation",
        "https://images.unsplash.com/photo-1518611012118-696072aa579a",
    ),
    flexibility(
        "Dynamic Stretching",
        "Active stretches that prepare muscles for exercise.",
        "5-10 minutes",
        "Before each workout",
        "Low",
        "Warming up muscles and joints",
        "https://images.unsplash.com/photo-1541534741688-6078c6bfb5c5",
    ),
    flexibility(
        "Static Stretching",
        "Held stretches to improve flexibility.",
        "10-15 minutes",
        "After workouts or daily",
        "Low",
        "Improving range of motion",
        "https://images.unsplash.com/photo-1518459031867-a89b944bffe4",
    ),
];

const HIGH_IMPACT: &[&str] = &["Running", "Jumping Rope"];
const LOW_IMPACT: &[&str] = &["Brisk Walking", "Swimming", "Cycling"];
const JOINT_FRIENDLY: &[&str] = &["Swimming", "Cycling"];
const BEGINNER_STRENGTH: &[&str] = &["Bodyweight Squats", "Push-ups", "Planks"];
const BEGINNER_FLEXIBILITY: &[&str] = &["Static Stretching", "Dynamic Stretching"];

/// Age above which high-impact cardio is swapped out
pub const LOW_IMPACT_AGE: u32 = 50;

/// BMI above which high-impact cardio is swapped for joint-friendly options
pub const JOINT_FRIENDLY_BMI: f64 = 30.0;

/// Inputs the recommendation depends on
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExerciseProfile {
    pub goal: GoalType,
    pub bmi: f64,
    pub age: u32,
    pub activity_level: ActivityLevel,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExercisePlan {
    pub exercises: Vec<Exercise>,
    pub schedule: [(&'static str, &'static str); 7],
}

fn subset(pool: &'static [Exercise], names: &[&str]) -> Vec<Exercise> {
    pool.iter()
        .filter(|e| names.contains(&e.name))
        .copied()
        .collect()
}

fn sample<R: Rng + ?Sized>(pool: &[Exercise], count: usize, rng: &mut R) -> Vec<Exercise> {
    pool.choose_multiple(rng, count.min(pool.len()))
        .copied()
        .collect()
}

/// Swap every high-impact cardio pick for a random one from `replacements`
fn replace_high_impact<R: Rng + ?Sized>(cardio: &mut [Exercise], replacements: &[&str], rng: &mut R) {
    let options = subset(CARDIO, replacements);
    for pick in cardio.iter_mut() {
        if HIGH_IMPACT.contains(&pick.name) {
            if let Some(choice) = options.choose(rng) {
                *pick = *choice;
            }
        }
    }
}

/// Weekly schedule for a goal, Monday first
pub fn weekly_schedule(goal: GoalType) -> [(&'static str, &'static str); 7] {
    match goal {
        GoalType::Loss => [
            ("Monday", "Cardio (30-45 min) + Core Strength"),
            ("Tuesday", "Strength Training (Full Body)"),
            ("Wednesday", "Active Recovery (Walking or Light Cardio)"),
            ("Thursday", "High-Intensity Cardio (20-30 min)"),
            ("Friday", "Strength Training (Upper Body Focus)"),
            ("Saturday", "Cardio (30-45 min) + Strength (Lower Body Focus)"),
            ("Sunday", "Rest or Light Activity (Stretching/Yoga)"),
        ],
        GoalType::Gain => [
            ("Monday", "Strength Training (Upper Body)"),
            ("Tuesday", "Light Cardio (20 min) + Core"),
            ("Wednesday", "Strength Training (Lower Body)"),
            ("Thursday", "Rest or Active Recovery"),
            ("Friday", "Strength Training (Full Body)"),
            ("Saturday", "Moderate Cardio + Flexibility"),
            ("Sunday", "Rest"),
        ],
        GoalType::Maintain => [
            ("Monday", "Cardio (30 min) + Core"),
            ("Tuesday", "Strength Training (Upper Body)"),
            ("Wednesday", "Moderate Cardio or Active Recovery"),
            ("Thursday", "Strength Training (Lower Body)"),
            ("Friday", "Flexibility + Light Cardio"),
            ("Saturday", "Mixed Workout (Cardio + Strength)"),
            ("Sunday", "Rest or Light Activity"),
        ],
    }
}

/// Recommend exercises and a weekly schedule
pub fn recommend_exercises<R: Rng + ?Sized>(profile: &ExerciseProfile, rng: &mut R) -> ExercisePlan {
    let (mut cardio, strength, flexibility) = if profile.activity_level.is_beginner() {
        (
            sample(&subset(CARDIO, LOW_IMPACT), 2, rng),
            sample(&subset(STRENGTH, BEGINNER_STRENGTH), 2, rng),
            sample(&subset(FLEXIBILITY, BEGINNER_FLEXIBILITY), 1, rng),
        )
    } else {
        let (cardio_count, strength_count) = match profile.goal {
            GoalType::Loss => (3, 2),
            GoalType::Gain => (1, 3),
            GoalType::Maintain => (2, 2),
        };
        (
            sample(CARDIO, cardio_count, rng),
            sample(STRENGTH, strength_count, rng),
            sample(FLEXIBILITY, 1, rng),
        )
    };

    if profile.age > LOW_IMPACT_AGE {
        replace_high_impact(&mut cardio, LOW_IMPACT, rng);
    }
    if profile.bmi > JOINT_FRIENDLY_BMI {
        replace_high_impact(&mut cardio, JOINT_FRIENDLY, rng);
    }

    let exercises: Vec<Exercise> = cardio.into_iter().chain(strength).chain(flexibility).collect();
    debug!(count = exercises.len(), goal = %profile.goal, "Exercises recommended");

    ExercisePlan {
        exercises,
        schedule: weekly_schedule(profile.goal),
    }
}
