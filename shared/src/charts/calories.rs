//! Calorie breakdown pie chart

use super::tooltip::meal_calories_label;
use super::{palette, ChartConfig, ChartData, ChartKind, ChartOptions, Dataset, Legend, LegendPosition, Plugins, TooltipLines};
use crate::errors::Result;
use crate::meals::split_calories;

const MEAL_COLORS: [&str; 4] = [palette::PRIMARY, palette::GREEN, palette::PURPLE, palette::ORANGE];

pub fn calorie_chart(calorie_target: f64) -> Result<ChartConfig> {
    let split = split_calories(calorie_target)?;

    let labels = split.iter().map(|a| a.meal.label().to_string()).collect();
    let data: Vec<f64> = split.iter().map(|a| a.calories as f64).collect();
    // Shares are of the rounded slices, not the target
    let total: f64 = data.iter().sum();
    let tooltips = split
        .iter()
        .zip(&data)
        .map(|(a, value)| TooltipLines::label(meal_calories_label(a.meal.label(), *value, total)))
        .collect();

    Ok(ChartConfig {
        kind: ChartKind::Pie,
        data: ChartData {
            labels,
            datasets: vec![Dataset {
                data,
                background_color: Some(MEAL_COLORS.iter().map(|c| c.to_string()).collect::<Vec<_>>().into()),
                border_width: Some(1),
                ..Dataset::default()
            }],
        },
        options: ChartOptions {
            plugins: Plugins {
                legend: Some(Legend::at(LegendPosition::Right)),
                ..Plugins::default()
            },
            ..ChartOptions::default()
        },
        tooltips,
    })
}
