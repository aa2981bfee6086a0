//! Macro-nutrient doughnut chart

use super::tooltip::{grams_label, macro_share_label};
use super::{palette, ChartConfig, ChartData, ChartKind, ChartOptions, Dataset, Legend, LegendPosition, Plugins, TooltipLines};
use crate::errors::Result;
use crate::macronutrients::{convert_macros, Macro, MacroGrams};

fn color(nutrient: Macro) -> &'static str {
    match nutrient {
        Macro::Protein => palette::PROTEIN,
        Macro::Fat => palette::FAT,
        Macro::Carbs => palette::CARBS,
    }
}

pub fn macro_chart(grams: MacroGrams) -> Result<ChartConfig> {
    let breakdown = convert_macros(grams)?;
    let contributions = &breakdown.contributions;

    let labels = contributions.iter().map(|c| c.nutrient.label().to_string()).collect();
    let data = contributions.iter().map(|c| c.calories).collect();
    let colors: Vec<String> = contributions.iter().map(|c| color(c.nutrient).to_string()).collect();
    let tooltips = contributions
        .iter()
        .map(|c| TooltipLines {
            label: macro_share_label(c.nutrient.label(), c.calories, breakdown.total_calories),
            after_label: Some(grams_label(c.grams)),
        })
        .collect();

    Ok(ChartConfig {
        kind: ChartKind::Doughnut,
        data: ChartData {
            labels,
            datasets: vec![Dataset {
                data,
                background_color: Some(colors.into()),
                border_width: Some(1),
                ..Dataset::default()
            }],
        },
        options: ChartOptions {
            plugins: Plugins {
                legend: Some(Legend::at(LegendPosition::Bottom)),
                ..Plugins::default()
            },
            ..ChartOptions::default()
        },
        tooltips,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_macro_chart() {
        let chart = macro_chart(MacroGrams {
            protein: 150.0,
            fat: 70.0,
            carbs: 200.0,
        })
        .unwrap();
        assert_eq!(chart.kind, ChartKind::Doughnut);
        assert_eq!(chart.data.labels, vec!["Protein", "Fat", "Carbs"]);
        assert_eq!(chart.values(), &[600.0, 630.0, 800.0]);
        assert_eq!(chart.tooltips[0].label, "Protein: 30% (600 calories)");
        assert_eq!(chart.tooltips[2].label, "Carbs: 39% (800 calories)");
        assert_eq!(chart.tooltips[1].after_label.as_deref(), Some("70g"));
    }

    #[test]
    fn test_macro_chart_legend_at_bottom() {
        let json = serde_json::to_value(
            macro_chart(MacroGrams {
                protein: 100.0,
                fat: 50.0,
                carbs: 150.0,
            })
            .unwrap(),
        )
        .unwrap();
        assert_eq!(json["options"]["plugins"]["legend"]["position"], "bottom");
        assert_eq!(json["data"]["datasets"][0]["backgroundColor"][2], "#fff59d");
    }
}
