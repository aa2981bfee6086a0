//! Weight progress line chart

use super::tooltip::weight_label;
use super::{palette, Axis, ChartConfig, ChartData, ChartKind, ChartOptions, Dataset, Legend, Plugins, Scales, TooltipLines};
use crate::errors::Result;
use crate::projection::{axis_bounds, project_weight};

pub fn progress_chart(current_kg: f64, goal_kg: f64) -> Result<ChartConfig> {
    let samples = project_weight(current_kg, goal_kg)?;
    let (suggested_min, suggested_max) = axis_bounds(current_kg, goal_kg);

    let labels = samples.iter().map(|s| s.label.to_string()).collect();
    let data: Vec<f64> = samples.iter().map(|s| s.weight_kg).collect();
    let tooltips = data.iter().map(|w| TooltipLines::label(weight_label(*w))).collect();

    Ok(ChartConfig {
        kind: ChartKind::Line,
        data: ChartData {
            labels,
            datasets: vec![Dataset::area_line(
                "Weight Progress",
                data,
                palette::PRIMARY_FILL,
                5,
            )],
        },
        options: ChartOptions {
            plugins: Plugins {
                legend: Some(Legend::hidden()),
                ..Plugins::default()
            },
            scales: Some(Scales {
                y: Axis {
                    suggested_min: Some(suggested_min),
                    suggested_max: Some(suggested_max),
                    ..Axis::titled("Weight (kg)")
                },
            }),
            ..ChartOptions::default()
        },
        tooltips,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_chart_shape() {
        let chart = progress_chart(80.0, 75.0).unwrap();
        assert_eq!(chart.kind, ChartKind::Line);
        assert_eq!(chart.data.labels.len(), 12);
        assert_eq!(chart.data.labels[0], "Now");
        assert_eq!(chart.data.labels[11], "Goal");
        assert_eq!(chart.values()[11], 75.0);
        assert_eq!(chart.tooltips[1].label, "Weight: 79.5kg");

        let y = &chart.options.scales.as_ref().unwrap().y;
        assert_eq!(y.suggested_min, Some(73.0));
        assert_eq!(y.suggested_max, Some(82.0));
        assert_eq!(y.title.as_ref().unwrap().text, "Weight (kg)");
    }

    #[test]
    fn test_progress_chart_json() {
        let json = serde_json::to_value(progress_chart(70.0, 70.0).unwrap()).unwrap();
        assert_eq!(json["data"]["labels"], serde_json::json!(["Now", "Goal"]));
        assert_eq!(json["data"]["datasets"][0]["pointRadius"], 5);
        assert_eq!(json["data"]["datasets"][0]["pointHoverRadius"], 7);
        assert_eq!(json["options"]["plugins"]["legend"]["display"], false);
    }
}
