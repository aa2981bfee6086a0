//! Ideal water consumption line chart

use super::tooltip::water_label;
use super::{palette, Axis, ChartConfig, ChartData, ChartKind, ChartOptions, Dataset, Scales, TooltipLines};
use crate::errors::Result;
use crate::hydration::{axis_max, hydration_curve};

pub fn water_chart(recommended_liters: f64) -> Result<ChartConfig> {
    let curve = hydration_curve(recommended_liters)?;

    let labels = curve.iter().map(|p| p.hour.clone()).collect();
    let data: Vec<f64> = curve.iter().map(|p| p.cumulative_liters).collect();
    let tooltips = data.iter().map(|l| TooltipLines::label(water_label(*l))).collect();

    Ok(ChartConfig {
        kind: ChartKind::Line,
        data: ChartData {
            labels,
            datasets: vec![Dataset::area_line(
                "Ideal Water Consumption",
                data,
                palette::PRIMARY_FILL_STRONG,
                4,
            )],
        },
        options: ChartOptions {
            scales: Some(Scales {
                y: Axis {
                    min: Some(0.0),
                    max: Some(axis_max(recommended_liters)),
                    ..Axis::titled("Water (Liters)")
                },
            }),
            ..ChartOptions::default()
        },
        tooltips,
    })
}
