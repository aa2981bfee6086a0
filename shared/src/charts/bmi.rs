//! BMI category bar chart
//!
//! Four bars at fixed heights, one per band. The user's band keeps its full
//! color, the others are faded, and a horizontal line marks the actual BMI.

use std::collections::BTreeMap;

use super::tooltip::your_bmi_label;
use super::{
    palette, AnnotationLabel, Annotations, Axis, ChartConfig, ChartData, ChartKind, ChartOptions,
    Dataset, Legend, LineAnnotation, Plugins, Scales, TooltipLines,
};
use crate::errors::Result;
use crate::health_metrics::{classify_bmi, BMI_BANDS};

pub const AXIS_MIN: f64 = 15.0;
pub const AXIS_MAX: f64 = 40.0;

pub fn bmi_chart(bmi: f64) -> Result<ChartConfig> {
    let category = classify_bmi(bmi)?;
    let highlighted = category.index();

    let labels = BMI_BANDS.iter().map(|b| b.category.label().to_string()).collect();
    let data = BMI_BANDS.iter().map(|b| b.display_value).collect();
    let border: Vec<String> = BMI_BANDS.iter().map(|b| b.color.to_string()).collect();
    let background: Vec<String> = BMI_BANDS
        .iter()
        .enumerate()
        .map(|(i, b)| {
            if i == highlighted {
                b.color.to_string()
            } else {
                format!("{}{}", b.color, palette::FADED_ALPHA)
            }
        })
        .collect();

    let tooltips = BMI_BANDS
        .iter()
        .enumerate()
        .map(|(i, b)| TooltipLines {
            label: format!("BMI Categories: {}", b.display_value),
            after_label: (i == highlighted).then(|| your_bmi_label(bmi)),
        })
        .collect();

    let mut annotations = BTreeMap::new();
    annotations.insert(
        "line1".to_string(),
        LineAnnotation {
            kind: "line".to_string(),
            y_min: bmi,
            y_max: bmi,
            border_color: "black".to_string(),
            border_width: 2,
            label: AnnotationLabel {
                content: your_bmi_label(bmi),
                enabled: true,
            },
        },
    );

    Ok(ChartConfig {
        kind: ChartKind::Bar,
        data: ChartData {
            labels,
            datasets: vec![Dataset {
                label: Some("BMI Categories".to_string()),
                data,
                background_color: Some(background.into()),
                border_color: Some(border.into()),
                border_width: Some(1),
                ..Dataset::default()
            }],
        },
        options: ChartOptions {
            plugins: Plugins {
                legend: Some(Legend::hidden()),
                annotation: Some(Annotations { annotations }),
            },
            scales: Some(Scales {
                y: Axis {
                    begin_at_zero: Some(false),
                    min: Some(AXIS_MIN),
                    max: Some(AXIS_MAX),
                    ..Axis::titled("BMI Value")
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
    use crate::charts::Paint;

    #[test]
    fn test_normal_bmi_highlights_second_band() {
        let chart = bmi_chart(23.0).unwrap();
        assert_eq!(chart.kind, ChartKind::Bar);
        assert_eq!(chart.values(), &[16.0, 21.7, 27.5, 35.0]);
        assert_eq!(
            chart.data.datasets[0].background_color,
            Some(Paint::PerPoint(vec![
                "#FFC10780".to_string(),
                "#4CAF50".to_string(),
                "#FF980080".to_string(),
                "#F4433680".to_string(),
            ]))
        );
        assert_eq!(chart.tooltips[1].after_label.as_deref(), Some("Your BMI: 23"));
        assert_eq!(chart.tooltips[0].after_label, None);
    }

    #[test]
    fn test_anchors_do_not_follow_input() {
        let low = bmi_chart(17.0).unwrap();
        let high = bmi_chart(38.0).unwrap();
        assert_eq!(low.values(), high.values());
    }

    #[test]
    fn test_reference_line_at_user_bmi() {
        let json = serde_json::to_value(bmi_chart(31.0).unwrap()).unwrap();
        let line = &json["options"]["plugins"]["annotation"]["annotations"]["line1"];
        assert_eq!(line["type"], "line");
        assert_eq!(line["yMin"], 31.0);
        assert_eq!(line["yMax"], 31.0);
        assert_eq!(line["label"]["content"], "Your BMI: 31");
        assert_eq!(json["options"]["scales"]["y"]["beginAtZero"], false);
    }

    #[test]
    fn test_invalid_bmi_rejected() {
        assert!(bmi_chart(f64::NAN).is_err());
    }
}
