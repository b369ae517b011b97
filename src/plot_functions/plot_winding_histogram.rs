// src/plot_functions/plot_winding_histogram.rs

use crate::color_mapping::color_for;
use crate::data_analysis::histogram::HistogramBin;
use crate::error::Result;
use crate::plot_framework::{Bar, BarPlotConfig, Panel};

/// Builds the stator winding histogram bar chart. Each bar keeps its bin position and is
/// colored by the gradient value of its bin center within the observed temperature range.
pub fn build_winding_histogram_panel(
    bins: &[HistogramBin],
    temperature_range: (f64, f64),
) -> Result<Panel> {
    let (min_temp, max_temp) = temperature_range;
    let bars = bins
        .iter()
        .map(|bin| {
            Ok(Bar {
                category: bin.category_label(),
                value: bin.count as f64,
                color: color_for(bin.center(), min_temp, max_temp)?,
            })
        })
        .collect::<Result<Vec<Bar>>>()?;

    Ok(Panel::BarChart(BarPlotConfig {
        title: "Stator Winding Temp".to_string(),
        category_label: "Temperature (°C)".to_string(),
        value_label: "Samples".to_string(),
        bars,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_analysis::histogram::histogram;
    use crate::error::DashboardError;
    use plotters::style::RGBColor;

    #[test]
    fn test_bars_follow_bins_and_gradient() {
        let values: Vec<Option<f64>> = [0.0, 10.0, 20.0, 30.0, 40.0, 40.0]
            .into_iter()
            .map(Some)
            .collect();
        let bins = histogram(&values, 4).unwrap();
        let Panel::BarChart(config) = build_winding_histogram_panel(&bins, (0.0, 40.0)).unwrap()
        else {
            panic!("expected a bar chart");
        };
        let categories: Vec<&str> = config.bars.iter().map(|b| b.category.as_str()).collect();
        assert_eq!(categories, vec!["0.0–10.0", "10.0–20.0", "20.0–30.0", "30.0–40.0"]);
        let counts: Vec<f64> = config.bars.iter().map(|b| b.value).collect();
        assert_eq!(counts, vec![1.0, 1.0, 1.0, 3.0]);
        // bin centers 5, 15, 25, 35 -> ratios 0.125, 0.375, 0.625, 0.875
        assert_eq!(config.bars[0].color, RGBColor(0, 127, 255));
        assert_eq!(config.bars[1].color, RGBColor(0, 255, 127));
        assert_eq!(config.bars[2].color, RGBColor(127, 255, 0));
        assert_eq!(config.bars[3].color, RGBColor(255, 127, 0));
    }

    #[test]
    fn test_constant_temperature_is_degenerate() {
        let bins = histogram(&[Some(5.0), Some(5.0)], 25).unwrap();
        assert!(matches!(
            build_winding_histogram_panel(&bins, (5.0, 5.0)),
            Err(DashboardError::DegenerateRange { .. })
        ));
    }
}
