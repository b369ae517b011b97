// src/plot_functions/plot_profile_averages.rs

use plotters::style::RGBColor;

use crate::channel_names::TemperatureChannel;
use crate::constants::LINE_WIDTH_PLOT;
use crate::data_analysis::profile_averages::ProfileAverage;
use crate::plot_framework::{LinePlotConfig, Panel, PlotSeries};

fn series_color(index: usize) -> RGBColor {
    let c = colorous::TABLEAU10[index % colorous::TABLEAU10.len()];
    RGBColor(c.r, c.g, c.b)
}

/// Builds the "Average Temperature Over Profiles" line chart: one series per channel,
/// x = profile id, y = mean temperature. Profiles with no value for a channel leave a gap
/// in that series.
pub fn build_profile_averages_panel(
    averages: &[ProfileAverage],
    channels: &[TemperatureChannel],
) -> Panel {
    let series = channels
        .iter()
        .enumerate()
        .map(|(channel_idx, channel)| PlotSeries {
            data: averages
                .iter()
                .filter_map(|avg| {
                    avg.means
                        .get(channel_idx)
                        .copied()
                        .flatten()
                        .map(|mean| (avg.profile_id as f64, mean))
                })
                .collect(),
            label: channel.column_name().to_string(),
            color: series_color(channel_idx),
            stroke_width: LINE_WIDTH_PLOT,
        })
        .collect();

    Panel::LineChart(LinePlotConfig {
        title: "Average Temperature Over Profiles".to_string(),
        x_label: "Profile ID".to_string(),
        y_label: "Average Temperature (°C)".to_string(),
        series,
        show_legend: true,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_series_per_channel() {
        let averages = vec![
            ProfileAverage {
                profile_id: 2,
                means: vec![Some(20.0), Some(40.0)],
            },
            ProfileAverage {
                profile_id: 7,
                means: vec![None, Some(60.0)],
            },
        ];
        let channels = [TemperatureChannel::Coolant, TemperatureChannel::PermanentMagnet];
        let Panel::LineChart(config) = build_profile_averages_panel(&averages, &channels) else {
            panic!("expected a line chart");
        };
        assert_eq!(config.series.len(), 2);
        assert_eq!(config.series[0].label, "coolant");
        assert_eq!(config.series[0].data, vec![(2.0, 20.0)]);
        assert_eq!(config.series[1].label, "pm");
        assert_eq!(config.series[1].data, vec![(2.0, 40.0), (7.0, 60.0)]);
        assert_ne!(config.series[0].color, config.series[1].color);
        assert!(config.show_legend);
    }
}
