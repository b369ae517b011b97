// src/plot_functions/plot_speed_torque_heatmap.rs

use ndarray::Array2;

use crate::color_mapping::Palette;
use crate::data_analysis::quantiles::QuantileStats;
use crate::plot_framework::{HeatmapPlotConfig, Panel};

/// Builds the average stator winding temperature heatmap over the speed/torque grid.
///
/// Empty cells arrive as 0.0 and are colored like a zero mean.
pub fn build_speed_torque_heatmap_panel(grid: &Array2<f64>, grid_stats: &QuantileStats) -> Panel {
    Panel::HeatmapChart(HeatmapPlotConfig {
        title: "Avg Stator Winding Temp Across Speed & Torque".to_string(),
        x_label: "Motor Speed Bins".to_string(),
        y_label: "Torque Bins".to_string(),
        values: grid.clone(),
        palette: Palette::from_quantiles(grid_stats),
        legend_title: Some("Avg Stator Winding Temp (°C)".to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_analysis::quantiles::quantile_stats;

    #[test]
    fn test_heatmap_keeps_grid_shape() {
        let mut grid = Array2::<f64>::zeros((4, 3));
        grid[(1, 2)] = 80.0;
        grid[(3, 0)] = 40.0;
        let cells: Vec<Option<f64>> = grid.iter().copied().map(Some).collect();
        let stats = quantile_stats(&cells).unwrap();

        let Panel::HeatmapChart(config) = build_speed_torque_heatmap_panel(&grid, &stats) else {
            panic!("expected a heatmap");
        };
        assert_eq!(config.values.dim(), (4, 3));
        assert_eq!(config.values[(1, 2)], 80.0);
        assert_eq!(config.palette.min_value(), 0.0);
        assert_eq!(config.palette.max_value(), 80.0);
        assert!(config.legend_title.is_some());
    }
}
