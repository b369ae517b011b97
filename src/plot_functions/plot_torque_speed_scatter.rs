// src/plot_functions/plot_torque_speed_scatter.rs

use crate::color_mapping::Palette;
use crate::data_analysis::quantiles::QuantileStats;
use crate::plot_framework::{Panel, ScatterPlotConfig};

/// Builds the torque vs. motor speed scatter. Points are colored by torque through a
/// five-step palette anchored at the torque quantiles.
pub fn build_torque_speed_panel(points: &[(f64, f64)], torque_stats: &QuantileStats) -> Panel {
    Panel::ScatterChart(ScatterPlotConfig {
        title: "Torque vs. Motor Speed".to_string(),
        x_label: "Motor Speed (rpm)".to_string(),
        y_label: "Torque (Nm)".to_string(),
        points: points.to_vec(),
        palette: Palette::from_quantiles(torque_stats),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{GRADIENT_BLUE, GRADIENT_RED};

    #[test]
    fn test_palette_anchored_on_torque() {
        let stats = QuantileStats {
            min: -200.0,
            p25: -10.0,
            median: 0.0,
            p75: 25.0,
            max: 230.0,
        };
        let points = vec![(0.0, -200.0), (6000.0, 230.0)];
        let Panel::ScatterChart(config) = build_torque_speed_panel(&points, &stats) else {
            panic!("expected a scatter chart");
        };
        assert_eq!(config.points, points);
        assert_eq!(config.palette.color_at(-200.0), GRADIENT_BLUE);
        assert_eq!(config.palette.color_at(230.0), GRADIENT_RED);
        assert_eq!(config.palette.stops().len(), 5);
    }
}
