// src/data_analysis/aggregates.rs

use ndarray::Array2;
use tracing::{debug, info};

use crate::channel_names::TemperatureChannel;
use crate::constants::{HEATMAP_SPEED_BINS, HEATMAP_TORQUE_BINS, HISTOGRAM_BIN_COUNT};
use crate::data_analysis::binning::{finite_values, value_range};
use crate::data_analysis::grid_mean::grid_2d_mean;
use crate::data_analysis::histogram::{histogram, HistogramBin};
use crate::data_analysis::profile_averages::{profile_averages, ProfileAverage};
use crate::data_analysis::quantiles::{quantile_stats, QuantileStats};
use crate::data_input::motor_data::MotorSample;
use crate::error::Result;

/// Every derived view the dashboard panels consume.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardAggregates {
    pub channels: Vec<TemperatureChannel>,
    pub profile_averages: Vec<ProfileAverage>,
    pub winding_histogram: Vec<HistogramBin>,
    /// Observed (min, max) of the stator winding temperature.
    pub winding_range: (f64, f64),
    /// `(motor_speed, torque)` for rows where both are present.
    pub speed_torque_points: Vec<(f64, f64)>,
    pub torque_stats: QuantileStats,
    /// `[speed_bin][torque_bin]` mean stator winding temperature, zero where empty.
    pub speed_torque_grid: Array2<f64>,
    pub grid_stats: QuantileStats,
}

impl DashboardAggregates {
    pub fn compute(dataset: &[MotorSample]) -> Result<Self> {
        let channels = TemperatureChannel::ALL.to_vec();
        let profile_averages = profile_averages(dataset, &channels)?;
        info!("Averaged {} profiles.", profile_averages.len());

        let winding: Vec<Option<f64>> = dataset
            .iter()
            .map(|s| TemperatureChannel::StatorWinding.value(s))
            .collect();
        let speed: Vec<Option<f64>> = dataset.iter().map(|s| s.motor_speed).collect();
        let torque: Vec<Option<f64>> = dataset.iter().map(|s| s.torque).collect();

        let winding_histogram = histogram(&winding, HISTOGRAM_BIN_COUNT)?;
        let winding_range = value_range(&finite_values(&winding), "stator winding range")?;
        debug!(
            "Stator winding range: {:.2} to {:.2} °C over {} bins.",
            winding_range.0,
            winding_range.1,
            winding_histogram.len()
        );

        let speed_torque_points: Vec<(f64, f64)> = speed
            .iter()
            .zip(&torque)
            .filter_map(|(s, t)| Some((s.filter(|v| v.is_finite())?, t.filter(|v| v.is_finite())?)))
            .collect();

        let torque_stats = quantile_stats(&torque)?;
        info!(
            "Torque quantiles (Nm): min {:.2}, p25 {:.2}, median {:.2}, p75 {:.2}, max {:.2}",
            torque_stats.min, torque_stats.p25, torque_stats.median, torque_stats.p75, torque_stats.max
        );

        let speed_torque_grid =
            grid_2d_mean(&speed, &torque, &winding, HEATMAP_SPEED_BINS, HEATMAP_TORQUE_BINS)?;
        let grid_cells: Vec<Option<f64>> = speed_torque_grid.iter().copied().map(Some).collect();
        let grid_stats = quantile_stats(&grid_cells)?;
        let filled_cells = speed_torque_grid.iter().filter(|&&v| v != 0.0).count();
        info!(
            "Speed/torque grid: {} of {} cells populated, max mean {:.2} °C.",
            filled_cells,
            speed_torque_grid.len(),
            grid_stats.max
        );

        Ok(DashboardAggregates {
            channels,
            profile_averages,
            winding_histogram,
            winding_range,
            speed_torque_points,
            torque_stats,
            speed_torque_grid,
            grid_stats,
        })
    }
}
