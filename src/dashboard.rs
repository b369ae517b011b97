// src/dashboard.rs

use std::path::Path;

use plotters::backend::{BitMapBackend, DrawingBackend, SVGBackend};
use plotters::coord::Shift;
use plotters::drawing::{DrawingArea, IntoDrawingArea};
use plotters::element::Text;
use tracing::{debug, info};

use crate::constants::{DASHBOARD_COLUMNS, DASHBOARD_ROWS, PLOT_HEIGHT, PLOT_WIDTH};
use crate::data_analysis::aggregates::DashboardAggregates;
use crate::error::{DashboardError, Result};
use crate::font_config::{themed_font, FONT_TUPLE_MAIN_TITLE};
use crate::plot_framework::{draw_panel, GridPlacement, Panel, Theme};
use crate::plot_functions::plot_profile_averages::build_profile_averages_panel;
use crate::plot_functions::plot_speed_torque_heatmap::build_speed_torque_heatmap_panel;
use crate::plot_functions::plot_torque_speed_scatter::build_torque_speed_panel;
use crate::plot_functions::plot_winding_histogram::build_winding_histogram_panel;

// Fixed dashboard layout.
pub const LINE_CHART_PLACEMENT: GridPlacement = GridPlacement::new(0, 0, 2, 1);
pub const HISTOGRAM_PLACEMENT: GridPlacement = GridPlacement::new(2, 0, 1, 3);
pub const SCATTER_PLACEMENT: GridPlacement = GridPlacement::new(0, 1, 2, 1);
pub const HEATMAP_PLACEMENT: GridPlacement = GridPlacement::new(0, 2, 2, 1);

// Space reserved above the grid for the dashboard title.
const TITLE_MARGIN_PX: u32 = 40;
const PANEL_GAP_PX: u32 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Png,
    Svg,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
            OutputFormat::Svg => "svg",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    pub title: String,
    pub columns: u32,
    pub rows: u32,
    pub theme: Theme,
    pub width: u32,
    pub height: u32,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        DashboardConfig {
            title: "Electric Motor Temperature".to_string(),
            columns: DASHBOARD_COLUMNS,
            rows: DASHBOARD_ROWS,
            theme: Theme::default(),
            width: PLOT_WIDTH,
            height: PLOT_HEIGHT,
        }
    }
}

/// Panels placed on a fixed grid, rendered once to an image file.
#[derive(Debug, Clone)]
pub struct Dashboard {
    config: DashboardConfig,
    panels: Vec<(GridPlacement, Panel)>,
}

impl Dashboard {
    pub fn new(config: DashboardConfig) -> Result<Self> {
        if config.columns == 0 || config.rows == 0 {
            return Err(DashboardError::InvalidGrid {
                columns: config.columns,
                rows: config.rows,
            });
        }
        Ok(Dashboard {
            config,
            panels: Vec::new(),
        })
    }

    pub fn panels(&self) -> &[(GridPlacement, Panel)] {
        &self.panels
    }

    pub fn add_panel(&mut self, placement: GridPlacement, panel: Panel) -> Result<()> {
        if !placement.fits(self.config.columns, self.config.rows) {
            return Err(DashboardError::InvalidPlacement(format!(
                "column {} row {} span {}x{} on a {}x{} grid",
                placement.column,
                placement.row,
                placement.column_span,
                placement.row_span,
                self.config.columns,
                self.config.rows
            )));
        }
        debug!("Placing '{}' at {:?}", panel.title(), placement);
        self.panels.push((placement, panel));
        Ok(())
    }

    /// Renders every panel and writes the image to `output_path`.
    pub fn render(&self, output_path: &Path, format: OutputFormat) -> Result<()> {
        let size = (self.config.width, self.config.height);
        match format {
            OutputFormat::Png => {
                let root = BitMapBackend::new(output_path, size).into_drawing_area();
                self.draw_on(&root)?;
                root.present()?;
            }
            OutputFormat::Svg => {
                let root = SVGBackend::new(output_path, size).into_drawing_area();
                self.draw_on(&root)?;
                root.present()?;
            }
        }
        info!("Dashboard saved as '{}'.", output_path.display());
        Ok(())
    }

    fn draw_on<DB: DrawingBackend>(&self, root: &DrawingArea<DB, Shift>) -> Result<()> {
        let colors = self.config.theme.colors();
        root.fill(&colors.background)?;
        root.draw(&Text::new(
            self.config.title.clone(),
            (10, 10),
            themed_font(FONT_TUPLE_MAIN_TITLE, colors.foreground),
        ))?;

        let grid_area = root.margin(TITLE_MARGIN_PX, 5, 5, 5);
        let (width, height) = grid_area.dim_in_pixel();
        let cell_width = width / self.config.columns;
        let cell_height = height / self.config.rows;

        for (placement, panel) in &self.panels {
            let left = placement.column * cell_width;
            let top = placement.row * cell_height;
            let right = width.saturating_sub(left + placement.column_span * cell_width);
            let bottom = height.saturating_sub(top + placement.row_span * cell_height);

            let panel_area = grid_area.margin(
                top + PANEL_GAP_PX,
                bottom + PANEL_GAP_PX,
                left + PANEL_GAP_PX,
                right + PANEL_GAP_PX,
            );
            panel_area.fill(&colors.panel_background)?;
            draw_panel(&panel_area, panel, &colors)?;
        }
        Ok(())
    }
}

/// Builds the four-panel motor temperature dashboard from precomputed aggregates.
pub fn build_motor_dashboard(
    aggregates: &DashboardAggregates,
    config: DashboardConfig,
) -> Result<Dashboard> {
    let mut dashboard = Dashboard::new(config)?;

    dashboard.add_panel(
        LINE_CHART_PLACEMENT,
        build_profile_averages_panel(&aggregates.profile_averages, &aggregates.channels),
    )?;
    dashboard.add_panel(
        HISTOGRAM_PLACEMENT,
        build_winding_histogram_panel(&aggregates.winding_histogram, aggregates.winding_range)?,
    )?;
    dashboard.add_panel(
        SCATTER_PLACEMENT,
        build_torque_speed_panel(&aggregates.speed_torque_points, &aggregates.torque_stats),
    )?;
    dashboard.add_panel(
        HEATMAP_PLACEMENT,
        build_speed_torque_heatmap_panel(&aggregates.speed_torque_grid, &aggregates.grid_stats),
    )?;

    Ok(dashboard)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plot_framework::BarPlotConfig;

    fn empty_bar_panel() -> Panel {
        Panel::BarChart(BarPlotConfig {
            title: "Test".to_string(),
            category_label: String::new(),
            value_label: String::new(),
            bars: Vec::new(),
        })
    }

    #[test]
    fn test_default_layout_fits_grid() {
        let config = DashboardConfig::default();
        for placement in [
            LINE_CHART_PLACEMENT,
            HISTOGRAM_PLACEMENT,
            SCATTER_PLACEMENT,
            HEATMAP_PLACEMENT,
        ] {
            assert!(placement.fits(config.columns, config.rows));
        }
    }

    #[test]
    fn test_rejects_out_of_grid_placement() {
        let mut dashboard = Dashboard::new(DashboardConfig::default()).unwrap();
        let result = dashboard.add_panel(GridPlacement::new(2, 0, 2, 1), empty_bar_panel());
        assert!(matches!(result, Err(DashboardError::InvalidPlacement(_))));
        assert!(dashboard.panels().is_empty());
    }

    #[test]
    fn test_rejects_empty_grid() {
        for (columns, rows) in [(0, 3), (3, 0)] {
            let config = DashboardConfig {
                columns,
                rows,
                ..DashboardConfig::default()
            };
            assert!(matches!(
                Dashboard::new(config),
                Err(DashboardError::InvalidGrid { .. })
            ));
        }
    }

    #[test]
    fn test_output_extension() {
        assert_eq!(OutputFormat::Png.extension(), "png");
        assert_eq!(OutputFormat::Svg.extension(), "svg");
    }
}
