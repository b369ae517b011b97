// src/plot_framework.rs

use ndarray::Array2;
use plotters::backend::DrawingBackend;
use plotters::chart::{ChartBuilder, SeriesLabelPosition};
use plotters::coord::Shift;
use plotters::drawing::DrawingArea;
use plotters::element::{Circle, PathElement, Rectangle, Text};
use plotters::prelude::{IntoSegmentedCoord, SegmentValue};
use plotters::series::LineSeries;
use plotters::style::{Color, RGBColor};

use crate::color_mapping::Palette;
use crate::constants::{
    COLOR_UNAVAILABLE_MESSAGE, DARK_BACKGROUND, DARK_FOREGROUND, DARK_GRID, DARK_PANEL_BACKGROUND,
    HEATMAP_LEGEND_HEIGHT_PX, LIGHT_BACKGROUND, LIGHT_FOREGROUND, LIGHT_GRID,
    LIGHT_PANEL_BACKGROUND, LINE_WIDTH_LEGEND, SCATTER_POINT_SIZE,
};
use crate::error::Result;
use crate::font_config::{
    themed_font, FONT_TUPLE_AXIS_LABEL, FONT_TUPLE_CHART_TITLE, FONT_TUPLE_LEGEND,
    FONT_TUPLE_MESSAGE,
};

/// Number of color steps drawn in the heatmap palette legend.
const LEGEND_COLOR_STEPS: usize = 100;

/// Calculate plot range with padding.
/// Adds 15% padding, or a fixed padding for very small ranges.
pub fn calculate_range(min_val: f64, max_val: f64) -> (f64, f64) {
    let (min, max) = if min_val <= max_val {
        (min_val, max_val)
    } else {
        (max_val, min_val)
    };
    let range = (max - min).abs();
    let padding = if range < 1e-6 { 0.5 } else { range * 0.15 };
    (min - padding, max + padding)
}

/// Min/max over both coordinates of a point cloud, `None` when empty.
fn point_bounds<'a>(
    points: impl IntoIterator<Item = &'a (f64, f64)>,
) -> Option<((f64, f64), (f64, f64))> {
    let ((x_min, x_max), (y_min, y_max)) = points.into_iter().fold(
        (
            (f64::INFINITY, f64::NEG_INFINITY),
            (f64::INFINITY, f64::NEG_INFINITY),
        ),
        |((x0, x1), (y0, y1)), &(x, y)| ((x0.min(x), x1.max(x)), (y0.min(y), y1.max(y))),
    );
    if x_min.is_infinite() || y_min.is_infinite() {
        None
    } else {
        Some(((x_min, x_max), (y_min, y_max)))
    }
}

/// Dashboard color theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

#[derive(Debug, Clone, Copy)]
pub struct ThemeColors {
    pub background: RGBColor,
    pub panel_background: RGBColor,
    pub foreground: RGBColor,
    pub grid: RGBColor,
}

impl Theme {
    pub fn colors(self) -> ThemeColors {
        match self {
            Theme::Dark => ThemeColors {
                background: DARK_BACKGROUND,
                panel_background: DARK_PANEL_BACKGROUND,
                foreground: DARK_FOREGROUND,
                grid: DARK_GRID,
            },
            Theme::Light => ThemeColors {
                background: LIGHT_BACKGROUND,
                panel_background: LIGHT_PANEL_BACKGROUND,
                foreground: LIGHT_FOREGROUND,
                grid: LIGHT_GRID,
            },
        }
    }
}

/// Cell position and span of a panel on the dashboard grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridPlacement {
    pub column: u32,
    pub row: u32,
    pub column_span: u32,
    pub row_span: u32,
}

impl GridPlacement {
    pub const fn new(column: u32, row: u32, column_span: u32, row_span: u32) -> Self {
        GridPlacement {
            column,
            row,
            column_span,
            row_span,
        }
    }

    pub fn fits(&self, columns: u32, rows: u32) -> bool {
        self.column_span > 0
            && self.row_span > 0
            && self.column + self.column_span <= columns
            && self.row + self.row_span <= rows
    }
}

#[derive(Debug, Clone)]
pub struct PlotSeries {
    pub data: Vec<(f64, f64)>,
    pub label: String,
    pub color: RGBColor,
    pub stroke_width: u32,
}

#[derive(Debug, Clone)]
pub struct LinePlotConfig {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub series: Vec<PlotSeries>,
    pub show_legend: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub category: String,
    pub value: f64,
    pub color: RGBColor,
}

/// Bars are drawn in the given order; no sorting is applied.
#[derive(Debug, Clone)]
pub struct BarPlotConfig {
    pub title: String,
    pub category_label: String,
    pub value_label: String,
    pub bars: Vec<Bar>,
}

/// Points colored by looking up their y value in `palette`.
#[derive(Debug, Clone)]
pub struct ScatterPlotConfig {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub points: Vec<(f64, f64)>,
    pub palette: Palette,
}

/// Grid of intensities drawn from (0, 0) to (columns, rows) with unit steps.
#[derive(Debug, Clone)]
pub struct HeatmapPlotConfig {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// Indexed `[x][y]`.
    pub values: Array2<f64>,
    pub palette: Palette,
    pub legend_title: Option<String>,
}

/// Declarative description of one dashboard panel.
#[derive(Debug, Clone)]
pub enum Panel {
    LineChart(LinePlotConfig),
    BarChart(BarPlotConfig),
    ScatterChart(ScatterPlotConfig),
    HeatmapChart(HeatmapPlotConfig),
}

impl Panel {
    pub fn title(&self) -> &str {
        match self {
            Panel::LineChart(c) => &c.title,
            Panel::BarChart(c) => &c.title,
            Panel::ScatterChart(c) => &c.title,
            Panel::HeatmapChart(c) => &c.title,
        }
    }

    pub fn has_data(&self) -> bool {
        match self {
            Panel::LineChart(c) => c.series.iter().any(|s| !s.data.is_empty()),
            Panel::BarChart(c) => !c.bars.is_empty(),
            Panel::ScatterChart(c) => !c.points.is_empty(),
            Panel::HeatmapChart(c) => !c.values.is_empty(),
        }
    }
}

/// Draw a "Data Unavailable" message on a plot area.
pub fn draw_unavailable_message<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    panel_title: &str,
    reason: &str,
) -> Result<()> {
    const CHAR_WIDTH_RATIO: f32 = 0.6; // Approximate character width relative to font size

    let (width, height) = area.dim_in_pixel();
    let message = format!("{panel_title} Data Unavailable: {reason}");
    let estimated_char_width = (FONT_TUPLE_MESSAGE.1 as f32 * CHAR_WIDTH_RATIO) as i32;
    let estimated_text_width = message.chars().count() as i32 * estimated_char_width;

    let x = (width as i32 / 2 - estimated_text_width / 2).max(0);
    let y = height as i32 / 2 - FONT_TUPLE_MESSAGE.1 / 2;
    area.draw(&Text::new(
        message,
        (x, y),
        themed_font(FONT_TUPLE_MESSAGE, COLOR_UNAVAILABLE_MESSAGE),
    ))?;
    Ok(())
}

/// Draws one panel into `area`, or a placeholder message when it has nothing to show.
pub fn draw_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    panel: &Panel,
    colors: &ThemeColors,
) -> Result<()> {
    if !panel.has_data() {
        return draw_unavailable_message(area, panel.title(), "No data points");
    }
    match panel {
        Panel::LineChart(config) => draw_line_chart(area, config, colors),
        Panel::BarChart(config) => draw_bar_chart(area, config, colors),
        Panel::ScatterChart(config) => draw_scatter_chart(area, config, colors),
        Panel::HeatmapChart(config) => draw_heatmap_chart(area, config, colors),
    }
}

fn draw_line_chart<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    config: &LinePlotConfig,
    colors: &ThemeColors,
) -> Result<()> {
    let Some(((x_min, x_max), (y_min, y_max))) =
        point_bounds(config.series.iter().flat_map(|s| s.data.iter()))
    else {
        return draw_unavailable_message(area, &config.title, "No data points");
    };
    let (y_lo, y_hi) = calculate_range(y_min, y_max);
    let (x_lo, x_hi) = if x_max > x_min {
        (x_min, x_max)
    } else {
        calculate_range(x_min, x_max)
    };

    let mut chart = ChartBuilder::on(area)
        .caption(
            &config.title,
            themed_font(FONT_TUPLE_CHART_TITLE, colors.foreground),
        )
        .margin(5)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(x_lo..x_hi, y_lo..y_hi)?;

    chart
        .configure_mesh()
        .x_desc(&config.x_label)
        .y_desc(&config.y_label)
        .x_labels(20)
        .y_labels(8)
        .x_label_formatter(&|x| format!("{:.0}", x))
        .y_label_formatter(&|y| format!("{:.0}", y))
        .bold_line_style(colors.grid)
        .light_line_style(colors.grid.mix(0.3))
        .axis_style(colors.foreground)
        .label_style(themed_font(FONT_TUPLE_AXIS_LABEL, colors.foreground))
        .axis_desc_style(themed_font(FONT_TUPLE_AXIS_LABEL, colors.foreground))
        .draw()?;

    let mut legend_series_count = 0;
    for s in &config.series {
        if s.data.is_empty() {
            continue;
        }
        let color = s.color;
        let series = chart.draw_series(LineSeries::new(
            s.data.iter().copied(),
            color.stroke_width(s.stroke_width),
        ))?;
        if !s.label.is_empty() {
            series.label(&s.label).legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(LINE_WIDTH_LEGEND))
            });
            legend_series_count += 1;
        }
    }

    if config.show_legend && legend_series_count > 0 {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(colors.panel_background.mix(0.8))
            .border_style(colors.foreground)
            .label_font(themed_font(FONT_TUPLE_LEGEND, colors.foreground))
            .draw()?;
    }
    Ok(())
}

/// Horizontal bars, one category per row, first bar at the bottom.
fn draw_bar_chart<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    config: &BarPlotConfig,
    colors: &ThemeColors,
) -> Result<()> {
    let bar_count = config.bars.len();
    let max_value = config.bars.iter().map(|b| b.value).fold(0.0, f64::max);
    let value_max = if max_value > 0.0 { max_value * 1.05 } else { 1.0 };

    let mut chart = ChartBuilder::on(area)
        .caption(
            &config.title,
            themed_font(FONT_TUPLE_CHART_TITLE, colors.foreground),
        )
        .margin(5)
        .x_label_area_size(40)
        .y_label_area_size(90)
        .build_cartesian_2d(0.0..value_max, (0..bar_count).into_segmented())?;

    let category_formatter = |v: &SegmentValue<usize>| match v {
        SegmentValue::CenterOf(i) => config
            .bars
            .get(*i)
            .map(|b| b.category.clone())
            .unwrap_or_default(),
        _ => String::new(),
    };

    chart
        .configure_mesh()
        .disable_y_mesh()
        .x_desc(&config.value_label)
        .y_desc(&config.category_label)
        .x_labels(5)
        .y_labels(bar_count)
        .x_label_formatter(&|x| format!("{:.0}", x))
        .y_label_formatter(&category_formatter)
        .bold_line_style(colors.grid)
        .light_line_style(colors.grid.mix(0.3))
        .axis_style(colors.foreground)
        .label_style(themed_font(FONT_TUPLE_AXIS_LABEL, colors.foreground))
        .axis_desc_style(themed_font(FONT_TUPLE_AXIS_LABEL, colors.foreground))
        .draw()?;

    chart.draw_series(config.bars.iter().enumerate().map(|(i, bar)| {
        Rectangle::new(
            [
                (0.0, SegmentValue::Exact(i)),
                (bar.value, SegmentValue::Exact(i + 1)),
            ],
            bar.color.filled(),
        )
    }))?;
    Ok(())
}

fn draw_scatter_chart<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    config: &ScatterPlotConfig,
    colors: &ThemeColors,
) -> Result<()> {
    let Some(((x_min, x_max), (y_min, y_max))) = point_bounds(config.points.iter()) else {
        return draw_unavailable_message(area, &config.title, "No data points");
    };
    let (x_lo, x_hi) = calculate_range(x_min, x_max);
    let (y_lo, y_hi) = calculate_range(y_min, y_max);

    let mut chart = ChartBuilder::on(area)
        .caption(
            &config.title,
            themed_font(FONT_TUPLE_CHART_TITLE, colors.foreground),
        )
        .margin(5)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(x_lo..x_hi, y_lo..y_hi)?;

    chart
        .configure_mesh()
        .x_desc(&config.x_label)
        .y_desc(&config.y_label)
        .x_labels(10)
        .y_labels(8)
        .x_label_formatter(&|x| format!("{:.0}", x))
        .y_label_formatter(&|y| format!("{:.0}", y))
        .bold_line_style(colors.grid)
        .light_line_style(colors.grid.mix(0.3))
        .axis_style(colors.foreground)
        .label_style(themed_font(FONT_TUPLE_AXIS_LABEL, colors.foreground))
        .axis_desc_style(themed_font(FONT_TUPLE_AXIS_LABEL, colors.foreground))
        .draw()?;

    chart.draw_series(config.points.iter().map(|&(x, y)| {
        Circle::new(
            (x, y),
            SCATTER_POINT_SIZE,
            config.palette.color_at(y).filled(),
        )
    }))?;
    Ok(())
}

fn draw_heatmap_chart<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    config: &HeatmapPlotConfig,
    colors: &ThemeColors,
) -> Result<()> {
    let (_, area_height) = area.dim_in_pixel();
    let (plot_area, legend_area) =
        if config.legend_title.is_some() && area_height > HEATMAP_LEGEND_HEIGHT_PX * 3 {
            let (plot, legend) = area.split_vertically(area_height - HEATMAP_LEGEND_HEIGHT_PX);
            (plot, Some(legend))
        } else {
            (area.clone(), None)
        };

    let (columns, rows) = config.values.dim();
    let mut chart = ChartBuilder::on(&plot_area)
        .caption(
            &config.title,
            themed_font(FONT_TUPLE_CHART_TITLE, colors.foreground),
        )
        .margin(5)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(0.0..columns as f64, 0.0..rows as f64)?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc(&config.x_label)
        .y_desc(&config.y_label)
        .x_labels(10)
        .y_labels(10)
        .x_label_formatter(&|x| format!("{:.0}", x))
        .y_label_formatter(&|y| format!("{:.0}", y))
        .axis_style(colors.foreground)
        .label_style(themed_font(FONT_TUPLE_AXIS_LABEL, colors.foreground))
        .axis_desc_style(themed_font(FONT_TUPLE_AXIS_LABEL, colors.foreground))
        .draw()?;

    chart.draw_series(config.values.indexed_iter().map(|((x_idx, y_idx), &value)| {
        let (x, y) = (x_idx as f64, y_idx as f64);
        Rectangle::new(
            [(x, y), (x + 1.0, y + 1.0)],
            config.palette.color_at(value).filled(),
        )
    }))?;

    if let (Some(legend_area), Some(legend_title)) = (legend_area, &config.legend_title) {
        draw_palette_legend(&legend_area, legend_title, &config.palette, colors)?;
    }
    Ok(())
}

/// Horizontal color bar spanning the palette's value range.
fn draw_palette_legend<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    title: &str,
    palette: &Palette,
    colors: &ThemeColors,
) -> Result<()> {
    let (width, _) = area.dim_in_pixel();
    let title_width = (width / 4).min(260);
    let (title_area, bar_area) = area.split_horizontally(title_width);
    title_area.draw(&Text::new(
        title.to_string(),
        (5, 5),
        themed_font(FONT_TUPLE_LEGEND, colors.foreground),
    ))?;

    let (min_value, max_value) = (palette.min_value(), palette.max_value());
    if max_value <= min_value {
        bar_area.draw(&Text::new(
            format!("{:.1}", min_value),
            (5, 5),
            themed_font(FONT_TUPLE_LEGEND, colors.foreground),
        ))?;
        return Ok(());
    }

    let mut chart = ChartBuilder::on(&bar_area)
        .margin_right(20)
        .x_label_area_size(18)
        .build_cartesian_2d(min_value..max_value, 0.0..1.0)?;
    chart
        .configure_mesh()
        .disable_mesh()
        .disable_y_axis()
        .x_labels(6)
        .x_label_formatter(&|v| format!("{:.1}", v))
        .axis_style(colors.foreground)
        .label_style(themed_font(FONT_TUPLE_LEGEND, colors.foreground))
        .draw()?;

    let step = (max_value - min_value) / LEGEND_COLOR_STEPS as f64;
    chart.draw_series((0..LEGEND_COLOR_STEPS).map(|i| {
        let start = min_value + i as f64 * step;
        Rectangle::new(
            [(start, 0.0), (start + step, 1.0)],
            palette.color_at(start + step / 2.0).filled(),
        )
    }))?;
    Ok(())
}


// src/plot_framework.rs
