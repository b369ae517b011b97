// src/constants.rs

use plotters::style::RGBColor;

// Plot dimensions.
pub const PLOT_WIDTH: u32 = 1920;
pub const PLOT_HEIGHT: u32 = 1080;

// Dashboard grid layout.
pub const DASHBOARD_COLUMNS: u32 = 3;
pub const DASHBOARD_ROWS: u32 = 3;

// --- Aggregation Constants ---
pub const HISTOGRAM_BIN_COUNT: usize = 25;
pub const HEATMAP_SPEED_BINS: usize = 500;
pub const HEATMAP_TORQUE_BINS: usize = 500;

// Required CSV headers, in the order they are mapped to MotorSample fields.
pub const PROFILE_ID_HEADER: &str = "profile_id";
pub const MOTOR_SPEED_HEADER: &str = "motor_speed";
pub const TORQUE_HEADER: &str = "torque";

// --- Gradient Colors (value-to-color mapping, cold to hot) ---
pub const GRADIENT_BLUE: RGBColor = RGBColor(0, 0, 255);
pub const GRADIENT_CYAN: RGBColor = RGBColor(0, 255, 255);
pub const GRADIENT_GREEN: RGBColor = RGBColor(0, 255, 0);
pub const GRADIENT_YELLOW: RGBColor = RGBColor(255, 255, 0);
pub const GRADIENT_RED: RGBColor = RGBColor(255, 0, 0);

// Quantile palette steps: min, p25, median, p75, max.
pub const PALETTE_ORANGE: RGBColor = RGBColor(255, 165, 0);
pub const QUANTILE_PALETTE_COLORS: [RGBColor; 5] = [
    GRADIENT_BLUE,
    GRADIENT_CYAN,
    GRADIENT_YELLOW,
    PALETTE_ORANGE,
    GRADIENT_RED,
];

// --- Theme Colors ---
pub const DARK_BACKGROUND: RGBColor = RGBColor(24, 26, 32);
pub const DARK_PANEL_BACKGROUND: RGBColor = RGBColor(36, 39, 48);
pub const DARK_FOREGROUND: RGBColor = RGBColor(220, 222, 228);
pub const DARK_GRID: RGBColor = RGBColor(70, 74, 86);
pub const LIGHT_BACKGROUND: RGBColor = RGBColor(255, 255, 255);
pub const LIGHT_PANEL_BACKGROUND: RGBColor = RGBColor(250, 250, 250);
pub const LIGHT_FOREGROUND: RGBColor = RGBColor(0, 0, 0);
pub const LIGHT_GRID: RGBColor = RGBColor(210, 210, 210);
pub const COLOR_UNAVAILABLE_MESSAGE: RGBColor = RGBColor(230, 60, 60);

// Stroke widths for lines
pub const LINE_WIDTH_PLOT: u32 = 2;
pub const LINE_WIDTH_LEGEND: u32 = 2;

// Scatter point radius in pixels.
pub const SCATTER_POINT_SIZE: u32 = 1;

// Height of the heatmap palette legend strip in pixels.
pub const HEATMAP_LEGEND_HEIGHT_PX: u32 = 40;

// Font sizes
pub const FONT_SIZE_MAIN_TITLE: i32 = 24;
pub const FONT_SIZE_CHART_TITLE: i32 = 18;
pub const FONT_SIZE_AXIS_LABEL: i32 = 12;
pub const FONT_SIZE_LEGEND: i32 = 12;
pub const FONT_SIZE_MESSAGE: i32 = 16;

// src/constants.rs
