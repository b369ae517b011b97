// src/color_mapping.rs

use plotters::style::RGBColor;

use crate::constants::QUANTILE_PALETTE_COLORS;
use crate::data_analysis::quantiles::QuantileStats;
use crate::error::{DashboardError, Result};

const SEGMENT_WIDTH: f64 = 0.25;

/// Maps `value` within `[min_val, max_val]` onto a blue→cyan→green→yellow→red gradient.
///
/// The ratio is clamped to [0, 1], so out-of-range values take the end colors. A ratio of
/// exactly 0.5 falls in the green→yellow segment and yields pure green. Channels are
/// truncated, not rounded.
pub fn color_for(value: f64, min_val: f64, max_val: f64) -> Result<RGBColor> {
    if !min_val.is_finite() || !max_val.is_finite() || min_val == max_val {
        return Err(DashboardError::DegenerateRange {
            min: min_val,
            max: max_val,
        });
    }

    let ratio = (value - min_val) / (max_val - min_val);
    let ratio = if ratio.is_nan() { 0.0 } else { ratio.clamp(0.0, 1.0) };

    let rising = |start: f64| (255.0 * ((ratio - start) / SEGMENT_WIDTH)) as u8;
    let falling = |start: f64| (255.0 * (1.0 - (ratio - start) / SEGMENT_WIDTH)) as u8;

    let color = if ratio < 0.25 {
        RGBColor(0, rising(0.0), 255) // blue -> cyan
    } else if ratio < 0.50 {
        RGBColor(0, 255, falling(0.25)) // cyan -> green
    } else if ratio < 0.75 {
        RGBColor(rising(0.50), 255, 0) // green -> yellow
    } else {
        RGBColor(255, falling(0.75), 0) // yellow -> red
    };
    Ok(color)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorStop {
    pub value: f64,
    pub color: RGBColor,
}

/// Ascending color stops with continuous linear interpolation between neighbours.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    stops: Vec<ColorStop>,
}

impl Palette {
    /// Five steps at min, p25, median, p75 and max: blue, cyan, yellow, orange, red.
    pub fn from_quantiles(stats: &QuantileStats) -> Self {
        let stops = stats
            .as_array()
            .into_iter()
            .zip(QUANTILE_PALETTE_COLORS)
            .map(|(value, color)| ColorStop { value, color })
            .collect();
        Palette { stops }
    }

    pub fn stops(&self) -> &[ColorStop] {
        &self.stops
    }

    pub fn min_value(&self) -> f64 {
        self.stops[0].value
    }

    pub fn max_value(&self) -> f64 {
        self.stops[self.stops.len() - 1].value
    }

    /// Color for `value`, clamped to the outer stops.
    ///
    /// Values at or below the first stop take its color; at any other repeated stop value the
    /// later stop wins.
    pub fn color_at(&self, value: f64) -> RGBColor {
        let first = self.stops[0];
        if value.is_nan() || value <= first.value {
            return first.color;
        }
        for pair in self.stops.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if value < b.value {
                let span = b.value - a.value;
                let t = if span > 0.0 { (value - a.value) / span } else { 1.0 };
                return lerp_color(a.color, b.color, t);
            }
        }
        self.stops[self.stops.len() - 1].color
    }
}

fn lerp_color(from: RGBColor, to: RGBColor, t: f64) -> RGBColor {
    let channel =
        |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round().clamp(0.0, 255.0) as u8;
    RGBColor(
        channel(from.0, to.0),
        channel(from.1, to.1),
        channel(from.2, to.2),
    )
}
