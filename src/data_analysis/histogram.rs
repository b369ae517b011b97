// src/data_analysis/histogram.rs

use crate::data_analysis::binning::{finite_values, EqualWidthBins};
use crate::error::{DashboardError, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct HistogramBin {
    pub range_low: f64,
    pub range_high: f64,
    pub count: usize,
}

impl HistogramBin {
    pub fn center(&self) -> f64 {
        (self.range_low + self.range_high) / 2.0
    }

    /// Category label used for the bar chart, e.g. `"21.4–23.0"`.
    pub fn category_label(&self) -> String {
        format!("{:.1}–{:.1}", self.range_low, self.range_high)
    }
}

/// Counts non-missing values into `bin_count` equal-width bins over their observed range.
///
/// When every value is equal a single zero-width bin holding all of them is returned.
pub fn histogram(values: &[Option<f64>], bin_count: usize) -> Result<Vec<HistogramBin>> {
    if bin_count == 0 {
        return Err(DashboardError::InvalidBinCount);
    }
    let values = finite_values(values);
    let bins = EqualWidthBins::spanning(&values, bin_count, "histogram")?;

    if bins.is_degenerate() {
        return Ok(vec![HistogramBin {
            range_low: bins.min,
            range_high: bins.min,
            count: values.len(),
        }]);
    }

    let mut counts = vec![0usize; bins.count];
    for &v in &values {
        counts[bins.index_of(v)] += 1;
    }

    Ok(counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| HistogramBin {
            range_low: bins.edge(i),
            range_high: bins.edge(i + 1),
            count,
        })
        .collect())
}
