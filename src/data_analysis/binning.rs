// src/data_analysis/binning.rs

use ndarray::Array1;
use ndarray_stats::QuantileExt;

use crate::error::{DashboardError, Result};

/// Drops missing (`None`) and non-finite values.
pub fn finite_values(values: &[Option<f64>]) -> Vec<f64> {
    values
        .iter()
        .filter_map(|v| v.filter(|x| x.is_finite()))
        .collect()
}

/// Min and max of an already-filtered set of finite values.
pub fn value_range(values: &[f64], context: &'static str) -> Result<(f64, f64)> {
    let arr = Array1::from(values.to_vec());
    let min = *arr
        .min()
        .map_err(|_| DashboardError::InsufficientData(context))?;
    let max = *arr
        .max()
        .map_err(|_| DashboardError::InsufficientData(context))?;
    Ok((min, max))
}

/// Equal-width partition of `[min, max]` into `count` bins.
///
/// Edges are `min + i * width`. Bins are half-open except the last, which also holds `max`.
/// A zero width (all values equal) places everything in bin 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EqualWidthBins {
    pub min: f64,
    pub width: f64,
    pub count: usize,
}

impl EqualWidthBins {
    pub fn new(min: f64, max: f64, count: usize) -> Result<Self> {
        if count == 0 {
            return Err(DashboardError::InvalidBinCount);
        }
        Ok(EqualWidthBins {
            min,
            width: (max - min) / count as f64,
            count,
        })
    }

    /// Builds bins spanning the observed range of `values`.
    pub fn spanning(values: &[f64], count: usize, context: &'static str) -> Result<Self> {
        let (min, max) = value_range(values, context)?;
        EqualWidthBins::new(min, max, count)
    }

    pub fn is_degenerate(&self) -> bool {
        self.width == 0.0
    }

    pub fn edge(&self, i: usize) -> f64 {
        self.min + i as f64 * self.width
    }

    pub fn index_of(&self, value: f64) -> usize {
        if self.is_degenerate() {
            return 0;
        }
        let raw = ((value - self.min) / self.width).floor();
        let mut idx = if raw <= 0.0 {
            0
        } else {
            (raw as usize).min(self.count - 1)
        };
        // Floor division and `edge` can disagree by one ulp next to an edge; `edge` is
        // authoritative.
        while idx > 0 && value < self.edge(idx) {
            idx -= 1;
        }
        while idx + 1 < self.count && value >= self.edge(idx + 1) {
            idx += 1;
        }
        idx
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finite_values_drops_missing_and_nan() {
        let values = [Some(1.0), None, Some(f64::NAN), Some(3.0), Some(f64::INFINITY)];
        assert_eq!(finite_values(&values), vec![1.0, 3.0]);
    }

    #[test]
    fn test_value_range_empty_is_insufficient() {
        assert!(matches!(
            value_range(&[], "test"),
            Err(DashboardError::InsufficientData("test"))
        ));
    }

    #[test]
    fn test_index_of_last_bin_is_closed() {
        let bins = EqualWidthBins::new(10.0, 40.0, 2).unwrap();
        assert_eq!(bins.index_of(10.0), 0);
        assert_eq!(bins.index_of(24.999), 0);
        assert_eq!(bins.index_of(25.0), 1);
        assert_eq!(bins.index_of(40.0), 1);
    }

    #[test]
    fn test_index_of_agrees_with_edges_near_boundary() {
        // (40.49999999999999 + 27) / 67.5 rounds up to 1.0
        let bins = EqualWidthBins::new(-27.0, 108.0, 2).unwrap();
        assert_eq!(bins.edge(1), 40.5);
        assert_eq!(bins.index_of(40.49999999999999), 0);
        assert_eq!(bins.index_of(40.5), 1);
        assert_eq!(bins.index_of(108.0), 1);
    }

    #[test]
    fn test_index_of_respects_edges_everywhere() {
        let bins = EqualWidthBins::new(1.3, 96.3, 25).unwrap();
        for i in 0..bins.count {
            let edge = bins.edge(i);
            assert_eq!(bins.index_of(edge), i);
            if i > 0 {
                let below = f64::from_bits(edge.to_bits() - 1);
                assert_eq!(bins.index_of(below), i - 1);
            }
        }
    }

    #[test]
    fn test_edges_are_monotonic() {
        let bins = EqualWidthBins::new(-3.0, 7.0, 25).unwrap();
        for i in 0..bins.count {
            assert!(bins.edge(i) < bins.edge(i + 1));
        }
    }

    #[test]
    fn test_zero_bins_rejected() {
        assert!(matches!(
            EqualWidthBins::new(0.0, 1.0, 0),
            Err(DashboardError::InvalidBinCount)
        ));
    }
}
