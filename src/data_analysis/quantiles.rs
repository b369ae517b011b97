// src/data_analysis/quantiles.rs

use ndarray::{arr1, Array1};
use ndarray_stats::interpolate::Linear;
use ndarray_stats::Quantile1dExt;
use noisy_float::types::{n64, N64};

use crate::data_analysis::binning::finite_values;
use crate::error::{DashboardError, Result};

/// Five-number summary used to place palette steps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuantileStats {
    pub min: f64,
    pub p25: f64,
    pub median: f64,
    pub p75: f64,
    pub max: f64,
}

impl QuantileStats {
    pub fn as_array(&self) -> [f64; 5] {
        [self.min, self.p25, self.median, self.p75, self.max]
    }
}

/// Min, quartiles and max of the non-missing values, linearly interpolated between order
/// statistics at position `q * (n - 1)`.
pub fn quantile_stats(values: &[Option<f64>]) -> Result<QuantileStats> {
    let mut values: Array1<N64> = finite_values(values).into_iter().map(n64).collect();
    if values.is_empty() {
        return Err(DashboardError::InsufficientData("quantile statistics"));
    }

    let levels = arr1(&[n64(0.0), n64(0.25), n64(0.5), n64(0.75), n64(1.0)]);
    let q = values
        .quantiles_mut(&levels, &Linear)
        .map_err(|_| DashboardError::InsufficientData("quantile statistics"))?;

    Ok(QuantileStats {
        min: q[0].raw(),
        p25: q[1].raw(),
        median: q[2].raw(),
        p75: q[3].raw(),
        max: q[4].raw(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_interpolation() {
        let values: Vec<Option<f64>> = [4.0, 1.0, 3.0, 2.0].into_iter().map(Some).collect();
        let stats = quantile_stats(&values).unwrap();
        assert_eq!(stats.min, 1.0);
        assert_eq!(stats.p25, 1.75);
        assert_eq!(stats.median, 2.5);
        assert_eq!(stats.p75, 3.25);
        assert_eq!(stats.max, 4.0);
    }

    #[test]
    fn test_single_value() {
        let stats = quantile_stats(&[Some(7.0), None]).unwrap();
        assert_eq!(stats.as_array(), [7.0; 5]);
    }

    #[test]
    fn test_empty_is_insufficient() {
        assert!(matches!(
            quantile_stats(&[None]),
            Err(DashboardError::InsufficientData(_))
        ));
    }
}
