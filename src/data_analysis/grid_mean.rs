// src/data_analysis/grid_mean.rs

use ndarray::Array2;

use crate::data_analysis::binning::{finite_values, EqualWidthBins};
use crate::error::{DashboardError, Result};

/// Bins `x` and `y` independently into equal-width bins over their observed ranges and
/// averages `z` within each `(x_bin, y_bin)` cell.
///
/// Output shape is always `[x_bins, y_bins]`. Cells without samples hold exactly `0.0`,
/// which makes "no data" indistinguishable from a zero mean.
pub fn grid_2d_mean(
    x: &[Option<f64>],
    y: &[Option<f64>],
    z: &[Option<f64>],
    x_bins: usize,
    y_bins: usize,
) -> Result<Array2<f64>> {
    if x.len() != y.len() || x.len() != z.len() {
        return Err(DashboardError::LengthMismatch(format!(
            "x={}, y={}, z={}",
            x.len(),
            y.len(),
            z.len()
        )));
    }
    if x_bins == 0 || y_bins == 0 {
        return Err(DashboardError::InvalidBinCount);
    }

    let x_partition = EqualWidthBins::spanning(&finite_values(x), x_bins, "grid x axis")?;
    let y_partition = EqualWidthBins::spanning(&finite_values(y), y_bins, "grid y axis")?;

    let mut sums = Array2::<f64>::zeros((x_bins, y_bins));
    let mut counts = Array2::<usize>::zeros((x_bins, y_bins));
    let mut contributing = 0usize;

    for ((xv, yv), zv) in x.iter().zip(y).zip(z) {
        let (Some(xv), Some(yv), Some(zv)) = (*xv, *yv, *zv) else {
            continue;
        };
        if !(xv.is_finite() && yv.is_finite() && zv.is_finite()) {
            continue;
        }
        let cell = (x_partition.index_of(xv), y_partition.index_of(yv));
        sums[cell] += zv;
        counts[cell] += 1;
        contributing += 1;
    }

    if contributing == 0 {
        return Err(DashboardError::InsufficientData("grid mean"));
    }

    let mut means = Array2::<f64>::zeros((x_bins, y_bins));
    for ((cell, mean), &count) in means.indexed_iter_mut().zip(counts.iter()) {
        if count > 0 {
            *mean = sums[cell] / count as f64;
        }
    }
    Ok(means)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn some(values: &[f64]) -> Vec<Option<f64>> {
        values.iter().copied().map(Some).collect()
    }

    #[test]
    fn test_cells_follow_bin_edges() {
        let x = some(&[-27.0, 40.49999999999999, 108.0]);
        let y = some(&[0.0, 0.0, 1.0]);
        let z = some(&[1.0, 3.0, 5.0]);
        let grid = grid_2d_mean(&x, &y, &z, 2, 1).unwrap();
        assert_eq!(grid[(0, 0)], 2.0);
        assert_eq!(grid[(1, 0)], 5.0);
    }

    #[test]
    fn test_shape_independent_of_sparsity() {
        let x = some(&[0.0, 10.0]);
        let y = some(&[0.0, 10.0]);
        let z = some(&[50.0, 70.0]);
        let grid = grid_2d_mean(&x, &y, &z, 500, 500).unwrap();
        assert_eq!(grid.dim(), (500, 500));
        assert_eq!(grid[(0, 0)], 50.0);
        assert_eq!(grid[(499, 499)], 70.0);
        let zero_cells = grid.iter().filter(|&&v| v == 0.0).count();
        assert_eq!(zero_cells, 500 * 500 - 2);
    }

    #[test]
    fn test_cell_mean() {
        let x = some(&[0.0, 0.1, 0.2, 4.0]);
        let y = some(&[0.0, 0.1, 0.2, 4.0]);
        let z = some(&[10.0, 20.0, 30.0, 99.0]);
        let grid = grid_2d_mean(&x, &y, &z, 2, 2).unwrap();
        assert_eq!(grid[(0, 0)], 20.0);
        assert_eq!(grid[(1, 1)], 99.0);
        assert_eq!(grid[(0, 1)], 0.0);
        assert_eq!(grid[(1, 0)], 0.0);
    }

    #[test]
    fn test_missing_values_skip_rows() {
        let x = vec![Some(0.0), None, Some(1.0), Some(1.0)];
        let y = vec![Some(0.0), Some(0.5), Some(1.0), Some(1.0)];
        let z = vec![Some(1.0), Some(100.0), None, Some(3.0)];
        let grid = grid_2d_mean(&x, &y, &z, 2, 2).unwrap();
        assert_eq!(grid[(0, 0)], 1.0);
        assert_eq!(grid[(1, 1)], 3.0);
    }

    #[test]
    fn test_length_mismatch() {
        let x = some(&[0.0, 1.0]);
        let y = some(&[0.0]);
        assert!(matches!(
            grid_2d_mean(&x, &y, &x, 2, 2),
            Err(DashboardError::LengthMismatch(_))
        ));
    }

    #[test]
    fn test_no_contributing_rows() {
        let x = some(&[0.0, 1.0]);
        let y = some(&[0.0, 1.0]);
        let z = vec![None, None];
        assert!(matches!(
            grid_2d_mean(&x, &y, &z, 2, 2),
            Err(DashboardError::InsufficientData(_))
        ));
    }
}
