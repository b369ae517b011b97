// src/error.rs

use plotters::drawing::DrawingAreaErrorKind;
use thiserror::Error;

/// Every failure the dashboard pipeline can report. All of them are fatal at startup.
#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("dataset contains no rows")]
    EmptyDataset,
    #[error("insufficient data for {0}: no non-missing values")]
    InsufficientData(&'static str),
    #[error("degenerate value range: min ({min}) and max ({max}) do not span a range")]
    DegenerateRange { min: f64, max: f64 },
    #[error("bin count must be at least 1")]
    InvalidBinCount,
    #[error("input series lengths differ ({0})")]
    LengthMismatch(String),
    #[error("missing required CSV columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),
    #[error("dashboard grid {columns}x{rows} has no cells")]
    InvalidGrid { columns: u32, rows: u32 },
    #[error("panel placement {0} lies outside the dashboard grid")]
    InvalidPlacement(String),
    #[error("failed to read CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to render dashboard: {0}")]
    Render(String),
}

impl<E: std::error::Error + Send + Sync> From<DrawingAreaErrorKind<E>> for DashboardError {
    fn from(err: DrawingAreaErrorKind<E>) -> Self {
        DashboardError::Render(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, DashboardError>;
