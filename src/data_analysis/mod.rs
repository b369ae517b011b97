// src/data_analysis/mod.rs

pub mod aggregates;
pub mod binning;
pub mod grid_mean;
pub mod histogram;
pub mod profile_averages;
pub mod quantiles;

// src/data_analysis/mod.rs
