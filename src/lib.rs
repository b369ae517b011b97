// src/lib.rs - Library interface for internal module access

pub mod channel_names;
pub mod color_mapping;
pub mod constants;
pub mod dashboard;
pub mod data_analysis;
pub mod data_input;
pub mod error;
pub mod font_config;
pub mod plot_framework;
pub mod plot_functions;

pub use dashboard::{build_motor_dashboard, Dashboard, DashboardConfig, OutputFormat};
pub use data_analysis::aggregates::DashboardAggregates;
pub use data_input::dataset_parser::parse_dataset_file;
pub use error::{DashboardError, Result};
