// src/plot_functions/mod.rs

pub mod plot_profile_averages;
pub mod plot_speed_torque_heatmap;
pub mod plot_torque_speed_scatter;
pub mod plot_winding_histogram;

// src/plot_functions/mod.rs
