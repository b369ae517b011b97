// src/data_input/mod.rs

pub mod dataset_parser;
pub mod motor_data;

// src/data_input/mod.rs
