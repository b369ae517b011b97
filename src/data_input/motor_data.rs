// src/data_input/motor_data.rs

use crate::channel_names::CHANNEL_COUNT;

/// Structure to hold data parsed from a single row of the measurement CSV.
/// Uses `Option<f64>` to handle missing or unparseable values.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct MotorSample {
    pub profile_id: i64,                              // Measurement session identifier.
    pub temperatures: [Option<f64>; CHANNEL_COUNT],   // Indexed by TemperatureChannel (°C).
    pub motor_speed: Option<f64>,                     // Motor speed (rpm).
    pub torque: Option<f64>,                          // Torque (Nm).
}

impl MotorSample {
    pub fn new(profile_id: i64) -> Self {
        MotorSample {
            profile_id,
            ..Default::default()
        }
    }
}

// src/data_input/motor_data.rs
