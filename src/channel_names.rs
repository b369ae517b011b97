/// Centralized temperature channel naming.
///
/// Provides consistent channel names across the loader, the aggregations and the plot builders.
use crate::data_input::motor_data::MotorSample;

/// The six temperature channels recorded for every sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TemperatureChannel {
    Coolant,
    StatorWinding,
    StatorTooth,
    StatorYoke,
    PermanentMagnet,
    Ambient,
}

pub const CHANNEL_COUNT: usize = 6;

impl TemperatureChannel {
    /// All channels in line-chart order.
    pub const ALL: [TemperatureChannel; CHANNEL_COUNT] = [
        TemperatureChannel::Coolant,
        TemperatureChannel::StatorWinding,
        TemperatureChannel::StatorTooth,
        TemperatureChannel::StatorYoke,
        TemperatureChannel::PermanentMagnet,
        TemperatureChannel::Ambient,
    ];

    /// CSV header name, also used as the series name in the line chart.
    pub fn column_name(self) -> &'static str {
        match self {
            TemperatureChannel::Coolant => "coolant",
            TemperatureChannel::StatorWinding => "stator_winding",
            TemperatureChannel::StatorTooth => "stator_tooth",
            TemperatureChannel::StatorYoke => "stator_yoke",
            TemperatureChannel::PermanentMagnet => "pm",
            TemperatureChannel::Ambient => "ambient",
        }
    }

    /// Reads this channel from a sample.
    pub fn value(self, sample: &MotorSample) -> Option<f64> {
        sample.temperatures[self as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_names() {
        let names: Vec<&str> = TemperatureChannel::ALL
            .iter()
            .map(|c| c.column_name())
            .collect();
        assert_eq!(
            names,
            vec!["coolant", "stator_winding", "stator_tooth", "stator_yoke", "pm", "ambient"]
        );
    }

    #[test]
    fn test_value_reads_matching_slot() {
        let mut sample = MotorSample::default();
        sample.temperatures[TemperatureChannel::StatorYoke as usize] = Some(42.5);
        assert_eq!(TemperatureChannel::StatorYoke.value(&sample), Some(42.5));
        assert_eq!(TemperatureChannel::Coolant.value(&sample), None);
    }
}
