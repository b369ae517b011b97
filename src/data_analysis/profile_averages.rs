// src/data_analysis/profile_averages.rs

use std::collections::BTreeMap;

use crate::channel_names::TemperatureChannel;
use crate::data_input::motor_data::MotorSample;
use crate::error::{DashboardError, Result};

/// Mean temperature of each requested channel for one profile.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileAverage {
    pub profile_id: i64,
    /// Aligned with the channel list passed to `profile_averages`.
    pub means: Vec<Option<f64>>,
}

/// Groups samples by profile id and averages each channel's non-missing values.
///
/// Records come out in ascending profile id order.
pub fn profile_averages(
    dataset: &[MotorSample],
    channels: &[TemperatureChannel],
) -> Result<Vec<ProfileAverage>> {
    if dataset.is_empty() {
        return Err(DashboardError::EmptyDataset);
    }

    // profile_id -> per-channel (sum, count)
    let mut groups: BTreeMap<i64, Vec<(f64, usize)>> = BTreeMap::new();
    for sample in dataset {
        let accum = groups
            .entry(sample.profile_id)
            .or_insert_with(|| vec![(0.0, 0); channels.len()]);
        for (slot, channel) in accum.iter_mut().zip(channels) {
            if let Some(v) = channel.value(sample) {
                slot.0 += v;
                slot.1 += 1;
            }
        }
    }

    Ok(groups
        .into_iter()
        .map(|(profile_id, accum)| ProfileAverage {
            profile_id,
            means: accum
                .into_iter()
                .map(|(sum, count)| (count > 0).then(|| sum / count as f64))
                .collect(),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(profile_id: i64, coolant: Option<f64>, winding: Option<f64>) -> MotorSample {
        let mut s = MotorSample::new(profile_id);
        s.temperatures[TemperatureChannel::Coolant as usize] = coolant;
        s.temperatures[TemperatureChannel::StatorWinding as usize] = winding;
        s
    }

    #[test]
    fn test_empty_dataset() {
        assert!(matches!(
            profile_averages(&[], &TemperatureChannel::ALL),
            Err(DashboardError::EmptyDataset)
        ));
    }

    #[test]
    fn test_one_record_per_profile_sorted() {
        let data = vec![
            sample(20, Some(10.0), Some(30.0)),
            sample(4, Some(1.0), Some(2.0)),
            sample(20, Some(20.0), Some(50.0)),
            sample(4, Some(3.0), Some(4.0)),
            sample(11, Some(5.0), None),
        ];
        let channels = [TemperatureChannel::Coolant, TemperatureChannel::StatorWinding];
        let averages = profile_averages(&data, &channels).unwrap();

        let ids: Vec<i64> = averages.iter().map(|a| a.profile_id).collect();
        assert_eq!(ids, vec![4, 11, 20]);
        assert_eq!(averages[0].means, vec![Some(2.0), Some(3.0)]);
        assert_eq!(averages[1].means, vec![Some(5.0), None]);
        assert_eq!(averages[2].means, vec![Some(15.0), Some(40.0)]);
    }

    #[test]
    fn test_missing_values_excluded_from_mean() {
        let data = vec![
            sample(1, Some(10.0), None),
            sample(1, None, None),
            sample(1, Some(20.0), Some(7.0)),
        ];
        let averages = profile_averages(
            &data,
            &[TemperatureChannel::Coolant, TemperatureChannel::StatorWinding],
        )
        .unwrap();
        assert_eq!(averages.len(), 1);
        assert_eq!(averages[0].means, vec![Some(15.0), Some(7.0)]);
    }
}
