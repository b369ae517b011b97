// src/data_input/dataset_parser.rs

use csv::ReaderBuilder;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::{debug, info, warn};

use crate::channel_names::TemperatureChannel;
use crate::constants::{MOTOR_SPEED_HEADER, PROFILE_ID_HEADER, TORQUE_HEADER};
use crate::data_input::motor_data::MotorSample;
use crate::error::{DashboardError, Result};

// Target header positions in `target_headers()`.
const PROFILE_ID_IDX: usize = 0;
const FIRST_CHANNEL_IDX: usize = 1;
const MOTOR_SPEED_IDX: usize = FIRST_CHANNEL_IDX + TemperatureChannel::ALL.len();
const TORQUE_IDX: usize = MOTOR_SPEED_IDX + 1;

fn target_headers() -> Vec<&'static str> {
    let mut headers = vec![PROFILE_ID_HEADER];
    headers.extend(TemperatureChannel::ALL.iter().map(|c| c.column_name()));
    headers.push(MOTOR_SPEED_HEADER);
    headers.push(TORQUE_HEADER);
    headers
}

/// Parses the measurement CSV at `input_file_path` into samples, in file order.
///
/// Every required column must be present; extra columns are ignored.
pub fn parse_dataset_file(input_file_path: &Path) -> Result<Vec<MotorSample>> {
    info!("Reading dataset '{}'", input_file_path.display());
    let file = File::open(input_file_path)?;
    parse_dataset(BufReader::new(file))
}

/// Parses measurement CSV content from any reader.
pub fn parse_dataset<R: Read>(source: R) -> Result<Vec<MotorSample>> {
    let target_headers = target_headers();
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(source);

    // --- Header Index Mapping ---
    let header_record = reader.headers()?.clone();
    debug!("Headers found in CSV: {:?}", header_record);

    let header_indices: Vec<Option<usize>> = target_headers
        .iter()
        .map(|&target| header_record.iter().position(|h| h.trim() == target))
        .collect();

    for (name, index) in target_headers.iter().zip(&header_indices) {
        debug!("  '{}': {}", name, if index.is_some() { "Found" } else { "Not Found" });
    }

    let missing: Vec<String> = target_headers
        .iter()
        .zip(&header_indices)
        .filter(|(_, index)| index.is_none())
        .map(|(name, _)| name.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(DashboardError::MissingColumns(missing));
    }
    let header_indices: Vec<usize> = header_indices.into_iter().flatten().collect();

    // --- Data Reading ---
    let mut samples: Vec<MotorSample> = Vec::new();
    let mut skipped_rows = 0usize;
    for (row_index, result) in reader.records().enumerate() {
        let record = match result {
            Ok(record) => record,
            Err(e) => {
                warn!("Skipping row {} due to CSV read error: {}", row_index + 1, e);
                skipped_rows += 1;
                continue;
            }
        };

        let field = |target_idx: usize| record.get(header_indices[target_idx]);
        let parse_f64 = |target_idx: usize| -> Option<f64> {
            field(target_idx)
                .and_then(|val_str| val_str.parse::<f64>().ok())
                .filter(|v| v.is_finite())
        };

        let Some(profile_id) = field(PROFILE_ID_IDX).and_then(parse_profile_id) else {
            warn!(
                "Skipping row {} due to missing or invalid '{}'",
                row_index + 1,
                PROFILE_ID_HEADER
            );
            skipped_rows += 1;
            continue;
        };

        let mut sample = MotorSample::new(profile_id);
        for (offset, slot) in sample.temperatures.iter_mut().enumerate() {
            *slot = parse_f64(FIRST_CHANNEL_IDX + offset);
        }
        sample.motor_speed = parse_f64(MOTOR_SPEED_IDX);
        sample.torque = parse_f64(TORQUE_IDX);
        samples.push(sample);
    }

    info!(
        "Finished reading {} data rows ({} skipped).",
        samples.len(),
        skipped_rows
    );
    Ok(samples)
}

/// Profile ids are integers, but exports sometimes write them as `17.0`.
fn parse_profile_id(raw: &str) -> Option<i64> {
    if let Ok(id) = raw.parse::<i64>() {
        return Some(id);
    }
    raw.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && v.fract() == 0.0)
        .map(|v| v as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str =
        "u_q,coolant,stator_winding,u_d,stator_tooth,motor_speed,i_d,i_q,pm,stator_yoke,ambient,torque,profile_id";

    #[test]
    fn test_parses_rows_with_extra_columns() {
        let csv = format!(
            "{HEADER}\n-0.45,18.8,19.08,-0.35,18.29,0.0029,0.004,0.0003,24.55,18.31,19.85,0.187,17\n"
        );
        let samples = parse_dataset(csv.as_bytes()).unwrap();
        assert_eq!(samples.len(), 1);
        let s = &samples[0];
        assert_eq!(s.profile_id, 17);
        assert_eq!(TemperatureChannel::Coolant.value(s), Some(18.8));
        assert_eq!(TemperatureChannel::StatorWinding.value(s), Some(19.08));
        assert_eq!(TemperatureChannel::PermanentMagnet.value(s), Some(24.55));
        assert_eq!(TemperatureChannel::Ambient.value(s), Some(19.85));
        assert_eq!(s.motor_speed, Some(0.0029));
        assert_eq!(s.torque, Some(0.187));
    }

    #[test]
    fn test_missing_column_is_fatal() {
        let csv = "profile_id,coolant,stator_winding\n1,2,3\n";
        match parse_dataset(csv.as_bytes()) {
            Err(DashboardError::MissingColumns(missing)) => {
                assert!(missing.contains(&"torque".to_string()));
                assert!(missing.contains(&"pm".to_string()));
                assert!(!missing.contains(&"coolant".to_string()));
            }
            other => panic!("expected MissingColumns, got {:?}", other),
        }
    }

    #[test]
    fn test_blank_cells_become_missing_and_bad_ids_are_skipped() {
        let csv = format!(
            "{HEADER}\n,18.8,,,18.29,100,,,24.55,18.31,19.85,,4\n1,1,1,1,1,1,1,1,1,1,1,1,abc\n"
        );
        let samples = parse_dataset(csv.as_bytes()).unwrap();
        assert_eq!(samples.len(), 1);
        assert_eq!(TemperatureChannel::StatorWinding.value(&samples[0]), None);
        assert_eq!(samples[0].torque, None);
        assert_eq!(samples[0].motor_speed, Some(100.0));
    }

    #[test]
    fn test_parse_profile_id_accepts_integral_floats() {
        assert_eq!(parse_profile_id("17"), Some(17));
        assert_eq!(parse_profile_id("17.0"), Some(17));
        assert_eq!(parse_profile_id("17.5"), None);
        assert_eq!(parse_profile_id(""), None);
    }
}
