use csv::{Reader, StringRecord};
use std::fs::File;
use std::path::Path;
use yawoffset_core::{ImuSample, VelocitySample};

use crate::errors::{OffsetCliError, Result};

/// Parser for vehicle velocity logs
pub struct VelocityParser;

impl VelocityParser {
    /// Parse velocity samples from a CSV file
    ///
    /// Expected format:
    /// timestamp_seconds,speed_mps
    pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Vec<VelocitySample>> {
        let samples = parse_two_columns(path.as_ref(), "Velocity", "speed_mps")?
            .into_iter()
            .map(|(t, v)| VelocitySample::new(t, v))
            .collect::<Vec<_>>();
        log::info!("Loaded {} velocity samples from file", samples.len());
        Ok(samples)
    }
}

/// Parser for IMU yaw-rate logs
pub struct ImuParser;

impl ImuParser {
    /// Parse yaw-rate samples from a CSV file
    ///
    /// Expected format:
    /// timestamp_seconds,yaw_rate_rps
    pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Vec<ImuSample>> {
        let samples = parse_two_columns(path.as_ref(), "IMU", "yaw_rate_rps")?
            .into_iter()
            .map(|(t, v)| ImuSample::new(t, v))
            .collect::<Vec<_>>();
        log::info!("Loaded {} IMU samples from file", samples.len());
        Ok(samples)
    }
}

fn parse_two_columns(
    path: &Path,
    kind: &'static str,
    value_name: &str,
) -> Result<Vec<(f64, f64)>> {
    let file = File::open(path).map_err(|_| OffsetCliError::InputFileNotFound {
        kind,
        path: path.display().to_string(),
    })?;

    let mut reader = Reader::from_reader(file);
    let mut rows = Vec::new();

    for (line_number, result) in reader.records().enumerate() {
        // +1 for header, +1 for 1-based indexing
        let line = line_number + 2;
        let record = result.map_err(|e| OffsetCliError::InputFormat {
            kind,
            line,
            message: format!("CSV error: {}", e),
        })?;

        if record.len() < 2 {
            return Err(OffsetCliError::InputFormat {
                kind,
                line,
                message: format!("Expected at least 2 columns, found {}", record.len()),
            });
        }

        let timestamp = field(&record, 0, "timestamp", kind, line)?;
        let value = field(&record, 1, value_name, kind, line)?;
        rows.push((timestamp, value));
    }

    if rows.is_empty() {
        return Err(OffsetCliError::InputFormat {
            kind,
            line: 0,
            message: format!("No {} samples found in file", kind),
        });
    }

    Ok(rows)
}

fn field(
    record: &StringRecord,
    index: usize,
    name: &str,
    kind: &'static str,
    line: usize,
) -> Result<f64> {
    record[index]
        .trim()
        .parse()
        .map_err(|e| OffsetCliError::InputFormat {
            kind,
            line,
            message: format!("Invalid {}: {}", name, e),
        })
}
