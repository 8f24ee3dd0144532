use serde::Serialize;
use std::path::Path;
use yawoffset_core::{ErrorCode, YawRateOffsetResult};

use crate::errors::Result;

/// Flat CSV row for one estimator output
#[derive(Debug, Serialize)]
struct ResultRow {
    timestamp_seconds: f64,
    yaw_rate_offset: f64,
    enabled_status: bool,
    estimate_status: bool,
    is_abnormal: bool,
    error_code: ErrorCode,
}

impl From<&YawRateOffsetResult> for ResultRow {
    fn from(result: &YawRateOffsetResult) -> Self {
        Self {
            timestamp_seconds: result.timestamp_seconds,
            yaw_rate_offset: result.yaw_rate_offset,
            enabled_status: result.status.enabled_status,
            estimate_status: result.status.estimate_status,
            is_abnormal: result.status.is_abnormal,
            error_code: result.status.error_code,
        }
    }
}

/// Write one row per result to a CSV file
pub fn write_results_csv<P: AsRef<Path>>(path: P, results: &[YawRateOffsetResult]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for result in results {
        writer.serialize(ResultRow::from(result))?;
    }
    writer.flush()?;
    Ok(())
}
