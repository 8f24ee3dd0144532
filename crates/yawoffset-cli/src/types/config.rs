use serde::{Deserialize, Serialize};
use std::path::Path;
use yawoffset_core::YawRateOffsetStopParams;

use crate::errors::{OffsetCliError, Result};

/// Parameters shared by every estimator in the localization pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommonSection {
    /// IMU sample rate in Hz
    pub imu_rate: f64,
    /// Speed in m/s under which the vehicle is considered stopped
    pub stop_judgement_threshold: f64,
}

/// Parameters specific to the stop-time yaw rate offset estimator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YawRateOffsetStopSection {
    /// Seconds of stop required per estimate
    pub estimated_interval: f64,
    /// Maximum deviation in rad/s from the held offset
    pub outlier_threshold: f64,
}

/// YAML configuration document.
///
/// Unknown sections (other estimators sharing the same file) are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OffsetConfig {
    pub common: CommonSection,
    pub yaw_rate_offset_stop: YawRateOffsetStopSection,
}

impl OffsetConfig {
    pub fn from_yaml_str(contents: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(contents)?)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents =
            std::fs::read_to_string(path).map_err(|source| OffsetCliError::ConfigRead {
                path: path.display().to_string(),
                source,
            })?;
        Self::from_yaml_str(&contents)
    }

    /// Validates the values and builds estimator parameters.
    pub fn to_params(&self) -> Result<YawRateOffsetStopParams> {
        let params = YawRateOffsetStopParams::new(
            self.common.imu_rate,
            self.common.stop_judgement_threshold,
            self.yaw_rate_offset_stop.estimated_interval,
            self.yaw_rate_offset_stop.outlier_threshold,
        )?;

        log::info!("imu_rate {}", params.imu_rate());
        log::info!(
            "stop_judgement_threshold {}",
            params.stop_judgement_threshold()
        );
        log::info!("estimated_interval {}", params.estimated_interval());
        log::info!("outlier_threshold {}", params.outlier_threshold());

        Ok(params)
    }
}
