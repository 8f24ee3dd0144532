use serde::{Deserialize, Serialize};

/// Vehicle speed update. Only the most recent one is kept.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VelocitySample {
    pub timestamp_seconds: f64,
    pub speed_mps: f64,
}

impl VelocitySample {
    pub fn new(timestamp_seconds: f64, speed_mps: f64) -> Self {
        Self {
            timestamp_seconds,
            speed_mps,
        }
    }
}

/// Yaw-rate (angular velocity about z) reading; each one drives an estimation step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImuSample {
    pub timestamp_seconds: f64,
    pub yaw_rate_rps: f64,
}

impl ImuSample {
    pub fn new(timestamp_seconds: f64, yaw_rate_rps: f64) -> Self {
        Self {
            timestamp_seconds,
            yaw_rate_rps,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    #[default]
    None,
    NanOrInfinite,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OffsetStatus {
    /// At least one window has closed since start-up.
    pub enabled_status: bool,
    /// A window closed on this event.
    pub estimate_status: bool,
    pub is_abnormal: bool,
    pub error_code: ErrorCode,
}

/// One output per [`ImuSample`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YawRateOffsetResult {
    pub timestamp_seconds: f64,
    pub yaw_rate_offset: f64,
    pub status: OffsetStatus,
}

impl YawRateOffsetResult {
    pub fn is_abnormal(&self) -> bool {
        self.status.is_abnormal
    }

    /// Subtracts the offset from a raw yaw-rate reading.
    pub fn correct(&self, raw_yaw_rate_rps: f64) -> f64 {
        raw_yaw_rate_rps - self.yaw_rate_offset
    }
}
