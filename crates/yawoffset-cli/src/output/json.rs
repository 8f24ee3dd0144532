use serde::{Deserialize, Serialize};
use yawoffset_core::YawRateOffsetResult;

/// Complete replay output in JSON format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplayOutput {
    pub metadata: Metadata,
    pub parameters: Parameters,
    pub results: Vec<YawRateOffsetResult>,
    pub summary: Summary,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    pub session_name: String,
    pub velocity_file: String,
    pub imu_file: String,
    pub velocity_sample_count: usize,
    pub imu_sample_count: usize,
    pub duration_seconds: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Parameters {
    pub imu_rate: f64,
    pub stop_judgement_threshold: f64,
    pub estimated_interval: f64,
    pub outlier_threshold: f64,
    pub sample_count_target: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Summary {
    pub windows_closed: u64,
    pub rejected_samples: u64,
    pub stopped_samples: usize,
    pub abnormal_outputs: usize,
    pub enabled: bool,
    pub final_offset: f64,
}
