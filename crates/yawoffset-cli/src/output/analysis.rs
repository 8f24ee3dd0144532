use crate::output::{Metadata, Parameters, ReplayOutput, Summary};
use crate::types::SessionData;
use yawoffset_core::{YawRateOffsetResult, YawRateOffsetStop};

/// Collects per-sample results and counters during a replay
pub struct AnalysisCollector {
    session: SessionData,
    velocity_sample_count: usize,
    results: Vec<YawRateOffsetResult>,
    stopped_samples: usize,
    abnormal_outputs: usize,
}

impl AnalysisCollector {
    pub fn new(session: SessionData) -> Self {
        Self {
            session,
            velocity_sample_count: 0,
            results: Vec::new(),
            stopped_samples: 0,
            abnormal_outputs: 0,
        }
    }

    pub fn set_velocity_sample_count(&mut self, count: usize) {
        self.velocity_sample_count = count;
    }

    pub fn add_result(&mut self, result: YawRateOffsetResult, stopped: bool) {
        if stopped {
            self.stopped_samples += 1;
        }
        if result.is_abnormal() {
            self.abnormal_outputs += 1;
        }
        self.results.push(result);
    }

    pub fn finalize(self, estimator: &YawRateOffsetStop) -> ReplayOutput {
        let AnalysisCollector {
            session,
            velocity_sample_count,
            results,
            stopped_samples,
            abnormal_outputs,
        } = self;

        let duration_seconds = match (results.first(), results.last()) {
            (Some(first), Some(last)) => last.timestamp_seconds - first.timestamp_seconds,
            _ => 0.0,
        };
        let enabled = results
            .last()
            .map(|r| r.status.enabled_status)
            .unwrap_or(false);

        let params = estimator.params();
        ReplayOutput {
            metadata: Metadata {
                session_name: session.name,
                velocity_file: session.velocity_file.display().to_string(),
                imu_file: session.imu_file.display().to_string(),
                velocity_sample_count,
                imu_sample_count: results.len(),
                duration_seconds,
            },
            parameters: Parameters {
                imu_rate: params.imu_rate(),
                stop_judgement_threshold: params.stop_judgement_threshold(),
                estimated_interval: params.estimated_interval(),
                outlier_threshold: params.outlier_threshold(),
                sample_count_target: params.sample_count_target(),
            },
            summary: Summary {
                windows_closed: estimator.window_count(),
                rejected_samples: estimator.rejected_count(),
                stopped_samples,
                abnormal_outputs,
                enabled,
                final_offset: estimator.offset(),
            },
            results,
        }
    }
}
