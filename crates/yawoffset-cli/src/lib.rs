pub mod errors;
pub mod input;
pub mod output;
pub mod types;

use std::cmp::Ordering;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use log::{debug, info};
use yawoffset_core::{ImuSample, VelocitySample, YawRateOffsetStop, YawRateOffsetStopParams};

use crate::errors::Result;
use crate::input::{ImuParser, VelocityParser};
use crate::output::{AnalysisCollector, ReplayOutput};
use crate::types::SessionData;

/// One entry of the merged input queue
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ReplayEvent {
    Velocity(VelocitySample),
    Imu(ImuSample),
}

impl ReplayEvent {
    pub fn timestamp_seconds(&self) -> f64 {
        match self {
            ReplayEvent::Velocity(v) => v.timestamp_seconds,
            ReplayEvent::Imu(s) => s.timestamp_seconds,
        }
    }
}

/// Merges the two streams into a single time-ordered queue.
///
/// On equal timestamps the velocity update is applied first so that the IMU
/// sample is classified against it. Each stream keeps its own order for
/// samples sharing a timestamp.
pub fn merge_streams(velocity: &[VelocitySample], imu: &[ImuSample]) -> Vec<ReplayEvent> {
    let mut events: Vec<ReplayEvent> = velocity
        .iter()
        .copied()
        .map(ReplayEvent::Velocity)
        .chain(imu.iter().copied().map(ReplayEvent::Imu))
        .collect();

    events.sort_by(|a, b| {
        a.timestamp_seconds()
            .total_cmp(&b.timestamp_seconds())
            .then_with(|| match (a, b) {
                (ReplayEvent::Velocity(_), ReplayEvent::Imu(_)) => Ordering::Less,
                (ReplayEvent::Imu(_), ReplayEvent::Velocity(_)) => Ordering::Greater,
                _ => Ordering::Equal,
            })
    });
    events
}

/// Replays recorded velocity and IMU logs through the offset estimator
pub struct OffsetReplayer {
    estimator: YawRateOffsetStop,
}

impl OffsetReplayer {
    pub fn new(params: YawRateOffsetStopParams) -> Self {
        Self {
            estimator: YawRateOffsetStop::new(params),
        }
    }

    pub fn estimator(&self) -> &YawRateOffsetStop {
        &self.estimator
    }

    /// Load both logs of a session and replay them
    pub fn process_session(&mut self, session: &SessionData) -> Result<ReplayOutput> {
        info!("Processing session: {}", session.name);

        let velocity = VelocityParser::parse_file(&session.velocity_file)?;
        let imu = ImuParser::parse_file(&session.imu_file)?;

        Ok(self.replay(session.clone(), &velocity, &imu))
    }

    /// Replay in-memory samples. The estimator state carries over between calls.
    pub fn replay(
        &mut self,
        session: SessionData,
        velocity: &[VelocitySample],
        imu: &[ImuSample],
    ) -> ReplayOutput {
        let mut analysis = AnalysisCollector::new(session);
        analysis.set_velocity_sample_count(velocity.len());

        let target = self.estimator.sample_count_target();
        info!(
            "Replaying {} velocity and {} IMU samples ({} samples per window)",
            velocity.len(),
            imu.len(),
            target
        );

        for event in merge_streams(velocity, imu) {
            match event {
                ReplayEvent::Velocity(sample) => self.estimator.update_velocity(sample),
                ReplayEvent::Imu(sample) => {
                    let result = self.estimator.estimate(sample);
                    if result.status.estimate_status {
                        info!(
                            "t={:.3}s yaw rate offset {:.6} rad/s (window {})",
                            result.timestamp_seconds,
                            result.yaw_rate_offset,
                            self.estimator.window_count()
                        );
                    }
                    analysis.add_result(result, self.estimator.is_stopped());
                }
            }
        }

        let output = analysis.finalize(&self.estimator);
        debug!(
            "Replay finished: windows={}, rejected={}, abnormal={}",
            output.summary.windows_closed,
            output.summary.rejected_samples,
            output.summary.abnormal_outputs
        );
        output
    }
}

/// Write the replay report as pretty-printed JSON
pub fn write_json<P: AsRef<Path>>(path: P, output: &ReplayOutput) -> Result<()> {
    let writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(writer, output)?;
    Ok(())
}
