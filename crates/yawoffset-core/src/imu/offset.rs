use log::{debug, trace, warn};

use crate::contracts::{ImuSample, OffsetStatus, VelocitySample, YawRateOffsetResult};
use crate::imu::guard::ValidityGuard;
use crate::imu::outlier::OutlierGate;
use crate::imu::stop::StopDetector;
use crate::params::YawRateOffsetStopParams;

/// Mutable estimation state carried from one yaw-rate sample to the next.
#[derive(Debug, Clone)]
pub struct EstimationState {
    buffer: Vec<f64>,
    sum: f64,
    sample_count_target: usize,
    current_offset: f64,
    is_stopped: bool,
}

impl EstimationState {
    fn new(sample_count_target: usize) -> Self {
        Self {
            buffer: Vec::new(),
            sum: 0.0,
            sample_count_target,
            current_offset: 0.0,
            is_stopped: false,
        }
    }

    /// Accepted samples of the window in progress.
    pub fn buffer(&self) -> &[f64] {
        &self.buffer
    }

    pub fn sample_count_target(&self) -> usize {
        self.sample_count_target
    }

    pub fn current_offset(&self) -> f64 {
        self.current_offset
    }

    pub fn is_stopped(&self) -> bool {
        self.is_stopped
    }

    fn clear_window(&mut self) {
        self.buffer.clear();
        self.sum = 0.0;
    }
}

/// Estimates the constant yaw-rate bias of a gyroscope from samples taken
/// while the vehicle stands still.
///
/// Samples are collected in tumbling windows of `imu_rate * estimated_interval`
/// accepted readings. A window is thrown away as soon as the vehicle moves;
/// a full window replaces the held offset with its mean. Samples further than
/// `outlier_threshold` from the held offset are ignored and do not count.
#[derive(Debug, Clone)]
pub struct YawRateOffsetStop {
    params: YawRateOffsetStopParams,
    stop: StopDetector,
    gate: OutlierGate,
    guard: ValidityGuard,
    state: EstimationState,
    enabled: bool,
    windows_closed: u64,
    rejected_samples: u64,
}

impl YawRateOffsetStop {
    pub fn new(params: YawRateOffsetStopParams) -> Self {
        Self {
            params,
            stop: StopDetector::new(params.stop_judgement_threshold()),
            gate: OutlierGate::new(params.outlier_threshold()),
            guard: ValidityGuard::default(),
            state: EstimationState::new(params.sample_count_target()),
            enabled: false,
            windows_closed: 0,
            rejected_samples: 0,
        }
    }

    pub fn params(&self) -> &YawRateOffsetStopParams {
        &self.params
    }

    pub fn state(&self) -> &EstimationState {
        &self.state
    }

    /// Caches the latest vehicle velocity. Never triggers an estimation step.
    pub fn update_velocity(&mut self, velocity: VelocitySample) {
        self.stop.update(velocity);
    }

    /// Runs one estimation step for a yaw-rate sample and returns the offset
    /// to publish for it.
    pub fn estimate(&mut self, imu: ImuSample) -> YawRateOffsetResult {
        self.state.is_stopped = self.stop.is_stopped();

        let mut window_closed = false;
        if self.state.is_stopped {
            window_closed = self.accumulate(imu.yaw_rate_rps);
        } else if !self.state.buffer.is_empty() {
            debug!(target: "yawoffset_core::imu",
                "Vehicle moving (speed={:.3} m/s), discarding {} buffered samples",
                self.stop.latest().speed_mps, self.state.buffer.len()
            );
            self.state.clear_window();
        }

        let guarded = self.guard.check(self.state.current_offset);
        if guarded.is_abnormal {
            warn!(target: "yawoffset_core::imu",
                "Estimated yaw rate offset is NaN or infinite at t={:.3}s, holding {:.6} rad/s",
                imu.timestamp_seconds, guarded.value
            );
            self.state.current_offset = guarded.value;
        }

        let estimate_status = window_closed && !guarded.is_abnormal;
        if estimate_status {
            self.enabled = true;
        }

        YawRateOffsetResult {
            timestamp_seconds: imu.timestamp_seconds,
            yaw_rate_offset: guarded.value,
            status: OffsetStatus {
                enabled_status: self.enabled,
                estimate_status,
                is_abnormal: guarded.is_abnormal,
                error_code: guarded.error_code,
            },
        }
    }

    /// Held offset in rad/s.
    pub fn offset(&self) -> f64 {
        self.state.current_offset
    }

    pub fn is_stopped(&self) -> bool {
        self.state.is_stopped
    }

    pub fn buffered_len(&self) -> usize {
        self.state.buffer.len()
    }

    pub fn sample_count_target(&self) -> usize {
        self.state.sample_count_target
    }

    /// Number of windows that produced a finite offset.
    pub fn window_count(&self) -> u64 {
        self.windows_closed
    }

    /// Samples dropped by the outlier gate since start-up.
    pub fn rejected_count(&self) -> u64 {
        self.rejected_samples
    }

    /// Returns to the start-up state, keeping the parameters.
    pub fn reset(&mut self) {
        *self = Self::new(self.params);
        debug!(target: "yawoffset_core::imu", "Yaw rate offset estimator reset");
    }

    /// Offers a sample to the current window. Returns true when it closed the window.
    fn accumulate(&mut self, yaw_rate: f64) -> bool {
        if !self.gate.accepts(yaw_rate, self.state.current_offset) {
            self.rejected_samples += 1;
            trace!(target: "yawoffset_core::imu",
                "Rejected yaw rate {:.6} rad/s (offset={:.6}, threshold={:.6})",
                yaw_rate, self.state.current_offset, self.params.outlier_threshold()
            );
            return false;
        }

        self.state.buffer.push(yaw_rate);
        self.state.sum += yaw_rate;

        if self.state.buffer.len() < self.state.sample_count_target {
            return false;
        }

        let mean = self.state.sum / (self.state.buffer.len() as f64);
        self.state.current_offset = mean;
        self.state.clear_window();
        if mean.is_finite() {
            self.windows_closed += 1;
        }

        debug!(target: "yawoffset_core::imu",
            "Yaw rate offset updated: offset={:.6} rad/s, window={} samples",
            mean, self.state.sample_count_target
        );
        true
    }
}
