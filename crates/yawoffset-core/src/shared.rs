use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::contracts::{ImuSample, VelocitySample, YawRateOffsetResult};
use crate::imu::YawRateOffsetStop;
use crate::params::YawRateOffsetStopParams;

/// Cloneable handle for hosts that deliver velocity and yaw-rate from
/// different threads. Every call takes the same lock, so the two streams are
/// applied to the estimator one at a time.
#[derive(Debug, Clone)]
pub struct SharedYawRateOffsetStop {
    inner: Arc<Mutex<YawRateOffsetStop>>,
}

impl SharedYawRateOffsetStop {
    pub fn new(params: YawRateOffsetStopParams) -> Self {
        Self::from_estimator(YawRateOffsetStop::new(params))
    }

    pub fn from_estimator(estimator: YawRateOffsetStop) -> Self {
        Self {
            inner: Arc::new(Mutex::new(estimator)),
        }
    }

    pub fn update_velocity(&self, velocity: VelocitySample) {
        self.lock().update_velocity(velocity);
    }

    pub fn estimate(&self, imu: ImuSample) -> YawRateOffsetResult {
        self.lock().estimate(imu)
    }

    pub fn offset(&self) -> f64 {
        self.lock().offset()
    }

    /// Runs `f` with exclusive access to the estimator.
    pub fn with<R>(&self, f: impl FnOnce(&mut YawRateOffsetStop) -> R) -> R {
        f(&mut self.lock())
    }

    // The estimator never panics mid-update, so a poisoned lock still holds
    // consistent state.
    fn lock(&self) -> MutexGuard<'_, YawRateOffsetStop> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::thread;

    #[test]
    fn concurrent_ports_keep_invariants() {
        let params = YawRateOffsetStopParams::new(100.0, 0.1, 1.0, 0.05).unwrap();
        let shared = SharedYawRateOffsetStop::new(params);

        let velocity_port = shared.clone();
        let velocity = thread::spawn(move || {
            for i in 0..500 {
                velocity_port.update_velocity(VelocitySample::new(i as f64 * 0.02, 0.0));
            }
        });

        let imu_port = shared.clone();
        let imu = thread::spawn(move || {
            (0..1000)
                .map(|i| imu_port.estimate(ImuSample::new(i as f64 * 0.01, 0.015)))
                .collect::<Vec<_>>()
        });

        velocity.join().unwrap();
        let results = imu.join().unwrap();

        assert_eq!(results.len(), 1000);
        assert!(results.iter().all(|r| r.yaw_rate_offset.is_finite()));
        shared.with(|est| {
            assert!(est.buffered_len() < est.sample_count_target());
            assert_eq!(est.window_count(), 10);
        });
        assert_relative_eq!(shared.offset(), 0.015, epsilon = 1e-12);
    }
}
