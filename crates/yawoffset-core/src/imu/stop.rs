use crate::contracts::VelocitySample;

/// Classifies the vehicle as stopped from the last velocity it was given.
///
/// Velocity arrives at its own rate, so the detector only caches the latest
/// value; classification reads whatever is cached, however old it is. Before
/// the first update the cached speed is 0 m/s.
#[derive(Debug, Clone)]
pub struct StopDetector {
    threshold_mps: f64,
    latest: VelocitySample,
}

impl StopDetector {
    pub fn new(threshold_mps: f64) -> Self {
        Self {
            threshold_mps,
            latest: VelocitySample::new(0.0, 0.0),
        }
    }

    /// Overwrites the cached velocity.
    pub fn update(&mut self, sample: VelocitySample) {
        self.latest = sample;
    }

    pub fn latest(&self) -> VelocitySample {
        self.latest
    }

    /// True while the cached speed magnitude is strictly below the threshold.
    /// A NaN speed is never considered stopped.
    pub fn is_stopped(&self) -> bool {
        self.latest.speed_mps.abs() < self.threshold_mps
    }
}
