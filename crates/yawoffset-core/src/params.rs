use thiserror::Error;

/// Rejected parameter values. Raised before the estimator is built so a bad
/// configuration never reaches the event loop.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParamsError {
    #[error("{name} must be finite, got {value}")]
    NotFinite { name: &'static str, value: f64 },
    #[error("{name} must be greater than zero, got {value}")]
    NotPositive { name: &'static str, value: f64 },
    #[error("{name} must not be negative, got {value}")]
    Negative { name: &'static str, value: f64 },
}

/// Tuning for the stop-time yaw-rate offset estimator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YawRateOffsetStopParams {
    imu_rate: f64,
    stop_judgement_threshold: f64,
    estimated_interval: f64,
    outlier_threshold: f64,
}

impl YawRateOffsetStopParams {
    /// Validates and builds a parameter set.
    ///
    /// * `imu_rate` - angular-rate stream frequency in Hz, > 0
    /// * `stop_judgement_threshold` - speed in m/s under which the vehicle counts as stopped, >= 0
    /// * `estimated_interval` - seconds of stop needed to close one window, > 0
    /// * `outlier_threshold` - allowed deviation in rad/s from the held offset, > 0
    pub fn new(
        imu_rate: f64,
        stop_judgement_threshold: f64,
        estimated_interval: f64,
        outlier_threshold: f64,
    ) -> Result<Self, ParamsError> {
        positive("imu_rate", imu_rate)?;
        non_negative("stop_judgement_threshold", stop_judgement_threshold)?;
        positive("estimated_interval", estimated_interval)?;
        positive("outlier_threshold", outlier_threshold)?;

        Ok(Self {
            imu_rate,
            stop_judgement_threshold,
            estimated_interval,
            outlier_threshold,
        })
    }

    pub fn imu_rate(&self) -> f64 {
        self.imu_rate
    }

    pub fn stop_judgement_threshold(&self) -> f64 {
        self.stop_judgement_threshold
    }

    pub fn estimated_interval(&self) -> f64 {
        self.estimated_interval
    }

    pub fn outlier_threshold(&self) -> f64 {
        self.outlier_threshold
    }

    /// Number of accepted samples that close one window.
    ///
    /// The product is rounded so that e.g. 0.29 s at 100 Hz yields 29 rather
    /// than truncating float error down to 28, and never drops below one sample.
    pub fn sample_count_target(&self) -> usize {
        let samples = (self.imu_rate * self.estimated_interval).round();
        if samples < 1.0 {
            1
        } else {
            samples as usize
        }
    }
}

fn finite(name: &'static str, value: f64) -> Result<(), ParamsError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ParamsError::NotFinite { name, value })
    }
}

fn positive(name: &'static str, value: f64) -> Result<(), ParamsError> {
    finite(name, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(ParamsError::NotPositive { name, value })
    }
}

fn non_negative(name: &'static str, value: f64) -> Result<(), ParamsError> {
    finite(name, value)?;
    if value >= 0.0 {
        Ok(())
    } else {
        Err(ParamsError::Negative { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_is_rate_times_interval() {
        let params = YawRateOffsetStopParams::new(50.0, 0.1, 4.0, 0.05).unwrap();
        assert_eq!(params.sample_count_target(), 200);
    }

    #[test]
    fn target_rounds_float_error() {
        let params = YawRateOffsetStopParams::new(100.0, 0.1, 0.29, 0.05).unwrap();
        assert_eq!(params.sample_count_target(), 29);
    }

    #[test]
    fn target_never_below_one() {
        let params = YawRateOffsetStopParams::new(1.0, 0.1, 0.2, 0.05).unwrap();
        assert_eq!(params.sample_count_target(), 1);
    }

    #[test]
    fn zero_stop_threshold_is_allowed() {
        assert!(YawRateOffsetStopParams::new(50.0, 0.0, 4.0, 0.05).is_ok());
    }

    #[test]
    fn rejects_invalid_fields() {
        assert_eq!(
            YawRateOffsetStopParams::new(0.0, 0.1, 4.0, 0.05),
            Err(ParamsError::NotPositive {
                name: "imu_rate",
                value: 0.0
            })
        );
        assert_eq!(
            YawRateOffsetStopParams::new(50.0, -0.1, 4.0, 0.05),
            Err(ParamsError::Negative {
                name: "stop_judgement_threshold",
                value: -0.1
            })
        );
        assert!(matches!(
            YawRateOffsetStopParams::new(50.0, 0.1, f64::INFINITY, 0.05),
            Err(ParamsError::NotFinite {
                name: "estimated_interval",
                ..
            })
        ));
        assert!(matches!(
            YawRateOffsetStopParams::new(50.0, 0.1, 4.0, f64::NAN),
            Err(ParamsError::NotFinite {
                name: "outlier_threshold",
                ..
            })
        ));
    }
}
