use crate::contracts::ErrorCode;

/// Outcome of a guard pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Guarded {
    pub value: f64,
    pub is_abnormal: bool,
    pub error_code: ErrorCode,
}

/// Holds the last finite output and substitutes it for non-finite candidates.
#[derive(Debug, Clone)]
pub struct ValidityGuard {
    previous_valid: f64,
}

impl Default for ValidityGuard {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl ValidityGuard {
    pub fn new(initial: f64) -> Self {
        Self {
            previous_valid: initial,
        }
    }

    pub fn previous_valid(&self) -> f64 {
        self.previous_valid
    }

    pub fn check(&mut self, candidate: f64) -> Guarded {
        if candidate.is_finite() {
            self.previous_valid = candidate;
            Guarded {
                value: candidate,
                is_abnormal: false,
                error_code: ErrorCode::None,
            }
        } else {
            Guarded {
                value: self.previous_valid,
                is_abnormal: true,
                error_code: ErrorCode::NanOrInfinite,
            }
        }
    }
}
