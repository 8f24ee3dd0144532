pub mod guard;
pub mod offset;
pub mod outlier;
pub mod stop;

pub use guard::{Guarded, ValidityGuard};
pub use offset::{EstimationState, YawRateOffsetStop};
pub use outlier::OutlierGate;
pub use stop::StopDetector;
