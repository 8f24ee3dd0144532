pub mod contracts;
pub mod imu;
pub mod params;
pub mod shared;

pub use contracts::{ErrorCode, ImuSample, OffsetStatus, VelocitySample, YawRateOffsetResult};
pub use imu::YawRateOffsetStop;
pub use params::{ParamsError, YawRateOffsetStopParams};
pub use shared::SharedYawRateOffsetStop;
