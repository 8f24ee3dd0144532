use std::path::PathBuf;

/// Recorded drive to replay (velocity log + IMU log)
#[derive(Debug, Clone)]
pub struct SessionData {
    /// Path to the velocity CSV
    pub velocity_file: PathBuf,
    /// Path to the IMU CSV
    pub imu_file: PathBuf,
    /// Session name (derived from the IMU filename)
    pub name: String,
}

impl SessionData {
    pub fn new(velocity_file: PathBuf, imu_file: PathBuf) -> Self {
        let name = imu_file
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("unnamed_session")
            .to_string();

        Self {
            velocity_file,
            imu_file,
            name,
        }
    }
}
