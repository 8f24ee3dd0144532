use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use approx::assert_relative_eq;
use tempfile::TempDir;
use yawoffset_cli::output::{write_results_csv, ReplayOutput};
use yawoffset_cli::types::{OffsetConfig, SessionData};
use yawoffset_cli::{write_json, OffsetReplayer};

const CONFIG: &str = "\
common:
  imu_rate: 50
  stop_judgement_threshold: 0.1
yaw_rate_offset_stop:
  estimated_interval: 4
  outlier_threshold: 0.05
";

fn write_file(dir: &Path, name: &str, header: &str, rows: &[(f64, f64)]) -> PathBuf {
    let path = dir.join(name);
    let mut file = fs::File::create(&path).unwrap();
    writeln!(file, "{header}").unwrap();
    for (t, v) in rows {
        writeln!(file, "{t},{v}").unwrap();
    }
    path
}

#[test]
fn recorded_stop_with_outlier_produces_offset_report() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("params.yaml");
    fs::write(&config_path, CONFIG).unwrap();

    // Vehicle parked for the whole log, velocity at 10 Hz.
    let velocity: Vec<(f64, f64)> = (0..60).map(|i| (i as f64 * 0.1, 0.0)).collect();
    // 201 IMU samples at 50 Hz; sample #150 is a spike.
    let imu: Vec<(f64, f64)> = (0..201)
        .map(|i| (i as f64 * 0.02, if i == 149 { 5.0 } else { 0.01 }))
        .collect();

    let velocity_path = write_file(
        dir.path(),
        "velocity.csv",
        "timestamp_seconds,speed_mps",
        &velocity,
    );
    let imu_path = write_file(
        dir.path(),
        "drive.csv",
        "timestamp_seconds,yaw_rate_rps",
        &imu,
    );

    let params = OffsetConfig::from_path(&config_path)
        .and_then(|c| c.to_params())
        .expect("config should load");
    let mut replayer = OffsetReplayer::new(params);
    let output = replayer
        .process_session(&SessionData::new(velocity_path, imu_path))
        .expect("session should replay");

    assert_eq!(output.metadata.session_name, "drive");
    assert_eq!(output.metadata.velocity_sample_count, 60);
    assert_eq!(output.results.len(), 201);
    assert_eq!(output.summary.windows_closed, 1);
    assert_eq!(output.summary.rejected_samples, 1);
    assert_eq!(output.summary.abnormal_outputs, 0);
    assert!(!output.results[199].status.estimate_status);
    assert!(output.results[200].status.estimate_status);
    assert_relative_eq!(output.summary.final_offset, 0.01, epsilon = 1e-12);

    let json_path = dir.path().join("report.json");
    write_json(&json_path, &output).unwrap();
    let reloaded: ReplayOutput =
        serde_json::from_str(&fs::read_to_string(&json_path).unwrap()).unwrap();
    assert_eq!(reloaded.results.len(), 201);
    assert_eq!(reloaded.parameters.sample_count_target, 200);

    let csv_path = dir.path().join("results.csv");
    write_results_csv(&csv_path, &output.results).unwrap();
    assert_eq!(fs::read_to_string(&csv_path).unwrap().lines().count(), 202);
}

#[test]
fn moving_mid_window_discards_estimate() {
    let dir = TempDir::new().unwrap();

    // Stopped until t=2.0 s (100 IMU samples), then 2 m/s.
    let velocity = vec![(0.0, 0.0), (2.0, 2.0)];
    let imu: Vec<(f64, f64)> = (0..300).map(|i| (i as f64 * 0.02, 0.01)).collect();

    let velocity_path = write_file(
        dir.path(),
        "velocity.csv",
        "timestamp_seconds,speed_mps",
        &velocity,
    );
    let imu_path = write_file(
        dir.path(),
        "imu.csv",
        "timestamp_seconds,yaw_rate_rps",
        &imu,
    );

    let params = OffsetConfig::from_yaml_str(CONFIG).unwrap().to_params().unwrap();
    let mut replayer = OffsetReplayer::new(params);
    let output = replayer
        .process_session(&SessionData::new(velocity_path, imu_path))
        .unwrap();

    assert_eq!(output.summary.windows_closed, 0);
    assert_eq!(output.summary.stopped_samples, 100);
    assert!(!output.summary.enabled);
    assert!(output.results.iter().all(|r| r.yaw_rate_offset == 0.0));
    assert_eq!(replayer.estimator().buffered_len(), 0);
}
