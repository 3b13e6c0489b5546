use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

fn unique_temp_dir(prefix: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("time went backwards")
        .as_nanos();
    let dir = std::env::temp_dir().join(format!(
        "stylist-sim-{prefix}-{}-{nanos}",
        std::process::id()
    ));
    fs::create_dir_all(&dir).expect("create temp dir");
    dir
}

fn bin_lines(stdout: &str) -> usize {
    stdout.lines().filter(|line| line.starts_with("bin ")).count()
}

#[test]
fn variates_prints_frequency_table() {
    let output = Command::new(env!("CARGO_BIN_EXE_variates"))
        .args([
            "--dist", "exponential", "--lambda", "0.5", "--n", "500", "--bins", "15", "--seed",
            "42",
        ])
        .output()
        .expect("run variates");
    assert!(
        output.status.success(),
        "variates failed: stderr={}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(bin_lines(&stdout), 15);
    assert!(stdout.contains("(+400 more)"), "stdout={stdout}");
}

#[test]
fn variates_json_counts_cover_the_whole_sample() {
    let dir = unique_temp_dir("variates");
    let out_json = dir.join("sample.json");

    let output = Command::new(env!("CARGO_BIN_EXE_variates"))
        .args([
            "--dist",
            "normal",
            "--mu",
            "10",
            "--sigma",
            "2",
            "--n",
            "101",
            "--seed",
            "7",
            "--json",
            out_json.to_str().unwrap(),
        ])
        .output()
        .expect("run variates");
    assert!(output.status.success());

    let raw = fs::read_to_string(&out_json).expect("read sample.json");
    let v: Value = serde_json::from_str(&raw).expect("parse sample.json");
    assert_eq!(v["values"].as_array().expect("values").len(), 101);
    assert_eq!(v["distribution"]["kind"].as_str(), Some("normal"));
    let bins = v["table"]["bins"].as_array().expect("bins");
    assert_eq!(v["table"]["total"].as_u64(), Some(101));
    // 正态分布按 μ±4σ 分组
    assert_eq!(bins[0]["lower"].as_f64(), Some(2.0));
    assert_eq!(bins[bins.len() - 1]["upper"].as_f64(), Some(18.0));
    let counted: u64 = bins
        .iter()
        .map(|b| b["count"].as_u64().expect("count"))
        .sum();
    assert!(counted <= 101);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn variates_rejects_non_positive_sigma() {
    let output = Command::new(env!("CARGO_BIN_EXE_variates"))
        .args(["--dist", "normal", "--sigma", "0", "--seed", "1"])
        .output()
        .expect("run variates");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid parameter sigma"), "stderr={stderr}");
}

#[test]
fn variates_rejects_too_many_bins() {
    let output = Command::new(env!("CARGO_BIN_EXE_variates"))
        .args(["--n", "10", "--bins", "4611686018427387903", "--seed", "1"])
        .output()
        .expect("run variates");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid parameter bins"), "stderr={stderr}");
}
