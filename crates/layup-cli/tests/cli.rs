//! CLI command integration tests.
//! Each test clears LAYUP_CONFIG so a developer's config never leaks in.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn layup() -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("layup").unwrap();
    cmd.env_remove("LAYUP_CONFIG");
    cmd
}

#[test]
fn eval_literal_terms() {
    for (n, want) in [("1", "1\n"), ("2", "2\n"), ("6", "12\n"), ("50", "3166815962\n")] {
        layup().args(["eval", n]).assert().success().stdout(want);
    }
}

#[test]
fn eval_each_strategy() {
    for strategy in ["naive", "memoization", "iteration"] {
        layup()
            .args(["eval", "20", "--strategy", strategy])
            .assert()
            .success()
            .stdout("5741\n");
    }
}

#[test]
fn eval_zero_is_invalid_argument() {
    layup()
        .args(["eval", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid argument"));
}

#[test]
fn eval_unknown_strategy_rejected() {
    layup()
        .args(["eval", "5", "--strategy", "matrix"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown strategy"));
}

#[test]
fn eval_memoized_without_prefill_reports_exhaustion() {
    layup()
        .args(["eval", "500", "--strategy", "memo", "--max-depth", "20", "--no-prefill"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("resource exhausted"));
}

#[test]
fn bench_small_sizes_includes_naive() {
    let output = layup()
        .args(["bench", "--sizes", "1,5,10"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 9, "{stdout}");
    assert!(lines[0].starts_with("S-naive - 1 - "));
    assert!(lines[1].starts_with("S-memoization - 1 - "));
    assert!(lines[2].starts_with("S-iteration - 1 - "));
    assert!(lines.iter().all(|l| l.ends_with(" milliseconds")));
}

#[test]
fn bench_skips_naive_above_threshold() {
    layup()
        .args(["bench", "--sizes", "60,1000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("S-memoization - 1000 - "))
        .stdout(predicate::str::contains("S-iteration - 60 - "))
        .stdout(predicate::str::contains("S-naive").not());
}

#[test]
fn bench_threshold_flag_moves_cutoff() {
    layup()
        .args(["bench", "--sizes", "8,12", "--threshold", "10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("S-naive - 8 - "))
        .stdout(predicate::str::contains("S-naive - 12 - ").not());
}

#[test]
fn bench_error_does_not_abort_sweep() {
    // Depth 5 is too shallow for naive S(20); later pairs must still report.
    layup()
        .args(["bench", "--sizes", "20,30", "--max-depth", "5", "--no-prefill"])
        .assert()
        .success()
        .stdout(predicate::str::contains("S-naive resource exhausted"))
        .stdout(predicate::str::contains("S-naive - 20 - "))
        .stdout(predicate::str::contains("S-iteration - 30 - "));
}

#[test]
fn bench_json_lines() {
    let output = layup()
        .args(["bench", "--sizes", "100", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let records: Vec<serde_json::Value> = stdout
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["evaluator"], "S-memoization");
    assert_eq!(records[1]["evaluator"], "S-iteration");
    assert_eq!(records[1]["index"], 100);
    assert_eq!(records[0]["bits"], records[1]["bits"]);
    assert!(records[0]["error"].is_null());
}

#[test]
fn bench_reads_config_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("layup.toml");
    std::fs::write(&path, "sizes = [3, 4]\nnaive_threshold = 3\ncache = \"warm\"\n").unwrap();

    layup()
        .args(["bench", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("S-naive - 3 - "))
        .stdout(predicate::str::contains("S-naive - 4 - ").not())
        .stdout(predicate::str::contains("S-iteration - 4 - "));
}

#[test]
fn config_from_env_var() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("layup.toml");
    std::fs::write(&path, "sizes = [7]\n").unwrap();

    let output = layup()
        .env("LAYUP_CONFIG", &path)
        .arg("bench")
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().count(), 3, "{stdout}");
}

#[test]
fn invalid_config_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("layup.toml");
    std::fs::write(&path, "sizes = \"many\"\n").unwrap();

    layup()
        .args(["bench", "--config"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid layup config"));
}

#[test]
fn verify_reports_agreement() {
    layup()
        .args(["verify", "300", "--naive-max", "15"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "ok: strategies agree for 1..=300 (naive up to 15)",
        ));
}

#[test]
fn max_depth_above_ceiling_rejected() {
    layup()
        .args(["eval", "5", "--strategy", "naive", "--max-depth", "10000000", "--no-prefill"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--max-depth"));
}

#[test]
fn memoized_eval_with_zero_depth_returns_requested_term() {
    layup()
        .args(["eval", "3", "--strategy", "memo", "--max-depth", "0"])
        .assert()
        .success()
        .stdout("3\n");

    let output = layup()
        .args(["bench", "--sizes", "5", "--max-depth", "0", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let records: Vec<serde_json::Value> = stdout
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    let bits_of = |name: &str| {
        records
            .iter()
            .find(|r| r["evaluator"] == name)
            .map(|r| r["bits"].clone())
            .unwrap()
    };
    // S(5) = 7 needs 3 bits; S(6) = 12 would need 4.
    assert_eq!(bits_of("S-memoization"), 3);
    assert_eq!(bits_of("S-iteration"), 3);
}
