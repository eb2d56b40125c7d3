//! End-to-end tests for the `cpu-sched` binary.

use std::io::Write;
use std::process::Command;

fn bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_cpu-sched"))
}

fn workload(body: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "ArrivalTime\tCPUBurstLength\n{body}").unwrap();
    file
}

#[test]
fn test_fifo_report_exits_zero() {
    let file = workload("10\t22\n68\t12\n98\t34\n");
    let output = bin().arg(file.path()).output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("FIFO Scheduling"));
    assert!(stdout.contains("Total elapsed time:      132"));
}

#[test]
fn test_all_algorithms_json() {
    let file = workload("0\t8\n1\t4\n2\t1\n");
    let output = bin()
        .arg(file.path())
        .args(["--algorithm", "all", "--format", "json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value.as_array().unwrap().len(), 2);
    assert_eq!(value[1]["schedule"]["algorithm"], "SJF");
    assert_eq!(value[1]["schedule"]["entries"][1]["id"], 3);
}

#[test]
fn test_missing_file_exits_one() {
    let dir = tempfile::tempdir().unwrap();
    let output = bin().arg(dir.path().join("nope.txt")).output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Error: Could not open file"));
}

#[test]
fn test_format_error_exits_one() {
    let file = workload("10\t22\nnot_a_number\t50\n");
    let output = bin().arg(file.path()).output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("not_a_number"));
}

#[test]
fn test_oversized_time_exits_one() {
    let file = workload("9223372036854775807\t1\n");
    let output = bin()
        .arg(file.path())
        .args(["--algorithm", "all"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Error: Invalid data format on line 2"));
    assert!(stderr.contains("arrival time exceeds"));
}
