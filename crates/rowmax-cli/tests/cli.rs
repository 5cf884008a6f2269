//! Process-level contract of the `rowmax` binary: exit codes and the
//! machine-parseable RESULT line.

use std::process::Command;

use rowmax_core::reduce::find_max_row;
use rowmax_core::Matrix;

fn rowmax() -> Command {
    Command::new(env!("CARGO_BIN_EXE_rowmax"))
}

#[test]
fn missing_dimensions_exit_with_code_1() {
    // N given, M missing: print usage, exit 1 (not clap's default 2).
    let out = rowmax().args(["sequential", "4"]).output().unwrap();
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr).to_lowercase();
    assert!(stderr.contains("usage"), "no usage text on stderr: {stderr}");
}

#[test]
fn missing_all_arguments_exits_with_code_1() {
    let out = rowmax().output().unwrap();
    assert_eq!(out.status.code(), Some(1));
}

#[test]
fn help_exits_with_code_0() {
    let out = rowmax().arg("--help").output().unwrap();
    assert_eq!(out.status.code(), Some(0));
}

#[test]
fn sequential_run_emits_result_line() {
    let out = rowmax().args(["sequential", "4", "3", "1"]).output().unwrap();
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(
        stdout.lines().any(|l| l.starts_with("RESULT:")),
        "no RESULT line in: {stdout}"
    );
}

#[test]
fn distributed_report_is_real_even_with_zero_iterations() {
    // The reported answer comes from the untimed verification cycle, so
    // k = 0 must still print the true row and sum (default seed 42).
    let out = rowmax()
        .args(["distributed", "5", "4", "0", "2"])
        .output()
        .unwrap();
    assert!(out.status.success());

    let expected = find_max_row(&Matrix::filled(5, 4, 42)).unwrap();
    let stdout = String::from_utf8_lossy(&out.stdout);
    let line = stdout
        .lines()
        .find(|l| l.starts_with("RESULT:"))
        .expect("no RESULT line");
    let fields: Vec<&str> = line.split(':').collect();
    assert_eq!(fields[1], expected.row.to_string());
    assert_eq!(fields[2], format!("{:.2}", expected.sum));
}
