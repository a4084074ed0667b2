use std::process::Command;

fn gauss_cdf(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_gauss-cdf"))
        .args(args)
        .output()
        .expect("failed to run gauss-cdf")
}

#[test]
fn generates_table_literal() {
    let out = gauss_cdf(&["1.0", "1"]);
    assert!(out.status.success());

    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.contains("// sigma = 1"));
    assert!(stdout.contains("pub const CDF_SKIP64: usize = 1;"));
    assert!(stdout.contains("pub const CDF_TABLE64: [f64; 21] = ["));
    assert!(stdout.contains("0.5"));
}

#[test]
fn missing_arguments_print_usage() {
    let out = gauss_cdf(&["1.0"]);
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
    assert!(!out.stderr.is_empty());
}

#[test]
fn extra_arguments_rejected() {
    let out = gauss_cdf(&["1.0", "1", "1"]);
    assert!(!out.status.success());
}

#[test]
fn unparseable_sigma_rejected() {
    let out = gauss_cdf(&["not-a-number", "1"]);
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
}

#[test]
fn non_positive_sigma_rejected() {
    let out = gauss_cdf(&["0", "1"]);
    assert!(!out.status.success());
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("invalid parameter"));
}

#[test]
fn zero_skip_rejected() {
    let out = gauss_cdf(&["1.0", "0"]);
    assert!(!out.status.success());
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("invalid parameter"));
}
