//! CLI contract tests against the built binary

use std::process::Command;

fn typetour() -> Command {
    Command::new(env!("CARGO_BIN_EXE_typetour"))
}

#[test]
fn test_bare_invocation_runs_everything_and_exits_zero() {
    let output = typetour().output().expect("failed to run typetour");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("value types"));
    assert!(stdout.contains("immutable text"));
    assert!(stdout.contains("ordered collections"));
}

#[test]
fn test_run_single_vignette() {
    let output = typetour()
        .args(["--plain", "run", "values"])
        .output()
        .expect("failed to run typetour");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("a: 5, b: 10"));
    assert!(!stdout.contains("ordered collections"));
}

#[test]
fn test_unknown_vignette_fails() {
    let output = typetour()
        .args(["run", "nonesuch"])
        .output()
        .expect("failed to run typetour");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("nonesuch"));
}

#[test]
fn test_list_names_all_vignettes() {
    let output = typetour().arg("list").output().expect("failed to run typetour");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    for name in ["values", "strings", "collections"] {
        assert!(stdout.contains(name), "missing vignette {}", name);
    }
}

#[test]
fn test_version_subcommand() {
    let output = typetour().arg("version").output().expect("failed to run typetour");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("typetour"));
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_plain_output_has_no_ansi_escapes() {
    let output = typetour().arg("--plain").output().expect("failed to run typetour");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains('\u{1b}'));
}
