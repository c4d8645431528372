use std::process::Command;

fn run_cmdkit(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_cmdkit"))
        .args(args)
        .output()
        .expect("failed to spawn cmdkit binary")
}

#[test]
fn missing_example_flag_exits_with_error() {
    let output = run_cmdkit(&[]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: at least one --example is required"));
}

#[test]
fn bad_example_spec_exits_with_formatted_error() {
    let output = run_cmdkit(&["--example", "no separator here"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: cannot parse --example value:"));
    assert!(stderr.contains("no separator here"));
}

#[test]
fn renders_example_blocks_on_stdout() {
    let output = run_cmdkit(&[
        "--example",
        "List all pipelines=cmdkit list",
        "--example",
        "Show one pipeline=cmdkit get demo",
    ]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(
        stdout,
        "  # List all pipelines\n  cmdkit list\n\n  # Show one pipeline\n  cmdkit get demo\n"
    );
}

#[test]
fn json_flag_emits_examples_as_json() {
    let output = run_cmdkit(&["--example", "List all pipelines=cmdkit list", "--json"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();

    assert_eq!(parsed[0]["desc"], "List all pipelines");
    assert_eq!(parsed[0]["command"], "cmdkit list");
}
