//! End-to-end tests for the `outliner` binary.

use std::io::Write as _;
use std::process::{Command, Output, Stdio};

const PAGE: &str =
    r#"<div id="outline"></div><div id="doc"><h1>Intro</h1><h2 id="why">Why</h2><h1>End</h1></div>"#;

fn outliner(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_outliner"))
        .args(args)
        .output()
        .expect("run outliner")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_html_output() {
    let output = outliner(&["--html", PAGE, "--quiet"]);
    assert!(output.status.success());
    let html = stdout(&output);
    assert!(html.starts_with(r##"<div id="outline"><h1>Outline</h1><ol><li><a href="#head0">"##));
    assert!(html.contains(r#"<h1 id="head2">End</h1>"#));
}

#[test]
fn test_text_output() {
    let output = outliner(&["--html", PAGE, "--format", "text"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "Intro #head0\n  Why #why\nEnd #head2\n");
}

#[test]
fn test_json_output() {
    let output = outliner(&["--html", PAGE, "-f", "json", "--id-prefix", "s"]);
    assert!(output.status.success());
    let json = stdout(&output);
    assert!(json.contains(r##""anchor": "#s0""##));
    assert!(json.contains(r##""anchor": "#why""##));
}

#[test]
fn test_flags_override_defaults() {
    let html = r#"<main id="m"><h2>A</h2></main><nav id="toc"></nav>"#;
    let output = outliner(&[
        "--html",
        html,
        "--source",
        "m",
        "--container",
        "toc",
        "--list",
        "ul",
        "--no-title",
    ]);
    assert!(output.status.success());
    assert!(stdout(&output).contains(r##"<nav id="toc"><ul><li><a href="#head0">A</a></li></ul></nav>"##));
}

#[test]
fn test_missing_element_fails() {
    let output = outliner(&["--html", "<p>nothing here</p>"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains(r#"source element with id "doc" not found"#));
}

#[test]
fn test_malformed_nesting_respects_policy() {
    let html = r#"<div id="doc"><h3>A</h3><h1>B</h1></div><div id="outline"></div>"#;
    assert!(!outliner(&["--html", html]).status.success());
    let clamped = outliner(&["--html", html, "--nesting", "clamp", "-q", "-f", "text"]);
    assert!(clamped.status.success());
    assert_eq!(stdout(&clamped), "A #head0\nB #head1\n");
}

#[test]
fn test_reads_stdin() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_outliner"))
        .args(["--format", "text"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("spawn outliner");
    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(PAGE.as_bytes())
        .expect("write stdin");
    let output = child.wait_with_output().expect("wait");
    assert!(output.status.success());
    assert!(stdout(&output).starts_with("Intro #head0\n"));
}

#[test]
fn test_config_file_and_output_file() {
    let dir = std::env::temp_dir();
    let id = std::process::id();
    let config = dir.join(format!("outliner-cli-config-{id}.json"));
    let out = dir.join(format!("outliner-cli-out-{id}.html"));
    std::fs::write(&config, r#"{ "title": "Contents", "list_style": "ul" }"#).expect("config");

    let output = outliner(&[
        "--html",
        PAGE,
        "--config",
        config.to_str().expect("utf-8 path"),
        "--output",
        out.to_str().expect("utf-8 path"),
    ]);
    let written = std::fs::read_to_string(&out).expect("output file");
    std::fs::remove_file(&config).expect("cleanup config");
    std::fs::remove_file(&out).expect("cleanup output");

    assert!(output.status.success());
    assert!(stdout(&output).is_empty());
    assert!(written.starts_with(r#"<div id="outline"><h1>Contents</h1><ul>"#));
}
