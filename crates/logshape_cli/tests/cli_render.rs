#![allow(missing_docs)]

use std::io::Write;
use std::process::{Command, Output, Stdio};

use logshape_testkit::{fixture_path, object_keys, read_fixture};

#[test]
fn render_file_matches_human_fixture() {
	let fixture = fixture_path("services.jsonl");
	let output = run(&["render", &fixture.to_string_lossy()]);

	assert_eq!(stdout(&output), read_fixture("services.human.txt"));
}

#[test]
fn render_json_emits_sorted_objects_per_line() {
	let fixture = fixture_path("services.jsonl");
	let output = run(&["render", &fixture.to_string_lossy(), "--json"]);
	let text = stdout(&output);
	let lines: Vec<&str> = text.lines().collect();

	assert_eq!(lines.len(), 2);
	assert_eq!(lines[0], r#"{"name":"svc","retries":3}"#);
	assert_eq!(object_keys(lines[1]), ["endpoints", "meta", "name", "note"]);
}

#[test]
fn render_reads_stdin_when_no_file_is_given() {
	let mut child = Command::new(env!("CARGO_BIN_EXE_logshape"))
		.args(["render", "--max-depth", "1"])
		.stdin(Stdio::piped())
		.stdout(Stdio::piped())
		.stderr(Stdio::piped())
		.spawn()
		.expect("logshape spawns");
	child
		.stdin
		.take()
		.expect("stdin piped")
		.write_all(br#"{"outer":{"inner":1}}"#)
		.expect("stdin written");
	let output = child.wait_with_output().expect("logshape exits");

	assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
	assert_eq!(stdout(&output), "outer: <max depth>\n");
}

#[test]
fn render_reports_malformed_input() {
	let output = Command::new(env!("CARGO_BIN_EXE_logshape"))
		.args(["render", &fixture_path("services.human.txt").to_string_lossy()])
		.output()
		.expect("logshape executes");

	assert!(!output.status.success());
	assert!(String::from_utf8_lossy(&output.stderr).starts_with("error: json:"));
}

fn run(args: &[&str]) -> Output {
	let output = Command::new(env!("CARGO_BIN_EXE_logshape")).args(args).output().expect("logshape executes");
	assert!(
		output.status.success(),
		"logshape failed with status={}: {}",
		output.status,
		String::from_utf8_lossy(&output.stderr)
	);
	output
}

fn stdout(output: &Output) -> String {
	String::from_utf8(output.stdout.clone()).expect("stdout should be utf-8")
}
