use predicates::prelude::*;

use super::common::TestEnv;

#[test]
fn exists_reports_through_exit_code() {
  let env = TestEnv::new();

  env
    .fh_cmd()
    .args(["exists", "thing", "--ext", "json"])
    .assert()
    .code(1)
    .stdout("false\n");

  env
    .fh_cmd()
    .args(["put", "thing", "--ext", "json", "--json", "[]"])
    .assert()
    .success();

  env
    .fh_cmd()
    .args(["exists", "thing", "--ext", "json"])
    .assert()
    .success()
    .stdout("true\n");
}

#[test]
fn ls_lists_entries() {
  let env = TestEnv::new();

  env.fh_cmd().args(["put", "b"]).write_stdin("bb").assert().success();
  env.fh_cmd().args(["put", "a"]).write_stdin("a").assert().success();

  env
    .fh_cmd()
    .arg("ls")
    .assert()
    .success()
    .stdout(predicate::str::contains("a (1 B)").and(predicate::str::contains("b (2 B)")));
}

#[test]
fn ls_json_output() {
  let env = TestEnv::new();

  env
    .fh_cmd()
    .args(["put", "item", "--folder", "box"])
    .write_stdin("x")
    .assert()
    .success();

  let output = env
    .fh_cmd()
    .args(["ls", "--folder", "box", "-o", "json"])
    .output()
    .unwrap();
  assert!(output.status.success());

  let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
  let entries = parsed["entries"].as_array().unwrap();
  assert_eq!(entries.len(), 1);
  assert!(entries[0]["path"].as_str().unwrap().ends_with("item"));
  assert_eq!(entries[0]["dir"], false);
}

#[test]
fn ls_missing_folder_fails() {
  let env = TestEnv::new();

  env
    .fh_cmd()
    .args(["ls", "--folder", "nowhere"])
    .assert()
    .failure()
    .stderr(predicate::str::contains("Failed to read"));
}

#[test]
fn status_reports_missing_and_empty() {
  let env = TestEnv::new();

  let output = env
    .fh_cmd()
    .args(["status", "--folder", "fresh", "-o", "json"])
    .output()
    .unwrap();
  let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
  assert_eq!(parsed["exists"], false);
  assert!(parsed["empty"].is_null());
  assert_eq!(parsed["location"], "application support/fresh");

  let output = env.fh_cmd().args(["status", "-o", "json"]).output().unwrap();
  let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
  assert_eq!(parsed["exists"], true);
  assert_eq!(parsed["empty"], true);
}
