use predicates::prelude::*;

use super::common::TestEnv;

#[test]
fn put_from_stdin_then_get() {
  let env = TestEnv::new();

  env
    .fh_cmd()
    .args(["put", "greeting", "--ext", "txt"])
    .write_stdin("hello world")
    .assert()
    .success()
    .stdout(predicate::str::contains("Stored"));

  assert_eq!(
    std::fs::read_to_string(env.support_path().join("greeting.txt")).unwrap(),
    "hello world"
  );

  env
    .fh_cmd()
    .args(["get", "greeting", "--ext", "txt"])
    .assert()
    .success()
    .stdout("hello world");
}

#[test]
fn put_json_is_normalized() {
  let env = TestEnv::new();

  env
    .fh_cmd()
    .args(["put", "config", "--ext", "json", "--json", r#"{ "a" : 1 }"#])
    .assert()
    .success();

  env
    .fh_cmd()
    .args(["get", "config", "--ext", "json"])
    .assert()
    .success()
    .stdout(r#"{"a":1}"#);
}

#[test]
fn put_pretty_json() {
  let env = TestEnv::new();

  env
    .fh_cmd()
    .args(["put", "config", "--ext", "json", "--json", r#"{"a":1}"#, "--pretty"])
    .assert()
    .success();

  let text = std::fs::read_to_string(env.support_path().join("config.json")).unwrap();
  assert_eq!(text, "{\n  \"a\": 1\n}");
}

#[test]
fn put_rejects_malformed_json() {
  let env = TestEnv::new();

  env
    .fh_cmd()
    .args(["put", "config", "--json", "{not json"])
    .assert()
    .failure()
    .stderr(predicate::str::contains("Invalid JSON value"));

  assert!(!env.support_path().join("config").exists());
}

#[test]
fn put_from_file_into_new_folder() {
  let env = TestEnv::new();
  let source = env.write_file("source.bin", "payload");

  env
    .fh_cmd()
    .args(["put", "copy", "--root", "caches", "--folder", "thumbs", "--file"])
    .arg(&source)
    .assert()
    .success();

  assert_eq!(
    std::fs::read_to_string(env.caches_path().join("thumbs").join("copy")).unwrap(),
    "payload"
  );
}

#[test]
fn put_overwrites_existing_file() {
  let env = TestEnv::new();

  for content in ["first version", "second"] {
    env
      .fh_cmd()
      .args(["put", "note", "--root", "documents"])
      .write_stdin(content)
      .assert()
      .success();
  }

  let entries: Vec<_> = std::fs::read_dir(env.documents_path()).unwrap().collect();
  assert_eq!(entries.len(), 1);
  assert_eq!(
    std::fs::read_to_string(env.documents_path().join("note")).unwrap(),
    "second"
  );
}

#[test]
fn custom_path_root() {
  let env = TestEnv::new();
  let custom = env.temp.path().join("custom");
  std::fs::create_dir(&custom).unwrap();

  env
    .fh_cmd()
    .args(["put", "value", "--path"])
    .arg(&custom)
    .write_stdin("42")
    .assert()
    .success();

  assert!(custom.join("value").exists());
}

#[test]
fn folder_with_separator_is_rejected() {
  let env = TestEnv::new();

  env
    .fh_cmd()
    .args(["put", "value", "--folder", "../escape"])
    .write_stdin("x")
    .assert()
    .failure()
    .stderr(predicate::str::contains("Invalid folder name"));

  assert!(!env.temp.path().join("escape").exists());
}

#[test]
fn filename_with_separator_is_rejected() {
  let env = TestEnv::new();

  env
    .fh_cmd()
    .args(["put", "nested/value"])
    .write_stdin("x")
    .assert()
    .failure()
    .stderr(predicate::str::contains("Invalid filename"));
}

#[test]
fn get_missing_file_fails() {
  let env = TestEnv::new();

  env
    .fh_cmd()
    .args(["get", "absent"])
    .assert()
    .code(1)
    .stderr(predicate::str::contains("Nothing stored"));
}

#[test]
fn rm_is_idempotent() {
  let env = TestEnv::new();

  env.fh_cmd().args(["put", "doomed"]).write_stdin("x").assert().success();

  env
    .fh_cmd()
    .args(["rm", "doomed"])
    .assert()
    .success()
    .stdout(predicate::str::contains("Removed"));

  env
    .fh_cmd()
    .args(["rm", "doomed"])
    .assert()
    .success()
    .stdout(predicate::str::contains("Nothing to remove"));
}
