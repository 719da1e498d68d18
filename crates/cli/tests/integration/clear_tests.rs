use predicates::prelude::*;

use super::common::TestEnv;

#[test]
fn clear_empties_directory_but_keeps_it() {
  let env = TestEnv::new();

  for name in ["one", "two", "three"] {
    env
      .fh_cmd()
      .args(["put", name, "--folder", "bin"])
      .write_stdin(name)
      .assert()
      .success();
  }

  env
    .fh_cmd()
    .args(["clear", "--force", "--folder", "bin"])
    .assert()
    .success()
    .stdout(predicate::str::contains("Removed 3 entries"));

  let folder = env.support_path().join("bin");
  assert!(folder.is_dir());
  assert_eq!(std::fs::read_dir(&folder).unwrap().count(), 0);
}

#[test]
fn clear_on_file_location_removes_file() {
  let env = TestEnv::new();
  std::fs::write(env.support_path().join("loose"), "x").unwrap();

  env
    .fh_cmd()
    .args(["clear", "-f", "--folder", "loose"])
    .assert()
    .success()
    .stdout(predicate::str::contains("Removed file"));

  assert!(!env.support_path().join("loose").exists());
}

#[test]
fn clear_missing_location_is_noop() {
  let env = TestEnv::new();

  env
    .fh_cmd()
    .args(["clear", "--force", "--folder", "ghost"])
    .assert()
    .success()
    .stdout(predicate::str::contains("Nothing to clear"));
}

#[test]
fn clear_requires_confirmation_when_not_interactive() {
  let env = TestEnv::new();
  env.fh_cmd().args(["put", "keep"]).write_stdin("x").assert().success();

  env
    .fh_cmd()
    .arg("clear")
    .assert()
    .failure()
    .stderr(predicate::str::contains("--force"));

  assert!(env.support_path().join("keep").exists());
}
