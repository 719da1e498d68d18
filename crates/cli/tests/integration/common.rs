//! Shared test helpers for CLI integration tests.

use std::path::PathBuf;

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use tempfile::TempDir;

/// Isolated test environment.
///
/// Each test gets its own temporary directory standing in for the documents,
/// application support and caches roots.
pub struct TestEnv {
  pub temp: TempDir,
}

impl TestEnv {
  pub fn new() -> Self {
    Self {
      temp: TempDir::new().unwrap(),
    }
  }

  fn root(&self, name: &str) -> PathBuf {
    let p = self.temp.path().join(name);
    std::fs::create_dir_all(&p).unwrap();
    dunce::canonicalize(&p).unwrap_or(p)
  }

  /// Documents root (isolated per test).
  pub fn documents_path(&self) -> PathBuf {
    self.root("documents")
  }

  /// Application support root, the default for every command.
  pub fn support_path(&self) -> PathBuf {
    self.root("support")
  }

  /// Caches root.
  pub fn caches_path(&self) -> PathBuf {
    self.root("caches")
  }

  /// Write a file relative to the temp directory.
  pub fn write_file(&self, relative_path: &str, content: &str) -> PathBuf {
    let path = self.temp.path().join(relative_path);
    if let Some(parent) = path.parent() {
      std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(&path, content).unwrap();
    path
  }

  /// Get a pre-configured Command for the fh binary.
  ///
  /// Points every `FILEHELPER_*` root override into the temp directory.
  pub fn fh_cmd(&self) -> Command {
    let mut cmd: Command = cargo_bin_cmd!("fh");
    cmd.env("FILEHELPER_DOCUMENTS_DIR", self.documents_path());
    cmd.env("FILEHELPER_APP_SUPPORT_DIR", self.support_path());
    cmd.env("FILEHELPER_CACHES_DIR", self.caches_path());
    cmd.env_remove("RUST_LOG");
    cmd
  }
}
