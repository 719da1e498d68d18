//! Implementation of the `fh status` command.
//!
//! Shows where a location resolves to and whether a directory exists there.

use std::process::ExitCode;

use anyhow::Result;

use filehelper_lib::{DirectoryStatus, FileStore};

use crate::location::LocationArgs;
use crate::output::{OutputFormat, print_json, print_stat, print_success, print_warning};

pub fn cmd_status(location: &LocationArgs, output: OutputFormat) -> Result<ExitCode> {
  let dir = location.directory()?;
  let path = dir.resolve()?;
  let status = FileStore::new().directory_exists(&dir);

  if output.is_json() {
    print_json(&serde_json::json!({
      "location": dir.to_string(),
      "path": path,
      "exists": status.exists(),
      "empty": status.is_empty(),
    }))?;
    return Ok(ExitCode::SUCCESS);
  }

  match status {
    DirectoryStatus::Missing => print_warning(&format!("{} does not exist", path.display())),
    DirectoryStatus::Empty => print_success(&format!("{} exists (empty)", path.display())),
    DirectoryStatus::NonEmpty => print_success(&format!("{} exists", path.display())),
  }
  print_stat("Location", &dir.to_string());

  Ok(ExitCode::SUCCESS)
}
