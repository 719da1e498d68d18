//! Implementation of the `fh rm` command.

use std::process::ExitCode;

use anyhow::Result;

use filehelper_lib::FileStore;

use crate::location::LocationArgs;
use crate::output::{print_info, print_success};

/// Removing a file that does not exist is not an error.
pub fn cmd_rm(name: &str, ext: Option<&str>, location: &LocationArgs) -> Result<ExitCode> {
  let dir = location.directory()?;
  let store = FileStore::new();
  let path = store.resolve(&dir, name, ext)?;

  if store.remove(name, ext, &dir)? {
    print_success(&format!("Removed {}", path.display()));
  } else {
    print_info(&format!("Nothing to remove at {}", path.display()));
  }

  Ok(ExitCode::SUCCESS)
}
