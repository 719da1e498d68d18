//! Implementation of the `fh clear` command.
//!
//! Empties the selected directory. If the location resolves to a plain file, that file is
//! deleted instead.

use std::process::ExitCode;

use anyhow::Result;

use filehelper_lib::{Cleared, FileStore};

use crate::location::LocationArgs;
use crate::output::{print_info, print_success};
use crate::prompts::confirm_clear;

pub fn cmd_clear(force: bool, location: &LocationArgs) -> Result<ExitCode> {
  let dir = location.directory()?;
  let path = dir.resolve()?;

  if !confirm_clear(&path, force)? {
    print_info("Aborted.");
    return Ok(ExitCode::SUCCESS);
  }

  match FileStore::new().clear(&dir)? {
    Cleared::Missing => print_info(&format!("Nothing to clear at {}", path.display())),
    Cleared::File => print_success(&format!("Removed file {}", path.display())),
    Cleared::Entries(count) => print_success(&format!("Removed {} entries from {}", count, path.display())),
  }

  Ok(ExitCode::SUCCESS)
}
