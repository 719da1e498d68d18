//! Implementation of the `fh get` command.

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};

use filehelper_lib::FileStore;

use crate::location::LocationArgs;
use crate::output::print_error;

pub fn cmd_get(name: &str, ext: Option<&str>, location: &LocationArgs) -> Result<ExitCode> {
  let dir = location.directory()?;
  let store = FileStore::new();

  let Some(bytes) = store.retrieve_bytes(name, ext, &dir) else {
    let path = store.resolve(&dir, name, ext)?;
    print_error(&format!("Nothing stored at {}", path.display()));
    return Ok(ExitCode::FAILURE);
  };

  let mut stdout = io::stdout().lock();
  stdout.write_all(&bytes).context("Failed to write to stdout")?;
  stdout.flush()?;

  Ok(ExitCode::SUCCESS)
}
