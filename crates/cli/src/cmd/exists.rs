//! Implementation of the `fh exists` command.

use std::process::ExitCode;

use anyhow::Result;

use filehelper_lib::FileStore;

use crate::location::LocationArgs;
use crate::output::{OutputFormat, print_json};

pub fn cmd_exists(name: &str, ext: Option<&str>, location: &LocationArgs, output: OutputFormat) -> Result<ExitCode> {
  let dir = location.directory()?;
  let exists = FileStore::new().file_exists(name, ext, &dir);

  if output.is_json() {
    print_json(&serde_json::json!({ "exists": exists }))?;
  } else {
    println!("{}", exists);
  }

  Ok(if exists { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
