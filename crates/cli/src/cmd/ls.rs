//! Implementation of the `fh ls` command.

use std::process::ExitCode;

use anyhow::Result;

use filehelper_lib::FileStore;

use crate::location::LocationArgs;
use crate::output::{OutputFormat, format_bytes, print_info, print_json, symbols};

pub fn cmd_ls(location: &LocationArgs, output: OutputFormat) -> Result<ExitCode> {
  let dir = location.directory()?;
  let path = dir.resolve()?;
  let entries = FileStore::new().list_contents(&dir)?;

  if output.is_json() {
    let items: Vec<_> = entries
      .iter()
      .map(|entry| serde_json::json!({ "path": entry, "dir": entry.is_dir() }))
      .collect();
    print_json(&serde_json::json!({ "directory": path, "entries": items }))?;
    return Ok(ExitCode::SUCCESS);
  }

  if entries.is_empty() {
    print_info(&format!("{} is empty", path.display()));
    return Ok(ExitCode::SUCCESS);
  }

  for entry in &entries {
    let name = entry.file_name().map(|n| n.to_string_lossy()).unwrap_or_default();
    if entry.is_dir() {
      println!("  {} {}/", symbols::INFO, name);
    } else {
      let size = entry.metadata().map(|m| m.len()).unwrap_or(0);
      println!("  {} {} ({})", symbols::INFO, name, format_bytes(size));
    }
  }

  Ok(ExitCode::SUCCESS)
}
