//! Implementation of the `fh put` command.

use std::io::{self, Read};
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};

use filehelper_lib::{FileStore, JsonCodec};

use crate::location::LocationArgs;
use crate::output::print_success;

/// Store a file from one of three sources:
/// - `--json`: parsed and re-encoded as JSON, so malformed input is rejected
/// - `--file`: copied byte for byte
/// - otherwise stdin, byte for byte
pub fn cmd_put(
  name: &str,
  ext: Option<&str>,
  file: Option<&Path>,
  json: Option<&str>,
  pretty: bool,
  location: &LocationArgs,
) -> Result<ExitCode> {
  let dir = location.directory()?;

  let path = match (json, file) {
    (Some(json), _) => {
      let value: serde_json::Value = serde_json::from_str(json).context("Invalid JSON value")?;
      let codec = if pretty { JsonCodec::pretty() } else { JsonCodec::new() };
      FileStore::with_codec(codec, JsonCodec::new()).store(&value, &dir, name, ext)?
    }
    (None, Some(file)) => {
      let bytes = std::fs::read(file).with_context(|| format!("Failed to read {}", file.display()))?;
      FileStore::new().store_bytes(&bytes, &dir, name, ext)?
    }
    (None, None) => {
      let mut bytes = Vec::new();
      io::stdin().read_to_end(&mut bytes).context("Failed to read stdin")?;
      FileStore::new().store_bytes(&bytes, &dir, name, ext)?
    }
  };

  print_success(&format!("Stored {}", path.display()));
  Ok(ExitCode::SUCCESS)
}
