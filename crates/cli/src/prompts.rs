//! Confirmation before `fh clear` empties a directory.
//!
//! Without `--force` the user has to answer `y` on a terminal. A non-interactive session is
//! refused outright, so scripts have to opt in to deletion explicitly.

use std::io::{self, BufRead, IsTerminal, Write};
use std::path::Path;

use anyhow::{Result, bail};

pub fn confirm_clear(path: &Path, force: bool) -> Result<bool> {
  if force {
    return Ok(true);
  }

  if !io::stdin().is_terminal() || !io::stderr().is_terminal() {
    bail!("Refusing to clear {} without a terminal. Use --force to proceed.", path.display());
  }

  let mut stderr = io::stderr().lock();
  write!(stderr, "Remove everything in {}? [y/N] ", path.display())?;
  stderr.flush()?;

  read_answer(io::stdin().lock())
}

/// Anything but `y` / `yes` (any case) is a no, including end of input.
fn read_answer(mut input: impl BufRead) -> Result<bool> {
  let mut line = String::new();
  input.read_line(&mut line)?;
  Ok(matches!(line.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
}
