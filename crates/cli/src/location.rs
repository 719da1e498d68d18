//! Directory selection shared by every command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use tracing::debug;

use filehelper_lib::Directory;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum RootArg {
  Documents,
  AppSupport,
  Caches,
}

#[derive(Debug, Clone, Args)]
pub struct LocationArgs {
  /// Well-known storage root
  #[arg(long, value_enum, default_value_t = RootArg::AppSupport)]
  root: RootArg,

  /// Custom base directory (takes precedence over --root)
  #[arg(long, value_name = "DIR")]
  path: Option<PathBuf>,

  /// Folder beneath the root
  #[arg(long)]
  folder: Option<String>,
}

impl LocationArgs {
  pub fn directory(&self) -> Result<Directory> {
    let base = match &self.path {
      Some(path) => {
        let absolute =
          std::path::absolute(path).with_context(|| format!("Failed to make path absolute: {}", path.display()))?;
        Directory::custom(absolute)
      }
      None => match self.root {
        RootArg::Documents => Directory::documents(),
        RootArg::AppSupport => Directory::application_support(),
        RootArg::Caches => Directory::caches(),
      },
    };

    let dir = match &self.folder {
      Some(folder) => base.with_folder(folder.as_str())?,
      None => base,
    };
    debug!(directory = %dir, "selected location");
    Ok(dir)
  }
}
