//! Base-directory lookup for the well-known storage roots.
//!
//! Every lookup reads the environment at call time. A `FILEHELPER_*` override wins over
//! the platform convention; variables that are set but empty count as unset.

use std::path::PathBuf;

use crate::consts::{APP_SUPPORT_DIR_ENV, CACHES_DIR_ENV, DOCUMENTS_DIR_ENV};
use crate::error::{Result, StoreError};

/// Reads a path from an environment variable, treating empty values as unset.
fn env_path(var: &str) -> Option<PathBuf> {
  std::env::var_os(var).filter(|value| !value.is_empty()).map(PathBuf::from)
}

/// XDG base directory variables must hold absolute paths; anything else is ignored.
#[cfg(all(unix, not(target_os = "macos")))]
fn xdg_path(var: &str) -> Option<PathBuf> {
  env_path(var).filter(|path| path.is_absolute())
}

/// Returns the user's home directory
#[cfg(windows)]
pub fn home_dir() -> Result<PathBuf> {
  env_path("USERPROFILE").ok_or_else(|| StoreError::configuration("home", "USERPROFILE not set"))
}

/// Returns the user's home directory
#[cfg(not(windows))]
pub fn home_dir() -> Result<PathBuf> {
  env_path("HOME").ok_or_else(|| StoreError::configuration("home", "HOME not set"))
}

/// Returns the base directory for user documents
pub fn documents_dir() -> Result<PathBuf> {
  if let Some(path) = env_path(DOCUMENTS_DIR_ENV) {
    return Ok(path);
  }
  default_documents_dir()
}

#[cfg(all(unix, not(target_os = "macos")))]
fn default_documents_dir() -> Result<PathBuf> {
  if let Some(path) = xdg_path("XDG_DOCUMENTS_DIR") {
    return Ok(path);
  }
  Ok(home_dir()?.join("Documents"))
}

#[cfg(any(windows, target_os = "macos"))]
fn default_documents_dir() -> Result<PathBuf> {
  Ok(home_dir()?.join("Documents"))
}

/// Returns the base directory for application support data
pub fn app_support_dir() -> Result<PathBuf> {
  if let Some(path) = env_path(APP_SUPPORT_DIR_ENV) {
    return Ok(path);
  }
  default_app_support_dir()
}

#[cfg(all(unix, not(target_os = "macos")))]
fn default_app_support_dir() -> Result<PathBuf> {
  if let Some(path) = xdg_path("XDG_DATA_HOME") {
    return Ok(path);
  }
  Ok(home_dir()?.join(".local").join("share"))
}

#[cfg(target_os = "macos")]
fn default_app_support_dir() -> Result<PathBuf> {
  Ok(home_dir()?.join("Library").join("Application Support"))
}

#[cfg(windows)]
fn default_app_support_dir() -> Result<PathBuf> {
  env_path("APPDATA").ok_or_else(|| StoreError::configuration("application support", "APPDATA not set"))
}

/// Returns the base directory for cache files
pub fn caches_dir() -> Result<PathBuf> {
  if let Some(path) = env_path(CACHES_DIR_ENV) {
    return Ok(path);
  }
  default_caches_dir()
}

#[cfg(all(unix, not(target_os = "macos")))]
fn default_caches_dir() -> Result<PathBuf> {
  if let Some(path) = xdg_path("XDG_CACHE_HOME") {
    return Ok(path);
  }
  Ok(home_dir()?.join(".cache"))
}

#[cfg(target_os = "macos")]
fn default_caches_dir() -> Result<PathBuf> {
  Ok(home_dir()?.join("Library").join("Caches"))
}

#[cfg(windows)]
fn default_caches_dir() -> Result<PathBuf> {
  env_path("LOCALAPPDATA").ok_or_else(|| StoreError::configuration("caches", "LOCALAPPDATA not set"))
}
