//! Name validation and path composition for stored files.
//!
//! Folders and filenames are single path segments. Nesting is expressed only through
//! [`Directory::with_folder`](crate::directory::Directory::with_folder), never through a name.

use std::path::{Path, PathBuf};

use crate::error::{Result, StoreError};

/// Why a candidate path segment was rejected, or `None` if it is acceptable.
pub(crate) fn segment_violation(segment: &str) -> Option<&'static str> {
  if segment.is_empty() {
    return Some("must not be empty");
  }
  if segment == "." || segment == ".." {
    return Some("must not be a relative path component");
  }
  if segment.contains(['/', '\\']) {
    return Some("must not contain a path separator");
  }
  if segment.contains(':') {
    return Some("must not contain a drive or stream separator");
  }
  if segment.contains('\0') {
    return Some("must not contain a NUL byte");
  }
  None
}

pub(crate) fn validate_folder(name: &str) -> Result<()> {
  match segment_violation(name) {
    Some(reason) => Err(StoreError::InvalidFolder {
      name: name.to_string(),
      reason,
    }),
    None => Ok(()),
  }
}

pub(crate) fn validate_filename(name: &str) -> Result<()> {
  match segment_violation(name) {
    Some(reason) => Err(StoreError::InvalidFilename {
      name: name.to_string(),
      reason,
    }),
    None => Ok(()),
  }
}

/// Normalizes an extension: one leading dot is dropped and an empty extension means none.
pub(crate) fn normalize_extension(extension: Option<&str>) -> Result<Option<&str>> {
  let Some(ext) = extension else {
    return Ok(None);
  };
  let ext = ext.strip_prefix('.').unwrap_or(ext);
  if ext.is_empty() {
    return Ok(None);
  }
  if ext.contains(['/', '\\', ':', '\0']) {
    return Err(StoreError::InvalidFilename {
      name: ext.to_string(),
      reason: "extension must not contain a path separator",
    });
  }
  Ok(Some(ext))
}

/// Joins `filename` and its optional extension onto an already-resolved directory.
pub(crate) fn file_path(dir: &Path, filename: &str, extension: Option<&str>) -> Result<PathBuf> {
  validate_filename(filename)?;
  let name = match normalize_extension(extension)? {
    Some(ext) => format!("{filename}.{ext}"),
    None => filename.to_string(),
  };
  Ok(dir.join(name))
}
