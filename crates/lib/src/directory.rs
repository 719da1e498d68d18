//! Logical storage locations.
//!
//! A [`Directory`] is a recipe for a path: a well-known [`Root`] plus an optional single-segment
//! folder. It is never persisted by this crate and only touches the environment when resolved.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{Result, StoreError};
use crate::platform::paths;
use crate::store::paths::validate_folder;

/// Well-known base storage locations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Root {
  Documents,
  ApplicationSupport,
  Caches,
  /// An arbitrary absolute base path.
  Custom(PathBuf),
}

impl Root {
  /// Looks up the platform base directory for this root.
  pub fn base_dir(&self) -> Result<PathBuf> {
    match self {
      Root::Documents => paths::documents_dir(),
      Root::ApplicationSupport => paths::app_support_dir(),
      Root::Caches => paths::caches_dir(),
      Root::Custom(path) => Ok(path.clone()),
    }
  }
}

impl fmt::Display for Root {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Root::Documents => write!(f, "documents"),
      Root::ApplicationSupport => write!(f, "application support"),
      Root::Caches => write!(f, "caches"),
      Root::Custom(path) => write!(f, "{}", path.display()),
    }
  }
}

/// A storage root plus an optional folder beneath it.
///
/// The folder is validated on construction, so a `Directory` can never resolve outside its root.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "DirectorySpec")]
pub struct Directory {
  root: Root,
  #[serde(skip_serializing_if = "Option::is_none")]
  folder: Option<String>,
}

#[derive(Deserialize)]
struct DirectorySpec {
  root: Root,
  #[serde(default)]
  folder: Option<String>,
}

impl TryFrom<DirectorySpec> for Directory {
  type Error = StoreError;

  fn try_from(spec: DirectorySpec) -> Result<Self> {
    Directory::new(spec.root, spec.folder)
  }
}

impl Directory {
  /// Create a directory, validating `folder` as a single path segment.
  pub fn new(root: Root, folder: Option<String>) -> Result<Self> {
    if let Some(name) = &folder {
      validate_folder(name)?;
    }
    Ok(Self { root, folder })
  }

  pub fn documents() -> Self {
    Self::at(Root::Documents)
  }

  pub fn application_support() -> Self {
    Self::at(Root::ApplicationSupport)
  }

  pub fn caches() -> Self {
    Self::at(Root::Caches)
  }

  /// A directory rooted at an arbitrary base path.
  ///
  /// The path must be absolute; a relative base is reported when the directory is resolved.
  pub fn custom(base: impl Into<PathBuf>) -> Self {
    Self::at(Root::Custom(base.into()))
  }

  fn at(root: Root) -> Self {
    Self { root, folder: None }
  }

  /// Returns a copy of this directory scoped to `folder`.
  pub fn with_folder(&self, folder: impl Into<String>) -> Result<Self> {
    Self::new(self.root.clone(), Some(folder.into()))
  }

  /// Returns a copy of this directory with no folder.
  pub fn without_folder(&self) -> Self {
    Self::at(self.root.clone())
  }

  pub fn root(&self) -> &Root {
    &self.root
  }

  pub fn folder(&self) -> Option<&str> {
    self.folder.as_deref()
  }

  /// Resolve to an absolute path: the root's base directory, joined with the folder if any.
  pub fn resolve(&self) -> Result<PathBuf> {
    let base = self.root.base_dir()?;
    if !base.is_absolute() {
      return Err(StoreError::configuration(
        self.root.to_string(),
        format!("base path {} is not absolute", base.display()),
      ));
    }

    Ok(match &self.folder {
      Some(folder) => base.join(folder),
      None => base,
    })
  }
}

impl fmt::Display for Directory {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match &self.folder {
      Some(folder) => write!(f, "{}/{}", self.root, folder),
      None => write!(f, "{}", self.root),
    }
  }
}
