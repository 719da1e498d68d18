//! Error types for filehelper-lib.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Boxed error produced by an [`Encoder`](crate::codec::Encoder) or [`Decoder`](crate::codec::Decoder).
pub type CodecError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can occur while resolving or touching stored files.
#[derive(Debug, Error)]
pub enum StoreError {
  #[error("Could not resolve the {root} directory: {reason}")]
  Configuration { root: String, reason: String },

  #[error("Invalid folder name {name:?}: {reason}")]
  InvalidFolder { name: String, reason: &'static str },

  #[error("Invalid filename {name:?}: {reason}")]
  InvalidFilename { name: String, reason: &'static str },

  #[error("Failed to encode value: {0}")]
  Encode(#[source] CodecError),

  #[error("Failed to decode {}: {source}", path.display())]
  Decode {
    path: PathBuf,
    #[source]
    source: CodecError,
  },

  #[error("Failed to create directory {}: {source}", path.display())]
  DirectoryCreation {
    path: PathBuf,
    #[source]
    source: io::Error,
  },

  #[error("Failed to write {}: {source}", path.display())]
  Write {
    path: PathBuf,
    #[source]
    source: io::Error,
  },

  #[error("Failed to delete {}: {source}", path.display())]
  Delete {
    path: PathBuf,
    #[source]
    source: io::Error,
  },

  #[error("Failed to read {}: {source}", path.display())]
  Read {
    path: PathBuf,
    #[source]
    source: io::Error,
  },
}

pub type Result<T, E = StoreError> = std::result::Result<T, E>;

impl StoreError {
  pub(crate) fn configuration(root: impl Into<String>, reason: impl Into<String>) -> Self {
    StoreError::Configuration {
      root: root.into(),
      reason: reason.into(),
    }
  }
}
