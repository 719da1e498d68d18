//! Typed file storage on top of [`Directory`].
//!
//! Every operation resolves its target from scratch and talks to `std::fs` directly; nothing is
//! cached between calls, so the filesystem is the only source of truth.
//!
//! # Layout
//!
//! ```text
//! {root base dir}/
//! └── {folder}/               # optional, created on first store
//!     ├── <filename>.<ext>    # one value per file
//!     └── .<random>.tmp       # transient, only while a store is in flight
//! ```
//!
//! Mutating operations ([`FileStore::store`], [`FileStore::remove`], [`FileStore::clear`],
//! [`FileStore::list_contents`]) return errors. Queries ([`FileStore::retrieve`],
//! [`FileStore::file_exists`], [`FileStore::directory_exists`]) never do: a miss, an unreadable
//! file or an undecodable file all come back as an absent value plus a diagnostic.

pub mod paths;

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, trace, warn};

use crate::codec::{Decoder, Encoder, JsonCodec};
use crate::directory::Directory;
use crate::error::{Result, StoreError};

use self::paths::file_path;

/// What [`FileStore::clear`] found and removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cleared {
  /// Nothing exists at the resolved path.
  Missing,
  /// The resolved path was a plain file and has been deleted.
  File,
  /// The resolved path is a directory; this many direct children were deleted.
  Entries(usize),
}

/// Result of [`FileStore::directory_exists`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectoryStatus {
  /// Absent, not a directory, or not listable.
  Missing,
  Empty,
  NonEmpty,
}

impl DirectoryStatus {
  pub fn exists(self) -> bool {
    !matches!(self, DirectoryStatus::Missing)
  }

  /// `None` when the directory does not exist.
  pub fn is_empty(self) -> Option<bool> {
    match self {
      DirectoryStatus::Missing => None,
      DirectoryStatus::Empty => Some(true),
      DirectoryStatus::NonEmpty => Some(false),
    }
  }
}

/// Stores and retrieves values as individual files under a [`Directory`].
///
/// Holds only the encoder/decoder pair. Typed values go through the codec (JSON by default);
/// raw bytes use [`store_bytes`](Self::store_bytes) and [`retrieve_bytes`](Self::retrieve_bytes)
/// and are written unchanged.
#[derive(Debug, Clone, Default)]
pub struct FileStore<E = JsonCodec, D = JsonCodec> {
  encoder: E,
  decoder: D,
}

impl FileStore {
  /// A store using compact JSON.
  pub fn new() -> Self {
    Self::default()
  }
}

impl<E, D> FileStore<E, D> {
  /// A store using a custom encoder/decoder pair.
  pub fn with_codec(encoder: E, decoder: D) -> Self {
    Self { encoder, decoder }
  }

  pub fn encoder(&self) -> &E {
    &self.encoder
  }

  pub fn decoder(&self) -> &D {
    &self.decoder
  }

  /// Path of `filename` (plus `.extension`) inside `dir`. No I/O.
  pub fn resolve(&self, dir: &Directory, filename: &str, extension: Option<&str>) -> Result<PathBuf> {
    file_path(&dir.resolve()?, filename, extension)
  }

  /// Write `bytes` verbatim, replacing any existing file. Returns the path written.
  pub fn store_bytes(
    &self,
    bytes: &[u8],
    dir: &Directory,
    filename: &str,
    extension: Option<&str>,
  ) -> Result<PathBuf> {
    let dir_path = dir.resolve()?;
    let path = file_path(&dir_path, filename, extension)?;

    if dir.folder().is_some() {
      ensure_folder(&dir_path)?;
    }

    write_replacing(&dir_path, &path, bytes)?;
    debug!(path = ?path, size = bytes.len(), "stored file");
    Ok(path)
  }

  /// Read the raw bytes of a file, or `None` if it is missing or unreadable.
  pub fn retrieve_bytes(&self, filename: &str, extension: Option<&str>, dir: &Directory) -> Option<Vec<u8>> {
    match self.read_file(filename, extension, dir) {
      Ok(found) => found.map(|(_, bytes)| bytes),
      Err(err) => {
        warn!(filename, error = %err, "could not retrieve file");
        None
      }
    }
  }

  /// Delete a single file (or directory tree) if present.
  ///
  /// Returns `Ok(false)` when there was nothing to delete.
  pub fn remove(&self, filename: &str, extension: Option<&str>, dir: &Directory) -> Result<bool> {
    let path = self.resolve(dir, filename, extension)?;

    match remove_entry(&path) {
      Ok(()) => {
        debug!(path = ?path, "removed file");
        Ok(true)
      }
      Err(e) if e.kind() == io::ErrorKind::NotFound => {
        debug!(path = ?path, "file does not exist, nothing to remove");
        Ok(false)
      }
      Err(source) => Err(StoreError::Delete { path, source }),
    }
  }

  /// Empty the directory, or delete the file if `dir` resolves to one.
  ///
  /// The directory node itself survives. A failed child deletion aborts the clear; children
  /// already removed stay removed.
  pub fn clear(&self, dir: &Directory) -> Result<Cleared> {
    let path = dir.resolve()?;

    let metadata = match fs::metadata(&path) {
      Ok(metadata) => metadata,
      Err(e) if e.kind() == io::ErrorKind::NotFound => {
        debug!(path = ?path, "path does not exist, nothing to clear");
        return Ok(Cleared::Missing);
      }
      Err(source) => return Err(StoreError::Delete { path, source }),
    };

    if !metadata.is_dir() {
      fs::remove_file(&path).map_err(|source| StoreError::Delete {
        path: path.clone(),
        source,
      })?;
      debug!(path = ?path, "cleared file");
      return Ok(Cleared::File);
    }

    let read_err = |source| StoreError::Read {
      path: path.clone(),
      source,
    };

    let mut removed = 0;
    for entry in fs::read_dir(&path).map_err(read_err)? {
      let entry = entry.map_err(read_err)?;
      let child = entry.path();
      trace!(path = ?child, "removing entry");

      let result = match entry.file_type() {
        Ok(file_type) if file_type.is_dir() => fs::remove_dir_all(&child),
        Ok(_) => fs::remove_file(&child),
        Err(e) => Err(e),
      };
      result.map_err(|source| StoreError::Delete { path: child, source })?;
      removed += 1;
    }

    debug!(path = ?path, removed, "cleared directory");
    Ok(Cleared::Entries(removed))
  }

  /// Whether anything exists at the file's path. Resolve failures read as `false`.
  pub fn file_exists(&self, filename: &str, extension: Option<&str>, dir: &Directory) -> bool {
    match self.resolve(dir, filename, extension) {
      Ok(path) => path.exists(),
      Err(err) => {
        warn!(filename, error = %err, "could not resolve file");
        false
      }
    }
  }

  pub fn directory_exists(&self, dir: &Directory) -> DirectoryStatus {
    let path = match dir.resolve() {
      Ok(path) => path,
      Err(err) => {
        warn!(directory = %dir, error = %err, "could not resolve directory");
        return DirectoryStatus::Missing;
      }
    };

    if !path.is_dir() {
      return DirectoryStatus::Missing;
    }

    match fs::read_dir(&path) {
      Ok(mut entries) => {
        if entries.next().is_none() {
          DirectoryStatus::Empty
        } else {
          DirectoryStatus::NonEmpty
        }
      }
      Err(e) => {
        debug!(path = ?path, error = %e, "directory is not listable");
        DirectoryStatus::Missing
      }
    }
  }

  /// Absolute paths of the direct children of `dir`, sorted.
  pub fn list_contents(&self, dir: &Directory) -> Result<Vec<PathBuf>> {
    let path = dir.resolve()?;
    let read_err = |source| StoreError::Read {
      path: path.clone(),
      source,
    };

    let mut contents = fs::read_dir(&path)
      .map_err(read_err)?
      .map(|entry| entry.map(|e| e.path()))
      .collect::<io::Result<Vec<_>>>()
      .map_err(read_err)?;
    contents.sort();

    Ok(contents)
  }

  /// Reads a file, mapping "not found" to `Ok(None)`.
  fn read_file(&self, filename: &str, extension: Option<&str>, dir: &Directory) -> Result<Option<(PathBuf, Vec<u8>)>> {
    let path = self.resolve(dir, filename, extension)?;

    match fs::read(&path) {
      Ok(bytes) => Ok(Some((path, bytes))),
      Err(e) if e.kind() == io::ErrorKind::NotFound => {
        debug!(path = ?path, "file does not exist");
        Ok(None)
      }
      Err(source) => Err(StoreError::Read { path, source }),
    }
  }
}

impl<E: Encoder, D> FileStore<E, D> {
  /// Encode `value` and write it, replacing any existing file. Returns the path written.
  pub fn store<T: Serialize + ?Sized>(
    &self,
    value: &T,
    dir: &Directory,
    filename: &str,
    extension: Option<&str>,
  ) -> Result<PathBuf> {
    let bytes = self
      .encoder
      .encode(value)
      .map_err(|e| StoreError::Encode(Box::new(e)))?;
    self.store_bytes(&bytes, dir, filename, extension)
  }
}

impl<E, D: Decoder> FileStore<E, D> {
  /// Read and decode a value.
  ///
  /// This is a soft-miss query: a missing file, an unreadable file and a file that fails to decode
  /// all yield `None`. Decode failures are logged but otherwise indistinguishable from a missing
  /// file; use [`try_retrieve`](Self::try_retrieve) to tell them apart.
  pub fn retrieve<T: DeserializeOwned>(&self, filename: &str, extension: Option<&str>, dir: &Directory) -> Option<T> {
    match self.try_retrieve(filename, extension, dir) {
      Ok(value) => value,
      Err(err) => {
        warn!(filename, error = %err, "could not retrieve file");
        None
      }
    }
  }

  /// Like [`retrieve`](Self::retrieve), but read and decode failures are returned as errors.
  ///
  /// Only a missing file yields `Ok(None)`.
  pub fn try_retrieve<T: DeserializeOwned>(
    &self,
    filename: &str,
    extension: Option<&str>,
    dir: &Directory,
  ) -> Result<Option<T>> {
    let Some((path, bytes)) = self.read_file(filename, extension, dir)? else {
      return Ok(None);
    };

    self
      .decoder
      .decode(&bytes)
      .map(Some)
      .map_err(|e| StoreError::Decode {
        path,
        source: Box::new(e),
      })
  }
}

/// Creates exactly one missing leaf folder; its parent must already exist.
fn ensure_folder(path: &Path) -> Result<()> {
  match fs::create_dir(path) {
    Ok(()) => {
      debug!(path = ?path, "created folder");
      Ok(())
    }
    Err(e) if e.kind() == io::ErrorKind::AlreadyExists && path.is_dir() => Ok(()),
    Err(source) => Err(StoreError::DirectoryCreation {
      path: path.to_path_buf(),
      source,
    }),
  }
}

/// Writes to a uniquely named sibling temp file, then persists it over `path`.
///
/// The rename replaces any existing file in one step, so readers see either the old content or
/// the new, and a crash mid-write leaves the previous file in place. The temp file is created
/// exclusively, so it never clobbers another stored file, and it is removed if the write fails.
fn write_replacing(dir: &Path, path: &Path, bytes: &[u8]) -> Result<()> {
  let write_err = |source| StoreError::Write {
    path: path.to_path_buf(),
    source,
  };

  let mut temp = tempfile::Builder::new()
    .prefix(".")
    .suffix(".tmp")
    .tempfile_in(dir)
    .map_err(write_err)?;
  temp.write_all(bytes).map_err(write_err)?;
  temp.persist(path).map_err(|e| write_err(e.error))?;

  Ok(())
}

/// Removes a file, a symlink, or a whole directory tree.
fn remove_entry(path: &Path) -> io::Result<()> {
  if fs::symlink_metadata(path)?.is_dir() {
    fs::remove_dir_all(path)
  } else {
    fs::remove_file(path)
  }
}
