//! filehelper-lib: typed file storage in well-known user directories
//!
//! This crate maps a logical location onto the filesystem and reads and writes values there:
//! - `Directory`: a storage root (documents, application support, caches, or a custom base)
//!   plus an optional single-segment folder
//! - `FileStore`: store, retrieve, remove, clear, existence checks and listing
//! - `Encoder` / `Decoder`: the pluggable value encoding, JSON by default

pub mod codec;
pub mod consts;
pub mod directory;
pub mod error;
pub mod platform;
pub mod store;

pub use codec::{Decoder, Encoder, JsonCodec};
pub use directory::{Directory, Root};
pub use error::{Result, StoreError};
pub use store::{Cleared, DirectoryStatus, FileStore};
