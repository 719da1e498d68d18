//! Pluggable encoding for typed values.
//!
//! [`FileStore`](crate::store::FileStore) only needs two capabilities: turn a value into bytes and
//! turn bytes back into a value. [`JsonCodec`] provides both and is the default.

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Turns a serializable value into the bytes written to disk.
pub trait Encoder {
  type Error: std::error::Error + Send + Sync + 'static;

  fn encode<T: Serialize + ?Sized>(&self, value: &T) -> Result<Vec<u8>, Self::Error>;
}

/// Turns bytes read from disk back into a value of the requested shape.
pub trait Decoder {
  type Error: std::error::Error + Send + Sync + 'static;

  fn decode<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T, Self::Error>;
}

/// JSON text encoding backed by `serde_json`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JsonCodec {
  pretty: bool,
}

impl JsonCodec {
  /// Compact single-line output.
  pub fn new() -> Self {
    Self { pretty: false }
  }

  /// Indented, human-readable output.
  pub fn pretty() -> Self {
    Self { pretty: true }
  }

  pub fn is_pretty(&self) -> bool {
    self.pretty
  }
}

impl Encoder for JsonCodec {
  type Error = serde_json::Error;

  fn encode<T: Serialize + ?Sized>(&self, value: &T) -> Result<Vec<u8>, Self::Error> {
    if self.pretty {
      serde_json::to_vec_pretty(value)
    } else {
      serde_json::to_vec(value)
    }
  }
}

impl Decoder for JsonCodec {
  type Error = serde_json::Error;

  fn decode<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T, Self::Error> {
    serde_json::from_slice(bytes)
  }
}
