//! Wire encoding of operations.
//!
//! Structs are written as positional arrays, so the order in which fields
//! are declared is the order in which they appear on the wire and must
//! never change. Optional fields are written as nil or as their value.

use {
  serde::{de::DeserializeOwned, Serialize},
  std::io::Write,
  thiserror::Error,
};

#[derive(Debug, Error)]
pub enum Error {
  #[error("Encoding failed: {0}")]
  Encode(#[from] rmp_serde::encode::Error),

  #[error("Decoding failed: {0}")]
  Decode(#[from] rmp_serde::decode::Error),
}

pub fn to_bytes<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>, Error> {
  Ok(rmp_serde::to_vec(value)?)
}

pub fn from_bytes<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, Error> {
  Ok(rmp_serde::from_slice(bytes)?)
}

/// Length of the wire encoding of `value`, without allocating it.
pub fn packed_size<T: Serialize + ?Sized>(value: &T) -> Result<usize, Error> {
  let mut counter = ByteCounter(0);
  rmp_serde::encode::write(&mut counter, value)?;
  Ok(counter.0)
}

struct ByteCounter(usize);

impl Write for ByteCounter {
  fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
    self.0 += buf.len();
    Ok(buf.len())
  }

  fn flush(&mut self) -> std::io::Result<()> {
    Ok(())
  }
}
