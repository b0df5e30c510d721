use {
  crate::ToBase58String,
  serde::{de::Error as _, Deserialize, Deserializer, Serialize, Serializer},
  std::{
    fmt::{Debug, Display},
    str::FromStr,
  },
};

/// An ed25519 public key as it appears in authorities and account options.
///
/// The key is stored as its compressed 32 byte representation, the
/// protocol never needs to do curve arithmetic on it, it only compares
/// and orders keys when building authorities.
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PublicKey([u8; 32]);

impl PublicKey {
  pub const fn from_bytes(bytes: [u8; 32]) -> Self {
    Self(bytes)
  }

  pub fn as_bytes(&self) -> &[u8; 32] {
    &self.0
  }
}

impl AsRef<[u8]> for PublicKey {
  fn as_ref(&self) -> &[u8] {
    &self.0
  }
}

impl From<ed25519_dalek::PublicKey> for PublicKey {
  fn from(p: ed25519_dalek::PublicKey) -> Self {
    Self(*p.as_bytes())
  }
}

impl TryFrom<PublicKey> for ed25519_dalek::PublicKey {
  type Error = ed25519_dalek::SignatureError;

  fn try_from(value: PublicKey) -> Result<Self, Self::Error> {
    ed25519_dalek::PublicKey::from_bytes(&value.0)
  }
}

impl Display for PublicKey {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.to_b58())
  }
}

impl Debug for PublicKey {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "pubkey({})", self.to_b58())
  }
}

impl FromStr for PublicKey {
  type Err = bs58::decode::Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let mut bytes = [0u8; 32];
    let len = bs58::decode(s).into(&mut bytes)?;
    if len != bytes.len() {
      return Err(bs58::decode::Error::BufferTooSmall);
    }
    Ok(Self(bytes))
  }
}

impl Serialize for PublicKey {
  fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
    if s.is_human_readable() {
      s.collect_str(self)
    } else {
      self.0.serialize(s)
    }
  }
}

impl<'de> Deserialize<'de> for PublicKey {
  fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
    if d.is_human_readable() {
      String::deserialize(d)?.parse().map_err(D::Error::custom)
    } else {
      <[u8; 32]>::deserialize(d).map(Self)
    }
  }
}

/// Legacy 20 byte key address.
///
/// Authorities still carry a slot for address based auths for wire
/// compatibility, but operations that install authorities reject any
/// authority that uses it.
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KeyAddress([u8; 20]);

impl KeyAddress {
  pub const fn from_bytes(bytes: [u8; 20]) -> Self {
    Self(bytes)
  }
}

impl Debug for KeyAddress {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "keyaddr({})", hex::encode(self.0))
  }
}

impl Serialize for KeyAddress {
  fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
    if s.is_human_readable() {
      s.serialize_str(&hex::encode(self.0))
    } else {
      self.0.serialize(s)
    }
  }
}

impl<'de> Deserialize<'de> for KeyAddress {
  fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
    if d.is_human_readable() {
      let mut bytes = [0u8; 20];
      hex::decode_to_slice(String::deserialize(d)?, &mut bytes)
        .map_err(D::Error::custom)?;
      Ok(Self(bytes))
    } else {
      <[u8; 20]>::deserialize(d).map(Self)
    }
  }
}
