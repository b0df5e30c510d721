use {
  serde::{de::Error as _, Deserialize, Deserializer, Serialize, Serializer},
  std::{
    fmt::{Debug, Display},
    str::FromStr,
  },
  thiserror::Error,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
  #[error("Malformed vote id '{0}', expected <type>:<instance>")]
  Malformed(String),

  #[error("Unknown vote type {0}")]
  UnknownType(u8),

  #[error("Vote instance {0} does not fit in 24 bits")]
  InstanceOutOfRange(u32),
}

/// The kind of object a vote is cast for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum VoteType {
  Committee = 0,
  Witness = 1,
  Worker = 2,
}

impl TryFrom<u8> for VoteType {
  type Error = Error;

  fn try_from(value: u8) -> Result<Self, Self::Error> {
    match value {
      0 => Ok(VoteType::Committee),
      1 => Ok(VoteType::Witness),
      2 => Ok(VoteType::Worker),
      other => Err(Error::UnknownType(other)),
    }
  }
}

/// A vote for a committee member, witness or worker.
///
/// Packed into a single `u32`: the low 8 bits hold the [`VoteType`] and
/// the upper 24 bits hold the instance. Sets of votes are ordered by the
/// packed value.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VoteId(u32);

impl VoteId {
  pub const MAX_INSTANCE: u32 = 0x00ff_ffff;

  pub fn new(kind: VoteType, instance: u32) -> Result<Self, Error> {
    if instance > Self::MAX_INSTANCE {
      return Err(Error::InstanceOutOfRange(instance));
    }
    Ok(Self((instance << 8) | kind as u32))
  }

  /// Packed content. Raw values with an unknown type tag may appear on
  /// the wire, they are carried but never counted as witness or
  /// committee votes.
  pub const fn content(&self) -> u32 {
    self.0
  }

  pub fn kind(&self) -> Result<VoteType, Error> {
    VoteType::try_from((self.0 & 0xff) as u8)
  }

  pub const fn instance(&self) -> u32 {
    self.0 >> 8
  }
}

impl Display for VoteId {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}:{}", self.0 & 0xff, self.instance())
  }
}

impl Debug for VoteId {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "vote({self})")
  }
}

impl FromStr for VoteId {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let (kind, instance) = s
      .split_once(':')
      .ok_or_else(|| Error::Malformed(s.to_owned()))?;
    let kind: u8 = kind.parse().map_err(|_| Error::Malformed(s.to_owned()))?;
    let instance: u32 = instance
      .parse()
      .map_err(|_| Error::Malformed(s.to_owned()))?;
    if instance > Self::MAX_INSTANCE {
      return Err(Error::InstanceOutOfRange(instance));
    }
    // unknown type tags are kept as is, like their binary form
    Ok(Self((instance << 8) | u32::from(kind)))
  }
}

impl Serialize for VoteId {
  fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
    if s.is_human_readable() {
      s.collect_str(self)
    } else {
      s.serialize_u32(self.0)
    }
  }
}

impl<'de> Deserialize<'de> for VoteId {
  fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
    if d.is_human_readable() {
      String::deserialize(d)?.parse().map_err(D::Error::custom)
    } else {
      u32::deserialize(d).map(Self)
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn packing() -> anyhow::Result<()> {
    let vote = VoteId::new(VoteType::Witness, 7)?;
    assert_eq!(vote.content(), (7 << 8) | 1);
    assert_eq!(vote.kind()?, VoteType::Witness);
    assert_eq!(vote.instance(), 7);
    assert_eq!(vote.to_string(), "1:7");
    assert_eq!("1:7".parse::<VoteId>()?, vote);
    Ok(())
  }

  #[test]
  fn rejects_bad_input() {
    assert_eq!(
      VoteId::new(VoteType::Worker, 1 << 24),
      Err(Error::InstanceOutOfRange(1 << 24))
    );
    assert_eq!(
      "1:16777216".parse::<VoteId>(),
      Err(Error::InstanceOutOfRange(1 << 24))
    );
    assert!(matches!("1-7".parse::<VoteId>(), Err(Error::Malformed(_))));
    assert!(matches!("256:1".parse::<VoteId>(), Err(Error::Malformed(_))));
  }

  #[test]
  fn unknown_types_survive_text_form() -> anyhow::Result<()> {
    let raw = (5u32 << 8) | 3;
    let vote: VoteId = rmp_serde::from_slice(&rmp_serde::to_vec(&raw)?)?;
    assert_eq!(vote.kind(), Err(Error::UnknownType(3)));
    assert_eq!(vote.to_string(), "3:5");

    let json = serde_json::to_string(&vote)?;
    let back: VoteId = serde_json::from_str(&json)?;
    assert_eq!(back, vote);
    assert_eq!(rmp_serde::to_vec(&back)?, rmp_serde::to_vec(&raw)?);
    Ok(())
  }
}
