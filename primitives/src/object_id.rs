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
  #[error("Malformed object id '{0}', expected <space>.<type>.<instance>")]
  Malformed(String),

  #[error("Object id '{found}' is not in the {expected} id space")]
  WrongSpace { found: String, expected: &'static str },
}

/// Parses the `space.type.instance` textual form of a protocol object id
/// and returns the instance part if space and type match.
fn parse_instance(
  s: &str,
  space: u8,
  kind: u8,
  expected: &'static str,
) -> Result<u64, Error> {
  let mut parts = s.split('.');
  let (Some(sp), Some(ty), Some(instance), None) =
    (parts.next(), parts.next(), parts.next(), parts.next())
  else {
    return Err(Error::Malformed(s.to_owned()));
  };

  let sp: u8 = sp.parse().map_err(|_| Error::Malformed(s.to_owned()))?;
  let ty: u8 = ty.parse().map_err(|_| Error::Malformed(s.to_owned()))?;
  let instance: u64 = instance
    .parse()
    .map_err(|_| Error::Malformed(s.to_owned()))?;

  if sp != space || ty != kind {
    return Err(Error::WrongSpace {
      found: s.to_owned(),
      expected,
    });
  }

  Ok(instance)
}

macro_rules! object_id {
  ($(#[$meta:meta])* $name:ident, $space:literal, $kind:literal, $label:literal) => {
    $(#[$meta])*
    #[derive(Copy, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
    pub struct $name(u64);

    impl $name {
      pub const fn new(instance: u64) -> Self {
        Self(instance)
      }

      pub const fn instance(&self) -> u64 {
        self.0
      }
    }

    impl From<u64> for $name {
      fn from(instance: u64) -> Self {
        Self(instance)
      }
    }

    impl Display for $name {
      fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}", $space, $kind, self.0)
      }
    }

    impl Debug for $name {
      fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", $label, self)
      }
    }

    impl FromStr for $name {
      type Err = Error;

      fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_instance(s, $space, $kind, $label).map(Self)
      }
    }

    impl TryFrom<&str> for $name {
      type Error = Error;

      fn try_from(value: &str) -> Result<Self, Self::Error> {
        FromStr::from_str(value)
      }
    }

    /// Binary encodings carry only the instance number, the space and
    /// type are implied by the field position. Human readable encodings
    /// use the dotted `space.type.instance` form.
    impl Serialize for $name {
      fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        if s.is_human_readable() {
          s.collect_str(self)
        } else {
          s.serialize_u64(self.0)
        }
      }
    }

    impl<'de> Deserialize<'de> for $name {
      fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        if d.is_human_readable() {
          String::deserialize(d)?.parse().map_err(D::Error::custom)
        } else {
          u64::deserialize(d).map(Self)
        }
      }
    }
  };
}

object_id!(
  /// Identifies an account object on chain (`1.2.N`).
  AccountId,
  1,
  2,
  "account"
);

object_id!(
  /// Identifies an asset object on chain (`1.3.N`).
  AssetId,
  1,
  3,
  "asset"
);

impl AccountId {
  /// Account controlled by the active committee members.
  pub const COMMITTEE_ACCOUNT: AccountId = AccountId(0);
  /// Account controlled by the active witnesses.
  pub const WITNESS_ACCOUNT: AccountId = AccountId(1);
  /// Committee account with a lower approval threshold.
  pub const RELAXED_COMMITTEE_ACCOUNT: AccountId = AccountId(2);
  /// Account whose authority can never be satisfied.
  pub const NULL_ACCOUNT: AccountId = AccountId(3);
  /// Authority satisfied by any signature, used for temporary balances
  /// within a single transaction.
  pub const TEMP_ACCOUNT: AccountId = AccountId(4);
  /// Voting sentinel meaning "this account votes for itself".
  pub const PROXY_TO_SELF_ACCOUNT: AccountId = AccountId(5);
}

impl AssetId {
  pub const CORE_ASSET: AssetId = AssetId(0);
}
