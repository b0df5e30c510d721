//! Forward compatible extension envelopes.
//!
//! An extension is a group of optional fields. In binary encodings it is
//! written as a map from a small field index to the field value, and only
//! populated fields are written, so an empty extension costs one byte and
//! old decoders keep working when new fields are appended. Human readable
//! encodings use field names instead of indices.
//!
//! Field indices are append only. An index, once assigned, is never
//! removed or given a different meaning.

use {
  dascore_primitives::{BuybackAccountOptions, SpecialAuthority},
  serde::{Deserialize, Serialize},
  std::collections::BTreeSet,
};

/// Placeholder value for reserved extension slots.
#[derive(
  Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
pub struct Void;

/// Content of the generic extension slot carried by every operation.
///
/// No extension is defined yet, the single variant only reserves the
/// encoding.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  PartialOrd,
  Ord,
  Serialize,
  Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum FutureExtension {
  Void,
}

/// The generic extension slot.
///
/// Writers newer than this decoder may put extensions here that it does
/// not know. Those decode as absent, only known entries are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FutureExtensions(BTreeSet<FutureExtension>);

impl FutureExtensions {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn insert(&mut self, extension: FutureExtension) -> bool {
    self.0.insert(extension)
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  pub fn iter(&self) -> impl Iterator<Item = &FutureExtension> {
    self.0.iter()
  }
}

impl Serialize for FutureExtensions {
  fn serialize<S: serde::Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
    self.0.serialize(s)
  }
}

impl<'de> Deserialize<'de> for FutureExtensions {
  fn deserialize<D: serde::Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
    struct SlotVisitor;

    impl<'de> serde::de::Visitor<'de> for SlotVisitor {
      type Value = FutureExtensions;

      fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "a sequence of extensions")
      }

      fn visit_seq<A: serde::de::SeqAccess<'de>>(
        self,
        mut seq: A,
      ) -> Result<FutureExtensions, A::Error> {
        let mut output = FutureExtensions::new();
        while let Some(entry) = seq.next_element::<MaybeKnown>()? {
          if let MaybeKnown(Some(extension)) = entry {
            output.insert(extension);
          }
        }
        Ok(output)
      }
    }

    d.deserialize_seq(SlotVisitor)
  }
}

/// One entry of the generic slot, `None` when its tag is not known here.
struct MaybeKnown(Option<FutureExtension>);

impl MaybeKnown {
  fn from_key(key: FieldKey) -> Self {
    match key {
      FieldKey::Index(0) => MaybeKnown(Some(FutureExtension::Void)),
      FieldKey::Name(name) if name == "void" => {
        MaybeKnown(Some(FutureExtension::Void))
      }
      _ => MaybeKnown(None),
    }
  }
}

impl<'de> Deserialize<'de> for MaybeKnown {
  fn deserialize<D: serde::Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
    struct EntryVisitor;

    impl<'de> serde::de::Visitor<'de> for EntryVisitor {
      type Value = MaybeKnown;

      fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "an extension tag or a tagged extension value")
      }

      // unit variants are written as their bare tag
      fn visit_u64<E: serde::de::Error>(self, v: u64) -> Result<MaybeKnown, E> {
        Ok(MaybeKnown::from_key(FieldKey::Index(v)))
      }

      fn visit_i64<E: serde::de::Error>(self, v: i64) -> Result<MaybeKnown, E> {
        Ok(match u64::try_from(v) {
          Ok(v) => MaybeKnown::from_key(FieldKey::Index(v)),
          Err(_) => MaybeKnown(None),
        })
      }

      fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<MaybeKnown, E> {
        Ok(MaybeKnown::from_key(FieldKey::Name(v.to_owned())))
      }

      // variants with content are written as a single entry map
      fn visit_map<A: serde::de::MapAccess<'de>>(
        self,
        mut map: A,
      ) -> Result<MaybeKnown, A::Error> {
        let mut output = MaybeKnown(None);
        while let Some(key) = map.next_key::<FieldKey>()? {
          map.next_value::<serde::de::IgnoredAny>()?;
          if output.0.is_none() {
            output = MaybeKnown::from_key(key);
          }
        }
        Ok(output)
      }

      fn visit_seq<A: serde::de::SeqAccess<'de>>(
        self,
        mut seq: A,
      ) -> Result<MaybeKnown, A::Error> {
        let output = match seq.next_element::<FieldKey>()? {
          Some(key) => MaybeKnown::from_key(key),
          None => MaybeKnown(None),
        };
        while seq.next_element::<serde::de::IgnoredAny>()?.is_some() {}
        Ok(output)
      }
    }

    d.deserialize_any(EntryVisitor)
  }
}

/// Declares an extension struct whose fields are all optional and
/// implements its sparse encoding.
macro_rules! extension {
  (
    $(#[$meta:meta])*
    pub struct $name:ident {
      $(
        $(#[$fmeta:meta])*
        $index:literal => $field:ident: $ty:ty,
      )*
    }
  ) => {
    $(#[$meta])*
    #[derive(Debug, Clone, Default, PartialEq, Eq)]
    pub struct $name {
      $(
        $(#[$fmeta])*
        pub $field: Option<$ty>,
      )*
    }

    impl $name {
      /// True when no field is populated. Such an extension encodes
      /// exactly like an extension type with no fields at all.
      pub fn is_empty(&self) -> bool {
        true $(&& self.$field.is_none())*
      }
    }

    impl serde::Serialize for $name {
      fn serialize<S: serde::Serializer>(
        &self,
        s: S,
      ) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let human_readable = s.is_human_readable();
        let len = 0 $(+ usize::from(self.$field.is_some()))*;
        let mut map = s.serialize_map(Some(len))?;
        $(
          if let Some(value) = &self.$field {
            if human_readable {
              map.serialize_entry(stringify!($field), value)?;
            } else {
              map.serialize_entry(&($index as u8), value)?;
            }
          }
        )*
        map.end()
      }
    }

    impl<'de> serde::Deserialize<'de> for $name {
      fn deserialize<D: serde::Deserializer<'de>>(
        d: D,
      ) -> Result<Self, D::Error> {
        struct FieldsVisitor;

        impl<'de> serde::de::Visitor<'de> for FieldsVisitor {
          type Value = $name;

          fn expecting(
            &self,
            f: &mut std::fmt::Formatter<'_>,
          ) -> std::fmt::Result {
            write!(f, "a map of {} fields", stringify!($name))
          }

          fn visit_map<A: serde::de::MapAccess<'de>>(
            self,
            mut map: A,
          ) -> Result<$name, A::Error> {
            use serde::de::Error as _;

            let mut output = $name::default();
            while let Some(key) = map.next_key::<$crate::ext::FieldKey>()? {
              let index = match key {
                $crate::ext::FieldKey::Index(i) => Some(i),
                $crate::ext::FieldKey::Name(n) => {
                  $(if n == stringify!($field) { Some($index) } else)* { None }
                }
              };
              match index {
                $(
                  Some($index) => {
                    if output.$field.is_some() {
                      return Err(A::Error::duplicate_field(stringify!($field)));
                    }
                    output.$field = Some(map.next_value()?);
                  }
                )*
                // fields added after this decoder was written
                _ => {
                  map.next_value::<serde::de::IgnoredAny>()?;
                }
              }
            }
            Ok(output)
          }
        }

        d.deserialize_map(FieldsVisitor)
      }
    }
  };
}

/// Key of an extension field, numeric in binary encodings and the field
/// name in human readable ones.
pub(crate) enum FieldKey {
  Index(u64),
  Name(String),
}

impl<'de> Deserialize<'de> for FieldKey {
  fn deserialize<D: serde::Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
    struct KeyVisitor;

    impl<'de> serde::de::Visitor<'de> for KeyVisitor {
      type Value = FieldKey;

      fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "an extension field index or name")
      }

      fn visit_u64<E: serde::de::Error>(self, v: u64) -> Result<FieldKey, E> {
        Ok(FieldKey::Index(v))
      }

      fn visit_i64<E: serde::de::Error>(self, v: i64) -> Result<FieldKey, E> {
        u64::try_from(v)
          .map(FieldKey::Index)
          .map_err(|_| E::custom(format!("negative extension index {v}")))
      }

      fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<FieldKey, E> {
        Ok(FieldKey::Name(v.to_owned()))
      }
    }

    d.deserialize_any(KeyVisitor)
  }
}

extension! {
  /// Optional extras of `account_create`.
  pub struct AccountCreateExt {
    0 => null_ext: Void,
    1 => owner_special_authority: SpecialAuthority,
    2 => active_special_authority: SpecialAuthority,
    /// Turns the new account into a buyback account. Its issuer must
    /// co-sign the operation.
    3 => buyback_options: BuybackAccountOptions,
  }
}

extension! {
  /// Optional extras of `account_update`.
  pub struct AccountUpdateExt {
    0 => null_ext: Void,
    /// Setting this makes the update an owner update.
    1 => owner_special_authority: SpecialAuthority,
    2 => active_special_authority: SpecialAuthority,
  }
}

#[cfg(test)]
mod tests {
  use {
    super::*,
    dascore_primitives::{AccountId, AssetId},
    serde::ser::{SerializeMap, Serializer},
    std::collections::BTreeMap,
  };

  fn top_holders() -> SpecialAuthority {
    SpecialAuthority::TopHolders {
      asset: AssetId::new(7),
      num_top_holders: 5,
    }
  }

  #[test]
  fn empty_extension_is_an_empty_map() -> anyhow::Result<()> {
    let ext = AccountCreateExt::default();
    assert!(ext.is_empty());
    assert_eq!(
      rmp_serde::to_vec(&ext)?,
      rmp_serde::to_vec(&BTreeMap::<u8, Void>::new())?
    );
    assert_eq!(serde_json::to_string(&ext)?, "{}");
    Ok(())
  }

  #[test]
  fn only_populated_fields_are_written() -> anyhow::Result<()> {
    let ext = AccountUpdateExt {
      active_special_authority: Some(top_holders()),
      ..Default::default()
    };

    let mut expected = BTreeMap::new();
    expected.insert(2u8, top_holders());
    assert_eq!(rmp_serde::to_vec(&ext)?, rmp_serde::to_vec(&expected)?);

    let json = serde_json::to_value(&ext)?;
    assert!(json.get("active_special_authority").is_some());
    assert!(json.get("owner_special_authority").is_none());
    Ok(())
  }

  /// A newer writer that knows about a field index this decoder
  /// does not.
  struct NewerWriter;

  impl Serialize for NewerWriter {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
      let mut map = s.serialize_map(Some(2))?;
      map.serialize_entry(&1u8, &top_holders())?;
      map.serialize_entry(&42u8, &("future", 1u32, [1u8, 2, 3]))?;
      map.end()
    }
  }

  #[test]
  fn unknown_fields_decode_as_absent() -> anyhow::Result<()> {
    let bytes = rmp_serde::to_vec(&NewerWriter)?;
    let ext: AccountUpdateExt = rmp_serde::from_slice(&bytes)?;
    assert_eq!(ext, AccountUpdateExt {
      owner_special_authority: Some(top_holders()),
      ..Default::default()
    });

    let ext: AccountCreateExt =
      serde_json::from_str(r#"{"null_ext": null, "shiny_new_field": [1, 2]}"#)?;
    assert_eq!(ext, AccountCreateExt {
      null_ext: Some(Void),
      ..Default::default()
    });
    Ok(())
  }

  /// The generic slot as written by a version that defines more
  /// extensions than this one.
  #[derive(Serialize)]
  #[serde(rename_all = "snake_case")]
  enum NewerSlot {
    Void,
    Memo(String),
    Limits { max: u32, min: u32 },
  }

  #[test]
  fn unknown_generic_extensions_decode_as_absent() -> anyhow::Result<()> {
    let written = vec![
      NewerSlot::Memo("hello".into()),
      NewerSlot::Void,
      NewerSlot::Limits { max: 9, min: 1 },
    ];

    let mut expected = FutureExtensions::new();
    expected.insert(FutureExtension::Void);

    let slot: FutureExtensions =
      rmp_serde::from_slice(&rmp_serde::to_vec(&written)?)?;
    assert_eq!(slot, expected);

    let slot: FutureExtensions =
      serde_json::from_str(&serde_json::to_string(&written)?)?;
    assert_eq!(slot, expected);

    let only_unknown = vec![NewerSlot::Memo("x".into())];
    let slot: FutureExtensions =
      rmp_serde::from_slice(&rmp_serde::to_vec(&only_unknown)?)?;
    assert!(slot.is_empty());
    Ok(())
  }

  #[test]
  fn known_generic_extensions_roundtrip() -> anyhow::Result<()> {
    let mut slot = FutureExtensions::new();
    slot.insert(FutureExtension::Void);

    let decoded: FutureExtensions =
      rmp_serde::from_slice(&rmp_serde::to_vec(&slot)?)?;
    assert_eq!(decoded, slot);

    let decoded: FutureExtensions =
      serde_json::from_str(&serde_json::to_string(&slot)?)?;
    assert_eq!(decoded, slot);
    Ok(())
  }

  #[test]
  fn roundtrip_all_fields() -> anyhow::Result<()> {
    let ext = AccountCreateExt {
      null_ext: Some(Void),
      owner_special_authority: Some(top_holders()),
      active_special_authority: Some(SpecialAuthority::NoSpecialAuthority),
      buyback_options: Some(BuybackAccountOptions {
        asset_to_buy: AssetId::new(9),
        asset_to_buy_issuer: AccountId::new(30),
        markets: [AssetId::CORE_ASSET].into_iter().collect(),
      }),
    };

    let decoded: AccountCreateExt =
      rmp_serde::from_slice(&rmp_serde::to_vec(&ext)?)?;
    assert_eq!(decoded, ext);

    let decoded: AccountCreateExt =
      serde_json::from_str(&serde_json::to_string(&ext)?)?;
    assert_eq!(decoded, ext);
    Ok(())
  }
}
