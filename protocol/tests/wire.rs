use {
  common::{account_create, all_operations, key_authority, ALICE, BOB},
  dascore_primitives::{AccountId, Asset, Authority},
  dascore_protocol::{
    codec,
    AccountListing,
    AccountOptions,
    AccountTransfer,
    AccountUpdate,
    AccountWhitelist,
    FutureExtension,
    Operation,
  },
  serde::Serialize,
};

mod common;

#[test]
fn every_operation_survives_the_wire() -> anyhow::Result<()> {
  for op in all_operations() {
    let bytes = op.to_bytes()?;
    assert_eq!(codec::packed_size(&op)?, bytes.len());
    assert_eq!(Operation::from_bytes(&bytes)?, op, "{}", op.name());
  }
  Ok(())
}

#[test]
fn every_operation_survives_json() -> anyhow::Result<()> {
  for op in all_operations() {
    let json = serde_json::to_string(&op)?;
    assert!(json.contains(op.name()), "{json}");
    let decoded: Operation = serde_json::from_str(&json)?;
    assert_eq!(decoded, op);
  }
  Ok(())
}

#[test]
fn json_uses_readable_identifiers() -> anyhow::Result<()> {
  let op = Operation::from(AccountTransfer::new(ALICE, BOB));
  let json = serde_json::to_value(&op)?;
  let transfer = &json["account_transfer"];
  assert_eq!(transfer["account_id"], "1.2.200");
  assert_eq!(transfer["new_owner"], "1.2.201");
  assert_eq!(transfer["fee"]["asset_id"], "1.3.0");
  Ok(())
}

#[test]
fn digest_identifies_content() -> anyhow::Result<()> {
  let op = Operation::from(account_create("dave"));
  assert_eq!(op.digest()?, op.clone().digest()?);

  let decoded = Operation::from_bytes(&op.to_bytes()?)?;
  assert_eq!(decoded.digest()?, op.digest()?);

  let other = Operation::from(account_create("erin"));
  assert_ne!(other.digest()?, op.digest()?);
  Ok(())
}

#[test]
fn truncated_input_is_rejected() -> anyhow::Result<()> {
  let bytes = Operation::from(AccountTransfer::new(ALICE, BOB)).to_bytes()?;
  let truncated = &bytes[..bytes.len() - 1];
  assert!(matches!(
    Operation::from_bytes(truncated),
    Err(codec::Error::Decode(_))
  ));
  Ok(())
}

/// `account_transfer` as written before its extension slot existed.
#[derive(Serialize)]
struct TransferWithoutExtensions {
  fee: Asset,
  account_id: AccountId,
  new_owner: AccountId,
}

/// `account_update` as written before its extension envelope existed.
#[derive(Serialize)]
struct UpdateWithoutExtensions {
  fee: Asset,
  account: AccountId,
  owner: Option<Authority>,
  active: Option<Authority>,
  new_options: Option<AccountOptions>,
}

#[test]
fn missing_trailing_extensions_decode_as_empty() -> anyhow::Result<()> {
  let old = TransferWithoutExtensions {
    fee: Asset::core(5),
    account_id: ALICE,
    new_owner: BOB,
  };
  let decoded: AccountTransfer = codec::from_bytes(&codec::to_bytes(&old)?)?;
  let mut expected = AccountTransfer::new(ALICE, BOB);
  expected.fee = Asset::core(5);
  assert_eq!(decoded, expected);
  assert!(decoded.extensions.is_empty());

  let active = key_authority();
  let old = UpdateWithoutExtensions {
    fee: Asset::default(),
    account: ALICE,
    owner: None,
    active: Some(active.clone()),
    new_options: None,
  };
  let decoded: AccountUpdate = codec::from_bytes(&codec::to_bytes(&old)?)?;
  assert_eq!(decoded, AccountUpdate {
    active: Some(active),
    ..AccountUpdate::new(ALICE)
  });
  assert!(decoded.extensions.is_empty());
  Ok(())
}

/// Generic extension slot of a newer protocol version.
#[derive(Serialize)]
#[serde(rename_all = "snake_case")]
enum NewerExtension {
  Void,
  Reason(String),
}

#[derive(Serialize)]
struct NewerWhitelist {
  fee: Asset,
  authorizing_account: AccountId,
  account_to_list: AccountId,
  new_listing: u8,
  extensions: Vec<NewerExtension>,
}

/// Mirrors the leading variants of [`Operation`], so that tags line up.
#[derive(Serialize)]
#[serde(rename_all = "snake_case")]
enum NewerOperation {
  AccountCreate(()),
  AccountUpdate(()),
  AccountWhitelist(NewerWhitelist),
}

#[test]
fn operations_from_newer_writers_decode() -> anyhow::Result<()> {
  let newer = NewerOperation::AccountWhitelist(NewerWhitelist {
    fee: Asset::default(),
    authorizing_account: ALICE,
    account_to_list: BOB,
    new_listing: AccountListing::BlackListed.bits(),
    extensions: vec![NewerExtension::Reason("spam".into())],
  });
  let expected = Operation::from(AccountWhitelist::new(
    ALICE,
    BOB,
    AccountListing::BlackListed,
  ));

  let decoded = Operation::from_bytes(&codec::to_bytes(&newer)?)?;
  assert_eq!(decoded, expected);

  let decoded: Operation = serde_json::from_str(&serde_json::to_string(&newer)?)?;
  assert_eq!(decoded, expected);

  // known entries next to unknown ones are kept
  let newer = NewerOperation::AccountWhitelist(NewerWhitelist {
    fee: Asset::default(),
    authorizing_account: ALICE,
    account_to_list: BOB,
    new_listing: AccountListing::BlackListed.bits(),
    extensions: vec![NewerExtension::Void, NewerExtension::Reason("x".into())],
  });
  let Operation::AccountWhitelist(decoded) =
    Operation::from_bytes(&codec::to_bytes(&newer)?)?
  else {
    panic!("decoded into another operation");
  };
  assert_eq!(
    decoded.extensions.iter().copied().collect::<Vec<_>>(),
    vec![FutureExtension::Void]
  );
  Ok(())
}
