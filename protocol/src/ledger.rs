use {
  crate::kinds::{AccountKind, ChainAuthorityKind},
  dascore_primitives::{AccountId, AssetId},
  serde::{Deserialize, Serialize},
  std::collections::HashMap,
};

/// What the precondition checks need to know about an account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountRecord {
  pub name: String,
  pub kind: AccountKind,
  #[serde(default)]
  pub lifetime_member: bool,
  #[serde(default)]
  pub roll_back_enabled: bool,
  /// For vaults, the wallet this vault is tethered to.
  #[serde(default)]
  pub tethered_to: Option<AccountId>,
}

impl AccountRecord {
  pub fn new(name: impl Into<String>, kind: AccountKind) -> Self {
    Self {
      name: name.into(),
      kind,
      lifetime_member: false,
      roll_back_enabled: false,
      tethered_to: None,
    }
  }
}

/// Read only view of chain state, consulted before an operation is
/// applied.
pub trait Ledger {
  fn account(&self, id: &AccountId) -> Option<AccountRecord>;
  fn account_by_name(&self, name: &str) -> Option<AccountId>;
  fn asset_issuer(&self, asset: &AssetId) -> Option<AccountId>;
  fn chain_authority(&self, kind: ChainAuthorityKind) -> Option<AccountId>;
  fn root_authority(&self) -> AccountId;
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InMemoryLedger {
  accounts: HashMap<AccountId, AccountRecord>,
  assets: HashMap<AssetId, AccountId>,
  authorities: HashMap<ChainAuthorityKind, AccountId>,
  root: AccountId,
}

impl InMemoryLedger {
  pub fn with_root(root: AccountId) -> Self {
    Self {
      root,
      ..Default::default()
    }
  }

  pub fn insert_account(&mut self, id: AccountId, record: AccountRecord) {
    self.accounts.insert(id, record);
  }

  pub fn insert_asset(&mut self, asset: AssetId, issuer: AccountId) {
    self.assets.insert(asset, issuer);
  }

  pub fn set_chain_authority(
    &mut self,
    kind: ChainAuthorityKind,
    account: AccountId,
  ) {
    self.authorities.insert(kind, account);
  }

  pub fn iter(&self) -> impl Iterator<Item = (&AccountId, &AccountRecord)> {
    self.accounts.iter()
  }
}

impl Ledger for InMemoryLedger {
  fn account(&self, id: &AccountId) -> Option<AccountRecord> {
    self.accounts.get(id).cloned()
  }

  fn account_by_name(&self, name: &str) -> Option<AccountId> {
    self
      .accounts
      .iter()
      .find(|(_, record)| record.name == name)
      .map(|(id, _)| *id)
  }

  fn asset_issuer(&self, asset: &AssetId) -> Option<AccountId> {
    self.assets.get(asset).copied()
  }

  fn chain_authority(&self, kind: ChainAuthorityKind) -> Option<AccountId> {
    self.authorities.get(&kind).copied()
  }

  fn root_authority(&self) -> AccountId {
    self.root
  }
}
