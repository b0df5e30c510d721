use {
  super::BaseOperation,
  crate::{
    ext::FutureExtensions,
    fees::EmptyFeeParameters,
    validation::{check_authority, check_fee, AuthorityRole, Error},
  },
  dascore_primitives::{AccountId, Asset, Authority, ShareType},
  serde::{Deserialize, Serialize},
  std::collections::BTreeSet,
};

/// Replaces the active and/or owner keys of an account without touching
/// its options.
///
/// Like `account_update`, replacing the owner authority needs the owner
/// authority, anything else needs the active authority.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangePublicKeys {
  pub fee: Asset,
  pub account: AccountId,

  /// New active authority.
  pub active: Option<Authority>,

  /// New owner authority. When set, this operation requires the owner
  /// authority.
  pub owner: Option<Authority>,

  #[serde(default)]
  pub extensions: FutureExtensions,
}

impl ChangePublicKeys {
  pub fn new(
    account: AccountId,
    active: Option<Authority>,
    owner: Option<Authority>,
  ) -> Self {
    Self {
      fee: Asset::default(),
      account,
      active,
      owner,
      extensions: FutureExtensions::new(),
    }
  }

  pub fn is_owner_update(&self) -> bool {
    self.owner.is_some()
  }
}

impl BaseOperation for ChangePublicKeys {
  type FeeParameters = EmptyFeeParameters;

  const NAME: &'static str = "change_public_keys";

  fn fee(&self) -> &Asset {
    &self.fee
  }

  fn fee_payer(&self) -> AccountId {
    self.account
  }

  fn validate(&self) -> Result<(), Error> {
    check_fee(&self.fee)?;
    if self.active.is_none() && self.owner.is_none() {
      return Err(Error::NothingToChange);
    }
    if let Some(active) = &self.active {
      check_authority(active, AuthorityRole::Active)?;
    }
    if let Some(owner) = &self.owner {
      check_authority(owner, AuthorityRole::Owner)?;
    }
    Ok(())
  }

  fn calculate_fee(&self, _: &EmptyFeeParameters) -> ShareType {
    0
  }

  fn required_owner_authorities(&self, owner: &mut BTreeSet<AccountId>) {
    if self.is_owner_update() {
      owner.insert(self.account);
    }
  }

  fn required_active_authorities(&self, active: &mut BTreeSet<AccountId>) {
    if !self.is_owner_update() {
      active.insert(self.account);
    }
  }
}

/// Enables or disables rolling back the public keys of an account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetRollBackEnabled {
  pub fee: Asset,
  pub account: AccountId,
  pub roll_back_enabled: bool,

  #[serde(default)]
  pub extensions: FutureExtensions,
}

impl SetRollBackEnabled {
  pub fn new(account: AccountId, roll_back_enabled: bool) -> Self {
    Self {
      fee: Asset::default(),
      account,
      roll_back_enabled,
      extensions: FutureExtensions::new(),
    }
  }
}

impl BaseOperation for SetRollBackEnabled {
  type FeeParameters = EmptyFeeParameters;

  const NAME: &'static str = "set_roll_back_enabled";

  fn fee(&self) -> &Asset {
    &self.fee
  }

  fn fee_payer(&self) -> AccountId {
    self.account
  }

  fn validate(&self) -> Result<(), Error> {
    check_fee(&self.fee)
  }

  fn calculate_fee(&self, _: &EmptyFeeParameters) -> ShareType {
    0
  }
}

/// Restores the previous public keys of `account`, issued by `authority`.
/// The target must have roll back enabled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollBackPublicKeys {
  pub fee: Asset,
  pub authority: AccountId,
  pub account: AccountId,

  #[serde(default)]
  pub extensions: FutureExtensions,
}

impl RollBackPublicKeys {
  pub fn new(authority: AccountId, account: AccountId) -> Self {
    Self {
      fee: Asset::default(),
      authority,
      account,
      extensions: FutureExtensions::new(),
    }
  }
}

impl BaseOperation for RollBackPublicKeys {
  type FeeParameters = EmptyFeeParameters;

  const NAME: &'static str = "roll_back_public_keys";

  fn fee(&self) -> &Asset {
    &self.fee
  }

  fn fee_payer(&self) -> AccountId {
    self.authority
  }

  fn validate(&self) -> Result<(), Error> {
    check_fee(&self.fee)
  }

  fn calculate_fee(&self, _: &EmptyFeeParameters) -> ShareType {
    0
  }
}
