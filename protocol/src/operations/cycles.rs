use {
  super::BaseOperation,
  crate::{
    ext::FutureExtensions,
    fees::EmptyFeeParameters,
    validation::{check_fee, Error},
  },
  dascore_primitives::{AccountId, Asset, ShareType},
  serde::{Deserialize, Serialize},
};

/// Retired operation. It keeps its tag and layout so that historical
/// blocks still decode, but it never passes validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpgradeAccountCycles {
  pub fee: Asset,
  pub account: AccountId,
  pub description: String,

  #[serde(default)]
  pub extensions: FutureExtensions,
}

impl UpgradeAccountCycles {
  pub fn new(account: AccountId) -> Self {
    Self {
      fee: Asset::default(),
      account,
      description: String::new(),
      extensions: FutureExtensions::new(),
    }
  }
}

impl BaseOperation for UpgradeAccountCycles {
  type FeeParameters = EmptyFeeParameters;

  const NAME: &'static str = "upgrade_account_cycles";

  fn fee(&self) -> &Asset {
    &self.fee
  }

  fn fee_payer(&self) -> AccountId {
    self.account
  }

  fn validate(&self) -> Result<(), Error> {
    Err(Error::Disabled(Self::NAME))
  }

  fn calculate_fee(&self, _: &EmptyFeeParameters) -> ShareType {
    0
  }
}

/// Sets the amount of cycles every new wallet or custodian account
/// starts with. Only the root authority may issue it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetStartingCycleAssetAmount {
  pub fee: Asset,

  /// Must be the root authority.
  pub issuer: AccountId,

  pub new_amount: u32,

  #[serde(default)]
  pub extensions: FutureExtensions,
}

impl SetStartingCycleAssetAmount {
  pub fn new(issuer: AccountId, new_amount: u32) -> Self {
    Self {
      fee: Asset::default(),
      issuer,
      new_amount,
      extensions: FutureExtensions::new(),
    }
  }
}

impl BaseOperation for SetStartingCycleAssetAmount {
  type FeeParameters = EmptyFeeParameters;

  const NAME: &'static str = "set_starting_cycle_asset_amount";

  fn fee(&self) -> &Asset {
    &self.fee
  }

  fn fee_payer(&self) -> AccountId {
    self.issuer
  }

  fn validate(&self) -> Result<(), Error> {
    check_fee(&self.fee)
  }

  fn calculate_fee(&self, _: &EmptyFeeParameters) -> ShareType {
    0
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn cycles_upgrade_never_validates() {
    let mut op = UpgradeAccountCycles::new(AccountId::new(9));
    assert_eq!(op.validate(), Err(Error::Disabled("upgrade_account_cycles")));

    op.description = "please".into();
    op.fee = Asset::core(0);
    assert_eq!(op.validate(), Err(Error::Disabled("upgrade_account_cycles")));
  }

  #[test]
  fn any_starting_amount_is_structurally_valid() {
    for amount in [0, 200, u32::MAX] {
      let op = SetStartingCycleAssetAmount::new(AccountId::new(1), amount);
      assert_eq!(op.validate(), Ok(()));
    }
  }
}
