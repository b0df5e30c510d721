use {
  super::BaseOperation,
  crate::{
    ext::FutureExtensions,
    fees::EmptyFeeParameters,
    validation::{check_fee, Error},
  },
  dascore_primitives::{AccountId, Asset, ShareType},
  serde::{Deserialize, Serialize},
  std::collections::BTreeSet,
};

/// Tethers a vault account to a wallet account. Both sides must agree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TetherAccounts {
  pub fee: Asset,
  pub wallet_account: AccountId,
  pub vault_account: AccountId,

  #[serde(default)]
  pub extensions: FutureExtensions,
}

impl TetherAccounts {
  pub fn new(wallet_account: AccountId, vault_account: AccountId) -> Self {
    Self {
      fee: Asset::default(),
      wallet_account,
      vault_account,
      extensions: FutureExtensions::new(),
    }
  }
}

impl BaseOperation for TetherAccounts {
  type FeeParameters = EmptyFeeParameters;

  const NAME: &'static str = "tether_accounts";

  fn fee(&self) -> &Asset {
    &self.fee
  }

  fn fee_payer(&self) -> AccountId {
    self.wallet_account
  }

  fn validate(&self) -> Result<(), Error> {
    check_fee(&self.fee)
  }

  fn calculate_fee(&self, _: &EmptyFeeParameters) -> ShareType {
    0
  }

  fn required_active_authorities(&self, active: &mut BTreeSet<AccountId>) {
    active.insert(self.wallet_account);
    active.insert(self.vault_account);
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn both_sides_must_sign() {
    let op = TetherAccounts::new(AccountId::new(7), AccountId::new(8));
    assert_eq!(op.validate(), Ok(()));

    let mut active = BTreeSet::new();
    op.required_active_authorities(&mut active);
    assert_eq!(
      active.into_iter().collect::<Vec<_>>(),
      vec![AccountId::new(7), AccountId::new(8)]
    );
  }
}
