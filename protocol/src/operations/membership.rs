use {
  super::BaseOperation,
  crate::{
    ext::FutureExtensions,
    fees::{to_share, AccountTransferFeeParameters, AccountUpgradeFeeParameters},
    validation::{check_fee, Error},
  },
  dascore_primitives::{AccountId, Asset, ShareType},
  serde::{Deserialize, Serialize},
};

/// Upgrades an account to a member or renews its subscription.
///
/// A basic account that sends this with `upgrade_to_lifetime_member`
/// unset becomes an annual subscriber for one year, an annual subscriber
/// extends its subscription by one year. Setting the flag makes the
/// account a lifetime member. Lifetime members may not send this
/// operation anymore, which is enforced when the operation is applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountUpgrade {
  pub fee: Asset,

  /// The account to upgrade, must not already be a lifetime member.
  pub account_to_upgrade: AccountId,

  /// Upgrade to lifetime member instead of adding a subscription year.
  pub upgrade_to_lifetime_member: bool,

  #[serde(default)]
  pub extensions: FutureExtensions,
}

impl AccountUpgrade {
  pub fn new(account_to_upgrade: AccountId, lifetime: bool) -> Self {
    Self {
      fee: Asset::default(),
      account_to_upgrade,
      upgrade_to_lifetime_member: lifetime,
      extensions: FutureExtensions::new(),
    }
  }
}

impl BaseOperation for AccountUpgrade {
  type FeeParameters = AccountUpgradeFeeParameters;

  const NAME: &'static str = "account_upgrade";

  fn fee(&self) -> &Asset {
    &self.fee
  }

  fn fee_payer(&self) -> AccountId {
    self.account_to_upgrade
  }

  fn validate(&self) -> Result<(), Error> {
    check_fee(&self.fee)
  }

  fn calculate_fee(&self, params: &AccountUpgradeFeeParameters) -> ShareType {
    if self.upgrade_to_lifetime_member {
      to_share(params.membership_lifetime_fee)
    } else {
      to_share(params.membership_annual_fee)
    }
  }
}

/// Transfers the title of an account to another account.
///
/// Rotating keys with `account_update` changes control too, but carries
/// no statement of ownership change. This operation marks a legal
/// transfer and a break in the account history: the owner, active,
/// voting and memo authorities are handed to `new_owner` and the
/// whitelist statuses of the account are cleared. Blacklist statuses
/// survive the transfer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountTransfer {
  pub fee: Asset,
  pub account_id: AccountId,
  pub new_owner: AccountId,

  #[serde(default)]
  pub extensions: FutureExtensions,
}

impl AccountTransfer {
  pub fn new(account_id: AccountId, new_owner: AccountId) -> Self {
    Self {
      fee: Asset::default(),
      account_id,
      new_owner,
      extensions: FutureExtensions::new(),
    }
  }
}

impl BaseOperation for AccountTransfer {
  type FeeParameters = AccountTransferFeeParameters;

  const NAME: &'static str = "account_transfer";

  fn fee(&self) -> &Asset {
    &self.fee
  }

  fn fee_payer(&self) -> AccountId {
    self.account_id
  }

  fn validate(&self) -> Result<(), Error> {
    check_fee(&self.fee)
  }

  fn calculate_fee(&self, params: &AccountTransferFeeParameters) -> ShareType {
    to_share(params.fee)
  }
}
