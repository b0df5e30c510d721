//! Fee parameters, one record per operation type.
//!
//! The records are plain data supplied by chain governance. Nothing in
//! this crate reads fee amounts from constants, the defaults below only
//! describe the values a fresh chain starts with.

use {
  dascore_primitives::{ShareType, BLOCKCHAIN_PRECISION, MAX_SHARE_SUPPLY},
  serde::{Deserialize, Serialize},
};

/// Parameters of operations whose fee is always zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmptyFeeParameters {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountUpdateFeeParameters {
  pub fee: ShareType,
  pub price_per_kbyte: u32,
}

impl Default for AccountUpdateFeeParameters {
  fn default() -> Self {
    Self {
      fee: 20 * BLOCKCHAIN_PRECISION,
      price_per_kbyte: BLOCKCHAIN_PRECISION as u32,
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountWhitelistFeeParameters {
  pub fee: ShareType,
}

impl Default for AccountWhitelistFeeParameters {
  fn default() -> Self {
    Self { fee: 300_000 }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountUpgradeFeeParameters {
  pub membership_annual_fee: u64,
  /// The cost to upgrade to a lifetime member.
  pub membership_lifetime_fee: u64,
}

impl Default for AccountUpgradeFeeParameters {
  fn default() -> Self {
    Self {
      membership_annual_fee: 2_000 * BLOCKCHAIN_PRECISION as u64,
      membership_lifetime_fee: 10_000 * BLOCKCHAIN_PRECISION as u64,
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountTransferFeeParameters {
  pub fee: u64,
}

impl Default for AccountTransferFeeParameters {
  fn default() -> Self {
    Self {
      fee: 500 * BLOCKCHAIN_PRECISION as u64,
    }
  }
}

/// Fee parameters of every account operation, so that each kind can be
/// repriced independently.
///
/// Missing entries in a serialized schedule take their default value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeeSchedule {
  pub account_create: EmptyFeeParameters,
  pub account_update: AccountUpdateFeeParameters,
  pub account_whitelist: AccountWhitelistFeeParameters,
  pub account_upgrade: AccountUpgradeFeeParameters,
  pub account_transfer: AccountTransferFeeParameters,
  pub tether_accounts: EmptyFeeParameters,
  pub change_public_keys: EmptyFeeParameters,
  pub set_roll_back_enabled: EmptyFeeParameters,
  pub roll_back_public_keys: EmptyFeeParameters,
  pub upgrade_account_cycles: EmptyFeeParameters,
  pub set_starting_cycle_asset_amount: EmptyFeeParameters,
  pub set_chain_authority: EmptyFeeParameters,
}

/// Fee for `bytes` of payload at `price_per_kbyte`, rounded down.
pub(crate) fn data_fee(bytes: usize, price_per_kbyte: u32) -> ShareType {
  let fee = (bytes as u128 * u128::from(price_per_kbyte)) / 1024;
  ShareType::try_from(fee)
    .unwrap_or(MAX_SHARE_SUPPLY)
    .min(MAX_SHARE_SUPPLY)
}

/// Unsigned fee parameters above the share range saturate.
pub(crate) fn to_share(amount: u64) -> ShareType {
  ShareType::try_from(amount)
    .unwrap_or(MAX_SHARE_SUPPLY)
    .min(MAX_SHARE_SUPPLY)
}
