use {
  crate::{AccountId, KeyAddress, PublicKey},
  serde::{Deserialize, Serialize},
  std::collections::BTreeMap,
};

pub type Weight = u16;

/// A weighted set of keys and accounts.
///
/// An authority is satisfied when the combined weight of the keys that
/// signed a transaction and the accounts whose own authorities are
/// satisfied reaches `weight_threshold`. Evaluating that is the job of
/// the signature checker, this type only describes the set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Authority {
  pub weight_threshold: u32,
  pub account_auths: BTreeMap<AccountId, Weight>,
  pub key_auths: BTreeMap<PublicKey, Weight>,
  pub address_auths: BTreeMap<KeyAddress, Weight>,
}

impl Authority {
  /// A single key authority with threshold equal to the key weight.
  pub fn single_key(key: PublicKey) -> Self {
    Self {
      weight_threshold: 1,
      key_auths: [(key, 1)].into_iter().collect(),
      ..Default::default()
    }
  }

  /// A single account authority with threshold equal to the account weight.
  pub fn single_account(account: AccountId) -> Self {
    Self {
      weight_threshold: 1,
      account_auths: [(account, 1)].into_iter().collect(),
      ..Default::default()
    }
  }

  /// Authority delegated entirely to [`AccountId::NULL_ACCOUNT`], which
  /// nobody can ever sign for.
  ///
  /// Accounts controlled by the protocol itself (like buyback accounts)
  /// are created with this authority in both owner and active slots.
  pub fn null_authority() -> Self {
    Self::single_account(AccountId::NULL_ACCOUNT)
  }

  pub fn with_threshold(mut self, threshold: u32) -> Self {
    self.weight_threshold = threshold;
    self
  }

  pub fn with_key(mut self, key: PublicKey, weight: Weight) -> Self {
    self.key_auths.insert(key, weight);
    self
  }

  pub fn with_account(mut self, account: AccountId, weight: Weight) -> Self {
    self.account_auths.insert(account, weight);
    self
  }

  pub fn with_address(mut self, address: KeyAddress, weight: Weight) -> Self {
    self.address_auths.insert(address, weight);
    self
  }

  /// Total number of keys, accounts and addresses in this authority.
  pub fn num_auths(&self) -> usize {
    self.account_auths.len() + self.key_auths.len() + self.address_auths.len()
  }

  /// True when even all members signing together cannot reach the threshold.
  pub fn is_impossible(&self) -> bool {
    let total: u64 = self
      .account_auths
      .values()
      .chain(self.key_auths.values())
      .chain(self.address_auths.values())
      .map(|w| u64::from(*w))
      .sum();
    total < u64::from(self.weight_threshold)
  }
}
