use {
  dascore_primitives::AccountId,
  serde::{Deserialize, Serialize},
  std::collections::BTreeSet,
};

/// Accounts whose authorities must be satisfied by the signatures of a
/// transaction for an operation to be authorized.
///
/// An account listed under `owner` needs its owner authority. A satisfied
/// owner authority also satisfies the active authority of the same
/// account, so an account never needs to appear in both sets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequiredAuthorities {
  pub owner: BTreeSet<AccountId>,
  pub active: BTreeSet<AccountId>,
}

impl RequiredAuthorities {
  /// Adds the requirements of another operation, as done when collecting
  /// the requirements of a whole transaction.
  pub fn merge(&mut self, other: RequiredAuthorities) {
    self.owner.extend(other.owner);
    self.active.extend(other.active);
  }

  pub fn is_empty(&self) -> bool {
    self.owner.is_empty() && self.active.is_empty()
  }
}
