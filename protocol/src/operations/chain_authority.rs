use {
  super::BaseOperation,
  crate::{
    ext::FutureExtensions,
    fees::EmptyFeeParameters,
    kinds::ChainAuthorityKind,
    validation::{check_fee, Error},
  },
  dascore_primitives::{AccountId, Asset, ShareType},
  serde::{Deserialize, Serialize},
};

/// Assigns a chain authority role to an account.
///
/// The role travels as a free form string. Whether it names a known
/// [`ChainAuthorityKind`] is decided when the operation is applied, so
/// that new roles can be introduced without changing this layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetChainAuthority {
  pub fee: Asset,

  /// Must be the root authority.
  pub issuer: AccountId,

  /// Account that receives the role.
  pub account: AccountId,

  /// Kind of chain authority to assign.
  pub kind: String,

  #[serde(default)]
  pub extensions: FutureExtensions,
}

impl SetChainAuthority {
  pub fn new(
    issuer: AccountId,
    account: AccountId,
    kind: ChainAuthorityKind,
  ) -> Self {
    Self {
      fee: Asset::default(),
      issuer,
      account,
      kind: kind.as_str().to_owned(),
      extensions: FutureExtensions::new(),
    }
  }

  pub fn authority_kind(&self) -> Option<ChainAuthorityKind> {
    self.kind.parse().ok()
  }
}

impl BaseOperation for SetChainAuthority {
  type FeeParameters = EmptyFeeParameters;

  const NAME: &'static str = "set_chain_authority";

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
  fn unknown_kinds_pass_structural_validation() {
    let mut op = SetChainAuthority::new(
      AccountId::new(1),
      AccountId::new(50),
      ChainAuthorityKind::Registrar,
    );
    assert_eq!(op.authority_kind(), Some(ChainAuthorityKind::Registrar));
    assert_eq!(op.validate(), Ok(()));

    op.kind = "grand_vizier".into();
    assert_eq!(op.authority_kind(), None);
    assert_eq!(op.validate(), Ok(()));
  }
}
