use {
  super::BaseOperation,
  crate::{
    codec,
    ext::AccountUpdateExt,
    fees::{data_fee, AccountUpdateFeeParameters},
    options::AccountOptions,
    validation::{
      check_authority,
      check_fee,
      check_special_authority,
      AuthorityRole,
      Error,
    },
  },
  dascore_primitives::{AccountId, Asset, Authority, ShareType, MAX_SHARE_SUPPLY},
  serde::{Deserialize, Serialize},
  std::collections::BTreeSet,
};

/// Updates the authorities or the options of an existing account.
///
/// Replacing the owner authority, directly or through an owner special
/// authority, must be signed by the current owner authority. Every other
/// change is signed by the active authority.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountUpdate {
  pub fee: Asset,

  /// The account to update.
  pub account: AccountId,

  /// New owner authority. When set, this operation requires the owner
  /// authority.
  pub owner: Option<Authority>,

  /// New active authority.
  pub active: Option<Authority>,

  /// New account options.
  pub new_options: Option<AccountOptions>,

  #[serde(default)]
  pub extensions: AccountUpdateExt,
}

impl AccountUpdate {
  /// An update of `account` that changes nothing yet.
  pub fn new(account: AccountId) -> Self {
    Self {
      fee: Asset::default(),
      account,
      owner: None,
      active: None,
      new_options: None,
      extensions: AccountUpdateExt::default(),
    }
  }

  pub fn is_owner_update(&self) -> bool {
    self.owner.is_some() || self.extensions.owner_special_authority.is_some()
  }
}

impl BaseOperation for AccountUpdate {
  type FeeParameters = AccountUpdateFeeParameters;

  const NAME: &'static str = "account_update";

  fn fee(&self) -> &Asset {
    &self.fee
  }

  fn fee_payer(&self) -> AccountId {
    self.account
  }

  fn validate(&self) -> Result<(), Error> {
    if self.account == AccountId::TEMP_ACCOUNT {
      return Err(Error::UpdateTempAccount);
    }

    check_fee(&self.fee)?;

    let has_action = self.owner.is_some()
      || self.active.is_some()
      || self.new_options.is_some()
      || self.extensions.owner_special_authority.is_some()
      || self.extensions.active_special_authority.is_some();

    if !has_action {
      return Err(Error::NothingToChange);
    }

    if let Some(owner) = &self.owner {
      check_authority(owner, AuthorityRole::Owner)?;
    }
    if let Some(active) = &self.active {
      check_authority(active, AuthorityRole::Active)?;
    }

    if let Some(special) = &self.extensions.owner_special_authority {
      check_special_authority(special, AuthorityRole::Owner)?;
    }
    if let Some(special) = &self.extensions.active_special_authority {
      check_special_authority(special, AuthorityRole::Active)?;
    }

    if let Some(options) = &self.new_options {
      options.validate()?;
    }

    Ok(())
  }

  /// Base fee plus a per kilobyte price on the encoded operation, so
  /// large authorities and vote sets pay for the space they take.
  fn calculate_fee(&self, params: &AccountUpdateFeeParameters) -> ShareType {
    // encoding into a counter never fails for plain data
    let size = codec::packed_size(self).unwrap_or_default();
    params
      .fee
      .saturating_add(data_fee(size, params.price_per_kbyte))
      .min(MAX_SHARE_SUPPLY)
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

#[cfg(test)]
mod tests {
  use {
    super::*,
    dascore_primitives::{AssetId, PublicKey, SpecialAuthority},
  };

  fn key() -> PublicKey {
    PublicKey::from_bytes([6; 32])
  }

  #[test]
  fn needs_something_to_change() {
    let op = AccountUpdate::new(AccountId::new(20));
    assert_eq!(op.validate(), Err(Error::NothingToChange));

    let op = AccountUpdate {
      new_options: Some(AccountOptions::new(key())),
      ..AccountUpdate::new(AccountId::new(20))
    };
    assert_eq!(op.validate(), Ok(()));
  }

  #[test]
  fn temp_account_is_immutable() {
    let op = AccountUpdate {
      active: Some(Authority::single_key(key())),
      ..AccountUpdate::new(AccountId::TEMP_ACCOUNT)
    };
    assert_eq!(op.validate(), Err(Error::UpdateTempAccount));
  }

  #[test]
  fn installed_authorities_are_checked() {
    let op = AccountUpdate {
      owner: Some(Authority::single_key(key()).with_threshold(5)),
      ..AccountUpdate::new(AccountId::new(20))
    };
    assert_eq!(
      op.validate(),
      Err(Error::ImpossibleAuthority(AuthorityRole::Owner))
    );

    let mut op = AccountUpdate::new(AccountId::new(20));
    op.extensions.active_special_authority = Some(SpecialAuthority::TopHolders {
      asset: AssetId::new(2),
      num_top_holders: 0,
    });
    assert_eq!(
      op.validate(),
      Err(Error::InvalidSpecialAuthority(AuthorityRole::Active))
    );
  }

  #[test]
  fn owner_special_authority_is_an_owner_update() {
    let mut op = AccountUpdate::new(AccountId::new(20));
    assert!(!op.is_owner_update());

    op.extensions.owner_special_authority =
      Some(SpecialAuthority::NoSpecialAuthority);
    assert!(op.is_owner_update());
  }

  #[test]
  fn fee_grows_with_size() -> anyhow::Result<()> {
    let params = AccountUpdateFeeParameters {
      fee: 1_000,
      price_per_kbyte: 1024,
    };

    let small = AccountUpdate {
      active: Some(Authority::single_key(key())),
      ..AccountUpdate::new(AccountId::new(20))
    };
    let small_size = codec::packed_size(&small)?;
    assert_eq!(small.calculate_fee(&params), 1_000 + small_size as i64);

    let mut big_authority = Authority::default().with_threshold(1);
    for i in 0..50u8 {
      big_authority = big_authority.with_key(PublicKey::from_bytes([i; 32]), 1);
    }
    let big = AccountUpdate {
      active: Some(big_authority),
      ..AccountUpdate::new(AccountId::new(20))
    };
    assert!(big.calculate_fee(&params) > small.calculate_fee(&params));
    Ok(())
  }
}
