use {
  super::BaseOperation,
  crate::{
    ext::AccountCreateExt,
    fees::EmptyFeeParameters,
    kinds::AccountKind,
    name::is_valid_name,
    options::AccountOptions,
    validation::{
      check_authority,
      check_fee,
      check_special_authority,
      AuthorityRole,
      Error,
      PERCENT_100,
    },
  },
  dascore_primitives::{AccountId, Asset, Authority, ShareType},
  serde::{Deserialize, Serialize},
  std::collections::BTreeSet,
};

/// Creates a new account.
///
/// Registration is restricted to the current registrar chain authority,
/// which pays the fee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountCreate {
  pub fee: Asset,

  /// The [`AccountKind`] of the new account as its wire value.
  pub kind: u8,

  /// Must be the current registrar chain authority.
  pub registrar: AccountId,

  /// Receives `referrer_percent` of the fee split between registrar and
  /// referrer, the rest goes to the registrar. Must be a member.
  pub referrer: AccountId,

  /// Referrer share in basis points.
  pub referrer_percent: u16,

  pub name: String,
  pub owner: Authority,
  pub active: Authority,
  pub options: AccountOptions,

  #[serde(default)]
  pub extensions: AccountCreateExt,
}

impl AccountCreate {
  /// A wallet account registered and referred by `registrar`, with no
  /// fee declared.
  pub fn new(
    registrar: AccountId,
    name: impl Into<String>,
    owner: Authority,
    active: Authority,
    options: AccountOptions,
  ) -> Self {
    Self {
      fee: Asset::default(),
      kind: AccountKind::Wallet.into(),
      registrar,
      referrer: registrar,
      referrer_percent: 0,
      name: name.into(),
      owner,
      active,
      options,
      extensions: AccountCreateExt::default(),
    }
  }

  pub fn account_kind(&self) -> Option<AccountKind> {
    AccountKind::try_from(self.kind).ok()
  }

  fn validate_buyback(&self) -> Result<(), Error> {
    let Some(buyback) = &self.extensions.buyback_options else {
      return Ok(());
    };

    if self.extensions.owner_special_authority.is_some()
      || self.extensions.active_special_authority.is_some()
    {
      return Err(Error::BuybackWithSpecialAuthority);
    }

    let null = Authority::null_authority();
    if self.owner != null || self.active != null {
      return Err(Error::BuybackAuthorityNotNull);
    }

    if buyback.markets.is_empty() {
      return Err(Error::BuybackWithoutMarkets);
    }

    if buyback.markets.contains(&buyback.asset_to_buy) {
      return Err(Error::BuybackMarketIsTarget(buyback.asset_to_buy));
    }

    Ok(())
  }
}

impl BaseOperation for AccountCreate {
  type FeeParameters = EmptyFeeParameters;

  const NAME: &'static str = "account_create";

  fn fee(&self) -> &Asset {
    &self.fee
  }

  fn fee_payer(&self) -> AccountId {
    self.registrar
  }

  fn validate(&self) -> Result<(), Error> {
    check_fee(&self.fee)?;
    AccountKind::try_from(self.kind).map_err(Error::UnknownAccountKind)?;

    if !is_valid_name(&self.name) {
      return Err(Error::InvalidAccountName(self.name.clone()));
    }

    if self.referrer_percent > PERCENT_100 {
      return Err(Error::ReferrerPercentOutOfRange(self.referrer_percent));
    }

    check_authority(&self.owner, AuthorityRole::Owner)?;
    check_authority(&self.active, AuthorityRole::Active)?;
    self.options.validate()?;

    if let Some(special) = &self.extensions.owner_special_authority {
      check_special_authority(special, AuthorityRole::Owner)?;
    }
    if let Some(special) = &self.extensions.active_special_authority {
      check_special_authority(special, AuthorityRole::Active)?;
    }

    self.validate_buyback()
  }

  /// Fees of account registration are settled by the registrar outside
  /// of this operation.
  fn calculate_fee(&self, _: &EmptyFeeParameters) -> ShareType {
    0
  }

  fn required_active_authorities(&self, active: &mut BTreeSet<AccountId>) {
    // the registrar is the fee payer and is required anyway
    active.insert(self.registrar);
    if let Some(buyback) = &self.extensions.buyback_options {
      active.insert(buyback.asset_to_buy_issuer);
    }
  }
}
