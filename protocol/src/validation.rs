use {
  dascore_primitives::{Asset, AssetId, Authority, ShareType, SpecialAuthority},
  std::fmt::Display,
  thiserror::Error,
};

/// 100% expressed in basis points.
pub const PERCENT_100: u16 = 10_000;

/// Which of the two authority classes of an account a check refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthorityRole {
  Owner,
  Active,
}

impl Display for AuthorityRole {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      AuthorityRole::Owner => write!(f, "owner"),
      AuthorityRole::Active => write!(f, "active"),
    }
  }
}

/// Structural problems detectable from the fields of an operation alone.
///
/// Any of those errors is final for the transaction carrying the
/// operation, resubmitting the same operation fails the same way.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
  #[error("Fee amount must not be negative, got {0}")]
  NegativeFee(ShareType),

  #[error("Invalid account name '{0}'")]
  InvalidAccountName(String),

  #[error("Unknown account kind {0}")]
  UnknownAccountKind(u8),

  #[error("Referrer percent {0} is above 100% (10000 basis points)")]
  ReferrerPercentOutOfRange(u16),

  #[error("The {0} authority has no keys or accounts")]
  EmptyAuthority(AuthorityRole),

  #[error("The {0} authority uses address auths, which are not supported")]
  AddressAuthority(AuthorityRole),

  #[error("The {0} authority threshold can never be reached")]
  ImpossibleAuthority(AuthorityRole),

  #[error("The {0} special authority must name at least one top holder")]
  InvalidSpecialAuthority(AuthorityRole),

  #[error(
    "Account options ask for {declared} witnesses but only vote for {listed}"
  )]
  TooManyWitnesses { declared: u16, listed: usize },

  #[error(
    "Account options ask for {declared} committee members but only vote for \
     {listed}"
  )]
  TooManyCommitteeMembers { declared: u16, listed: usize },

  #[error("Buyback accounts cannot have special authorities")]
  BuybackWithSpecialAuthority,

  #[error("Buyback accounts must use the null authority as owner and active")]
  BuybackAuthorityNotNull,

  #[error("Buyback accounts must sell at least one market")]
  BuybackWithoutMarkets,

  #[error("Buyback market {0} is the asset being bought")]
  BuybackMarketIsTarget(AssetId),

  #[error("The temporary account cannot be updated")]
  UpdateTempAccount,

  #[error("Operation does not change anything")]
  NothingToChange,

  #[error("Invalid listing flags {0:#x}, must be below 0x4")]
  InvalidListing(u8),

  #[error("The {0} operation is disabled")]
  Disabled(&'static str),
}

pub(crate) fn check_fee(fee: &Asset) -> Result<(), Error> {
  if fee.amount < 0 {
    return Err(Error::NegativeFee(fee.amount));
  }
  Ok(())
}

/// Rules every authority installed on an account must follow.
pub(crate) fn check_authority(
  authority: &Authority,
  role: AuthorityRole,
) -> Result<(), Error> {
  if authority.num_auths() == 0 {
    return Err(Error::EmptyAuthority(role));
  }
  if !authority.address_auths.is_empty() {
    return Err(Error::AddressAuthority(role));
  }
  if authority.is_impossible() {
    return Err(Error::ImpossibleAuthority(role));
  }
  Ok(())
}

pub(crate) fn check_special_authority(
  authority: &SpecialAuthority,
  role: AuthorityRole,
) -> Result<(), Error> {
  if !authority.is_valid() {
    return Err(Error::InvalidSpecialAuthority(role));
  }
  Ok(())
}
