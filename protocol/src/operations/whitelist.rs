use {
  super::BaseOperation,
  crate::{
    ext::FutureExtensions,
    fees::AccountWhitelistFeeParameters,
    listing::AccountListing,
    validation::{check_fee, Error},
  },
  dascore_primitives::{AccountId, Asset, ShareType},
  serde::{Deserialize, Serialize},
};

/// Records the opinion of one account about another account.
///
/// Listings are consulted by assets that enforce a whitelist: to hold
/// such an asset an account must be whitelisted by at least one of the
/// asset's whitelist authorities and blacklisted by none of its blacklist
/// authorities. Third parties may use listings for anything else as long
/// as it does not conflict with that.
///
/// Only `authorizing_account` signs and pays, `account_to_list` is not
/// involved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountWhitelist {
  pub fee: Asset,

  /// The account expressing the opinion.
  pub authorizing_account: AccountId,

  /// The account being opined about.
  pub account_to_list: AccountId,

  /// Bit field of [`AccountListing`] flags.
  pub new_listing: u8,

  #[serde(default)]
  pub extensions: FutureExtensions,
}

impl AccountWhitelist {
  pub fn new(
    authorizing_account: AccountId,
    account_to_list: AccountId,
    listing: AccountListing,
  ) -> Self {
    Self {
      fee: Asset::default(),
      authorizing_account,
      account_to_list,
      new_listing: listing.bits(),
      extensions: FutureExtensions::new(),
    }
  }

  pub fn listing(&self) -> Option<AccountListing> {
    AccountListing::try_from(self.new_listing).ok()
  }
}

impl BaseOperation for AccountWhitelist {
  type FeeParameters = AccountWhitelistFeeParameters;

  const NAME: &'static str = "account_whitelist";

  fn fee(&self) -> &Asset {
    &self.fee
  }

  fn fee_payer(&self) -> AccountId {
    self.authorizing_account
  }

  fn validate(&self) -> Result<(), Error> {
    check_fee(&self.fee)?;
    if self.new_listing >= 0x4 {
      return Err(Error::InvalidListing(self.new_listing));
    }
    Ok(())
  }

  fn calculate_fee(&self, params: &AccountWhitelistFeeParameters) -> ShareType {
    params.fee
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn listing_flags_must_fit_two_bits() {
    let mut op = AccountWhitelist::new(
      AccountId::new(10),
      AccountId::new(11),
      AccountListing::WhiteAndBlackListed,
    );

    for bits in 0..4u8 {
      op.new_listing = bits;
      assert_eq!(op.validate(), Ok(()));
      assert!(op.listing().is_some());
    }

    for bits in [4u8, 5, 0x80, u8::MAX] {
      op.new_listing = bits;
      assert_eq!(op.validate(), Err(Error::InvalidListing(bits)));
      assert!(op.listing().is_none());
    }
  }

  #[test]
  fn negative_fee_fails_even_with_valid_listing() {
    let mut op = AccountWhitelist::new(
      AccountId::new(10),
      AccountId::new(11),
      AccountListing::NoListing,
    );
    op.fee = Asset::core(-1);
    assert_eq!(op.validate(), Err(Error::NegativeFee(-1)));
  }
}
