use serde::{Deserialize, Serialize};

/// Opinion an account holds about another account, as a two bit field.
///
/// Whitelisting and blacklisting are independent bits, so an account
/// may be both at once.
#[derive(
  Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum AccountListing {
  #[default]
  NoListing = 0x0,
  WhiteListed = 0x1,
  BlackListed = 0x2,
  WhiteAndBlackListed = 0x3,
}

impl AccountListing {
  pub const WHITE_BIT: u8 = 0x1;
  pub const BLACK_BIT: u8 = 0x2;

  pub fn bits(&self) -> u8 {
    *self as u8
  }

  pub fn is_whitelisted(&self) -> bool {
    self.bits() & Self::WHITE_BIT != 0
  }

  pub fn is_blacklisted(&self) -> bool {
    self.bits() & Self::BLACK_BIT != 0
  }

  /// Listing of an account after its title was transferred with
  /// `account_transfer`: whitelist status is cleared, a blacklist stays.
  pub fn after_transfer(&self) -> AccountListing {
    match self {
      AccountListing::NoListing | AccountListing::WhiteListed => {
        AccountListing::NoListing
      }
      AccountListing::BlackListed | AccountListing::WhiteAndBlackListed => {
        AccountListing::BlackListed
      }
    }
  }
}

impl TryFrom<u8> for AccountListing {
  type Error = u8;

  fn try_from(value: u8) -> Result<Self, Self::Error> {
    match value {
      0x0 => Ok(AccountListing::NoListing),
      0x1 => Ok(AccountListing::WhiteListed),
      0x2 => Ok(AccountListing::BlackListed),
      0x3 => Ok(AccountListing::WhiteAndBlackListed),
      other => Err(other),
    }
  }
}
