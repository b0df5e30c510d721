mod authorities;
mod ext;
mod fees;
mod kinds;
mod ledger;
mod listing;
mod name;
mod operations;
mod options;
mod validation;

pub mod codec;
pub mod preconditions;

pub use {
  authorities::RequiredAuthorities,
  codec::Error as CodecError,
  ext::{AccountCreateExt, AccountUpdateExt, FutureExtension, FutureExtensions, Void},
  fees::{
    AccountTransferFeeParameters,
    AccountUpdateFeeParameters,
    AccountUpgradeFeeParameters,
    AccountWhitelistFeeParameters,
    EmptyFeeParameters,
    FeeSchedule,
  },
  kinds::{AccountKind, ChainAuthorityKind},
  ledger::{AccountRecord, InMemoryLedger, Ledger},
  listing::AccountListing,
  name::{is_cheap_name, is_valid_name, MAX_ACCOUNT_NAME_LENGTH, MIN_ACCOUNT_NAME_LENGTH},
  operations::{
    AccountCreate,
    AccountTransfer,
    AccountUpdate,
    AccountUpgrade,
    AccountWhitelist,
    BaseOperation,
    ChangePublicKeys,
    Operation,
    RollBackPublicKeys,
    SetChainAuthority,
    SetRollBackEnabled,
    SetStartingCycleAssetAmount,
    TetherAccounts,
    UpgradeAccountCycles,
  },
  options::AccountOptions,
  preconditions::Error as PreconditionError,
  validation::{AuthorityRole, Error as ValidationError, PERCENT_100},
};
