use {
  crate::{
    authorities::RequiredAuthorities,
    codec,
    fees::FeeSchedule,
    validation::Error,
  },
  dascore_primitives::{AccountId, Asset, ShareType},
  multihash::{Multihash, MultihashDigest},
  serde::{Deserialize, Serialize},
  std::collections::BTreeSet,
  tracing::{debug, trace},
};

mod chain_authority;
mod create;
mod cycles;
mod keys;
mod membership;
mod tether;
mod update;
mod whitelist;

pub use {
  chain_authority::SetChainAuthority,
  create::AccountCreate,
  cycles::{SetStartingCycleAssetAmount, UpgradeAccountCycles},
  keys::{ChangePublicKeys, RollBackPublicKeys, SetRollBackEnabled},
  membership::{AccountTransfer, AccountUpgrade},
  tether::TetherAccounts,
  update::AccountUpdate,
  whitelist::AccountWhitelist,
};

/// Queries every account operation answers about itself.
///
/// All of them are pure functions of the operation fields. They never
/// look at chain state and can be called any number of times from any
/// number of threads.
pub trait BaseOperation {
  /// Fee schedule entry of this operation type.
  type FeeParameters;

  /// Stable snake_case name of the operation type.
  const NAME: &'static str;

  /// Declared fee of the operation.
  fn fee(&self) -> &Asset;

  /// The account whose balance pays the fee.
  fn fee_payer(&self) -> AccountId;

  /// Checks the structural invariants of the operation.
  fn validate(&self) -> Result<(), Error>;

  /// The fee this operation must pay under the given parameters.
  fn calculate_fee(&self, params: &Self::FeeParameters) -> ShareType;

  /// Inserts accounts whose owner authority must sign this operation.
  fn required_owner_authorities(&self, _owner: &mut BTreeSet<AccountId>) {}

  /// Inserts accounts whose active authority must sign this operation,
  /// in addition to the fee payer which [`Operation::required_authorities`]
  /// adds on its own.
  fn required_active_authorities(&self, _active: &mut BTreeSet<AccountId>) {}
}

/// All account management operations.
///
/// The variant order is the order of the operation tags on the wire and
/// new variants may only be appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
  AccountCreate(AccountCreate),
  AccountUpdate(AccountUpdate),
  AccountWhitelist(AccountWhitelist),
  AccountUpgrade(AccountUpgrade),
  AccountTransfer(AccountTransfer),
  TetherAccounts(TetherAccounts),
  ChangePublicKeys(ChangePublicKeys),
  SetRollBackEnabled(SetRollBackEnabled),
  RollBackPublicKeys(RollBackPublicKeys),
  UpgradeAccountCycles(UpgradeAccountCycles),
  SetStartingCycleAssetAmount(SetStartingCycleAssetAmount),
  SetChainAuthority(SetChainAuthority),
}

/// Runs the same expression on whichever operation is inside.
macro_rules! dispatch {
  ($self:expr, $op:ident => $body:expr) => {
    match $self {
      Operation::AccountCreate($op) => $body,
      Operation::AccountUpdate($op) => $body,
      Operation::AccountWhitelist($op) => $body,
      Operation::AccountUpgrade($op) => $body,
      Operation::AccountTransfer($op) => $body,
      Operation::TetherAccounts($op) => $body,
      Operation::ChangePublicKeys($op) => $body,
      Operation::SetRollBackEnabled($op) => $body,
      Operation::RollBackPublicKeys($op) => $body,
      Operation::UpgradeAccountCycles($op) => $body,
      Operation::SetStartingCycleAssetAmount($op) => $body,
      Operation::SetChainAuthority($op) => $body,
    }
  };
}

/// Picks the fee schedule entry of an operation type.
macro_rules! fee_params {
  ($self:expr, $schedule:expr, $op:ident, $params:ident => $body:expr) => {
    match $self {
      Operation::AccountCreate($op) => {
        let $params = &$schedule.account_create;
        $body
      }
      Operation::AccountUpdate($op) => {
        let $params = &$schedule.account_update;
        $body
      }
      Operation::AccountWhitelist($op) => {
        let $params = &$schedule.account_whitelist;
        $body
      }
      Operation::AccountUpgrade($op) => {
        let $params = &$schedule.account_upgrade;
        $body
      }
      Operation::AccountTransfer($op) => {
        let $params = &$schedule.account_transfer;
        $body
      }
      Operation::TetherAccounts($op) => {
        let $params = &$schedule.tether_accounts;
        $body
      }
      Operation::ChangePublicKeys($op) => {
        let $params = &$schedule.change_public_keys;
        $body
      }
      Operation::SetRollBackEnabled($op) => {
        let $params = &$schedule.set_roll_back_enabled;
        $body
      }
      Operation::RollBackPublicKeys($op) => {
        let $params = &$schedule.roll_back_public_keys;
        $body
      }
      Operation::UpgradeAccountCycles($op) => {
        let $params = &$schedule.upgrade_account_cycles;
        $body
      }
      Operation::SetStartingCycleAssetAmount($op) => {
        let $params = &$schedule.set_starting_cycle_asset_amount;
        $body
      }
      Operation::SetChainAuthority($op) => {
        let $params = &$schedule.set_chain_authority;
        $body
      }
    }
  };
}

impl Operation {
  pub fn name(&self) -> &'static str {
    fn name_of<T: BaseOperation>(_: &T) -> &'static str {
      T::NAME
    }
    dispatch!(self, op => name_of(op))
  }

  pub fn fee(&self) -> &Asset {
    dispatch!(self, op => op.fee())
  }

  pub fn fee_payer(&self) -> AccountId {
    dispatch!(self, op => op.fee_payer())
  }

  pub fn validate(&self) -> Result<(), Error> {
    let result = dispatch!(self, op => op.validate());
    if let Err(ref e) = result {
      debug!("{} rejected by validation: {e}", self.name());
    }
    result
  }

  pub fn calculate_fee(&self, schedule: &FeeSchedule) -> ShareType {
    fee_params!(self, schedule, op, params => op.calculate_fee(params))
  }

  /// Accounts that must authorize this operation.
  ///
  /// On top of what the operation itself declares, the fee payer must
  /// always sign with its active authority, unless the operation already
  /// demands the fee payer's owner authority.
  pub fn required_authorities(&self) -> RequiredAuthorities {
    let mut required = RequiredAuthorities::default();
    dispatch!(self, op => {
      op.required_owner_authorities(&mut required.owner);
      op.required_active_authorities(&mut required.active);
    });

    let payer = self.fee_payer();
    if !required.owner.contains(&payer) {
      required.active.insert(payer);
    }

    trace!(
      "{} requires owner of {:?} and active of {:?}",
      self.name(),
      required.owner,
      required.active
    );
    required
  }

  /// Wire encoding of this operation.
  pub fn to_bytes(&self) -> Result<Vec<u8>, codec::Error> {
    codec::to_bytes(self)
  }

  pub fn from_bytes(bytes: &[u8]) -> Result<Self, codec::Error> {
    codec::from_bytes(bytes)
  }

  /// Sha3-256 of the wire encoding, identifies the operation.
  pub fn digest(&self) -> Result<Multihash, codec::Error> {
    Ok(multihash::Code::Sha3_256.digest(&self.to_bytes()?))
  }
}

macro_rules! impl_from {
  ($($variant:ident),* $(,)?) => {
    $(
      impl From<$variant> for Operation {
        fn from(op: $variant) -> Self {
          Operation::$variant(op)
        }
      }
    )*
  };
}

impl_from!(
  AccountCreate,
  AccountUpdate,
  AccountWhitelist,
  AccountUpgrade,
  AccountTransfer,
  TetherAccounts,
  ChangePublicKeys,
  SetRollBackEnabled,
  RollBackPublicKeys,
  UpgradeAccountCycles,
  SetStartingCycleAssetAmount,
  SetChainAuthority,
);
