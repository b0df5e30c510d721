//! Checks that depend on chain state and run right before an operation
//! is applied, after it passed structural validation and its required
//! authorities were satisfied.

use {
  crate::{
    kinds::{AccountKind, ChainAuthorityKind},
    ledger::{AccountRecord, Ledger},
    operations::Operation,
  },
  dascore_primitives::{AccountId, AssetId},
  thiserror::Error,
  tracing::debug,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
  #[error("Account {0} does not exist")]
  UnknownAccount(AccountId),

  #[error("Asset {0} does not exist")]
  UnknownAsset(AssetId),

  #[error("Account name '{0}' is already taken")]
  NameTaken(String),

  #[error("Account {0} is not the current registrar")]
  NotRegistrar(AccountId),

  #[error("Account {0} is not the root authority")]
  NotRootAuthority(AccountId),

  #[error("Buyback issuer {declared} does not match the issuer {actual} of the asset")]
  BuybackIssuerMismatch {
    declared: AccountId,
    actual: AccountId,
  },

  #[error("Account {0} is already a lifetime member")]
  AlreadyLifetimeMember(AccountId),

  #[error("Account {account} is a {found:?}, expected a {expected:?}")]
  WrongAccountKind {
    account: AccountId,
    expected: AccountKind,
    found: AccountKind,
  },

  #[error("Vault {vault} is already tethered to {wallet}")]
  VaultAlreadyTethered { vault: AccountId, wallet: AccountId },

  #[error("Account {0} does not allow rolling back its keys")]
  RollBackDisabled(AccountId),

  #[error("Unknown chain authority kind '{0}'")]
  UnknownChainAuthorityKind(String),
}

fn existing(
  ledger: &impl Ledger,
  account: &AccountId,
) -> Result<AccountRecord, Error> {
  ledger
    .account(account)
    .ok_or(Error::UnknownAccount(*account))
}

fn of_kind(
  ledger: &impl Ledger,
  account: &AccountId,
  expected: AccountKind,
) -> Result<AccountRecord, Error> {
  let record = existing(ledger, account)?;
  if record.kind != expected {
    return Err(Error::WrongAccountKind {
      account: *account,
      expected,
      found: record.kind,
    });
  }
  Ok(record)
}

fn root_issued(ledger: &impl Ledger, issuer: &AccountId) -> Result<(), Error> {
  if *issuer != ledger.root_authority() {
    return Err(Error::NotRootAuthority(*issuer));
  }
  Ok(())
}

/// Checks the state dependent preconditions of an operation.
///
/// Nothing is modified, the caller applies the operation only when this
/// returns `Ok`.
pub fn check(operation: &Operation, ledger: &impl Ledger) -> Result<(), Error> {
  let result = check_operation(operation, ledger);
  if let Err(ref e) = result {
    debug!("{} failed precondition: {e}", operation.name());
  }
  result
}

fn check_operation(
  operation: &Operation,
  ledger: &impl Ledger,
) -> Result<(), Error> {
  match operation {
    Operation::AccountCreate(op) => {
      existing(ledger, &op.registrar)?;
      existing(ledger, &op.referrer)?;

      if ledger.chain_authority(ChainAuthorityKind::Registrar)
        != Some(op.registrar)
      {
        return Err(Error::NotRegistrar(op.registrar));
      }

      if ledger.account_by_name(&op.name).is_some() {
        return Err(Error::NameTaken(op.name.clone()));
      }

      if let Some(buyback) = &op.extensions.buyback_options {
        let actual = ledger
          .asset_issuer(&buyback.asset_to_buy)
          .ok_or(Error::UnknownAsset(buyback.asset_to_buy))?;
        if actual != buyback.asset_to_buy_issuer {
          return Err(Error::BuybackIssuerMismatch {
            declared: buyback.asset_to_buy_issuer,
            actual,
          });
        }
        for market in &buyback.markets {
          ledger
            .asset_issuer(market)
            .ok_or(Error::UnknownAsset(*market))?;
        }
      }
      Ok(())
    }
    Operation::AccountUpdate(op) => existing(ledger, &op.account).map(|_| ()),
    Operation::AccountWhitelist(op) => {
      existing(ledger, &op.authorizing_account)?;
      existing(ledger, &op.account_to_list)?;
      Ok(())
    }
    Operation::AccountUpgrade(op) => {
      // re-upgrading is refused whatever the requested membership
      let record = existing(ledger, &op.account_to_upgrade)?;
      if record.lifetime_member {
        return Err(Error::AlreadyLifetimeMember(op.account_to_upgrade));
      }
      Ok(())
    }
    Operation::AccountTransfer(op) => {
      existing(ledger, &op.account_id)?;
      existing(ledger, &op.new_owner)?;
      Ok(())
    }
    Operation::TetherAccounts(op) => {
      of_kind(ledger, &op.wallet_account, AccountKind::Wallet)?;
      let vault = of_kind(ledger, &op.vault_account, AccountKind::Vault)?;
      if let Some(wallet) = vault.tethered_to {
        return Err(Error::VaultAlreadyTethered {
          vault: op.vault_account,
          wallet,
        });
      }
      Ok(())
    }
    Operation::ChangePublicKeys(op) => {
      existing(ledger, &op.account).map(|_| ())
    }
    Operation::SetRollBackEnabled(op) => {
      existing(ledger, &op.account).map(|_| ())
    }
    Operation::RollBackPublicKeys(op) => {
      existing(ledger, &op.authority)?;
      let target = existing(ledger, &op.account)?;
      if !target.roll_back_enabled {
        return Err(Error::RollBackDisabled(op.account));
      }
      Ok(())
    }
    Operation::UpgradeAccountCycles(op) => {
      existing(ledger, &op.account).map(|_| ())
    }
    Operation::SetStartingCycleAssetAmount(op) => {
      root_issued(ledger, &op.issuer)
    }
    Operation::SetChainAuthority(op) => {
      root_issued(ledger, &op.issuer)?;
      existing(ledger, &op.account)?;
      if op.authority_kind().is_none() {
        return Err(Error::UnknownChainAuthorityKind(op.kind.clone()));
      }
      Ok(())
    }
  }
}
