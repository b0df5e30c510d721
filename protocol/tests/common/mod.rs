#![allow(dead_code)]

use {
  dascore_primitives::{
    AccountId,
    AssetId,
    Authority,
    BuybackAccountOptions,
    PublicKey,
    SpecialAuthority,
    VoteId,
    VoteType,
  },
  dascore_protocol::{
    AccountCreate,
    AccountKind,
    AccountListing,
    AccountOptions,
    AccountRecord,
    AccountTransfer,
    AccountUpdate,
    AccountUpgrade,
    AccountWhitelist,
    ChainAuthorityKind,
    ChangePublicKeys,
    InMemoryLedger,
    Operation,
    RollBackPublicKeys,
    SetChainAuthority,
    SetRollBackEnabled,
    SetStartingCycleAssetAmount,
    TetherAccounts,
    UpgradeAccountCycles,
  },
  ed25519_dalek::Keypair,
};

pub const ROOT: AccountId = AccountId::new(100);
pub const REGISTRAR: AccountId = AccountId::new(101);
pub const ALICE: AccountId = AccountId::new(200);
pub const BOB: AccountId = AccountId::new(201);
pub const ALICE_VAULT: AccountId = AccountId::new(300);
pub const ISSUER: AccountId = AccountId::new(400);
pub const TOKEN: AssetId = AssetId::new(5);

pub fn random_key() -> PublicKey {
  Keypair::generate(&mut rand::thread_rng()).public.into()
}

pub fn key_authority() -> Authority {
  Authority::single_key(random_key())
}

pub fn voting_options() -> AccountOptions {
  let mut options = AccountOptions::new(random_key());
  options.votes = [
    VoteId::new(VoteType::Witness, 1),
    VoteId::new(VoteType::Witness, 2),
    VoteId::new(VoteType::Committee, 1),
  ]
  .into_iter()
  .collect::<Result<_, _>>()
  .unwrap();
  options.num_witness = 2;
  options.num_committee = 1;
  options
}

pub fn account_create(name: &str) -> AccountCreate {
  AccountCreate::new(
    REGISTRAR,
    name,
    key_authority(),
    key_authority(),
    voting_options(),
  )
}

pub fn buyback_create(name: &str) -> AccountCreate {
  let mut op = account_create(name);
  op.owner = Authority::null_authority();
  op.active = Authority::null_authority();
  op.extensions.buyback_options = Some(BuybackAccountOptions {
    asset_to_buy: TOKEN,
    asset_to_buy_issuer: ISSUER,
    markets: [AssetId::CORE_ASSET].into_iter().collect(),
  });
  op
}

pub fn owner_special_authority() -> SpecialAuthority {
  SpecialAuthority::TopHolders {
    asset: TOKEN,
    num_top_holders: 3,
  }
}

/// One populated instance of every operation kind.
pub fn all_operations() -> Vec<Operation> {
  let mut update = AccountUpdate::new(ALICE);
  update.active = Some(key_authority());
  update.new_options = Some(voting_options());
  update.extensions.owner_special_authority = Some(owner_special_authority());

  let mut cycles = UpgradeAccountCycles::new(ALICE);
  cycles.description = "legacy".into();

  vec![
    account_create("carol").into(),
    buyback_create("carol.buyback").into(),
    update.into(),
    AccountWhitelist::new(ALICE, BOB, AccountListing::WhiteListed).into(),
    AccountUpgrade::new(ALICE, true).into(),
    AccountTransfer::new(ALICE, BOB).into(),
    TetherAccounts::new(ALICE, ALICE_VAULT).into(),
    ChangePublicKeys::new(ALICE, Some(key_authority()), Some(key_authority()))
      .into(),
    SetRollBackEnabled::new(ALICE, true).into(),
    RollBackPublicKeys::new(ROOT, ALICE).into(),
    cycles.into(),
    SetStartingCycleAssetAmount::new(ROOT, 200).into(),
    SetChainAuthority::new(ROOT, BOB, ChainAuthorityKind::CycleIssuer).into(),
  ]
}

/// A small chain with a root authority, a registrar, two wallets, a vault
/// and an asset with an issuer.
pub fn ledger() -> InMemoryLedger {
  let mut ledger = InMemoryLedger::with_root(ROOT);
  ledger.insert_account(ROOT, AccountRecord::new("root", AccountKind::Special));
  ledger.insert_account(
    REGISTRAR,
    AccountRecord::new("registrar", AccountKind::Special),
  );
  ledger.insert_account(ALICE, AccountRecord::new("alice", AccountKind::Wallet));
  ledger.insert_account(BOB, AccountRecord::new("bob", AccountKind::Wallet));
  ledger.insert_account(
    ALICE_VAULT,
    AccountRecord::new("alice.vault", AccountKind::Vault),
  );
  ledger.insert_account(ISSUER, AccountRecord::new("issuer", AccountKind::Wallet));
  ledger.insert_asset(AssetId::CORE_ASSET, ROOT);
  ledger.insert_asset(TOKEN, ISSUER);
  ledger.set_chain_authority(ChainAuthorityKind::Registrar, REGISTRAR);
  ledger
}
