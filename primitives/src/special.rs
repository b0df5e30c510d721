use {
  crate::{AccountId, AssetId},
  serde::{Deserialize, Serialize},
  std::collections::BTreeSet,
};

/// Programmatic replacement for the key based owner or active authority.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpecialAuthority {
  /// The account uses its regular authority.
  #[default]
  NoSpecialAuthority,

  /// The authority is held by the top `num_top_holders` holders of
  /// `asset`, weighted by their balances.
  TopHolders { asset: AssetId, num_top_holders: u8 },
}

impl SpecialAuthority {
  /// A top holders authority over zero holders could never sign anything.
  pub fn is_valid(&self) -> bool {
    match self {
      SpecialAuthority::NoSpecialAuthority => true,
      SpecialAuthority::TopHolders {
        num_top_holders, ..
      } => *num_top_holders > 0,
    }
  }
}

/// Links a newly created account to a buyback program: the account
/// spends whatever it receives in `markets` to buy `asset_to_buy`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BuybackAccountOptions {
  /// The asset to buy.
  pub asset_to_buy: AssetId,

  /// Issuer of the asset. Must sign the create operation, and must match
  /// the actual issuer when the operation is applied.
  pub asset_to_buy_issuer: AccountId,

  /// Assets the buyback account sells for `asset_to_buy`.
  pub markets: BTreeSet<AssetId>,
}
