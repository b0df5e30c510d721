use {
  crate::AssetId,
  serde::{Deserialize, Serialize},
};

/// Signed amount of the smallest indivisible unit of an asset.
pub type ShareType = i64;

/// Number of base units in one whole unit of the core asset.
pub const BLOCKCHAIN_PRECISION: ShareType = 100_000;

/// Upper bound of any single amount, fee computations saturate here.
pub const MAX_SHARE_SUPPLY: ShareType = 1_000_000_000_000_000;

/// An amount of some asset, the unit in which operation fees are declared.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Asset {
  pub amount: ShareType,
  pub asset_id: AssetId,
}

impl Asset {
  pub const fn new(amount: ShareType, asset_id: AssetId) -> Self {
    Self { amount, asset_id }
  }

  /// An amount denominated in the core asset.
  pub const fn core(amount: ShareType) -> Self {
    Self::new(amount, AssetId::CORE_ASSET)
  }
}
