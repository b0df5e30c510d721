mod asset;
mod authority;
mod b58;
mod key;
mod object_id;
mod special;
mod vote;

pub use {
  asset::{Asset, ShareType, BLOCKCHAIN_PRECISION, MAX_SHARE_SUPPLY},
  authority::{Authority, Weight},
  b58::ToBase58String,
  key::{KeyAddress, PublicKey},
  object_id::{AccountId, AssetId, Error as ObjectIdError},
  special::{BuybackAccountOptions, SpecialAuthority},
  vote::{Error as VoteIdError, VoteId, VoteType},
};
