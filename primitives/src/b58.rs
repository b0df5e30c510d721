use crate::PublicKey;

pub trait ToBase58String {
  fn to_b58(&self) -> String;
}

impl ToBase58String for PublicKey {
  fn to_b58(&self) -> String {
    bs58::encode(self.as_bytes()).into_string()
  }
}

impl ToBase58String for Vec<u8> {
  fn to_b58(&self) -> String {
    bs58::encode(self).into_string()
  }
}
