use {
  serde::{Deserialize, Serialize},
  std::{fmt::Display, str::FromStr},
};

/// What an account is used for. Carried on the wire as a `u8`.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum AccountKind {
  Wallet = 0,
  Vault = 1,
  Special = 2,
  Custodian = 3,
}

impl TryFrom<u8> for AccountKind {
  type Error = u8;

  fn try_from(value: u8) -> Result<Self, Self::Error> {
    match value {
      0 => Ok(AccountKind::Wallet),
      1 => Ok(AccountKind::Vault),
      2 => Ok(AccountKind::Special),
      3 => Ok(AccountKind::Custodian),
      other => Err(other),
    }
  }
}

impl From<AccountKind> for u8 {
  fn from(kind: AccountKind) -> Self {
    kind as u8
  }
}

/// Roles that the root authority can hand out to accounts with
/// `set_chain_authority`. Serialized under their snake_case names,
/// which is also the form used on the wire by that operation.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ChainAuthorityKind {
  LicenseAdministrator,
  LicenseIssuer,
  LicenseAuthenticator,
  WebassetIssuer,
  WebassetAuthenticator,
  CycleIssuer,
  CycleAuthenticator,
  Registrar,
  PiValidator,
  WireOutHandler,
  DaspayAdministrator,
}

impl ChainAuthorityKind {
  pub const ALL: [ChainAuthorityKind; 11] = [
    ChainAuthorityKind::LicenseAdministrator,
    ChainAuthorityKind::LicenseIssuer,
    ChainAuthorityKind::LicenseAuthenticator,
    ChainAuthorityKind::WebassetIssuer,
    ChainAuthorityKind::WebassetAuthenticator,
    ChainAuthorityKind::CycleIssuer,
    ChainAuthorityKind::CycleAuthenticator,
    ChainAuthorityKind::Registrar,
    ChainAuthorityKind::PiValidator,
    ChainAuthorityKind::WireOutHandler,
    ChainAuthorityKind::DaspayAdministrator,
  ];

  pub fn as_str(&self) -> &'static str {
    match self {
      ChainAuthorityKind::LicenseAdministrator => "license_administrator",
      ChainAuthorityKind::LicenseIssuer => "license_issuer",
      ChainAuthorityKind::LicenseAuthenticator => "license_authenticator",
      ChainAuthorityKind::WebassetIssuer => "webasset_issuer",
      ChainAuthorityKind::WebassetAuthenticator => "webasset_authenticator",
      ChainAuthorityKind::CycleIssuer => "cycle_issuer",
      ChainAuthorityKind::CycleAuthenticator => "cycle_authenticator",
      ChainAuthorityKind::Registrar => "registrar",
      ChainAuthorityKind::PiValidator => "pi_validator",
      ChainAuthorityKind::WireOutHandler => "wire_out_handler",
      ChainAuthorityKind::DaspayAdministrator => "daspay_administrator",
    }
  }
}

impl Display for ChainAuthorityKind {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for ChainAuthorityKind {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::ALL
      .into_iter()
      .find(|kind| kind.as_str() == s)
      .ok_or_else(|| s.to_owned())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn chain_authority_names_roundtrip() -> anyhow::Result<()> {
    for kind in ChainAuthorityKind::ALL {
      assert_eq!(kind.as_str().parse::<ChainAuthorityKind>(), Ok(kind));
      assert_eq!(serde_json::to_string(&kind)?, format!("\"{kind}\""));
    }
    assert!("root".parse::<ChainAuthorityKind>().is_err());
    Ok(())
  }

  #[test]
  fn account_kind_from_wire() {
    assert_eq!(AccountKind::try_from(1), Ok(AccountKind::Vault));
    assert_eq!(AccountKind::try_from(4), Err(4));
    assert_eq!(u8::from(AccountKind::Custodian), 3);
  }
}
