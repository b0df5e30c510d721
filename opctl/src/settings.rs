use {
  anyhow::Context,
  clap::{Parser, Subcommand},
  dascore_protocol::{FeeSchedule, InMemoryLedger},
  serde::de::DeserializeOwned,
  std::{fs, path::{Path, PathBuf}},
};

/// Account Operations Tool
///
/// Reads account management operations, checks them and reports what
/// they cost and who has to sign them.
#[derive(Debug, Parser)]
pub struct SystemSettings {
  /// JSON file with the fee schedule, chain defaults when omitted
  #[clap(long, short, value_name = "PATH")]
  fees: Option<PathBuf>,

  #[clap(subcommand)]
  pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
  /// Validates JSON operations and prints their fees and signers
  Inspect {
    /// JSON encoded operations, in transaction order
    #[clap(value_name = "PATH", required = true)]
    operations: Vec<PathBuf>,

    /// JSON ledger snapshot to check preconditions against
    #[clap(long, short, value_name = "PATH")]
    ledger: Option<PathBuf>,
  },

  /// Converts a JSON operation into hex encoded wire bytes
  Encode {
    #[clap(value_name = "PATH")]
    operation: PathBuf,
  },

  /// Converts hex encoded wire bytes into a JSON operation
  Decode {
    #[clap(value_name = "HEX")]
    bytes: String,
  },

  /// Prints the fee schedule in effect
  Fees,
}

impl SystemSettings {
  pub fn fee_schedule(&self) -> anyhow::Result<FeeSchedule> {
    match &self.fees {
      Some(path) => read_json(path),
      None => Ok(FeeSchedule::default()),
    }
  }
}

pub fn read_ledger(path: &Path) -> anyhow::Result<InMemoryLedger> {
  read_json(path)
}

pub fn read_json<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
  let content = fs::read_to_string(path)
    .with_context(|| format!("reading {}", path.display()))?;
  serde_json::from_str(&content)
    .with_context(|| format!("parsing {}", path.display()))
}

#[cfg(test)]
mod tests {
  use {super::*, clap::CommandFactory};

  #[test]
  fn cli_is_well_formed() {
    SystemSettings::command().debug_assert();
  }

  #[test]
  fn parses_inspect_with_ledger() -> anyhow::Result<()> {
    let settings = SystemSettings::try_parse_from([
      "opctl",
      "--fees",
      "fees.json",
      "inspect",
      "op.json",
      "op2.json",
      "--ledger",
      "chain.json",
    ])?;

    assert_eq!(settings.fees, Some(PathBuf::from("fees.json")));
    match settings.command {
      Command::Inspect { operations, ledger } => {
        assert_eq!(operations, vec![
          PathBuf::from("op.json"),
          PathBuf::from("op2.json")
        ]);
        assert_eq!(ledger, Some(PathBuf::from("chain.json")));
      }
      other => panic!("unexpected command {other:?}"),
    }
    Ok(())
  }

  #[test]
  fn default_fee_schedule_without_file() -> anyhow::Result<()> {
    let settings = SystemSettings::try_parse_from(["opctl", "fees"])?;
    assert_eq!(settings.fee_schedule()?, FeeSchedule::default());
    Ok(())
  }
}
