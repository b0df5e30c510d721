use {
  crate::settings::{read_json, read_ledger, Command, SystemSettings},
  anyhow::Context,
  clap::Parser,
  dascore_protocol::{FeeSchedule, Operation},
  std::path::{Path, PathBuf},
  tracing::{debug, info, subscriber::set_global_default},
  tracing_subscriber::{EnvFilter, FmtSubscriber},
};

mod report;
mod settings;

fn inspect(
  paths: &[PathBuf],
  ledger: Option<&Path>,
  schedule: &FeeSchedule,
) -> anyhow::Result<()> {
  let operations = paths
    .iter()
    .map(|path| read_json(path))
    .collect::<anyhow::Result<Vec<Operation>>>()?;

  let ledger = match ledger {
    Some(path) => {
      let ledger = read_ledger(path)?;
      info!("loaded ledger with {} accounts", ledger.iter().count());
      Some(ledger)
    }
    None => None,
  };

  report::inspect(
    &mut std::io::stdout().lock(),
    &operations,
    ledger.as_ref(),
    schedule,
  )
}

fn encode(path: &Path) -> anyhow::Result<()> {
  let op: Operation = read_json(path)?;
  let bytes = op.to_bytes()?;
  debug!("{} encoded into {} bytes", op.name(), bytes.len());
  println!("{}", hex::encode(bytes));
  Ok(())
}

fn decode(bytes: &str) -> anyhow::Result<()> {
  let bytes = hex::decode(bytes.trim()).context("wire bytes are not hex")?;
  let op = Operation::from_bytes(&bytes)?;
  println!("{}", serde_json::to_string_pretty(&op)?);
  Ok(())
}

fn main() -> anyhow::Result<()> {
  // configure logging, quiet unless RUST_LOG says otherwise
  set_global_default(
    FmtSubscriber::builder()
      .with_env_filter(EnvFilter::from_default_env())
      .with_writer(std::io::stderr)
      .finish(),
  )?;

  // gather CLI parameters
  let settings = SystemSettings::parse();
  info!("startup settings: {settings:#?}");

  let schedule = settings.fee_schedule()?;

  match &settings.command {
    Command::Inspect { operations, ledger } => {
      inspect(operations, ledger.as_deref(), &schedule)
    }
    Command::Encode { operation } => encode(operation),
    Command::Decode { bytes } => decode(bytes),
    Command::Fees => {
      println!("{}", serde_json::to_string_pretty(&schedule)?);
      Ok(())
    }
  }
}
