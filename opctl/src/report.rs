use {
  dascore_primitives::ToBase58String,
  dascore_protocol::{
    is_cheap_name,
    preconditions,
    FeeSchedule,
    InMemoryLedger,
    Operation,
    RequiredAuthorities,
  },
  std::io::Write,
};

/// Writes what is known about each operation and, for more than one,
/// the signers of a transaction carrying all of them.
pub fn inspect(
  out: &mut impl Write,
  operations: &[Operation],
  ledger: Option<&InMemoryLedger>,
  schedule: &FeeSchedule,
) -> anyhow::Result<()> {
  let mut signers = RequiredAuthorities::default();

  for op in operations {
    let required = op.required_authorities();

    writeln!(out, "operation:  {}", op.name())?;
    writeln!(out, "digest:     {}", op.digest()?.to_bytes().to_b58())?;
    writeln!(out, "fee payer:  {}", op.fee_payer())?;
    writeln!(
      out,
      "fee:        {} (declared {})",
      op.calculate_fee(schedule),
      op.fee().amount
    )?;
    writeln!(out, "owner of:   {:?}", required.owner)?;
    writeln!(out, "active of:  {:?}", required.active)?;

    if let Operation::AccountCreate(create) = op {
      let class = if is_cheap_name(&create.name) {
        "cheap"
      } else {
        "premium"
      };
      writeln!(out, "name:       {} ({class})", create.name)?;
    }

    match op.validate() {
      Ok(()) => writeln!(out, "validation: ok")?,
      Err(e) => writeln!(out, "validation: {e}")?,
    }

    if let Some(ledger) = ledger {
      match preconditions::check(op, ledger) {
        Ok(()) => writeln!(out, "preconditions: ok")?,
        Err(e) => writeln!(out, "preconditions: {e}")?,
      }
    }

    writeln!(out)?;
    signers.merge(required);
  }

  if operations.len() > 1 && !signers.is_empty() {
    writeln!(out, "transaction owner of:  {:?}", signers.owner)?;
    writeln!(out, "transaction active of: {:?}", signers.active)?;
  }

  Ok(())
}
