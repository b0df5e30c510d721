use {
  crate::{ext::FutureExtensions, validation::Error},
  dascore_primitives::{AccountId, PublicKey, VoteId, VoteType},
  serde::{Deserialize, Serialize},
  std::collections::BTreeSet,
};

/// Voting related profile of an account. All of those fields can be
/// changed with the active authority.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountOptions {
  /// Key used to encrypt and sign memos and other non-validated account
  /// activity. Kept separately so that it is unambiguous even when the
  /// active authority has zero or many keys.
  pub memo_key: PublicKey,

  /// When set to anything other than
  /// [`AccountId::PROXY_TO_SELF_ACCOUNT`], this account's own votes are
  /// ignored and its stake counts towards the votes of the referenced
  /// account instead.
  pub voting_account: AccountId,

  /// How many active witnesses this account wants the chain to appoint.
  /// Must not exceed the number of witnesses voted for in `votes`.
  pub num_witness: u16,

  /// How many active committee members this account wants the chain to
  /// appoint. Must not exceed the number of committee members voted for
  /// in `votes`.
  pub num_committee: u16,

  /// Vote ids this account votes for, weighted by its core balance.
  pub votes: BTreeSet<VoteId>,

  #[serde(default)]
  pub extensions: FutureExtensions,
}

impl AccountOptions {
  pub fn new(memo_key: PublicKey) -> Self {
    Self {
      memo_key,
      voting_account: AccountId::PROXY_TO_SELF_ACCOUNT,
      num_witness: 0,
      num_committee: 0,
      votes: BTreeSet::new(),
      extensions: FutureExtensions::new(),
    }
  }

  pub fn validate(&self) -> Result<(), Error> {
    let count = |kind: VoteType| {
      self
        .votes
        .iter()
        .filter(|vote| vote.kind().ok() == Some(kind))
        .count()
    };

    let witnesses = count(VoteType::Witness);
    if usize::from(self.num_witness) > witnesses {
      return Err(Error::TooManyWitnesses {
        declared: self.num_witness,
        listed: witnesses,
      });
    }

    let committee = count(VoteType::Committee);
    if usize::from(self.num_committee) > committee {
      return Err(Error::TooManyCommitteeMembers {
        declared: self.num_committee,
        listed: committee,
      });
    }

    Ok(())
  }
}
