pub const MIN_ACCOUNT_NAME_LENGTH: usize = 1;
pub const MAX_ACCOUNT_NAME_LENGTH: usize = 63;

/// Checks the account naming rules.
///
/// A name is a dot separated list of segments. Every segment starts with
/// a lowercase letter, ends with a lowercase letter or a digit, and only
/// contains lowercase letters, digits and dashes in between.
pub fn is_valid_name(name: &str) -> bool {
  let len = name.len();
  if !(MIN_ACCOUNT_NAME_LENGTH..=MAX_ACCOUNT_NAME_LENGTH).contains(&len) {
    return false;
  }

  name.split('.').all(|segment| {
    let bytes = segment.as_bytes();
    let (Some(first), Some(last)) = (bytes.first(), bytes.last()) else {
      return false;
    };

    bytes.len() >= MIN_ACCOUNT_NAME_LENGTH
      && first.is_ascii_lowercase()
      && (last.is_ascii_lowercase() || last.is_ascii_digit())
      && bytes[1..bytes.len().saturating_sub(1).max(1)]
        .iter()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == b'-')
  })
}

/// Names that contain a digit, a separator, or no vowels at all are
/// "cheap". Premium names are the short pronounceable ones.
pub fn is_cheap_name(name: &str) -> bool {
  let mut has_vowel = false;
  for c in name.chars() {
    match c {
      '0'..='9' | '.' | '-' | '/' => return true,
      'a' | 'e' | 'i' | 'o' | 'u' | 'y' => has_vowel = true,
      _ => {}
    }
  }
  !has_vowel
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn valid_names() {
    for name in ["a", "alice", "alice-1", "a1", "dascoin.vault", "x.y.z9"] {
      assert!(is_valid_name(name), "{name} should be valid");
    }
  }

  #[test]
  fn invalid_names() {
    let too_long = "a".repeat(MAX_ACCOUNT_NAME_LENGTH + 1);
    for name in [
      "",
      "Alice",
      "1alice",
      "alice-",
      "alice..bob",
      ".alice",
      "alice.",
      "al_ice",
      "al ice",
      too_long.as_str(),
    ] {
      assert!(!is_valid_name(name), "{name} should be invalid");
    }
  }

  #[test]
  fn cheap_names() {
    assert!(is_cheap_name("alice1"));
    assert!(is_cheap_name("a.b"));
    assert!(is_cheap_name("brr"));
    assert!(!is_cheap_name("alice"));
  }
}
