//! Password digest for the credential store.
//!
//! A single unsalted SHA-256 pass over the UTF-8 password bytes, hex
//! encoded. This is weak by modern standards — no per-user salt, no
//! stretching — and must stay as-is: rows already persisted with this
//! digest have to keep verifying. Changing the scheme requires a
//! migration for every stored hash, not a silent swap.

use sha2::{Digest, Sha256};

/// Digest a password for storage or comparison.
pub fn hash_password(password: &str) -> String {
  let mut hasher = Sha256::new();
  hasher.update(password.as_bytes());
  hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn known_vector() {
    // SHA-256("abc"), NIST FIPS 180-2 test vector.
    assert_eq!(
      hash_password("abc"),
      "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
    );
  }

  #[test]
  fn deterministic_and_distinct() {
    assert_eq!(hash_password("pw1"), hash_password("pw1"));
    assert_ne!(hash_password("pw1"), hash_password("pw2"));
  }

  #[test]
  fn digest_is_fixed_length_hex() {
    let digest = hash_password("anything at all");
    assert_eq!(digest.len(), 64);
    assert!(digest.chars().all(|c| c.is_ascii_hexdigit()));
  }
}
