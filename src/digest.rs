//! Salted credential digests.
//!
//! A digest is `H(secret || salt)` with the salt appended after the secret
//! bytes. Both values are kept as lowercase hex so the caller can persist them
//! however it likes. There is no key stretching: this is a single pass of the
//! configured hash.

use log::{debug, trace};
use sha2::digest::FixedOutputReset;
use sha2::{Digest, Sha256};

use crate::error::DigestError;
use crate::random::generate_salt;
use crate::record::StoredCredential;

/// Number of random salt bytes used by [`CredentialDigest::generate`] unless overridden.
pub const DEFAULT_SALT_LENGTH: usize = 16;

/// Generates and verifies salted digests of a secret.
///
/// The hash context `D` is owned by the instance and reset on every call, so
/// both operations take `&mut self`. Use one instance per concurrent caller.
#[derive(Debug, Clone)]
pub struct CredentialDigest<D = Sha256> {
    salt_length: usize,
    hasher: D,
    digest_hex: String,
    salt_hex: String,
}

impl CredentialDigest<Sha256> {
    /// Empty instance for [`generate`](Self::generate), SHA-256 with a 16 byte salt.
    pub fn new() -> Self {
        Self {
            salt_length: DEFAULT_SALT_LENGTH,
            hasher: Sha256::new(),
            digest_hex: String::new(),
            salt_hex: String::new(),
        }
    }

    /// Instance pre-populated with a stored digest and salt, for [`verify`](Self::verify).
    ///
    /// The strings are kept verbatim. A malformed salt only shows up as
    /// [`DigestError::Decode`] when verifying.
    pub fn checker(digest_hex: impl Into<String>, salt_hex: impl Into<String>) -> Self {
        Self {
            digest_hex: digest_hex.into(),
            salt_hex: salt_hex.into(),
            ..Self::new()
        }
    }

    /// Checker for a previously persisted [`StoredCredential`].
    pub fn from_record(record: &StoredCredential) -> Self {
        Self::checker(record.digest(), record.salt())
    }
}

impl Default for CredentialDigest<Sha256> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D> CredentialDigest<D>
where
    D: Digest + FixedOutputReset,
{
    /// Swaps the hash function, keeping salt length and any stored values.
    ///
    /// Digests produced with one algorithm never verify under another.
    pub fn with_algorithm<E>(self, hasher: E) -> CredentialDigest<E>
    where
        E: Digest + FixedOutputReset,
    {
        CredentialDigest {
            salt_length: self.salt_length,
            hasher,
            digest_hex: self.digest_hex,
            salt_hex: self.salt_hex,
        }
    }

    /// Sets how many random bytes the next [`generate`](Self::generate) draws.
    /// Does not affect verification of a stored salt.
    pub fn with_salt_length(mut self, salt_length: usize) -> Self {
        self.salt_length = salt_length;
        self
    }

    pub fn salt_length(&self) -> usize {
        self.salt_length
    }

    pub fn set_salt_length(&mut self, salt_length: usize) {
        self.salt_length = salt_length;
    }

    pub fn digest_hex(&self) -> &str {
        &self.digest_hex
    }

    pub fn salt_hex(&self) -> &str {
        &self.salt_hex
    }

    /// Snapshot of the current digest and salt for the caller to persist.
    pub fn to_record(&self) -> StoredCredential {
        StoredCredential::new(self.digest_hex.as_str(), self.salt_hex.as_str())
    }

    /// Draws a fresh salt and stores the digest of `secret` with it.
    ///
    /// Overwrites any previous digest and salt. Fails only if the OS random
    /// source fails, in which case the stored values are left untouched.
    pub fn generate(&mut self, secret: &str) -> Result<(), DigestError> {
        let salt = generate_salt(self.salt_length)?;
        let digest = self.compute(secret.as_bytes(), &salt);

        self.salt_hex = hex::encode(&salt);
        self.digest_hex = hex::encode(digest);
        debug!("generated digest with {}-byte salt", salt.len());
        Ok(())
    }

    /// Checks `candidate` against the stored digest and salt.
    ///
    /// Returns [`DigestError::Decode`] if the stored salt is not hex, and
    /// [`DigestError::IncorrectSecret`] if the digests differ. Stored values
    /// are never modified.
    pub fn verify(&mut self, candidate: &str) -> Result<(), DigestError> {
        let salt = hex::decode(&self.salt_hex)?;
        let computed = hex::encode(self.compute(candidate.as_bytes(), &salt));

        // plain string equality, not constant time
        if computed != self.digest_hex {
            trace!("digest mismatch");
            return Err(DigestError::IncorrectSecret);
        }

        trace!("digest matched");
        Ok(())
    }

    fn compute(&mut self, secret: &[u8], salt: &[u8]) -> Vec<u8> {
        Digest::reset(&mut self.hasher);
        Digest::update(&mut self.hasher, secret);
        Digest::update(&mut self.hasher, salt);
        Digest::finalize_reset(&mut self.hasher).to_vec()
    }
}
