//! Salted SHA-256 credential digests.
//!
//! ```no_run
//! use saltpass::{CredentialDigest, DigestError};
//!
//! let mut cd = CredentialDigest::new();
//! cd.generate("hunter2")?;
//! let (digest, salt) = (cd.digest_hex().to_owned(), cd.salt_hex().to_owned());
//!
//! let mut checker = CredentialDigest::checker(digest, salt);
//! match checker.verify("hunter3") {
//!     Err(DigestError::IncorrectSecret) => println!("wrong password"),
//!     other => other?,
//! }
//! # Ok::<(), DigestError>(())
//! ```

mod digest;
mod error;
mod random;
mod record;

pub use crate::digest::{CredentialDigest, DEFAULT_SALT_LENGTH};
pub use crate::error::DigestError;
pub use crate::record::StoredCredential;
