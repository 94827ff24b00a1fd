use getrandom::fill;

use crate::error::DigestError;

/// Fill buffer with cryptographically secure random bytes
fn secure_random(buf: &mut [u8]) -> Result<(), DigestError> {
    fill(buf).map_err(DigestError::RandomSource)
}

/// Generate a salt of `len` bytes from the OS random source.
///
/// A failed read is returned as-is; there is no retry.
pub fn generate_salt(len: usize) -> Result<Vec<u8>, DigestError> {
    let mut salt = vec![0u8; len];
    secure_random(&mut salt)?;
    Ok(salt)
}
