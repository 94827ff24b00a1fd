use std::fmt;

/// Failures surfaced by [`CredentialDigest`](crate::CredentialDigest).
///
/// `IncorrectSecret` is the expected "wrong password" outcome. The other two
/// variants are infrastructure or data-integrity faults and should not be
/// reported to a user as a bad credential.
#[derive(Debug, Clone, PartialEq)]
pub enum DigestError {
    /// The OS random source could not supply a salt.
    RandomSource(getrandom::Error),
    /// The stored salt is not valid hexadecimal.
    Decode(hex::FromHexError),
    /// The candidate secret does not match the stored digest.
    IncorrectSecret,
}

impl DigestError {
    pub fn is_incorrect_secret(&self) -> bool {
        matches!(self, DigestError::IncorrectSecret)
    }
}

impl fmt::Display for DigestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DigestError::RandomSource(e) => write!(f, "OS random generator unavailable: {e}"),
            DigestError::Decode(e) => write!(f, "stored salt is not valid hex: {e}"),
            DigestError::IncorrectSecret => write!(f, "incorrect secret"),
        }
    }
}

impl std::error::Error for DigestError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DigestError::RandomSource(e) => Some(e),
            DigestError::Decode(e) => Some(e),
            DigestError::IncorrectSecret => None,
        }
    }
}

impl From<getrandom::Error> for DigestError {
    fn from(e: getrandom::Error) -> Self {
        DigestError::RandomSource(e)
    }
}

impl From<hex::FromHexError> for DigestError {
    fn from(e: hex::FromHexError) -> Self {
        DigestError::Decode(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn incorrect_secret_is_distinguishable() {
        let err = DigestError::IncorrectSecret;
        assert!(err.is_incorrect_secret());
        assert_eq!(err, DigestError::IncorrectSecret);
        assert!(err.source().is_none());
        assert_eq!(err.to_string(), "incorrect secret");
    }

    #[test]
    fn decode_error_keeps_source() {
        let err = DigestError::from(hex::FromHexError::OddLength);
        assert!(!err.is_incorrect_secret());
        assert!(err.source().is_some());
        assert!(err.to_string().contains("not valid hex"));
    }

    #[test]
    fn random_source_error_keeps_source() {
        let err = DigestError::from(getrandom::Error::UNSUPPORTED);
        assert!(!err.is_incorrect_secret());
        assert!(err.source().is_some());
        assert!(err.to_string().contains("random generator unavailable"));
        assert_eq!(err, DigestError::RandomSource(getrandom::Error::UNSUPPORTED));
    }
}
