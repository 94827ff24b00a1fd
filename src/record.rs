//! Persisted form of a credential digest.

use serde::{Deserialize, Serialize};

/// The `{digest, salt}` pair a caller stores, both lowercase hex.
///
/// This crate never writes it anywhere itself; the binary serializes it to
/// JSON so it can be saved and fed back to `verify`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct StoredCredential {
    digest: String,
    salt: String,
}

impl StoredCredential {
    pub fn new(digest: impl Into<String>, salt: impl Into<String>) -> Self {
        Self {
            digest: digest.into(),
            salt: salt.into(),
        }
    }

    pub fn digest(&self) -> &str {
        &self.digest
    }

    pub fn salt(&self) -> &str {
        &self.salt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_field_names() {
        let record = StoredCredential::new("abcd", "0011");
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"digest":"abcd","salt":"0011"}"#);
    }

    #[test]
    fn parses_stored_json() {
        let record: StoredCredential =
            serde_json::from_str(r#"{"salt":"890c5970bb07262e","digest":"ff"}"#).unwrap();
        assert_eq!(record.salt(), "890c5970bb07262e");
        assert_eq!(record.digest(), "ff");
    }

    #[test]
    fn missing_field_fails() {
        assert!(serde_json::from_str::<StoredCredential>(r#"{"digest":"ff"}"#).is_err());
    }
}
