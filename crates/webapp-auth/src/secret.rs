//! Shared secret held by the bot backend.

use std::fmt;

/// Process-wide secret used to derive the signing key. Never printed.
#[derive(Clone, PartialEq, Eq)]
pub struct SharedSecret(Vec<u8>);

impl SharedSecret {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for SharedSecret {
    fn from(s: &str) -> Self {
        Self::new(s.as_bytes())
    }
}

impl From<String> for SharedSecret {
    fn from(s: String) -> Self {
        Self::new(s.into_bytes())
    }
}

impl fmt::Debug for SharedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SharedSecret(***)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_is_redacted() {
        let secret = SharedSecret::from("super-secret-value");
        let printed = format!("{:?}", secret);
        assert_eq!(printed, "SharedSecret(***)");
        assert!(!printed.contains("super"));
    }

    #[test]
    fn test_from_string_and_str_agree() {
        assert_eq!(SharedSecret::from("abc"), SharedSecret::from("abc".to_string()));
        assert_eq!(SharedSecret::from("abc").as_bytes(), b"abc");
        assert!(SharedSecret::new(Vec::new()).is_empty());
    }
}
