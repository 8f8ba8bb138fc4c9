//! Parsing of the signed form into fields plus the received hash.

use std::collections::BTreeMap;

use crate::signature::AuthError;

/// Name of the reserved field carrying the signature.
pub(crate) const HASH_KEY: &str = "hash";

/// Fields of a signed web-app data string, without `hash`, in canonical (byte-wise sorted) order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthPayload {
    fields: BTreeMap<String, String>,
    hash: String,
}

impl AuthPayload {
    /// Splits `raw` on `&`, each token into key and value on its single `=`.
    /// Keys and values are kept exactly as received; decoding is up to the caller.
    /// A token with no `=` or more than one (including an empty token) or a missing `hash`
    /// is an error. Later duplicates overwrite earlier ones.
    pub(crate) fn parse(raw: &str) -> Result<Self, AuthError> {
        let mut fields = BTreeMap::new();
        for token in raw.split('&') {
            let mut parts = token.split('=');
            match (parts.next(), parts.next(), parts.next()) {
                (Some(key), Some(value), None) => {
                    fields.insert(key.to_string(), value.to_string());
                }
                _ => return Err(AuthError::MalformedToken),
            }
        }
        let hash = fields.remove(HASH_KEY).ok_or(AuthError::MissingHash)?;
        Ok(Self { fields, hash })
    }

    /// `key=value` lines sorted by key, joined with `\n`; the message that gets signed.
    pub fn data_check_string(&self) -> String {
        data_check_string(self.fields.iter())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    pub fn fields(&self) -> &BTreeMap<String, String> {
        &self.fields
    }

    /// The signature as received.
    pub fn hash(&self) -> &str {
        &self.hash
    }
}

pub(crate) fn data_check_string<'a, I>(fields: I) -> String
where
    I: IntoIterator<Item = (&'a String, &'a String)>,
{
    fields
        .into_iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join("\n")
}
