//! Key derivation, signing and verification.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;
use thiserror::Error;
use tracing::debug;

use crate::payload::{self, AuthPayload};
use crate::secret::SharedSecret;

type HmacSha256 = Hmac<Sha256>;

/// Fixed message used to derive the signing key from the shared secret.
pub const WEB_APP_DATA_KEY: &[u8] = b"WebAppData";

/// Why a data string was rejected. Never leaves the crate.
#[derive(Error, Debug)]
pub(crate) enum AuthError {
    #[error("token without exactly one '='")]
    MalformedToken,

    #[error(transparent)]
    Key(#[from] KeyRejected),

    #[error("no hash field")]
    MissingHash,

    #[error("signature mismatch")]
    SignatureMismatch,
}

/// Opaque rejection returned by [`authenticate`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("invalid web app data")]
pub struct Invalid;

/// The MAC implementation refused the key.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("HMAC key rejected")]
pub struct KeyRejected;

fn hmac_sha256(key: &[u8], message: &[u8]) -> Result<[u8; 32], KeyRejected> {
    let mut mac = <HmacSha256 as Mac>::new_from_slice(key).map_err(|_| KeyRejected)?;
    mac.update(message);
    let mut out = [0u8; 32];
    out.copy_from_slice(&mac.finalize().into_bytes());
    Ok(out)
}

/// HMAC-SHA256 keyed by the shared secret over `WebAppData`; raw bytes.
pub fn derive_secret_key(secret: &SharedSecret) -> Result<[u8; 32], KeyRejected> {
    hmac_sha256(secret.as_bytes(), WEB_APP_DATA_KEY)
}

fn sign_check_string(check_string: &str, secret: &SharedSecret) -> Result<String, KeyRejected> {
    let key = derive_secret_key(secret)?;
    Ok(hex::encode(hmac_sha256(&key, check_string.as_bytes())?))
}

/// Lowercase hex signature for `fields` (keys other than `hash`, any order).
/// Values are signed as given, so pass them exactly as they will be sent.
pub fn sign<'a, I>(fields: I, secret: &SharedSecret) -> Result<String, KeyRejected>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let sorted: std::collections::BTreeMap<String, String> = fields
        .into_iter()
        .filter(|(k, _)| *k != payload::HASH_KEY)
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    sign_check_string(&payload::data_check_string(sorted.iter()), secret)
}

fn check(raw: &str, secret: &SharedSecret) -> Result<AuthPayload, AuthError> {
    let payload = AuthPayload::parse(raw)?;
    let expected = sign_check_string(&payload.data_check_string(), secret)?;
    if bool::from(expected.as_bytes().ct_eq(payload.hash().as_bytes())) {
        Ok(payload)
    } else {
        Err(AuthError::SignatureMismatch)
    }
}

/// Checks `raw` and returns its fields when the signature matches.
pub fn authenticate(raw: &str, secret: &SharedSecret) -> Result<AuthPayload, Invalid> {
    check(raw, secret).map_err(|e| {
        debug!(reason = %e, "web app data rejected");
        Invalid
    })
}

/// True iff `raw` is well formed and carries a valid signature for `secret`.
pub fn validate(raw: &str, secret: &SharedSecret) -> bool {
    authenticate(raw, secret).is_ok()
}
