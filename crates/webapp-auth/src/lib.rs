//! # webapp-auth
//!
//! Verifies that a data string handed back by the embedded web app was signed with the bot's shared secret.
//!
//! The signed form is `key=value` tokens joined by `&` (exactly one `=` per token), one of them `hash=<lowercase hex>`. The signature is
//! HMAC-SHA256 over the sorted, newline-joined `key=value` pairs (everything except `hash`), keyed by
//! HMAC-SHA256(shared secret, `"WebAppData"`).
//!
//! Every failure collapses into `false` (or the opaque [`Invalid`]) so callers cannot tell a forged
//! signature from a malformed token.

mod payload;
mod secret;
mod signature;

pub use payload::AuthPayload;
pub use secret::SharedSecret;
pub use signature::{
    authenticate, derive_secret_key, sign, validate, Invalid, KeyRejected, WEB_APP_DATA_KEY,
};
