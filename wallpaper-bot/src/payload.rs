//! Schema of the JSON document the web app relays through the signed `payload` field.

use serde::Deserialize;
use thiserror::Error;
use url::form_urlencoded;
use webapp_auth::AuthPayload;

/// Field of the signed form that carries the JSON document.
pub const PAYLOAD_FIELD: &str = "payload";

/// Why an authenticated payload could not be acted on. Shown to the user.
#[derive(Error, Debug)]
pub enum RelayError {
    #[error("missing `{}` field", PAYLOAD_FIELD)]
    MissingPayload,

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid image url: {0}")]
    InvalidUrl(String),
}

/// Document sent by the web app, discriminated by `type`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum WebAppPayload {
    /// A generated wallpaper the user wants posted to the chat.
    Wallpaper(WallpaperShare),
    /// Any `type` this bot does not know.
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WallpaperShare {
    pub url: String,
    #[serde(default)]
    pub caption: Option<String>,
}

impl WallpaperShare {
    /// Caption under the relayed photo.
    pub fn photo_caption(&self) -> String {
        format!(
            "🎨 Your Sacred Wallpaper\n\n{}",
            self.caption.as_deref().unwrap_or_default()
        )
    }
}

impl WebAppPayload {
    pub fn from_json(json: &str) -> Result<Self, RelayError> {
        let payload: WebAppPayload = serde_json::from_str(json)?;
        if let WebAppPayload::Wallpaper(ref share) = payload {
            reqwest::Url::parse(&share.url).map_err(|_| RelayError::InvalidUrl(share.url.clone()))?;
        }
        Ok(payload)
    }

    /// Reads the document from the `payload` field of already authenticated fields,
    /// form-decoding it first (`+` is a space, then `%XX`).
    pub fn from_auth(auth: &AuthPayload) -> Result<Self, RelayError> {
        let encoded = auth.get(PAYLOAD_FIELD).ok_or(RelayError::MissingPayload)?;
        Self::from_json(&form_decode(encoded))
    }
}

/// An authenticated value holds no `&` or `=`, so the whole of it parses as one bare key.
fn form_decode(value: &str) -> String {
    form_urlencoded::parse(value.as_bytes())
        .map(|(key, _)| key)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wallpaper_with_caption() {
        let payload = WebAppPayload::from_json(
            r#"{"type":"wallpaper","url":"https://cdn.example.com/w.png","caption":"Deep focus"}"#,
        )
        .unwrap();
        let WebAppPayload::Wallpaper(share) = payload else {
            panic!("expected wallpaper");
        };
        assert_eq!(share.url, "https://cdn.example.com/w.png");
        assert_eq!(share.photo_caption(), "🎨 Your Sacred Wallpaper\n\nDeep focus");
    }

    #[test]
    fn test_wallpaper_without_caption() {
        for json in [
            r#"{"type":"wallpaper","url":"https://cdn.example.com/w.png"}"#,
            r#"{"type":"wallpaper","url":"https://cdn.example.com/w.png","caption":null}"#,
        ] {
            let WebAppPayload::Wallpaper(share) = WebAppPayload::from_json(json).unwrap() else {
                panic!("expected wallpaper");
            };
            assert_eq!(share.photo_caption(), "🎨 Your Sacred Wallpaper\n\n");
        }
    }

    #[test]
    fn test_unknown_type_is_not_an_error() {
        let payload = WebAppPayload::from_json(r#"{"type":"subscription","plan":"premium"}"#).unwrap();
        assert_eq!(payload, WebAppPayload::Unknown);
    }

    #[test]
    fn test_form_decode() {
        assert_eq!(form_decode("%7B%22a%22%3A%22x%26y%3Dz%22%7D"), r#"{"a":"x&y=z"}"#);
        assert_eq!(form_decode("a+b%2Bc"), "a b+c");
        assert_eq!(form_decode(r#"{"id":1}"#), r#"{"id":1}"#);
        assert_eq!(form_decode(""), "");
    }

    #[test]
    fn test_bad_documents_are_errors() {
        assert!(matches!(WebAppPayload::from_json("not json"), Err(RelayError::Json(_))));
        assert!(matches!(WebAppPayload::from_json(r#"{"url":"https://x.y"}"#), Err(RelayError::Json(_))));
        assert!(matches!(
            WebAppPayload::from_json(r#"{"type":"wallpaper"}"#),
            Err(RelayError::Json(_))
        ));
        assert!(matches!(
            WebAppPayload::from_json(r#"{"type":"wallpaper","url":"w.png"}"#),
            Err(RelayError::InvalidUrl(_))
        ));
    }
}
