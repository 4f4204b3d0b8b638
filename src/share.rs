//! Shareable-token codec
//!
//! Items are shared as opaque URL-safe tokens: the payload is serialized
//! to JSON, percent-encoded with the component character set, wrapped in
//! standard base64, and percent-encoded once more so the token survives
//! any URL context unchanged.
//!
//! Decoding is total: any malformed token yields `None`, never an error.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Characters escaped by `encodeURIComponent`
///
/// Everything non-alphanumeric except `-_.!~*'()`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Encode a payload into a URL-safe share token
pub fn encode<P: Serialize>(payload: &P) -> Option<String> {
    let json = match serde_json::to_string(payload) {
        Ok(json) => json,
        Err(e) => {
            tracing::warn!("Error encoding share payload: {}", e);
            return None;
        }
    };
    let escaped = utf8_percent_encode(&json, COMPONENT).to_string();
    let b64 = STANDARD.encode(escaped.as_bytes());
    Some(utf8_percent_encode(&b64, COMPONENT).to_string())
}

/// Decode a share token back into a payload
///
/// Returns `None` for any malformed token, whether the damage is in the
/// percent layer, the base64 layer, or the JSON itself.
pub fn decode<P: DeserializeOwned>(token: &str) -> Option<P> {
    let unescaped = percent_decode_str(token).decode_utf8().ok()?;
    let bytes = STANDARD.decode(unescaped.as_bytes()).ok()?;
    let escaped_json = std::str::from_utf8(&bytes).ok()?;
    let json = percent_decode_str(escaped_json).decode_utf8().ok()?;
    match serde_json::from_str(&json) {
        Ok(payload) => Some(payload),
        Err(e) => {
            tracing::debug!("Ignoring malformed share token: {}", e);
            None
        }
    }
}

/// Render a full share link from a base URL, query parameter, and token
pub fn share_url(base_url: &str, param: &str, token: &str) -> String {
    let separator = if base_url.contains('?') { '&' } else { '?' };
    format!("{}{}{}={}", base_url, separator, param, token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Payload {
        text: String,
    }

    #[test]
    fn test_round_trip() {
        let payload = Payload {
            text: "De knappe kapper knipt en kapt knap.".to_string(),
        };
        let token = encode(&payload).expect("encode failed");
        let decoded: Payload = decode(&token).expect("decode failed");
        assert_eq!(decoded, payload);
    }

    #[test]
    fn test_round_trip_non_ascii() {
        let payload = Payload {
            text: "Tekst met ëïöü, emoji 💀 en \"quotes\" & ampersands?".to_string(),
        };
        let token = encode(&payload).expect("encode failed");
        let decoded: Payload = decode(&token).expect("decode failed");
        assert_eq!(decoded, payload);
    }

    #[test]
    fn test_token_is_url_safe() {
        let payload = Payload {
            text: "a+b/c=d&e?f#g h".to_string(),
        };
        let token = encode(&payload).expect("encode failed");
        // No characters that would need escaping in a query string.
        assert!(!token.contains('+'));
        assert!(!token.contains('/'));
        assert!(!token.contains('='));
        assert!(!token.contains('&'));
        assert!(!token.contains('?'));
        assert!(!token.contains(' '));
    }

    #[test]
    fn test_decode_rejects_junk() {
        assert!(decode::<Payload>("not-a-token").is_none());
        assert!(decode::<Payload>("").is_none());
        assert!(decode::<Payload>("%zz%zz").is_none());
        // Valid base64 but not JSON inside.
        let b64 = STANDARD.encode("hello world");
        assert!(decode::<Payload>(&b64).is_none());
    }

    #[test]
    fn test_decode_rejects_wrong_shape() {
        // Valid token for a different payload shape.
        #[derive(Serialize)]
        struct Other {
            naam: u32,
        }
        let token = encode(&Other { naam: 1 }).unwrap();
        assert!(decode::<Payload>(&token).is_none());
    }

    #[test]
    fn test_decode_rejects_truncated_token() {
        let payload = Payload {
            text: "iets langs genoeg om te knippen".to_string(),
        };
        let token = encode(&payload).unwrap();
        let truncated = &token[..token.len() / 2];
        assert!(decode::<Payload>(truncated).is_none());
    }

    #[test]
    fn test_share_url() {
        assert_eq!(
            share_url("https://example.org/haiku", "h", "abc"),
            "https://example.org/haiku?h=abc"
        );
        assert_eq!(
            share_url("https://example.org/?lang=nl", "h", "abc"),
            "https://example.org/?lang=nl&h=abc"
        );
    }
}
