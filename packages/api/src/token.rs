//! Unverified access-token inspection.
//!
//! The backend issues compact JWTs. This module decodes the payload
//! segment **without verifying the signature** and reads the user-id
//! claim. Claims read this way are advisory, not trusted: they are used
//! only to stamp ownership on newly created publications, never for an
//! authorization decision. A signature-verifying implementation could be
//! substituted here without touching any caller.

use base64::engine::general_purpose::{URL_SAFE, URL_SAFE_NO_PAD};
use base64::Engine;

/// Claim carrying the user id in the backend's tokens.
const USER_ID_CLAIM: &str = "_id";

/// Extract the user-id claim from a bearer token.
///
/// Returns `None` if the token is not three dot-separated segments, the
/// payload is not base64url, the payload is not JSON, or the claim is
/// missing. Callers must treat `None` as a hard error (it blocks
/// publication creation) — never substitute a default id.
pub fn extract_user_id(token: &str) -> Option<String> {
    let mut segments = token.split('.');
    let _header = segments.next()?;
    let payload = segments.next()?;
    let _signature = segments.next()?;
    if segments.next().is_some() {
        return None;
    }

    let bytes = decode_segment(payload)?;
    let claims: serde_json::Value = serde_json::from_slice(&bytes).ok()?;
    claims
        .get(USER_ID_CLAIM)?
        .as_str()
        .map(str::to_string)
}

// Tokens in the wild come both padded and unpadded.
fn decode_segment(segment: &str) -> Option<Vec<u8>> {
    URL_SAFE_NO_PAD
        .decode(segment)
        .or_else(|_| URL_SAFE.decode(segment))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn make_token(claims: serde_json::Value) -> String {
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
        let payload = URL_SAFE_NO_PAD.encode(claims.to_string().as_bytes());
        format!("{header}.{payload}.signature")
    }

    #[test]
    fn test_extracts_user_id_claim() {
        let token = make_token(json!({ "_id": "user-42", "iat": 1700000000 }));
        assert_eq!(extract_user_id(&token), Some("user-42".to_string()));
    }

    #[test]
    fn test_missing_claim_is_none() {
        let token = make_token(json!({ "sub": "user-42" }));
        assert_eq!(extract_user_id(&token), None);
    }

    #[test]
    fn test_accepts_padded_payload() {
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"none"}"#);
        let payload = URL_SAFE.encode(json!({ "_id": "u" }).to_string().as_bytes());
        let token = format!("{header}.{payload}.sig");
        assert_eq!(extract_user_id(&token), Some("u".to_string()));
    }

    #[test]
    fn test_rejects_non_jwt_shapes() {
        assert_eq!(extract_user_id(""), None);
        assert_eq!(extract_user_id("opaque-token"), None);
        assert_eq!(extract_user_id("a.b"), None);
        assert_eq!(extract_user_id("a.b.c.d"), None);
    }

    #[test]
    fn test_rejects_garbage_payload() {
        assert_eq!(extract_user_id("h.!!!not-base64!!!.s"), None);

        let not_json = URL_SAFE_NO_PAD.encode(b"plain text");
        assert_eq!(extract_user_id(&format!("h.{not_json}.s")), None);
    }

    #[test]
    fn test_non_string_claim_is_none() {
        let token = make_token(json!({ "_id": 42 }));
        assert_eq!(extract_user_id(&token), None);
    }
}
