//! Property-based tests for access token issue and verification
//!
//! These tests verify:
//! - Issued tokens roundtrip through verification for any valid username
//! - Malformed token strings never cause panics and are always rejected
//! - Tampering with the payload or signature segment is always detected
//! - Signing key length validation holds at the 32-byte boundary

use chrono::{DateTime, Duration, Utc};
use doorman_core::{AuthConfig, TokenError, TokenService, TOKEN_TYPE_ACCESS};
use proptest::prelude::*;

const TEST_KEY: &str = "proptest-signing-key-32-bytes-ok!!";

/// Fixed issue instant so shrunken failures are reproducible.
fn issue_instant() -> DateTime<Utc> {
    DateTime::from_timestamp(1_700_000_000, 0).unwrap()
}

fn test_service() -> TokenService {
    TokenService::new(&AuthConfig::new(TEST_KEY).unwrap())
}

// ============================================================================
// Strategies
// ============================================================================

/// Usernames the validation layer would let through
fn arb_username() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_]{3,20}"
}

/// Generate malformed token strings
fn arb_malformed_token() -> impl Strategy<Value = String> {
    prop_oneof![
        // No dots at all
        "[a-zA-Z0-9_-]{10,60}",
        // Two segments, signature missing
        "[a-zA-Z0-9_-]{10,20}\\.[a-zA-Z0-9_-]{10,20}",
        // Four segments
        "[a-zA-Z0-9_-]{5,10}\\.[a-zA-Z0-9_-]{5,10}\\.[a-zA-Z0-9_-]{5,10}\\.[a-zA-Z0-9_-]{5,10}",
        // Empty parts
        Just("..".to_string()),
        Just(".".to_string()),
        Just(String::new()),
        // Bytes outside the base64url alphabet
        "[!@#$%^&*()]{5,20}\\.[!@#$%^&*()]{5,20}\\.[!@#$%^&*()]{5,20}",
        // JWT-shaped but random contents
        "[a-zA-Z0-9_-]{20,40}\\.[a-zA-Z0-9_-]{20,60}\\.[a-zA-Z0-9_-]{43}",
    ]
}

/// Generate signing keys of 32 bytes or more
fn arb_valid_key() -> impl Strategy<Value = String> {
    prop::collection::vec(any::<u8>(), 32..64)
        .prop_map(|bytes| bytes.iter().map(|b| (b % 94 + 33) as char).collect())
}

/// Generate signing keys under 32 bytes
fn arb_short_key() -> impl Strategy<Value = String> {
    prop::collection::vec(any::<u8>(), 1..32)
        .prop_map(|bytes| bytes.iter().map(|b| (b % 94 + 33) as char).collect())
}

// ============================================================================
// Signing Key Validation Properties
// ============================================================================

proptest! {
    /// Property: keys of 32 bytes or more are accepted
    #[test]
    fn prop_long_enough_key_accepted(key in arb_valid_key()) {
        let result = AuthConfig::new(key.as_str());
        prop_assert!(result.is_ok(), "Key of {} bytes should be valid", key.len());
    }

    /// Property: keys under 32 bytes are rejected
    #[test]
    fn prop_short_key_rejected(key in arb_short_key()) {
        let result = AuthConfig::new(key.as_str());
        prop_assert!(result.is_err(), "Key of {} bytes should be rejected", key.len());
    }
}

// ============================================================================
// Issue/Verify Properties
// ============================================================================

proptest! {
    /// Property: issued tokens verify and carry the claims they were built from
    #[test]
    fn prop_issued_tokens_roundtrip(
        username in arb_username(),
        ttl_secs in 60i64..86_400i64,
    ) {
        let service = test_service();
        let issued = issue_instant();
        let token = service
            .issue_with_ttl(&username, issued, Duration::seconds(ttl_secs))
            .unwrap();

        let claims = service.verify(&token, issued).unwrap();
        prop_assert_eq!(claims.username, username);
        prop_assert_eq!(claims.iat, issued.timestamp());
        prop_assert_eq!(claims.exp, issued.timestamp() + ttl_secs);
        prop_assert_eq!(claims.token_type, TOKEN_TYPE_ACCESS);
    }

    /// Property: a token is live one second before expiry and dead at it
    #[test]
    fn prop_expiry_boundary_is_exact(
        username in arb_username(),
        ttl_secs in 60i64..86_400i64,
    ) {
        let service = test_service();
        let issued = issue_instant();
        let token = service
            .issue_with_ttl(&username, issued, Duration::seconds(ttl_secs))
            .unwrap();

        let last_live = issued + Duration::seconds(ttl_secs - 1);
        prop_assert!(service.verify(&token, last_live).is_ok());

        let expiry = issued + Duration::seconds(ttl_secs);
        prop_assert_eq!(service.verify(&token, expiry), Err(TokenError::Expired));
    }
}

// ============================================================================
// Malformed Input Properties
// ============================================================================

proptest! {
    /// Property: malformed tokens should never panic, always return an error
    #[test]
    fn prop_malformed_token_never_panics(token in arb_malformed_token()) {
        let result = std::panic::catch_unwind(|| {
            let service = test_service();
            let _ = service.verify(&token, issue_instant());
        });
        prop_assert!(result.is_ok(), "Verification should not panic for: {:?}", token);
    }

    /// Property: malformed tokens are always rejected
    #[test]
    fn prop_malformed_token_rejected(token in arb_malformed_token()) {
        let service = test_service();
        prop_assert!(service.verify(&token, issue_instant()).is_err());
    }

    /// Property: unverified decoding is safe on arbitrary input
    #[test]
    fn prop_decode_unverified_never_panics(token in arb_malformed_token()) {
        prop_assert!(TokenService::decode_unverified(&token).is_none());
    }
}

// ============================================================================
// Tampering Properties
// ============================================================================

proptest! {
    /// Property: any character change in the signature segment is detected
    #[test]
    fn prop_signature_tampering_detected(
        username in arb_username(),
        idx in 0usize..43usize,
        repl in "[A-Za-z0-9_-]",
    ) {
        let service = test_service();
        let now = issue_instant();
        let token = service.issue(&username, now).unwrap();
        let (message, signature) = token.rsplit_once('.').unwrap();

        let repl = repl.chars().next().unwrap();
        if idx < signature.len() && signature.as_bytes()[idx] != repl as u8 {
            let mut sig_bytes = signature.as_bytes().to_vec();
            sig_bytes[idx] = repl as u8;
            let tampered = format!("{message}.{}", String::from_utf8(sig_bytes).unwrap());
            prop_assert_eq!(
                service.verify(&tampered, now),
                Err(TokenError::BadSignature)
            );
        }
    }

    /// Property: any character change in the claims segment is detected
    #[test]
    fn prop_payload_tampering_detected(
        username in arb_username(),
        idx in 0usize..80usize,
        repl in "[A-Za-z0-9_-]",
    ) {
        let service = test_service();
        let now = issue_instant();
        let token = service.issue(&username, now).unwrap();

        let segments: Vec<&str> = token.split('.').collect();
        prop_assert_eq!(segments.len(), 3);
        let payload = segments[1];

        let repl = repl.chars().next().unwrap();
        if idx < payload.len() && payload.as_bytes()[idx] != repl as u8 {
            let mut bytes = payload.as_bytes().to_vec();
            bytes[idx] = repl as u8;
            let tampered_payload = String::from_utf8(bytes).unwrap();
            let tampered = format!("{}.{tampered_payload}.{}", segments[0], segments[2]);
            prop_assert_eq!(
                service.verify(&tampered, now),
                Err(TokenError::BadSignature)
            );
        }
    }
}

// ============================================================================
// Non-Property Edge Case Tests
// ============================================================================

#[test]
fn exactly_32_byte_key_accepted() {
    assert!(AuthConfig::new("a".repeat(32)).is_ok());
}

#[test]
fn thirty_one_byte_key_rejected() {
    assert!(AuthConfig::new("a".repeat(31)).is_err());
}

#[test]
fn empty_token_is_malformed() {
    let service = test_service();
    assert_eq!(
        service.verify("", issue_instant()),
        Err(TokenError::Malformed)
    );
}

#[test]
fn dots_only_token_is_malformed() {
    let service = test_service();
    assert_eq!(
        service.verify("..", issue_instant()),
        Err(TokenError::Malformed)
    );
}
