//! End-to-end issue/verify behaviour through the public API

use minijwt::codec::{base64url, canonicalize};
use minijwt::{decode, encode, ErrorKind, FixedClock, Jwt, JwtError, Payload};
use proptest::prelude::*;
use std::sync::Arc;

const T: i64 = 1_700_000_000;

#[test]
fn test_free_functions_roundtrip() {
    let token = encode("my_name", 200, "123456");
    let subject = token.and_then(|t| decode(&t, "123456"));
    assert_eq!(subject, Ok("my_name".to_string()));
}

#[test]
fn test_concrete_scenario() -> Result<(), JwtError> {
    let clock = Arc::new(FixedClock::new(T));
    let jwt = Jwt::hs256().with_secret("123456").with_clock(clock.clone());

    let token = jwt.encoder().encode("my_name", 200)?;
    assert_eq!(
        base64url::decode(token.payload_segment()),
        Ok(br#"{"exp":1700000200,"username":"my_name"}"#.to_vec())
    );

    clock.set(T + 3);
    assert_eq!(jwt.decoder().decode(&token), Ok("my_name".to_string()));

    clock.set(T + 200);
    clock.advance_millis(999);
    assert_eq!(
        jwt.decoder().decode(&token),
        Err(JwtError::TokenExpired {
            expires_at: T + 200,
            now_ms: (T + 200) * 1000 + 999
        })
    );
    Ok(())
}

#[test]
fn test_token_has_no_padding_or_whitespace() -> Result<(), JwtError> {
    let token = encode("a subject with spaces", 60, "123456")?.into_string();
    assert!(!token.is_empty());
    assert!(!token.contains('='));
    assert!(!token.chars().any(char::is_whitespace));
    assert_eq!(token.matches('.').count(), 2);
    Ok(())
}

#[test]
fn test_every_single_byte_flip_is_rejected() -> Result<(), JwtError> {
    let clock = Arc::new(FixedClock::new(T));
    let jwt = Jwt::hs256().with_secret("123456").with_clock(clock);
    let token = jwt.encoder().encode("my_name", 200)?.into_string().into_bytes();
    let decoder = jwt.decoder();

    for index in 0..token.len() {
        for mask in [0x01_u8, 0x20, 0x80] {
            let mut tampered = token.clone();
            tampered[index] ^= mask;
            let kind = decoder.decode(&tampered).map_err(|e| e.kind());
            assert!(
                matches!(kind, Err(ErrorKind::InvalidSignature | ErrorKind::Malformed)),
                "byte {index} mask {mask:#x} gave {kind:?}"
            );
        }
    }
    Ok(())
}

#[test]
fn test_header_segment_is_fixed() {
    let token = encode("my_name", 200, "123456");
    assert_eq!(
        token.as_ref().map(|t| t.header_segment()),
        Ok("eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9")
    );
}

proptest! {
    #[test]
    fn prop_roundtrip(subject in ".*", lifetime in 1i64..1_000_000, key in proptest::collection::vec(any::<u8>(), 0..128)) {
        let clock = Arc::new(FixedClock::new(T));
        let jwt = Jwt::hs256().with_secret(key).with_clock(clock);
        let token = jwt.encoder().encode(&subject, lifetime);
        let decoded = token.and_then(|t| jwt.decoder().decode(&t));
        prop_assert_eq!(decoded, Ok(subject));
    }

    // HMAC zero-pads short keys, so keys that differ only in trailing NUL
    // bytes are the same key. Non-zero bytes keep the two keys distinct.
    #[test]
    fn prop_wrong_key_rejected(
        subject in "[a-z_]{1,16}",
        k1 in proptest::collection::vec(1u8..=255, 1..48),
        k2 in proptest::collection::vec(1u8..=255, 1..48),
    ) {
        prop_assume!(k1 != k2);
        let token = encode(&subject, 200, &k1);
        let decoded = token.and_then(|t| decode(&t, &k2));
        prop_assert_eq!(decoded, Err(JwtError::InvalidSignature));
    }

    #[test]
    fn prop_payload_segment_is_deterministic(subject in ".*", expires_at in any::<i64>()) {
        let payload = Payload::new(subject, expires_at);
        let a = canonicalize(&payload).map(|b| base64url::encode(b));
        let b = canonicalize(&payload).map(|b| base64url::encode(b));
        prop_assert_eq!(a, b);

        let jwt = Jwt::hs256().with_secret("123456");
        let first = jwt.encoder().encode_payload(&payload);
        let second = jwt.encoder().encode_payload(&payload);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_base64url_roundtrip(bytes in proptest::collection::vec(any::<u8>(), 0..256)) {
        let encoded = base64url::encode(&bytes);
        prop_assert!(!encoded.contains('='));
        prop_assert!(!encoded.contains('+'));
        prop_assert!(!encoded.contains('/'));
        prop_assert_eq!(base64url::decode(&encoded), Ok(bytes));
    }
}
