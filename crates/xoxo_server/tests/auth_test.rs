//! Tests for password hashing and token issuance.

use xoxo_server::{Claims, Crypto, password};

#[test]
fn test_hash_and_verify_round_trip() {
    let hash = password::hash("hunter2!").expect("Hash failed");
    assert!(password::verify("hunter2!", &hash));
}

#[test]
fn test_verify_rejects_wrong_password() {
    let hash = password::hash("hunter2!").expect("Hash failed");
    assert!(!password::verify("hunter3!", &hash));
}

#[test]
fn test_verify_rejects_malformed_hash() {
    assert!(!password::verify("hunter2!", "not-a-phc-string"));
}

#[test]
fn test_hashes_are_salted() {
    let first = password::hash("hunter2!").expect("Hash failed");
    let second = password::hash("hunter2!").expect("Hash failed");
    assert_ne!(first, second, "Each hash must carry a fresh salt");
}

#[test]
fn test_token_round_trip() {
    let crypto = Crypto::new(b"test-secret");
    let claims = Claims::new("alice".to_string());
    let token = crypto.encode(&claims).expect("Encode failed");

    let decoded = crypto.decode(&token).expect("Decode failed");
    assert_eq!(decoded.username(), "alice");
    assert_eq!(
        decoded.exp - decoded.iat,
        Crypto::duration().as_secs() as i64
    );
}

#[test]
fn test_decode_rejects_wrong_secret() {
    let token = Crypto::new(b"test-secret")
        .encode(&Claims::new("alice".to_string()))
        .expect("Encode failed");
    assert!(Crypto::new(b"other-secret").decode(&token).is_err());
}

#[test]
fn test_decode_rejects_tampered_token() {
    let crypto = Crypto::new(b"test-secret");
    let mut token = crypto
        .encode(&Claims::new("alice".to_string()))
        .expect("Encode failed");
    token.push('A');
    assert!(crypto.decode(&token).is_err());
}
