use crate::errors::PasswordError;
use crate::services::password::{PasswordHasher, DEFAULT_COST};

fn hasher() -> PasswordHasher {
    PasswordHasher::with_cost(4)
}

#[test]
fn test_default_cost_is_14() {
    assert_eq!(PasswordHasher::default().cost(), DEFAULT_COST);
    assert_eq!(DEFAULT_COST, 14);
}

#[test]
fn test_hash_then_verify() {
    let hasher = hasher();
    for password in ["pw", "correct horse battery staple", "пароль-✓", " "] {
        let hash = hasher.hash(password).unwrap();
        assert_ne!(hash, password);
        assert!(hasher.verify(&hash, password).is_ok());
    }
}

#[test]
fn test_verify_rejects_other_password() {
    let hasher = hasher();
    let hash = hasher.hash("pw").unwrap();
    assert_eq!(hasher.verify(&hash, "pw "), Err(PasswordError::Mismatch));
    assert_eq!(hasher.verify(&hash, "PW"), Err(PasswordError::Mismatch));
}

#[test]
fn test_hash_is_salted() {
    let hasher = hasher();
    assert_ne!(hasher.hash("pw").unwrap(), hasher.hash("pw").unwrap());
}

#[test]
fn test_malformed_hash_is_mismatch() {
    assert_eq!(hasher().verify("not-a-bcrypt-hash", "pw"), Err(PasswordError::Mismatch));
}

#[test]
fn test_fingerprint_is_stable_and_distinct() {
    let hasher = hasher();
    let first = hasher.hash("pw").unwrap();
    let second = hasher.hash("pw").unwrap();

    assert_eq!(PasswordHasher::fingerprint(&first), PasswordHasher::fingerprint(&first));
    assert_ne!(PasswordHasher::fingerprint(&first), PasswordHasher::fingerprint(&second));
    assert_eq!(PasswordHasher::fingerprint(&first).len(), 64);
}

#[tokio::test]
async fn test_blocking_variants() {
    let hasher = hasher();
    let hash = hasher.hash_blocking("pw").await.unwrap();
    assert!(hasher.verify_blocking(&hash, "pw").await.is_ok());
    assert_eq!(hasher.verify_blocking(&hash, "nope").await, Err(PasswordError::Mismatch));
}
