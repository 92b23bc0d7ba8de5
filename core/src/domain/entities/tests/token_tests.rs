use crate::domain::entities::token::*;
use crate::domain::entities::user::Permission;
use chrono::{Duration, TimeZone, Utc};

#[test]
fn test_session_claims_expiry_window() {
    let issued = Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap();
    let claims = SessionClaims::new(
        Some("a@x.com".to_string()),
        "fp".to_string(),
        3,
        Permission::Patient,
        issued,
        Duration::minutes(SESSION_TOKEN_EXPIRY_MINUTES),
    );

    assert_eq!(claims.exp - claims.iat, 2 * 60 * 60);
    assert_eq!(claims.aud, SESSION_AUDIENCE);
    assert!(!claims.is_expired_at(issued + Duration::seconds(7199)));
    assert!(claims.is_expired_at(issued + Duration::hours(2)));
}

#[test]
fn test_session_expiry_truncates_to_whole_seconds() {
    let issued = Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap() + Duration::milliseconds(900);
    let claims = SessionClaims::new(
        None,
        "fp".to_string(),
        3,
        Permission::Patient,
        issued,
        Duration::minutes(SESSION_TOKEN_EXPIRY_MINUTES),
    );

    let boundary = Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap();
    assert_eq!(claims.iat, issued.timestamp());
    assert_eq!(claims.exp, boundary.timestamp());
    assert!(!claims.is_expired_at(boundary - Duration::milliseconds(1)));
    assert!(claims.is_expired_at(boundary));
    assert!(claims.is_expired_at(issued + Duration::hours(2) - Duration::milliseconds(100)));
}

#[test]
fn test_renewed_claims_keep_identity() {
    let issued = Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap();
    let lifetime = Duration::minutes(SESSION_TOKEN_EXPIRY_MINUTES);
    let claims = SessionClaims::new(None, "fp".to_string(), 3, Permission::Doctor, issued, lifetime);
    let later = issued + Duration::minutes(90);
    let renewed = claims.renewed(later, lifetime);

    assert_eq!(renewed.user_id, claims.user_id);
    assert_eq!(renewed.permission, claims.permission);
    assert_eq!(renewed.pwd_fp, claims.pwd_fp);
    assert_eq!(renewed.exp, (later + lifetime).timestamp());
    assert_ne!(renewed.jti, claims.jti);
}

#[test]
fn test_reset_claims_expiry_window() {
    let issued = Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap();
    let claims = ResetClaims::new(
        "a@x.com".to_string(),
        "fp".to_string(),
        issued,
        Duration::minutes(RESET_TOKEN_EXPIRY_MINUTES),
    );

    assert_eq!(claims.exp - claims.iat, 300);
    assert_eq!(claims.aud, RESET_AUDIENCE);
    assert!(claims.is_expired_at(issued + Duration::minutes(5)));
}
