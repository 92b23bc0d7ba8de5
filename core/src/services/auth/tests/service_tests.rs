//! Unit tests for authentication service

use std::sync::Arc;

use crate::domain::entities::user::{AccountStatus, NewUser, Permission, User};
use crate::domain::value_objects::Credentials;
use crate::errors::{AuthError, DomainError, ErrorKind, TokenError, ValidationError};
use crate::repositories::{IdentityFilter, UserRepository};
use crate::services::notification::TemplateKind;

use super::mocks::*;

fn patient(email: &str, password: &str) -> Credentials {
    Credentials::email(email, password, "PATIENT")
}

async fn stored(harness: &Harness, email: &str) -> User {
    harness
        .users
        .get(&IdentityFilter::by_email(email, Permission::Patient))
        .await
        .unwrap()
}

// ---- signup ----

#[tokio::test]
async fn test_signup_creates_pending_user_without_token() {
    let harness = Harness::new();

    let response = harness.service.signup(patient("a@x.com", "pw")).await.unwrap();

    assert_eq!(response.message, "user created successfully, please verify your registered email");
    assert!(response.token.is_none());
    let user = response.user.unwrap();
    assert_eq!(user.status, AccountStatus::Pending);
    assert_eq!(user.permission, Permission::Patient);
    assert_ne!(user.password_hash, "pw");
}

#[tokio::test]
async fn test_signup_sends_verification_code() {
    let harness = Harness::new();
    harness.service.signup(patient("a@x.com", "pw")).await.unwrap();

    let sent = harness.notifier.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].template, TemplateKind::VerificationCode);
    let code = harness.notifier.last_code_for("a@x.com").unwrap();
    assert_eq!(code.len(), 8);
}

#[tokio::test]
async fn test_signup_phone_only_sends_nothing() {
    let harness = Harness::new();
    let response = harness
        .service
        .signup(Credentials::phone("+14155550123", "pw", "DOCTOR"))
        .await
        .unwrap();

    assert!(response.user.is_some());
    assert!(harness.notifier.sent().is_empty());
}

#[tokio::test]
async fn test_signup_rejects_duplicate() {
    let harness = Harness::new();
    harness.service.signup(patient("a@x.com", "pw")).await.unwrap();

    let err = harness.service.signup(patient("a@x.com", "other")).await.unwrap_err();
    assert!(matches!(err, DomainError::Auth(AuthError::UserAlreadyExists)));
    assert_eq!(err.kind(), ErrorKind::AlreadyExists);
}

#[tokio::test]
async fn test_signup_rejects_same_email_with_new_phone() {
    let harness = Harness::new();
    let first = Credentials {
        phone: Some("+14155550123".to_string()),
        ..patient("a@x.com", "pw")
    };
    harness.service.signup(first).await.unwrap();

    let second = Credentials {
        phone: Some("+14155550199".to_string()),
        ..patient("a@x.com", "pw2")
    };
    let err = harness.service.signup(second).await.unwrap_err();
    assert!(matches!(err, DomainError::Auth(AuthError::UserAlreadyExists)));
    assert_eq!(harness.users.len().await, 1);

    let login = harness.service.login(patient("a@x.com", "pw")).await;
    assert!(login.is_ok());
}

#[tokio::test]
async fn test_signup_same_email_other_permission_allowed() {
    let harness = Harness::new();
    harness.service.signup(patient("a@x.com", "pw")).await.unwrap();
    let result = harness
        .service
        .signup(Credentials::email("a@x.com", "pw", "DOCTOR"))
        .await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_signup_validation_never_reaches_collaborators() {
    let harness = Harness::new();
    let invalid = [
        Credentials::email("a@x.com", "", "PATIENT"),
        Credentials {
            password: Some("pw".to_string()),
            permission: Some("PATIENT".to_string()),
            ..Default::default()
        },
        Credentials::email("a@x.com", "pw", ""),
        Credentials::email("a@x.com", "pw", "NURSE"),
    ];

    for credentials in invalid {
        let err = harness.service.signup(credentials).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
    }
    assert!(harness.users.is_empty().await);
    assert_eq!(harness.store.calls(), 0);
    assert!(harness.notifier.sent().is_empty());
}

#[tokio::test]
async fn test_signup_persist_failure_issues_nothing() {
    let harness = Harness::with_users(Arc::new(BrokenWritesRepository::default()));

    let err = harness.service.signup(patient("a@x.com", "pw")).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Store);
    assert_eq!(err.public_message(), "internal server error");
    assert_eq!(harness.store.calls(), 0);
    assert!(harness.notifier.sent().is_empty());
}

#[tokio::test]
async fn test_signup_succeeds_when_mail_fails() {
    let harness = Harness::new();
    harness.notifier.fail();

    let response = harness.service.signup(patient("a@x.com", "pw")).await;
    assert!(response.is_ok());
    assert_eq!(harness.notifier.sent().len(), 1);
}

// ---- login ----

#[tokio::test]
async fn test_login_returns_session_token() {
    let harness = Harness::new();
    harness.service.signup(patient("a@x.com", "pw")).await.unwrap();

    let response = harness.service.login(patient("a@x.com", "pw")).await.unwrap();
    assert_eq!(response.message, "user logged in successfully");

    let token = response.token.unwrap();
    let claims = harness.tokens.verify_session(&token).unwrap();
    let user = response.user.unwrap();
    assert_eq!(claims.user_id, user.id);
    assert_eq!(claims.email.as_deref(), Some("a@x.com"));
    assert_eq!(claims.exp - claims.iat, 2 * 60 * 60);
}

#[tokio::test]
async fn test_login_by_phone() {
    let harness = Harness::new();
    harness
        .service
        .signup(Credentials::phone("+14155550123", "pw", "MANAGER"))
        .await
        .unwrap();

    let response = harness
        .service
        .login(Credentials::phone("+14155550123", "pw", "MANAGER"))
        .await
        .unwrap();
    let claims = harness.tokens.verify_session(&response.token.unwrap()).unwrap();
    assert_eq!(claims.email, None);
    assert_eq!(claims.permission, Permission::Manager);
}

#[tokio::test]
async fn test_login_wrong_password_is_unauthorized() {
    let harness = Harness::new();
    harness.service.signup(patient("a@x.com", "pw")).await.unwrap();

    let err = harness.service.login(patient("a@x.com", "wrong")).await.unwrap_err();
    assert!(matches!(err, DomainError::Auth(AuthError::InvalidCredentials)));
    assert_eq!(err.kind(), ErrorKind::Unauthorized);
}

#[tokio::test]
async fn test_login_unknown_user_is_not_found() {
    let harness = Harness::new();
    let err = harness.service.login(patient("ghost@x.com", "pw")).await.unwrap_err();
    assert!(matches!(err, DomainError::Auth(AuthError::UserNotFound)));
}

#[tokio::test]
async fn test_login_is_scoped_by_permission() {
    let harness = Harness::new();
    harness.service.signup(patient("a@x.com", "pw")).await.unwrap();

    let err = harness
        .service
        .login(Credentials::email("a@x.com", "pw", "ADMIN"))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

// ---- refresh / validate ----

#[tokio::test]
async fn test_refresh_token_issues_new_session() {
    let harness = Harness::new();
    harness.service.signup(patient("a@x.com", "pw")).await.unwrap();
    let token = harness.service.login(patient("a@x.com", "pw")).await.unwrap().token.unwrap();

    let response = harness.service.refresh_token(&token).await.unwrap();
    assert_eq!(response.message, "token refreshed successfully");
    let refreshed = response.token.unwrap();
    assert_ne!(refreshed, token);

    let before = harness.tokens.verify_session(&token).unwrap();
    let after = harness.tokens.verify_session(&refreshed).unwrap();
    assert_eq!(before.user_id, after.user_id);
    assert_eq!(before.pwd_fp, after.pwd_fp);
}

#[tokio::test]
async fn test_refresh_rejects_reset_token() {
    let harness = Harness::new();
    let reset = harness.tokens.issue_reset("a@x.com", "hash").unwrap();

    let err = harness.service.refresh_token(&reset).await.unwrap_err();
    assert!(matches!(err, DomainError::Token(TokenError::InvalidSessionToken)));
}

#[tokio::test]
async fn test_validate_token() {
    let harness = Harness::new();
    let valid = harness.tokens.issue_session(Some("a@x.com"), "hash", 3, Permission::Patient).unwrap();
    let anonymous = harness.tokens.issue_session(None, "hash", 0, Permission::Patient).unwrap();

    assert!(harness.service.validate_token(&valid).await.unwrap());
    assert!(!harness.service.validate_token(&anonymous).await.unwrap());

    let err = harness.service.validate_token("garbage").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Unauthorized);
}

// ---- forgot / reset ----

#[tokio::test]
async fn test_forgot_password_mails_reset_link() {
    let harness = Harness::new();
    harness.service.signup(patient("a@x.com", "pw")).await.unwrap();

    let response = harness.service.forgot_password("a@x.com", "PATIENT").await.unwrap();
    assert_eq!(response.message, "reset link sent on registered mail");

    let message = harness
        .notifier
        .sent()
        .into_iter()
        .find(|m| m.template == TemplateKind::PasswordReset)
        .unwrap();
    assert!(message.data["resetLink"].starts_with(&format!("{RESET_BASE}?token=")));

    let token = harness.notifier.last_reset_token_for("a@x.com").unwrap();
    let claims = harness.tokens.verify_reset(&token).unwrap();
    assert_eq!(claims.email, "a@x.com");
}

#[tokio::test]
async fn test_forgot_password_unknown_user() {
    let harness = Harness::new();
    let err = harness.service.forgot_password("ghost@x.com", "PATIENT").await.unwrap_err();
    assert!(matches!(err, DomainError::Auth(AuthError::UserNotFound)));
    assert!(harness.notifier.sent().is_empty());
}

#[tokio::test]
async fn test_forgot_password_validates_input() {
    let harness = Harness::new();
    let err = harness.service.forgot_password("", "PATIENT").await.unwrap_err();
    assert!(matches!(err, DomainError::ValidationErr(ValidationError::MissingParam { .. })));
    let err = harness.service.forgot_password("a@x.com", "nurse").await.unwrap_err();
    assert!(matches!(err, DomainError::ValidationErr(ValidationError::InvalidParam { .. })));
}

#[tokio::test]
async fn test_reset_password_changes_password() {
    let harness = Harness::new();
    harness.service.signup(patient("a@x.com", "old")).await.unwrap();
    harness.service.forgot_password("a@x.com", "PATIENT").await.unwrap();
    let token = harness.notifier.last_reset_token_for("a@x.com").unwrap();

    let response = harness.service.reset_password("PATIENT", "new", &token).await.unwrap();
    assert_eq!(response.message, "password reset successfully");

    assert!(harness.service.login(patient("a@x.com", "new")).await.is_ok());
    let err = harness.service.login(patient("a@x.com", "old")).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Unauthorized);
}

#[tokio::test]
async fn test_reset_token_single_effect_after_password_change() {
    let harness = Harness::new();
    harness.service.signup(patient("a@x.com", "old")).await.unwrap();
    harness.service.forgot_password("a@x.com", "PATIENT").await.unwrap();
    let token = harness.notifier.last_reset_token_for("a@x.com").unwrap();

    harness.service.reset_password("PATIENT", "first", &token).await.unwrap();
    let err = harness.service.reset_password("PATIENT", "second", &token).await.unwrap_err();

    assert!(matches!(err, DomainError::Auth(AuthError::PasswordChanged)));
    assert_eq!(err.kind(), ErrorKind::Unauthorized);
}

#[tokio::test]
async fn test_reset_password_detects_out_of_band_change() {
    let harness = Harness::new();
    harness.service.signup(patient("a@x.com", "old")).await.unwrap();
    harness.service.forgot_password("a@x.com", "PATIENT").await.unwrap();
    let token = harness.notifier.last_reset_token_for("a@x.com").unwrap();

    let user = stored(&harness, "a@x.com").await;
    harness.users.reset_password(&user, "$2b$04$changedelsewhere").await.unwrap();

    let err = harness.service.reset_password("PATIENT", "new", &token).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Unauthorized);
}

#[tokio::test]
async fn test_reset_password_rejects_session_token() {
    let harness = Harness::new();
    harness.service.signup(patient("a@x.com", "pw")).await.unwrap();
    let session = harness.service.login(patient("a@x.com", "pw")).await.unwrap().token.unwrap();

    let err = harness.service.reset_password("PATIENT", "new", &session).await.unwrap_err();
    assert!(matches!(err, DomainError::Token(TokenError::InvalidResetToken)));
    assert_eq!(err.kind(), ErrorKind::BadRequest);
}

#[tokio::test]
async fn test_reset_password_requires_new_password() {
    let harness = Harness::new();
    let err = harness.service.reset_password("PATIENT", "", "token").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
}

#[tokio::test]
async fn test_reset_password_store_failure_propagates() {
    let users = Arc::new(BrokenWritesRepository::default());
    let harness = Harness::with_users(users.clone());
    let hash = bcrypt::hash("old", 4).unwrap();
    users
        .inner
        .create(NewUser {
            email: Some("a@x.com".to_string()),
            phone: None,
            password_hash: hash.clone(),
            permission: Permission::Patient,
        })
        .await
        .unwrap();
    let token = harness.tokens.issue_reset("a@x.com", &hash).unwrap();

    let err = harness.service.reset_password("PATIENT", "new", &token).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Store);
}

// ---- verification codes ----

#[tokio::test]
async fn test_generate_code_then_cooldown() {
    let harness = Harness::new();

    let first = harness.service.generate_signup_verification_code("a@x.com").await.unwrap();
    assert_eq!(first.message, "new code sent to registered email");
    assert!(first.data.is_none());

    let second = harness.service.generate_signup_verification_code("a@x.com").await.unwrap();
    assert!(second.message.starts_with("code already sent, retry after"));
    let retry_after = second.data.unwrap()["retry_after"].as_u64().unwrap();
    assert!(retry_after > 0 && retry_after <= 120);

    assert_eq!(harness.notifier.sent().len(), 1);
}

#[tokio::test]
async fn test_generate_code_requires_email() {
    let harness = Harness::new();
    let err = harness.service.generate_signup_verification_code("  ").await.unwrap_err();
    assert!(matches!(err, DomainError::ValidationErr(ValidationError::MissingParam { .. })));
}

#[tokio::test]
async fn test_generate_code_delivery_failure_not_surfaced() {
    let harness = Harness::new();
    harness.notifier.fail();

    let response = harness.service.generate_signup_verification_code("a@x.com").await;
    assert!(response.is_ok());
}

#[tokio::test]
async fn test_verify_account_with_wrong_code_keeps_pending() {
    let harness = Harness::new();
    harness.service.signup(patient("a@x.com", "pw")).await.unwrap();
    let token = harness.service.login(patient("a@x.com", "pw")).await.unwrap().token.unwrap();
    let code = harness.notifier.last_code_for("a@x.com").unwrap();
    let wrong = if code == "00000000" { "11111111" } else { "00000000" };

    let err = harness.service.verify_account(wrong, "PATIENT", &token).await.unwrap_err();
    assert!(matches!(err, DomainError::Auth(AuthError::InvalidVerificationCode)));
    assert_eq!(err.kind(), ErrorKind::BadRequest);
    assert_eq!(stored(&harness, "a@x.com").await.status, AccountStatus::Pending);
}

#[tokio::test]
async fn test_verify_account_without_code_on_record() {
    let harness = Harness::new();
    let hash = bcrypt::hash("pw", 4).unwrap();
    harness
        .users
        .create(NewUser {
            email: Some("a@x.com".to_string()),
            phone: None,
            password_hash: hash,
            permission: Permission::Patient,
        })
        .await
        .unwrap();
    let token = harness.service.login(patient("a@x.com", "pw")).await.unwrap().token.unwrap();

    let err = harness.service.verify_account("12345678", "PATIENT", &token).await.unwrap_err();
    assert!(matches!(err, DomainError::Auth(AuthError::VerificationCodeExpired)));
    assert_eq!(stored(&harness, "a@x.com").await.status, AccountStatus::Pending);
}

#[tokio::test]
async fn test_verification_code_is_single_use() {
    let harness = Harness::new();
    harness.service.signup(patient("a@x.com", "pw")).await.unwrap();
    let token = harness.service.login(patient("a@x.com", "pw")).await.unwrap().token.unwrap();
    let code = harness.notifier.last_code_for("a@x.com").unwrap();
    harness.service.verify_account(&code, "PATIENT", &token).await.unwrap();

    // Consumed code frees the cooldown immediately
    let response = harness.service.generate_signup_verification_code("a@x.com").await.unwrap();
    assert_eq!(response.message, "new code sent to registered email");
}

#[tokio::test]
async fn test_verify_account_requires_valid_session() {
    let harness = Harness::new();
    let err = harness.service.verify_account("12345678", "PATIENT", "not-a-token").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Unauthorized);
}

#[tokio::test]
async fn test_verify_account_rejects_other_permission() {
    let harness = Harness::new();
    harness.service.signup(patient("a@x.com", "pw")).await.unwrap();
    let token = harness.service.login(patient("a@x.com", "pw")).await.unwrap().token.unwrap();
    let code = harness.notifier.last_code_for("a@x.com").unwrap();

    let err = harness.service.verify_account(&code, "DOCTOR", &token).await.unwrap_err();
    assert!(matches!(err, DomainError::Auth(AuthError::InvalidToken)));
}

#[tokio::test]
async fn test_verify_account_rejects_token_after_password_change() {
    let harness = Harness::new();
    harness.service.signup(patient("a@x.com", "pw")).await.unwrap();
    let token = harness.service.login(patient("a@x.com", "pw")).await.unwrap().token.unwrap();
    let code = harness.notifier.last_code_for("a@x.com").unwrap();

    let user = stored(&harness, "a@x.com").await;
    harness.users.reset_password(&user, "$2b$04$rotated").await.unwrap();

    let err = harness.service.verify_account(&code, "PATIENT", &token).await.unwrap_err();
    assert!(matches!(err, DomainError::Auth(AuthError::InvalidToken)));
    assert_eq!(stored(&harness, "a@x.com").await.status, AccountStatus::Pending);
}
