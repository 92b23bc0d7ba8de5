use crate::errors::{AuthError, DomainError, ErrorKind, TokenError, ValidationError};

#[test]
fn test_kind_classification() {
    let cases: Vec<(DomainError, ErrorKind)> = vec![
        (ValidationError::missing("password").into(), ErrorKind::Validation),
        (AuthError::UserNotFound.into(), ErrorKind::NotFound),
        (AuthError::UserAlreadyExists.into(), ErrorKind::AlreadyExists),
        (AuthError::InvalidCredentials.into(), ErrorKind::Unauthorized),
        (AuthError::PasswordChanged.into(), ErrorKind::Unauthorized),
        (TokenError::SessionTokenExpired.into(), ErrorKind::Unauthorized),
        (TokenError::ResetTokenExpired.into(), ErrorKind::BadRequest),
        (AuthError::VerificationCodeExpired.into(), ErrorKind::BadRequest),
        (AuthError::InvalidVerificationCode.into(), ErrorKind::BadRequest),
        (DomainError::store("connection reset"), ErrorKind::Store),
        (DomainError::delivery("smtp down"), ErrorKind::Delivery),
    ];

    for (error, expected) in cases {
        assert_eq!(error.kind(), expected, "wrong kind for {error}");
    }
}

#[test]
fn test_public_message_hides_store_detail() {
    let error = DomainError::store("Duplicate entry 'a@x.com' for key 'users.email'");
    assert_eq!(error.public_message(), "internal server error");
    assert!(error.to_string().contains("Duplicate entry"));
}

#[test]
fn test_public_message_keeps_client_reason() {
    let error: DomainError = ValidationError::invalid("permission", "permission type NURSE not allowed").into();
    assert_eq!(
        error.public_message(),
        "invalid parameter permission: permission type NURSE not allowed"
    );
}
