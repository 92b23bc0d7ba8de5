//! Outbound notification capability
//!
//! The core hands a recipient, a template kind and string fields to a
//! `Notifier`; rendering and transport belong to the implementation.

use async_trait::async_trait;
use std::collections::HashMap;
use std::fmt;

use crate::errors::DomainError;

/// Template a notification is rendered with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateKind {
    PasswordReset,
    VerificationCode,
    Custom,
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TemplateKind::PasswordReset => "password_reset",
            TemplateKind::VerificationCode => "verification_code",
            TemplateKind::Custom => "custom",
        };
        f.write_str(name)
    }
}

/// Sends templated messages to a recipient
///
/// Failures are reported as `DomainError::Delivery`.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(
        &self,
        to: &str,
        template: TemplateKind,
        data: HashMap<String, String>,
    ) -> Result<(), DomainError>;
}
