//! Email module - outbound notifications
//!
//! Renders the three HTML templates and hands them to an SMTP relay, or
//! only logs them when no relay is configured.

mod log_notifier;
mod smtp;
pub mod templates;

#[cfg(test)]
mod tests;

use async_trait::async_trait;
use std::collections::HashMap;

use ma_core::errors::DomainError;
use ma_core::services::notification::{Notifier, TemplateKind};

use crate::config::EmailConfig;
use crate::InfrastructureError;

pub use log_notifier::LogNotifier;
pub use smtp::SmtpNotifier;
pub use templates::{render, subject, RenderedEmail};

/// Notifier selected from configuration: SMTP when a host is set, log otherwise
#[derive(Clone)]
pub enum EmailNotifier {
    Smtp(SmtpNotifier),
    Log(LogNotifier),
}

impl EmailNotifier {
    pub fn from_config(config: &EmailConfig) -> Result<Self, InfrastructureError> {
        match &config.smtp {
            Some(smtp) => Ok(Self::Smtp(SmtpNotifier::new(smtp, &config.from)?)),
            None => {
                tracing::warn!("SMTP_HOST not set, notifications will only be logged");
                Ok(Self::Log(LogNotifier::new()))
            }
        }
    }
}

#[async_trait]
impl Notifier for EmailNotifier {
    async fn send(&self, to: &str, template: TemplateKind, data: HashMap<String, String>) -> Result<(), DomainError> {
        match self {
            Self::Smtp(notifier) => notifier.send(to, template, data).await,
            Self::Log(notifier) => notifier.send(to, template, data).await,
        }
    }
}
