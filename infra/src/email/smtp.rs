//! SMTP notifier built on lettre

use async_trait::async_trait;
use lettre::message::{header::ContentType, Mailbox};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use std::collections::HashMap;
use std::time::Duration;

use ma_core::errors::DomainError;
use ma_core::services::notification::{Notifier, TemplateKind};
use ma_shared::utils::mask_identity;

use super::templates;
use crate::config::SmtpConfig;
use crate::InfrastructureError;

/// Sends rendered HTML templates through an SMTP relay
///
/// `implicit_tls` selects a TLS-wrapped connection (usually port 465);
/// otherwise the connection is upgraded with STARTTLS.
#[derive(Clone)]
pub struct SmtpNotifier {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpNotifier {
    pub fn new(config: &SmtpConfig, from: &str) -> Result<Self, InfrastructureError> {
        let builder = if config.implicit_tls {
            AsyncSmtpTransport::<Tokio1Executor>::relay(&config.host)?
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)?
        };

        let mut builder = builder
            .port(config.port)
            .timeout(Some(Duration::from_secs(config.timeout)));
        if !config.username.is_empty() {
            builder = builder.credentials(Credentials::new(config.username.clone(), config.password.clone()));
        }

        tracing::info!(host = %config.host, port = config.port, implicit_tls = config.implicit_tls, "SMTP notifier configured");

        Ok(Self {
            transport: builder.build(),
            from: from.parse()?,
        })
    }

    pub(crate) fn build_message(&self, to: &str, template: TemplateKind, data: &HashMap<String, String>) -> Result<Message, InfrastructureError> {
        let rendered = templates::render(template, data);
        let message = Message::builder()
            .from(self.from.clone())
            .to(to.parse()?)
            .subject(rendered.subject)
            .header(ContentType::TEXT_HTML)
            .body(rendered.html)?;
        Ok(message)
    }
}

#[async_trait]
impl Notifier for SmtpNotifier {
    async fn send(&self, to: &str, template: TemplateKind, data: HashMap<String, String>) -> Result<(), DomainError> {
        let message = self.build_message(to, template, &data)?;

        self.transport.send(message).await.map_err(|e| {
            tracing::error!(to = %mask_identity(to), template = %template, error = %e, "SMTP delivery failed");
            InfrastructureError::Email(e)
        })?;

        tracing::info!(to = %mask_identity(to), template = %template, event = "email_sent", "Email sent");
        Ok(())
    }
}
