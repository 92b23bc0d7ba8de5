//! Notifier that only logs, for running without an SMTP relay

use async_trait::async_trait;
use std::collections::HashMap;

use ma_core::errors::DomainError;
use ma_core::services::notification::{Notifier, TemplateKind};
use ma_shared::utils::mask_identity;

use super::templates;

/// Writes each notification to the log instead of sending it
///
/// Verification codes and reset links are logged at debug level so local
/// development can complete the flows.
#[derive(Debug, Clone, Default)]
pub struct LogNotifier;

impl LogNotifier {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Notifier for LogNotifier {
    async fn send(&self, to: &str, template: TemplateKind, data: HashMap<String, String>) -> Result<(), DomainError> {
        let rendered = templates::render(template, &data);
        tracing::info!(
            to = %mask_identity(to),
            template = %template,
            subject = %rendered.subject,
            event = "notification_logged",
            "SMTP not configured, notification written to log"
        );
        tracing::debug!(to = %to, data = ?data, "Notification payload");
        Ok(())
    }
}
