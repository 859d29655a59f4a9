use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, error};

use crate::modules::email::application::ports::outgoing::{
    EmailSender, OutgoingEmail, UserEmailNotificationError, UserEmailNotifier,
};

/// Renders account emails and hands them to the configured sender.
#[derive(Clone)]
pub struct UserEmailService {
    sender: Arc<dyn EmailSender + Send + Sync>,
    app_base_url: String,
}

impl fmt::Debug for UserEmailService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserEmailService")
            .field("sender", &"<dyn EmailSender>")
            .field("app_base_url", &self.app_base_url)
            .finish()
    }
}

impl UserEmailService {
    pub fn new(sender: Arc<dyn EmailSender + Send + Sync>, app_base_url: &str) -> Self {
        Self {
            sender,
            app_base_url: app_base_url.trim_end_matches('/').to_string(),
        }
    }

    fn link(&self, path: &str, token: &str) -> String {
        format!(
            "{}/{}?token={}",
            self.app_base_url,
            path,
            urlencoding::encode(token)
        )
    }

    async fn deliver(&self, email: OutgoingEmail) -> Result<(), UserEmailNotificationError> {
        let to = email.to.clone();
        match self.sender.send(email).await {
            Ok(message_id) => {
                debug!(message_id = %message_id, "Account email sent");
                Ok(())
            }
            Err(e) => {
                error!(recipient = %to, error = %e, "Failed to send account email");
                Err(UserEmailNotificationError::EmailSendingFailed(e.to_string()))
            }
        }
    }
}

#[async_trait]
impl UserEmailNotifier for UserEmailService {
    async fn send_verification_email(
        &self,
        to: &str,
        display_name: &str,
        token: &str,
    ) -> Result<(), UserEmailNotificationError> {
        let link = self.link("verify-email", token);

        let text = format!(
            "Hi {name},\n\nPlease verify your AIPIX account by opening the link below:\n{link}\n\nThis link expires in 1 hour.",
            name = display_name,
            link = link
        );
        let html = format!(
            "<p>Hi {name},</p><p>Please verify your AIPIX account:</p>\
             <p><a href=\"{link}\">Verify email</a></p><p>This link expires in 1 hour.</p>",
            name = display_name,
            link = link
        );

        self.deliver(OutgoingEmail {
            to: to.to_string(),
            subject: "Verify your AIPIX account".to_string(),
            text: Some(text),
            html: Some(html),
        })
        .await
    }

    async fn send_password_reset_email(
        &self,
        to: &str,
        display_name: &str,
        token: &str,
    ) -> Result<(), UserEmailNotificationError> {
        let link = self.link("reset-password", token);

        let text = format!(
            "Hi {name},\n\nWe received a request to reset your AIPIX password.\n\
             Reset it here: {link}\n\nIf you did not request this, you can ignore this email.",
            name = display_name,
            link = link
        );
        let html = format!(
            "<p>Hi {name},</p><p>We received a request to reset your AIPIX password.</p>\
             <p><a href=\"{link}\">Reset password</a></p>\
             <p>If you did not request this, you can ignore this email.</p>",
            name = display_name,
            link = link
        );

        self.deliver(OutgoingEmail {
            to: to.to_string(),
            subject: "Reset your AIPIX password".to_string(),
            text: Some(text),
            html: Some(html),
        })
        .await
    }
}
