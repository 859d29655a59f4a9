use async_trait::async_trait;
use lettre::message::{header::ContentType, Mailbox, MultiPart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use uuid::Uuid;

use crate::config::SmtpConfig;
use crate::modules::email::application::ports::outgoing::{
    EmailSendError, EmailSender, OutgoingEmail,
};

#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: Message) -> Result<(), String>;
}

#[async_trait]
impl Mailer for AsyncSmtpTransport<Tokio1Executor> {
    async fn send(&self, email: Message) -> Result<(), String> {
        AsyncTransport::send(self, email)
            .await
            .map(|_resp| ())
            .map_err(|e| e.to_string())
    }
}

pub struct SmtpEmailSender {
    mailer: Box<dyn Mailer>,
    from: Mailbox,
}

impl SmtpEmailSender {
    pub fn new_with_mailer(mailer: Box<dyn Mailer>, from: &str) -> Result<Self, EmailSendError> {
        Ok(Self {
            mailer,
            from: parse_mailbox(from)?,
        })
    }

    /// Authenticated relay when credentials are present, plain SMTP otherwise (Mailpit, MailHog).
    pub fn from_config(config: &SmtpConfig) -> Result<Self, EmailSendError> {
        let transport = match (&config.username, &config.password) {
            (Some(user), Some(pass)) => {
                let builder = if config.port == 465 {
                    AsyncSmtpTransport::<Tokio1Executor>::relay(&config.host)
                } else {
                    AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)
                }
                .map_err(|e| EmailSendError::TransportFailed(e.to_string()))?;

                builder
                    .port(config.port)
                    .credentials(Credentials::new(user.clone(), pass.clone()))
                    .build()
            }
            _ => AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&config.host)
                .port(config.port)
                .build(),
        };

        Self::new_with_mailer(Box::new(transport), &config.from)
    }

    fn message_id(&self) -> String {
        format!("<{}@{}>", Uuid::new_v4(), self.from.email.domain())
    }

    fn build_message(
        &self,
        email: OutgoingEmail,
        message_id: &str,
    ) -> Result<Message, EmailSendError> {
        let builder = Message::builder()
            .from(self.from.clone())
            .to(parse_mailbox(&email.to)?)
            .subject(email.subject)
            .message_id(Some(message_id.to_string()));

        let built = match (email.text, email.html) {
            (Some(text), Some(html)) => {
                builder.multipart(MultiPart::alternative_plain_html(text, html))
            }
            (None, Some(html)) => builder.header(ContentType::TEXT_HTML).body(html),
            (Some(text), None) => builder.header(ContentType::TEXT_PLAIN).body(text),
            (None, None) => builder.header(ContentType::TEXT_PLAIN).body(String::new()),
        };

        built.map_err(|e| EmailSendError::BuildFailed(e.to_string()))
    }
}

fn parse_mailbox(raw: &str) -> Result<Mailbox, EmailSendError> {
    raw.parse::<Mailbox>()
        .map_err(|e| EmailSendError::InvalidAddress(format!("{}: {}", raw, e)))
}

#[async_trait]
impl EmailSender for SmtpEmailSender {
    async fn send(&self, email: OutgoingEmail) -> Result<String, EmailSendError> {
        let message_id = self.message_id();
        let message = self.build_message(email, &message_id)?;

        self.mailer
            .send(message)
            .await
            .map_err(EmailSendError::TransportFailed)?;

        Ok(message_id)
    }
}
