//! Contact form delivery through the EmailJS REST API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use tracing::{debug, info};

use crate::config::ContactConfig;
use crate::error::{Error, Result};

const EMAILJS_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// A message as entered into the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactMessage {
    pub from_name: String,
    pub from_email: String,
    pub message: String,
}

impl ContactMessage {
    /// Form-level validation: every field must be non-blank.
    pub fn validate(&self) -> Result<()> {
        if self.from_name.trim().is_empty()
            || self.from_email.trim().is_empty()
            || self.message.trim().is_empty()
        {
            return Err(Error::Mailer("all fields are required".to_string()));
        }
        Ok(())
    }
}

/// Delivery backend for contact messages. The TUI only sees this trait,
/// so tests can submit the form against an in-memory double.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, message: &ContactMessage) -> Result<()>;
}

#[derive(Serialize)]
struct TemplateParams<'a> {
    from_name: &'a str,
    from_email: &'a str,
    message: &'a str,
    to_name: &'a str,
}

#[derive(Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: TemplateParams<'a>,
}

/// Mailer backed by the EmailJS send endpoint. One attempt per submission;
/// retry is left to the person pressing the button again.
pub struct EmailJsMailer {
    client: Client,
    service_id: String,
    template_id: String,
    public_key: String,
    to_name: String,
}

impl EmailJsMailer {
    pub fn new(config: &ContactConfig) -> Result<Self> {
        let (service_id, template_id, public_key) = match (
            config.service_id.clone(),
            config.template_id.clone(),
            config.public_key.clone(),
        ) {
            (Some(s), Some(t), Some(k)) => (s, t, k),
            _ => {
                return Err(Error::Config(
                    "contact requires service_id, template_id and public_key".to_string(),
                ))
            }
        };
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .user_agent(concat!("starfolio/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            service_id,
            template_id,
            public_key,
            to_name: config.to_name.clone(),
        })
    }
}

#[async_trait]
impl Mailer for EmailJsMailer {
    async fn send(&self, message: &ContactMessage) -> Result<()> {
        message.validate()?;
        debug!(service_id = %self.service_id, "sending contact message");

        let request = SendRequest {
            service_id: &self.service_id,
            template_id: &self.template_id,
            user_id: &self.public_key,
            template_params: TemplateParams {
                from_name: &message.from_name,
                from_email: &message.from_email,
                message: &message.message,
                to_name: &self.to_name,
            },
        };

        let response = self
            .client
            .post(EMAILJS_ENDPOINT)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Mailer(format!(
                "email service returned {status}: {body}"
            )));
        }

        info!(from = %message.from_email, "contact message delivered");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_config() -> ContactConfig {
        ContactConfig {
            service_id: Some("service_x".to_string()),
            template_id: Some("template_x".to_string()),
            public_key: Some("key_x".to_string()),
            ..ContactConfig::default()
        }
    }

    #[test]
    fn test_validate_rejects_blank_fields() {
        let msg = ContactMessage {
            from_name: "Ada".to_string(),
            from_email: "  ".to_string(),
            message: "hello".to_string(),
        };
        assert!(msg.validate().is_err());

        let msg = ContactMessage {
            from_name: "Ada".to_string(),
            from_email: "ada@example.com".to_string(),
            message: "hello".to_string(),
        };
        assert!(msg.validate().is_ok());
    }

    #[test]
    fn test_mailer_requires_complete_config() {
        assert!(EmailJsMailer::new(&full_config()).is_ok());

        let mut incomplete = full_config();
        incomplete.public_key = None;
        assert!(matches!(
            EmailJsMailer::new(&incomplete),
            Err(Error::Config(_))
        ));
    }

    #[tokio::test]
    async fn test_mailer_trait_is_object_safe() {
        struct RecordingMailer;

        #[async_trait]
        impl Mailer for RecordingMailer {
            async fn send(&self, message: &ContactMessage) -> Result<()> {
                message.validate()
            }
        }

        let mailer: Box<dyn Mailer> = Box::new(RecordingMailer);
        let msg = ContactMessage {
            from_name: "Ada".to_string(),
            from_email: "ada@example.com".to_string(),
            message: "hello".to_string(),
        };
        assert!(mailer.send(&msg).await.is_ok());
    }

    #[test]
    fn test_send_request_shape() {
        let request = SendRequest {
            service_id: "s",
            template_id: "t",
            user_id: "k",
            template_params: TemplateParams {
                from_name: "Ada",
                from_email: "ada@example.com",
                message: "hello",
                to_name: "Harshabad Singh",
            },
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["service_id"], "s");
        assert_eq!(json["user_id"], "k");
        assert_eq!(json["template_params"]["from_email"], "ada@example.com");
        assert_eq!(json["template_params"]["to_name"], "Harshabad Singh");
    }
}
