//! Client for the Resend email-delivery API.

mod types;

pub use types::{Attachment, SendEmail};

use async_trait::async_trait;

use crate::error::Error;

pub const API_URL: &str = "https://api.resend.com/emails";

/// Anything able to deliver a composed message. The server injects the
/// real client; endpoint tests inject a recording fake.
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Submits the message, returning the provider's response payload
    /// opaque and unmodified.
    async fn send(&self, email: &SendEmail) -> Result<serde_json::Value, Error>;
}

pub struct Client {
    api_key: String,
    client: reqwest::Client,
}

impl Client {
    pub fn new<S: Into<String>>(api_key: S) -> Self {
        Client {
            api_key: api_key.into(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl Mailer for Client {
    async fn send(&self, email: &SendEmail) -> Result<serde_json::Value, Error> {
        log::info!("Sending \"{}\" to {}", email.subject, email.to);

        let resp = self
            .client
            .post(API_URL)
            .bearer_auth(&self.api_key)
            .json(email)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(Error::Delivery(format!(
                "Provider returned {}: {}",
                status, body
            )));
        }

        let data = resp.json::<serde_json::Value>().await?;
        Ok(data)
    }
}
