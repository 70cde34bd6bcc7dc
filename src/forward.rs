use anyhow::Result;
use log::{debug, error};
use serde::Serialize;
use std::time::Duration;

/// Default base for Discord webhook endpoints; the inbound path segments are
/// appended verbatim as `{base}/{id}/{token}`.
pub const DISCORD_WEBHOOK_BASE: &str = "https://discord.com/api/webhooks";

/// Body of the outbound webhook POST: a single markdown message.
#[derive(Debug, Serialize)]
pub struct ForwardPayload {
    pub content: String,
}

/// Client for pushing formatted alert messages to Discord webhooks.
pub struct DiscordForwarder {
    client: reqwest::Client,
    base_url: String,
}

impl DiscordForwarder {
    pub fn new(base_url: String) -> Result<Self> {
        // Bound how long a stalled webhook endpoint can hold a handler.
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self { client, base_url })
    }

    pub fn webhook_url(&self, webhook_id: &str, webhook_token: &str) -> String {
        format!(
            "{}/{}/{}",
            self.base_url.trim_end_matches('/'),
            webhook_id,
            webhook_token
        )
    }

    /// POST the message to the webhook. Callers treat delivery as
    /// fire-and-forget; the error is only good for logging.
    pub async fn forward(&self, url: &str, content: String) -> Result<()> {
        let payload = ForwardPayload { content };
        let response = self.client.post(url).json(&payload).send().await?;

        if response.status().is_success() {
            debug!("Message delivered to Discord webhook");
            Ok(())
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!("Discord webhook returned {}: {}", status, body);
            Err(anyhow::anyhow!("Discord webhook returned {}", status))
        }
    }
}
