use crate::core::types::Attachment;
use crate::ports::messenger::Messenger;
use anyhow::Result;
use async_trait::async_trait;

const BOT_USERNAME: &str = "BuddyBot";
const BOT_ICON_EMOJI: &str = ":heart:";

pub struct SlackClient {
    client: reqwest::Client,
    token: String,
    base_url: String,
}

impl SlackClient {
    pub fn new(token: &str, base_url: &str) -> Result<Self> {
        Ok(Self {
            client: reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(10))
                .build()?,
            token: token.to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn post_message(
        &self,
        target: &str,
        message: &str,
        attachments: &[Attachment],
    ) -> Result<()> {
        let body = serde_json::json!({
            "channel": target,
            "text": message,
            "attachments": attachments,
            "username": BOT_USERNAME,
            "icon_emoji": BOT_ICON_EMOJI,
        });

        let resp = self
            .client
            .post(format!("{}/chat.postMessage", self.base_url))
            .bearer_auth(&self.token)
            .json(&body)
            .send()
            .await?;

        if !resp.status().is_success() {
            anyhow::bail!("Slack chat.postMessage -> {}", resp.status());
        }

        // Slack reports API errors as 200 with ok=false.
        let payload: serde_json::Value = resp.json().await?;
        if !payload["ok"].as_bool().unwrap_or(false) {
            anyhow::bail!(
                "Slack chat.postMessage to {} failed: {}",
                target,
                payload["error"].as_str().unwrap_or("unknown error")
            );
        }

        Ok(())
    }
}

#[async_trait]
impl Messenger for SlackClient {
    async fn send(
        &self,
        message: &str,
        attachments: &[Attachment],
        user: Option<&str>,
        channel: Option<&str>,
    ) -> Result<()> {
        if let Some(user) = user {
            self.post_message(&format!("@{}", user), message, attachments)
                .await?;
        }
        if let Some(channel) = channel {
            self.post_message(&format!("#{}", channel), message, attachments)
                .await?;
        }
        Ok(())
    }
}
