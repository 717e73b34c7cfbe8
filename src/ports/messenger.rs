use crate::core::types::Attachment;
use anyhow::Result;
use async_trait::async_trait;

#[async_trait]
pub trait Messenger: Send + Sync {
    /// Post a message to a direct-message target, a channel target, or
    /// both. The branches are independent; with neither given this is a
    /// no-op and no network call is made.
    async fn send(
        &self,
        message: &str,
        attachments: &[Attachment],
        user: Option<&str>,
        channel: Option<&str>,
    ) -> Result<()>;
}
