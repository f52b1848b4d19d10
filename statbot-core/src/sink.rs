//! Outbound seam: the engine produces [`Reply`] values, a [`ChatSink`]
//! delivers them. Production code sends via Telegram; tests can substitute a
//! recording impl.

use crate::error::Result;
use crate::types::{Chat, Reply};
use async_trait::async_trait;

/// Abstraction for delivering a reply (text plus optional keyboard) to a chat.
/// Implementations map to a transport (e.g. Telegram).
#[async_trait]
pub trait ChatSink: Send + Sync {
    /// Sends the reply to the given chat.
    async fn send(&self, chat: &Chat, reply: &Reply) -> Result<()>;
}
