//! REPL runner: converts teloxide messages to classified events, dispatches
//! them through the [`Router`], and sends the reply back. Each message is
//! handled in a spawned task so one slow GitHub call never stalls other chats.

use std::sync::Arc;

use anyhow::Result;
use statbot_core::{ChatSink, ToCoreChat};
use statbot_engine::Router;
use teloxide::prelude::*;
use tracing::{error, info, instrument};

use crate::adapters::{classify, TelegramChatWrapper};
use crate::config::TelegramConfig;
use crate::sink::TelegramSink;

/// Builds the teloxide Bot from config, honoring the API URL override.
pub fn build_bot(config: &TelegramConfig) -> Result<teloxide::Bot> {
    let mut bot = teloxide::Bot::new(config.bot_token.clone());
    if let Some(url) = &config.telegram_api_url {
        bot = bot.set_api_url(url.parse()?);
    }
    Ok(bot)
}

/// Starts the long-polling REPL with the given teloxide Bot and router.
/// Calls get_me() before starting to confirm the bot identity; each text
/// message is classified, dispatched, and answered via [`TelegramSink`].
///
/// Spawned tasks queue on the chat's session lock, so two messages from the
/// same chat arriving within the spawn window may be handled in either
/// order; within-chat ordering is best-effort, not guaranteed.
#[instrument(skip(bot, router))]
pub async fn run_repl(bot: teloxide::Bot, router: Arc<Router>) -> Result<()> {
    if let Ok(me) = bot.get_me().await {
        if let Some(username) = &me.user.username {
            info!(username = %username, "Bot identity confirmed before repl");
        }
    }

    let sink: Arc<dyn ChatSink> = Arc::new(TelegramSink::new(bot.clone()));

    teloxide::repl(
        bot,
        move |_bot: Bot, msg: teloxide::types::Message| {
            let router = router.clone();
            let sink = sink.clone();

            async move {
                let chat = TelegramChatWrapper(&msg.chat).to_core();

                match msg.text() {
                    Some(text) => {
                        let event = classify(text);
                        info!(
                            chat_id = chat.id,
                            message_content = %text,
                            "Received message"
                        );

                        // Dispatch in a spawned task so the REPL returns
                        // immediately and other chats keep flowing.
                        tokio::spawn(async move {
                            let reply = router.dispatch(chat.id, event).await;
                            if let Err(e) = sink.send(&chat, &reply).await {
                                error!(error = %e, chat_id = chat.id, "Failed to send reply");
                            }
                        });
                    }
                    None => {
                        info!(chat_id = chat.id, "Received non-text message, ignored");
                    }
                }

                Ok(())
            }
        },
    )
    .await;

    Ok(())
}
