//! Wraps teloxide::Bot and implements [`statbot_core::ChatSink`]. Production
//! code sends messages via Telegram; tests can substitute another sink impl.

use async_trait::async_trait;
use statbot_core::{Chat, ChatSink, Menu, Reply, Result, StatbotError};
use teloxide::payloads::SendMessageSetters;
use teloxide::prelude::*;
use teloxide::types::{KeyboardButton, KeyboardMarkup, KeyboardRemove, ReplyMarkup};

/// Thin wrapper around teloxide::Bot that delivers replies with the matching
/// reply keyboard: a menu shows the labels, no menu removes the keyboard.
pub struct TelegramSink {
    bot: teloxide::Bot,
}

impl TelegramSink {
    /// Creates a sink from an existing teloxide Bot.
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }
}

/// Builds the reply keyboard for a menu: one resized row of its labels.
fn keyboard_for(menu: &Menu) -> KeyboardMarkup {
    let row: Vec<KeyboardButton> = menu
        .labels()
        .iter()
        .map(|label| KeyboardButton::new(*label))
        .collect();
    let mut markup = KeyboardMarkup::new([row]);
    markup.resize_keyboard = true;
    markup
}

#[async_trait]
impl ChatSink for TelegramSink {
    async fn send(&self, chat: &Chat, reply: &Reply) -> Result<()> {
        let request = self.bot.send_message(ChatId(chat.id), reply.text.clone());
        let request = match &reply.menu {
            Some(menu) => request.reply_markup(ReplyMarkup::Keyboard(keyboard_for(menu))),
            None => request.reply_markup(ReplyMarkup::KeyboardRemove(KeyboardRemove::new())),
        };
        request
            .await
            .map_err(|e| StatbotError::Bot(e.to_string()))?;
        Ok(())
    }
}
