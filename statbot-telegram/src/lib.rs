//! # statbot-telegram
//!
//! Telegram layer for the GitHub stat bot: classifies inbound teloxide
//! messages into [`statbot_core::InboundEvent`]s, implements the
//! [`statbot_core::ChatSink`] with reply keyboards, loads minimal env
//! config, and runs the long-polling REPL. No decision logic lives here.

mod adapters;
mod config;
mod runner;
mod sink;

pub use adapters::{classify, TelegramChatWrapper};
pub use config::TelegramConfig;
pub use runner::{build_bot, run_repl};
pub use sink::TelegramSink;
