//! # statbot-core
//!
//! Core types and traits for the GitHub stat bot: [`Chat`], [`InboundEvent`], [`Reply`],
//! the [`ChatSink`] outbound seam, error types, and tracing initialization.
//! Transport-agnostic; used by statbot-engine and statbot-telegram.

pub mod error;
pub mod logger;
pub mod sink;
pub mod types;

pub use error::{Result, StatbotError};
pub use logger::init_tracing;
pub use sink::ChatSink;
pub use types::{Chat, Command, InboundEvent, Menu, MenuButton, Reply, ToCoreChat};
