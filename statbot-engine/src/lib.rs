//! # statbot-engine
//!
//! The bot's decision layer: a per-chat [`SessionStore`], the two-state
//! conversation machine, the [`Router`] that dispatches classified inbound
//! events, and the pure reply formatter. No transport code; the Telegram
//! layer feeds events in and delivers the returned [`statbot_core::Reply`].

pub mod format;
pub mod router;
pub mod session;

pub use router::Router;
pub use session::{Session, SessionState, SessionStore, DEFAULT_SESSION_TTL_MINUTES};
