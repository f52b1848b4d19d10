//! Per-chat conversation state with explicit lifecycle: created on first
//! inbound event, reset on quit or after a TTL of inactivity.
//!
//! The store keeps one async mutex per chat so a chat's events are handled
//! one at a time while distinct chats proceed concurrently; the outer map
//! lock is held only long enough to look up or insert the entry.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use tokio::sync::Mutex;
use tracing::info;

/// Idle sessions are reset after this many minutes of inactivity.
pub const DEFAULT_SESSION_TTL_MINUTES: i64 = 30;

/// What input the bot expects next from a chat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No pending username; free text is treated as a username candidate.
    Idle,
    /// A username was accepted and the three-option menu is shown.
    AwaitingMenuChoice,
}

/// Conversation state for one chat. `last_username` is set only after a
/// successful username resolution and holds while the menu is shown.
#[derive(Debug, Clone)]
pub struct Session {
    pub chat_id: i64,
    pub state: SessionState,
    pub last_username: Option<String>,
    pub last_activity: DateTime<Utc>,
}

impl Session {
    /// Fresh session: `Idle`, no username.
    pub fn new(chat_id: i64) -> Self {
        Self {
            chat_id,
            state: SessionState::Idle,
            last_username: None,
            last_activity: Utc::now(),
        }
    }

    /// Returns to `Idle` and clears the username.
    pub fn reset(&mut self) {
        self.state = SessionState::Idle;
        self.last_username = None;
    }

    /// Records activity at `now`.
    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.last_activity = now;
    }

    /// Resets the session when it has been inactive longer than `ttl`.
    /// Returns true if a reset happened.
    pub fn expire_if_stale(&mut self, ttl: Duration, now: DateTime<Utc>) -> bool {
        if now - self.last_activity > ttl {
            self.reset();
            true
        } else {
            false
        }
    }
}

/// Owns all sessions, keyed by chat id. Never shared across chats: callers
/// lock the per-chat mutex for the duration of one event's handling.
pub struct SessionStore {
    sessions: Mutex<HashMap<i64, Arc<Mutex<Session>>>>,
    ttl: Duration,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::with_ttl(Duration::minutes(DEFAULT_SESSION_TTL_MINUTES))
    }

    /// Store with a custom inactivity TTL (tests use short ones).
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Looks up or creates the session entry for `chat_id`. The returned
    /// handle is locked by the caller while handling the event, which
    /// serializes that chat without blocking others.
    pub async fn checkout(&self, chat_id: i64) -> Arc<Mutex<Session>> {
        let mut sessions = self.sessions.lock().await;
        sessions
            .entry(chat_id)
            .or_insert_with(|| {
                info!(chat_id = chat_id, "Creating session");
                Arc::new(Mutex::new(Session::new(chat_id)))
            })
            .clone()
    }

    /// The existing entry for `chat_id`, if any. Does not create one.
    pub async fn get(&self, chat_id: i64) -> Option<Arc<Mutex<Session>>> {
        self.sessions.lock().await.get(&chat_id).cloned()
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}
