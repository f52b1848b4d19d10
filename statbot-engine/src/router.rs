//! Command router and conversation state machine.
//!
//! One dispatch entry per inbound event: looks up (or creates) the chat's
//! session, interprets the event against the current state, calls GitHub on
//! demand, and returns the reply to send. Every GitHub failure is converted
//! to a plain-language reply here and leaves the session state unchanged, so
//! the user can retry.

use std::sync::Arc;

use chrono::Utc;
use statbot_core::{Command, InboundEvent, Menu, MenuButton, Reply};
use statbot_github::{validate_username, GithubError, GithubLookup, DEFAULT_REPO_LIMIT};
use tracing::{info, instrument, warn};

use crate::format::{format_profile, format_repositories};
use crate::session::{Session, SessionState, SessionStore};

const WELCOME: &str = "Hi! I am the GitHub stat bot. Send me a GitHub username and I'll \
                       fetch info about that user. Use /help for the command list.";

const HELP: &str = "Commands:\n\
                    /start - welcome message\n\
                    /help - this help\n\
                    /repos <username> - top 5 recently updated repositories\n\
                    /quit - leave the menu\n\
                    \n\
                    Or just send a GitHub username to open the menu.";

const FAREWELL: &str = "Bye! Send me another GitHub username any time.";

const GUIDANCE_IDLE: &str = "I didn't understand that. Send a GitHub username, or use /help \
                             for the command list.";

const GUIDANCE_MENU: &str = "Please pick one of the menu options: User Info, Repositories \
                             or Quit. /quit also leaves the menu.";

const STALE_MENU: &str = "That menu is no longer active. Send me a GitHub username first.";

/// Dispatches classified inbound events into the state machine. Side effect:
/// session mutation only; all outward effects are the returned [`Reply`].
pub struct Router {
    github: Arc<dyn GithubLookup>,
    sessions: SessionStore,
}

impl Router {
    pub fn new(github: Arc<dyn GithubLookup>) -> Self {
        Self::with_sessions(github, SessionStore::new())
    }

    /// Router over a custom session store (e.g. short TTL in tests).
    pub fn with_sessions(github: Arc<dyn GithubLookup>, sessions: SessionStore) -> Self {
        Self { github, sessions }
    }

    /// Handles one inbound event for `chat_id` and returns the reply to send.
    /// Events for the same chat are serialized on the session lock; distinct
    /// chats run concurrently.
    #[instrument(skip(self, event), fields(chat_id = chat_id))]
    pub async fn dispatch(&self, chat_id: i64, event: InboundEvent) -> Reply {
        let handle = self.sessions.checkout(chat_id).await;
        let mut session = handle.lock().await;

        let now = Utc::now();
        if session.expire_if_stale(self.sessions.ttl(), now) {
            info!(chat_id = chat_id, "Session expired, reset to idle");
        }
        session.touch(now);

        let reply = match event {
            InboundEvent::Command(cmd) => self.on_command(&mut session, cmd).await,
            InboundEvent::Text(text) => self.on_text(&mut session, &text).await,
            InboundEvent::Button(button) => self.on_button(&mut session, button).await,
        };

        info!(
            chat_id = chat_id,
            state = ?session.state,
            reply_len = reply.text.len(),
            "step: dispatch done"
        );
        reply
    }

    /// Snapshot of a chat's session, if one exists. Used by tests and
    /// diagnostics; never hands out the live entry.
    pub async fn session_snapshot(&self, chat_id: i64) -> Option<Session> {
        match self.sessions.get(chat_id).await {
            Some(handle) => Some(handle.lock().await.clone()),
            None => None,
        }
    }

    async fn on_command(&self, session: &mut Session, cmd: Command) -> Reply {
        match cmd {
            Command::Start => Reply {
                text: WELCOME.to_string(),
                menu: menu_for(session.state),
            },
            Command::Help => Reply {
                text: HELP.to_string(),
                menu: menu_for(session.state),
            },
            Command::Quit => {
                info!(chat_id = session.chat_id, "step: quit, session reset");
                session.reset();
                Reply::text(FAREWELL)
            }
            Command::Repos { username } => {
                // Direct lookup; does not touch state or last_username.
                self.repos_lookup(&username, menu_for(session.state)).await
            }
            Command::Unknown(cmd) => {
                let guidance = guidance_for(session.state);
                Reply {
                    text: format!("Unknown command {}. {}", cmd, guidance.text),
                    menu: guidance.menu,
                }
            }
        }
    }

    async fn on_text(&self, session: &mut Session, text: &str) -> Reply {
        match session.state {
            SessionState::Idle => {
                let username = match validate_username(text) {
                    Ok(username) => username.to_string(),
                    Err(e) => return Reply::text(describe_error(&e)),
                };
                match self.github.fetch_profile(&username).await {
                    Ok(profile) => {
                        // Canonical casing from GitHub, not the user's input.
                        session.last_username = Some(profile.login.clone());
                        session.state = SessionState::AwaitingMenuChoice;
                        info!(
                            chat_id = session.chat_id,
                            username = %profile.login,
                            "step: username accepted, menu shown"
                        );
                        Reply::with_menu(
                            format!(
                                "Found GitHub user @{}. What would you like to see?",
                                profile.login
                            ),
                            Menu::Main,
                        )
                    }
                    Err(e) => {
                        warn!(chat_id = session.chat_id, error = %e, "Username lookup failed");
                        Reply::text(describe_error(&e))
                    }
                }
            }
            SessionState::AwaitingMenuChoice => guidance_for(session.state),
        }
    }

    async fn on_button(&self, session: &mut Session, button: MenuButton) -> Reply {
        if session.state != SessionState::AwaitingMenuChoice {
            // Press on an outdated menu render (e.g. after /quit).
            return Reply::text(STALE_MENU);
        }
        let Some(username) = session.last_username.clone() else {
            // State invariant: last_username is set while the menu is shown.
            session.reset();
            return Reply::text(STALE_MENU);
        };

        match button {
            MenuButton::UserInfo => match self.github.fetch_profile(&username).await {
                Ok(profile) => Reply::with_menu(format_profile(&profile), Menu::Main),
                Err(e) => {
                    warn!(chat_id = session.chat_id, error = %e, "Profile lookup failed");
                    Reply::with_menu(describe_error(&e), Menu::Main)
                }
            },
            MenuButton::Repositories => {
                self.repos_lookup(&username, Some(Menu::Main)).await
            }
            MenuButton::Quit => {
                info!(chat_id = session.chat_id, "step: quit via menu, session reset");
                session.reset();
                Reply::text(FAREWELL)
            }
        }
    }

    async fn repos_lookup(&self, username: &str, menu: Option<Menu>) -> Reply {
        match self
            .github
            .fetch_top_repositories(username, DEFAULT_REPO_LIMIT)
            .await
        {
            Ok(repos) => Reply {
                text: format_repositories(username, &repos),
                menu,
            },
            Err(e) => {
                warn!(username = %username, error = %e, "Repository lookup failed");
                Reply {
                    text: describe_error(&e),
                    menu,
                }
            }
        }
    }
}

/// Keyboard matching the given state: the menu stays visible while a choice
/// is pending, otherwise any keyboard is removed.
fn menu_for(state: SessionState) -> Option<Menu> {
    match state {
        SessionState::Idle => None,
        SessionState::AwaitingMenuChoice => Some(Menu::Main),
    }
}

/// Guidance for unrecognized input, listing what is valid in this state.
fn guidance_for(state: SessionState) -> Reply {
    match state {
        SessionState::Idle => Reply::text(GUIDANCE_IDLE),
        SessionState::AwaitingMenuChoice => Reply::with_menu(GUIDANCE_MENU, Menu::Main),
    }
}

/// Converts a GitHub failure into the single user-visible message for it.
fn describe_error(err: &GithubError) -> String {
    match err {
        GithubError::InvalidUsername(_) => "That doesn't look like a valid GitHub username. \
             Usernames are 1-39 letters, digits or single hyphens."
            .to_string(),
        GithubError::NotFound(username) => format!("User @{} not found on GitHub.", username),
        GithubError::Upstream(_) => {
            "Couldn't reach GitHub right now. Please try again later.".to_string()
        }
    }
}
