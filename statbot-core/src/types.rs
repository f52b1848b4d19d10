//! Core types: chat identity, inbound events, menu buttons, and replies.

use serde::{Deserialize, Serialize};

/// Chat (channel or private) identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chat {
    pub id: i64,
    pub chat_type: String,
}

/// Converts a transport-specific chat type to core [`Chat`].
pub trait ToCoreChat: Send + Sync {
    fn to_core(&self) -> Chat;
}

/// A slash command, parsed from inbound text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Start,
    Help,
    /// `/repos <username>`: repository lookup without entering the menu.
    Repos { username: String },
    Quit,
    /// Any other slash command (including `/repos` with no argument).
    Unknown(String),
}

impl Command {
    /// Parses a slash command from message text. Returns `None` when the text
    /// does not start with `/`. A `@botname` suffix on the command (Telegram
    /// group syntax) is ignored.
    pub fn parse(text: &str) -> Option<Command> {
        let text = text.trim();
        if !text.starts_with('/') {
            return None;
        }
        let mut parts = text.split_whitespace();
        let head = parts.next().unwrap_or(text);
        let name = head.split('@').next().unwrap_or(head);
        let cmd = match name {
            "/start" => Command::Start,
            "/help" => Command::Help,
            "/quit" => Command::Quit,
            "/repos" => match parts.next() {
                Some(username) => Command::Repos {
                    username: username.to_string(),
                },
                None => Command::Unknown(head.to_string()),
            },
            _ => Command::Unknown(head.to_string()),
        };
        Some(cmd)
    }
}

/// One of the three menu actions, as a tagged variant rather than raw label
/// text. Stale presses are rejected by the engine against the session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuButton {
    UserInfo,
    Repositories,
    Quit,
}

impl MenuButton {
    pub const USER_INFO: &'static str = "User Info";
    pub const REPOSITORIES: &'static str = "Repositories";
    pub const QUIT: &'static str = "Quit";

    /// Parses an exact button label. Returns `None` for anything else.
    pub fn parse(label: &str) -> Option<MenuButton> {
        match label.trim() {
            Self::USER_INFO => Some(MenuButton::UserInfo),
            Self::REPOSITORIES => Some(MenuButton::Repositories),
            Self::QUIT => Some(MenuButton::Quit),
            _ => None,
        }
    }

    /// The label shown on the keyboard for this button.
    pub fn label(&self) -> &'static str {
        match self {
            MenuButton::UserInfo => Self::USER_INFO,
            MenuButton::Repositories => Self::REPOSITORIES,
            MenuButton::Quit => Self::QUIT,
        }
    }
}

/// One inbound event from the transport, already classified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InboundEvent {
    Command(Command),
    /// Free text; treated as a candidate GitHub username while idle.
    Text(String),
    Button(MenuButton),
}

/// A selectable menu attached to a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Menu {
    /// The three-option menu shown once a username is accepted.
    Main,
}

impl Menu {
    /// Button labels in display order.
    pub fn labels(&self) -> &'static [&'static str] {
        match self {
            Menu::Main => &[
                MenuButton::USER_INFO,
                MenuButton::REPOSITORIES,
                MenuButton::QUIT,
            ],
        }
    }
}

/// Outbound message: text plus the keyboard to show. `menu: None` means the
/// transport removes any previously shown keyboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub menu: Option<Menu>,
}

impl Reply {
    /// Plain text reply; removes any visible keyboard.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            menu: None,
        }
    }

    /// Text reply with a menu keyboard attached.
    pub fn with_menu(text: impl Into<String>, menu: Menu) -> Self {
        Self {
            text: text.into(),
            menu: Some(menu),
        }
    }
}
