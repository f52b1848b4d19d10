//! Adapters from Telegram (teloxide) types to core types, and inbound text
//! classification.
//!
//! Reply keyboards deliver a button press as a plain text message carrying
//! the label, so classification maps exact labels to [`InboundEvent::Button`];
//! the engine then validates the press against the session state.

use statbot_core::{Chat, Command, InboundEvent, MenuButton, ToCoreChat};

/// Classifies one inbound message text: slash command, menu button label, or
/// free text (candidate username).
pub fn classify(text: &str) -> InboundEvent {
    if let Some(cmd) = Command::parse(text) {
        return InboundEvent::Command(cmd);
    }
    if let Some(button) = MenuButton::parse(text) {
        return InboundEvent::Button(button);
    }
    InboundEvent::Text(text.trim().to_string())
}

/// Wraps a teloxide Chat for conversion to core [`Chat`].
pub struct TelegramChatWrapper<'a>(pub &'a teloxide::types::Chat);

impl<'a> ToCoreChat for TelegramChatWrapper<'a> {
    fn to_core(&self) -> Chat {
        Chat {
            id: self.0.id.0,
            chat_type: format!("{:?}", self.0.kind),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_commands() {
        assert_eq!(
            classify("/start"),
            InboundEvent::Command(Command::Start)
        );
        assert_eq!(
            classify("/repos octocat"),
            InboundEvent::Command(Command::Repos {
                username: "octocat".to_string()
            })
        );
        assert_eq!(
            classify("/nonsense"),
            InboundEvent::Command(Command::Unknown("/nonsense".to_string()))
        );
    }

    #[test]
    fn test_classify_button_labels() {
        assert_eq!(
            classify("User Info"),
            InboundEvent::Button(MenuButton::UserInfo)
        );
        assert_eq!(
            classify("Repositories"),
            InboundEvent::Button(MenuButton::Repositories)
        );
        assert_eq!(classify("Quit"), InboundEvent::Button(MenuButton::Quit));
    }

    #[test]
    fn test_classify_free_text_is_trimmed() {
        assert_eq!(
            classify("  octocat  "),
            InboundEvent::Text("octocat".to_string())
        );
        // Near-miss labels are usernames, not buttons.
        assert_eq!(
            classify("user info please"),
            InboundEvent::Text("user info please".to_string())
        );
    }
}
