//! Wrappers converting teloxide users and chats into the transport-agnostic
//! [`Player`] and [`Chat`] types the game handlers work with.

use ttt_core::{Chat, Player, ToCoreChat, ToCorePlayer};

/// Wraps a teloxide User for conversion to a core [`Player`].
pub struct TelegramUserWrapper<'a>(pub &'a teloxide::types::User);

impl<'a> ToCorePlayer for TelegramUserWrapper<'a> {
    fn to_core(&self) -> Player {
        Player {
            id: self.0.id.0 as i64,
            is_bot: self.0.is_bot,
            username: self.0.username.clone(),
            first_name: Some(self.0.first_name.clone()),
            last_name: self.0.last_name.clone(),
        }
    }
}

/// Wraps a teloxide Chat for conversion to a core [`Chat`].
pub struct TelegramChatWrapper<'a>(pub &'a teloxide::types::Chat);

impl<'a> ToCoreChat for TelegramChatWrapper<'a> {
    fn to_core(&self) -> Chat {
        Chat {
            id: self.0.id.0,
            chat_type: chat_type(self.0).to_string(),
        }
    }
}

fn chat_type(chat: &teloxide::types::Chat) -> &'static str {
    if chat.is_private() {
        "private"
    } else if chat.is_group() {
        "group"
    } else if chat.is_supergroup() {
        "supergroup"
    } else {
        "channel"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// **Test: TelegramUserWrapper converts a teloxide User to a core Player
    /// with correct id, bot flag and names.**
    #[test]
    fn test_telegram_user_wrapper_to_core() {
        let user = teloxide::types::User {
            id: teloxide::types::UserId(123),
            is_bot: false,
            first_name: "Test".to_string(),
            last_name: Some("User".to_string()),
            username: Some("testuser".to_string()),
            language_code: Some("en".to_string()),
            is_premium: false,
            added_to_attachment_menu: false,
        };

        let wrapper = TelegramUserWrapper(&user);
        let player = wrapper.to_core();

        assert_eq!(player.id, 123);
        assert!(!player.is_bot);
        assert_eq!(player.username, Some("testuser".to_string()));
        assert_eq!(player.first_name, Some("Test".to_string()));
        assert_eq!(player.last_name, Some("User".to_string()));
    }

    /// **Test: Bot accounts keep their is_bot flag through the conversion.**
    #[test]
    fn test_telegram_user_wrapper_preserves_is_bot() {
        let user = teloxide::types::User {
            id: teloxide::types::UserId(777),
            is_bot: true,
            first_name: "SomeBot".to_string(),
            last_name: None,
            username: Some("some_bot".to_string()),
            language_code: None,
            is_premium: false,
            added_to_attachment_menu: false,
        };

        assert!(TelegramUserWrapper(&user).to_core().is_bot);
    }
}
