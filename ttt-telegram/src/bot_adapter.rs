//! Wraps teloxide::Bot and implements [`ttt_core::Bot`]. Production code
//! talks to the Telegram API; tests substitute a recording Bot impl.

use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::{
    ChatId, InlineKeyboardButton, InlineKeyboardMarkup, InlineQueryResult,
    InlineQueryResultArticle, InputMessageContent, InputMessageContentText,
};

use ttt_core::{BoardControls, Bot as CoreBot, BotError, Chat, Result};

/// Thin wrapper around teloxide::Bot that implements the core Bot trait.
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    /// Creates an adapter from an existing teloxide Bot.
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }
}

/// Builds the inline keyboard for a rendered board, one callback button per
/// cell.
pub fn board_markup(controls: &BoardControls) -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(controls.rows.iter().map(|row| {
        row.iter().map(|button| {
            InlineKeyboardButton::callback(button.label.clone(), button.token.clone())
        })
    }))
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_new_game_prompt(
        &self,
        chat: &Chat,
        text: &str,
        button_label: &str,
    ) -> Result<()> {
        // switch_inline_query opens the chat picker, so the sender chooses
        // where the game is hosted.
        let keyboard = InlineKeyboardMarkup::new([[InlineKeyboardButton::switch_inline_query(
            button_label.to_string(),
            String::new(),
        )]]);
        self.bot
            .send_message(ChatId(chat.id), text.to_string())
            .reply_markup(keyboard)
            .await
            .map_err(|e| BotError::Bot(e.to_string()))?;
        Ok(())
    }

    async fn answer_new_game(
        &self,
        query_id: &str,
        title: &str,
        status_text: &str,
        controls: &BoardControls,
    ) -> Result<()> {
        let content =
            InputMessageContent::Text(InputMessageContentText::new(status_text.to_string()));
        let article = InlineQueryResultArticle::new(query_id.to_string(), title.to_string(), content)
            .reply_markup(board_markup(controls));

        // cache_time 0 keeps Telegram from replaying this article, which
        // carries an already-allocated game id, for later queries.
        self.bot
            .answer_inline_query(
                query_id.to_string(),
                vec![InlineQueryResult::Article(article)],
            )
            .cache_time(0)
            .is_personal(true)
            .await
            .map_err(|e| BotError::Bot(e.to_string()))?;
        Ok(())
    }

    async fn answer_callback(&self, callback_id: &str, notice: &str) -> Result<()> {
        let request = self.bot.answer_callback_query(callback_id.to_string());
        let request = if notice.is_empty() {
            request
        } else {
            request.text(notice.to_string())
        };
        request.await.map_err(|e| BotError::Bot(e.to_string()))?;
        Ok(())
    }

    async fn update_board(
        &self,
        inline_message_id: &str,
        status_text: &str,
        controls: &BoardControls,
    ) -> Result<()> {
        self.bot
            .edit_message_text_inline(inline_message_id.to_string(), status_text.to_string())
            .reply_markup(board_markup(controls))
            .await
            .map_err(|e| BotError::Bot(e.to_string()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use teloxide::types::InlineKeyboardButtonKind;
    use ttt_core::BoardButton;

    /// **Test: board_markup keeps the grid shape and maps labels to button
    /// text and tokens to callback data.**
    #[test]
    fn test_board_markup_maps_labels_and_tokens() {
        let controls = BoardControls {
            rows: vec![
                vec![
                    BoardButton {
                        label: "⭕".to_string(),
                        token: "1_1_1".to_string(),
                    },
                    BoardButton {
                        label: " ".to_string(),
                        token: "1_1_2".to_string(),
                    },
                ],
                vec![BoardButton {
                    label: "❎".to_string(),
                    token: "1_2_1".to_string(),
                }],
            ],
        };

        let markup = board_markup(&controls);
        assert_eq!(markup.inline_keyboard.len(), 2);
        assert_eq!(markup.inline_keyboard[0].len(), 2);
        assert_eq!(markup.inline_keyboard[0][0].text, "⭕");
        assert_eq!(markup.inline_keyboard[0][1].text, " ");
        assert_eq!(markup.inline_keyboard[1][0].text, "❎");

        match &markup.inline_keyboard[0][0].kind {
            InlineKeyboardButtonKind::CallbackData(data) => assert_eq!(data, "1_1_1"),
            other => panic!("expected a callback button, got {:?}", other),
        }
        match &markup.inline_keyboard[1][0].kind {
            InlineKeyboardButtonKind::CallbackData(data) => assert_eq!(data, "1_2_1"),
            other => panic!("expected a callback button, got {:?}", other),
        }
    }
}
