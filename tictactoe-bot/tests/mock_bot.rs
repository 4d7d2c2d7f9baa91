//! A recording [`ttt_core::Bot`] implementation for handler tests.
//!
//! Captures every outbound call so tests can assert on exactly what the
//! handlers said to the platform, without any network involved.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use ttt_core::{BoardControls, Bot, Chat, Result};

/// One outbound call captured by [`MockBot`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BotCall {
    NewGamePrompt {
        chat_id: i64,
        text: String,
        button_label: String,
    },
    InlineAnswer {
        query_id: String,
        title: String,
        status_text: String,
        controls: BoardControls,
    },
    CallbackAnswer {
        callback_id: String,
        notice: String,
    },
    BoardUpdate {
        inline_message_id: String,
        status_text: String,
        controls: BoardControls,
    },
}

/// Records calls instead of talking to Telegram. Cloning shares the log, so a
/// test can keep one handle while the handlers own another.
#[derive(Clone, Default)]
pub struct MockBot {
    calls: Arc<Mutex<Vec<BotCall>>>,
}

impl MockBot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drains and returns everything recorded so far.
    pub fn take_calls(&self) -> Vec<BotCall> {
        std::mem::take(&mut *self.calls.lock().unwrap())
    }
}

#[async_trait]
impl Bot for MockBot {
    async fn send_new_game_prompt(
        &self,
        chat: &Chat,
        text: &str,
        button_label: &str,
    ) -> Result<()> {
        self.calls.lock().unwrap().push(BotCall::NewGamePrompt {
            chat_id: chat.id,
            text: text.to_string(),
            button_label: button_label.to_string(),
        });
        Ok(())
    }

    async fn answer_new_game(
        &self,
        query_id: &str,
        title: &str,
        status_text: &str,
        controls: &BoardControls,
    ) -> Result<()> {
        self.calls.lock().unwrap().push(BotCall::InlineAnswer {
            query_id: query_id.to_string(),
            title: title.to_string(),
            status_text: status_text.to_string(),
            controls: controls.clone(),
        });
        Ok(())
    }

    async fn answer_callback(&self, callback_id: &str, notice: &str) -> Result<()> {
        self.calls.lock().unwrap().push(BotCall::CallbackAnswer {
            callback_id: callback_id.to_string(),
            notice: notice.to_string(),
        });
        Ok(())
    }

    async fn update_board(
        &self,
        inline_message_id: &str,
        status_text: &str,
        controls: &BoardControls,
    ) -> Result<()> {
        self.calls.lock().unwrap().push(BotCall::BoardUpdate {
            inline_message_id: inline_message_id.to_string(),
            status_text: status_text.to_string(),
            controls: controls.clone(),
        });
        Ok(())
    }
}
