//! Handler edge cases: greeting scope, bot-account filtering and the notice
//! paths for presses that never reach the board.

use std::sync::Arc;

use tempfile::TempDir;

use tictactoe_bot::handlers::{GreetingHandler, MoveHandler, NewGameHandler};
use tictactoe_bot::EventRouter;
use ttt_core::{Bot, Chat, EventHandler, GameEvent, Player, SessionStore};
use ttt_storage::GameRepository;

mod mock_bot;
use mock_bot::{BotCall, MockBot};

struct Fixture {
    _dir: TempDir,
    store: Arc<GameRepository>,
    bot: MockBot,
    router: EventRouter,
}

async fn fixture() -> Fixture {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("games.db");
    let store = Arc::new(
        GameRepository::new(path.to_str().expect("utf-8 path"))
            .await
            .expect("open repository"),
    );
    let bot = MockBot::new();
    let bot_handle: Arc<dyn Bot> = Arc::new(bot.clone());
    let router = EventRouter::new(
        GreetingHandler::new(bot_handle.clone()),
        NewGameHandler::new(store.clone(), bot_handle.clone()),
        MoveHandler::new(store.clone(), bot_handle),
    );
    Fixture {
        _dir: dir,
        store,
        bot,
        router,
    }
}

fn player(id: i64, name: &str) -> Player {
    Player {
        id,
        is_bot: false,
        username: Some(name.to_string()),
        first_name: Some(name.to_string()),
        last_name: None,
    }
}

fn chat(id: i64, chat_type: &str) -> Chat {
    Chat {
        id,
        chat_type: chat_type.to_string(),
    }
}

/// **Test: A direct message gets the greeting with the start button.**
///
/// **Setup:** Router with an empty store.
/// **Action:** Route a `DirectMessage` from a private chat.
/// **Expected:** One new-game prompt to that chat carrying the invitation
/// text and the "Start Game" button label.
#[tokio::test]
async fn test_private_message_gets_the_invitation() {
    let fx = fixture().await;

    fx.router
        .handle(GameEvent::DirectMessage {
            chat: chat(7, "private"),
        })
        .await
        .expect("router must absorb the event");

    let calls = fx.bot.take_calls();
    assert_eq!(calls.len(), 1);
    match &calls[0] {
        BotCall::NewGamePrompt {
            chat_id,
            text,
            button_label,
        } => {
            assert_eq!(*chat_id, 7);
            assert_eq!(text, "Hello! Let's play Tic Tac Toe.");
            assert_eq!(button_label, "Start Game");
        }
        other => panic!("expected a new game prompt, got {:?}", other),
    }
}

/// **Test: Group chat messages get no reply.**
///
/// **Setup:** Router with an empty store.
/// **Action:** Route a `DirectMessage` from a group chat.
/// **Expected:** No bot calls at all.
#[tokio::test]
async fn test_group_messages_are_ignored() {
    let fx = fixture().await;

    fx.router
        .handle(GameEvent::DirectMessage {
            chat: chat(-100, "group"),
        })
        .await
        .expect("router must absorb the event");

    assert!(fx.bot.take_calls().is_empty());
}

/// **Test: Events from bot accounts are dropped.**
///
/// **Setup:** A player flagged `is_bot`.
/// **Action:** Route an inline query and a button press from that account.
/// **Expected:** No bot calls and no game created.
#[tokio::test]
async fn test_bot_accounts_cannot_host_or_play() {
    let fx = fixture().await;
    let mut impostor = player(9, "impostor");
    impostor.is_bot = true;

    fx.router
        .handle(GameEvent::NewGameRequest {
            query_id: "iq-9".to_string(),
            requester: impostor.clone(),
        })
        .await
        .expect("router must absorb the event");
    fx.router
        .handle(GameEvent::MoveAttempt {
            callback_id: "cb-9".to_string(),
            inline_message_id: Some("imid-9".to_string()),
            actor: impostor,
            token: "1_1_1".to_string(),
        })
        .await
        .expect("router must absorb the event");

    assert!(fx.bot.take_calls().is_empty());
    assert!(fx.store.load(1).await.expect("load must succeed").is_none());
}

/// **Test: A press referencing a game the store never saw gets a notice.**
///
/// **Setup:** Empty store.
/// **Action:** bob presses a cell of game 42.
/// **Expected:** A "game not found" notice and nothing else.
#[tokio::test]
async fn test_unknown_game_gets_a_notice() {
    let fx = fixture().await;
    let bob = player(2, "bob");

    fx.router
        .handle(GameEvent::MoveAttempt {
            callback_id: "cb-42".to_string(),
            inline_message_id: Some("imid-42".to_string()),
            actor: bob,
            token: "42_1_1".to_string(),
        })
        .await
        .expect("router must absorb the event");

    let calls = fx.bot.take_calls();
    assert_eq!(calls.len(), 1);
    match &calls[0] {
        BotCall::CallbackAnswer {
            callback_id,
            notice,
        } => {
            assert_eq!(callback_id, "cb-42");
            assert_eq!(notice, "game not found");
        }
        other => panic!("expected a callback answer, got {:?}", other),
    }
}

/// **Test: Garbage callback data gets an "invalid move" notice.**
///
/// **Setup:** Empty store.
/// **Action:** Press with unparseable data and with out-of-range coordinates.
/// **Expected:** Each press is answered with "invalid move"; the store stays
/// untouched.
#[tokio::test]
async fn test_malformed_callback_data_gets_a_notice() {
    let fx = fixture().await;
    let bob = player(2, "bob");

    for data in ["garbage", "1_1", "1_0_1", "1_4_1"] {
        fx.router
            .handle(GameEvent::MoveAttempt {
                callback_id: format!("cb-{}", data),
                inline_message_id: Some("imid-1".to_string()),
                actor: bob.clone(),
                token: data.to_string(),
            })
            .await
            .expect("router must absorb the event");

        let calls = fx.bot.take_calls();
        assert_eq!(calls.len(), 1, "data {:?} must produce exactly one ack", data);
        match &calls[0] {
            BotCall::CallbackAnswer { notice, .. } => assert_eq!(notice, "invalid move"),
            other => panic!("expected a callback answer, got {:?}", other),
        }
    }
}

/// **Test: A press without an inline message still advances the game.**
///
/// **Setup:** alice hosts game 1.
/// **Action:** bob presses a cell in an event with no inline message id.
/// **Expected:** The move persists and the callback is acked silently, but no
/// board update is attempted.
#[tokio::test]
async fn test_press_without_a_board_message_still_persists() {
    let fx = fixture().await;
    let alice = player(1, "alice");
    let bob = player(2, "bob");
    fx.router
        .handle(GameEvent::NewGameRequest {
            query_id: "iq-1".to_string(),
            requester: alice,
        })
        .await
        .expect("router must absorb the event");
    fx.bot.take_calls();

    fx.router
        .handle(GameEvent::MoveAttempt {
            callback_id: "cb-1".to_string(),
            inline_message_id: None,
            actor: bob.clone(),
            token: "1_1_1".to_string(),
        })
        .await
        .expect("router must absorb the event");

    let calls = fx.bot.take_calls();
    assert_eq!(calls.len(), 1);
    match &calls[0] {
        BotCall::CallbackAnswer { notice, .. } => assert_eq!(notice, ""),
        other => panic!("expected a callback answer, got {:?}", other),
    }

    let stored = fx
        .store
        .load(1)
        .await
        .expect("load must succeed")
        .expect("game must exist");
    assert_eq!(stored.version, 1);
    assert_eq!(stored.game.guest(), Some(&bob));
}
