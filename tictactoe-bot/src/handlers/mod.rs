pub mod greeting_handler;
pub mod move_handler;
pub mod new_game_handler;

pub use greeting_handler::GreetingHandler;
pub use move_handler::MoveHandler;
pub use new_game_handler::NewGameHandler;
