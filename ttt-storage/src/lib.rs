//! # ttt-storage
//!
//! SQLite persistence for the Tic Tac Toe bot. [`GameRepository`] implements
//! [`ttt_core::SessionStore`] with versioned JSON game documents and a
//! monotonic game id allocator.

mod game_repo;

pub use game_repo::GameRepository;
