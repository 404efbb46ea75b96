//! Minesweeper game core: board model, mine placement, flood-fill reveal and the game state machine.
//!
//! The crate holds all game truth. A presentation layer forwards intents to [`Game`] and renders from
//! [`Game::cell_view`] or [`Snapshot`].
#![no_std]

extern crate alloc;

pub use board::*;
pub use config::*;
pub use error::*;
pub use game::*;
pub use placement::*;
pub use reveal::*;
pub use types::*;
pub use view::*;

mod board;
mod config;
mod error;
mod game;
mod placement;
mod reveal;
mod types;
mod view;
