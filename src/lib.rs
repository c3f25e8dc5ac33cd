//! Reversi rules engine with a pluggable computer opponent.
//!
//! [`GameEngine`] owns the rules: legal moves, flips, turn passing and the
//! end of the game. [`ai`] holds the move selectors that play against it and
//! [`wasm`] exposes both to the browser.

use wasm_bindgen::prelude::*;

pub mod ai;
pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod types;
pub mod wasm;

pub use board::Board;
pub use config::GameConfig;
pub use error::{MoveError, ReversiError};
pub use game::{GameEngine, Placement};
pub use types::{Cell, GameResult, GameState, Piece, Player, Square};

#[wasm_bindgen]
pub fn wasm_ready() -> bool {
    true
}
