//! Error types.

use derive_more::{Display, Error};

use crate::types::{Cell, Player};

/// Setup and boundary errors.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ReversiError {
    /// Board side must be an even integer of at least 4.
    #[display("invalid board side {side}: expected an even number >= 4")]
    InvalidSide { side: usize },

    /// A value handed in from the host could not be decoded.
    #[display("could not decode {what}: {message}")]
    Decode {
        what: &'static str,
        message: String,
    },
}

/// Why a move was not applied. Neither variant changes the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// Someone other than the active player tried to move.
    #[display("it is not {player}'s turn")]
    WrongTurn { player: Player },

    /// The target cell is off the board, occupied, or closes no bracket.
    #[display("{player} cannot move to {cell}")]
    Illegal { player: Player, cell: Cell },
}
