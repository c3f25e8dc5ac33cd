use derive_more::Display;
use serde::{Deserialize, Serialize};

/// One of the two sides in a game.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    #[display("black")]
    Black,
    #[display("white")]
    White,
}

impl Player {
    /// Returns the other player.
    pub const fn opponent(self) -> Self {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }

    /// Cell code used by flattened boards: 1=black, 2=white.
    pub const fn code(self) -> u8 {
        match self {
            Player::Black => 1,
            Player::White => 2,
        }
    }
}

impl Default for Player {
    /// Black always moves first.
    fn default() -> Self {
        Player::Black
    }
}

impl std::ops::Not for Player {
    type Output = Self;

    fn not(self) -> Self {
        self.opponent()
    }
}

/// A board coordinate, zero-based, `x` is the column and `y` the row.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[display("({x}, {y})")]
pub struct Cell {
    pub x: usize,
    pub y: usize,
}

impl Cell {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl From<(usize, usize)> for Cell {
    fn from((x, y): (usize, usize)) -> Self {
        Self::new(x, y)
    }
}

/// A piece on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Piece {
    pub player: Player,
    /// Move index at which the piece was placed or last flipped.
    pub placed_at: u32,
    /// `true` when the piece got its color from a flip rather than a placement.
    pub turned: bool,
}

impl Piece {
    /// A piece from the opening layout.
    pub const fn initial(player: Player) -> Self {
        Self {
            player,
            placed_at: 0,
            turned: false,
        }
    }
}

/// State of a single board cell.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Square {
    #[default]
    Empty,
    Occupied(Piece),
}

impl Square {
    /// Owner of the cell, if any.
    pub const fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(piece) => Some(piece.player),
        }
    }

    pub const fn is_empty(self) -> bool {
        matches!(self, Square::Empty)
    }

    /// Returns `true` when the cell holds a piece of `player`.
    pub fn is(self, player: Player) -> bool {
        self.player() == Some(player)
    }

    /// Cell code used by flattened boards: 0=empty, 1=black, 2=white.
    pub const fn code(self) -> u8 {
        match self {
            Square::Empty => 0,
            Square::Occupied(piece) => piece.player.code(),
        }
    }
}

/// Public game state handed to presentation layers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    pub side: usize,
    /// Row-major cell codes, see [`Square::code`].
    pub board: Vec<u8>,
    pub current_player: Player,
    pub black_count: usize,
    pub white_count: usize,
    pub move_count: u32,
    pub is_game_over: bool,
    /// Contract:
    /// - `true` when the last move left the opponent without a reply, so the mover keeps the turn.
    /// - `false` otherwise, including before the first move.
    pub is_pass: bool,
    /// Cells flipped by the last accepted move, empty before the first move.
    pub flipped: Vec<Cell>,
    /// Settable cells for `current_player`.
    pub legal_moves: Vec<Cell>,
}

/// Final result after game over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameResult {
    /// `None` on a draw.
    pub winner: Option<Player>,
    pub black_count: usize,
    pub white_count: usize,
}

impl GameResult {
    pub fn from_counts(black_count: usize, white_count: usize) -> Self {
        let winner = match black_count.cmp(&white_count) {
            std::cmp::Ordering::Greater => Some(Player::Black),
            std::cmp::Ordering::Less => Some(Player::White),
            std::cmp::Ordering::Equal => None,
        };
        Self {
            winner,
            black_count,
            white_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opponent_is_an_involution() {
        assert_eq!(Player::Black.opponent(), Player::White);
        assert_eq!(!Player::White, Player::Black);
        assert_eq!(!!Player::Black, Player::Black);
    }

    #[test]
    fn result_picks_the_larger_count() {
        assert_eq!(GameResult::from_counts(40, 24).winner, Some(Player::Black));
        assert_eq!(GameResult::from_counts(10, 54).winner, Some(Player::White));
        assert_eq!(GameResult::from_counts(32, 32).winner, None);
    }

    #[test]
    fn square_codes_match_flattened_board_contract() {
        assert_eq!(Square::Empty.code(), 0);
        assert_eq!(Square::Occupied(Piece::initial(Player::Black)).code(), 1);
        assert_eq!(Square::Occupied(Piece::initial(Player::White)).code(), 2);
    }
}
