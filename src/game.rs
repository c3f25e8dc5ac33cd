use std::fmt;

use tracing::{debug, info};

use crate::board::Board;
use crate::config::GameConfig;
use crate::error::{MoveError, ReversiError};
use crate::types::{Cell, GameResult, GameState, Piece, Player, Square};

const DIRECTIONS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Callback fired once when a game ends.
pub type TerminationCallback = Box<dyn Fn()>;

/// Outcome of an accepted move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub player: Player,
    pub cell: Cell,
    /// Flipped cells, grouped by direction.
    pub flipped: Vec<Cell>,
    /// The opponent had no reply, so the mover keeps the turn.
    pub passed: bool,
    /// Neither player can move any more.
    pub finished: bool,
}

/// Rules and turn state for one game.
///
/// Cloning gives an independent game: board, turn and history are copied
/// and the clone starts without termination callbacks.
pub struct GameEngine {
    board: Board,
    active_player: Player,
    move_count: u32,
    history: Vec<Board>,
    last_move: Option<Placement>,
    finished: bool,
    observers: Vec<TerminationCallback>,
}

impl GameEngine {
    /// Starts a game on the initial board with black to move.
    ///
    /// # Panics
    /// When `side` is odd or smaller than 4.
    pub fn new(side: usize) -> Self {
        Self::from_position(Board::new(side), Player::Black)
    }

    pub fn try_new(side: usize) -> Result<Self, ReversiError> {
        Ok(Self::from_position(Board::try_new(side)?, Player::Black))
    }

    pub fn with_config(config: &GameConfig) -> Result<Self, ReversiError> {
        config.validate()?;
        Self::try_new(config.side)
    }

    /// Starts a game from an arbitrary position.
    ///
    /// The move counter starts at zero and the history is empty. When
    /// `active_player` has no legal move the turn goes to the opponent, and
    /// when neither side can move the game starts finished.
    pub fn from_position(board: Board, active_player: Player) -> Self {
        let mut game = Self {
            board,
            active_player,
            move_count: 0,
            history: Vec::new(),
            last_move: None,
            finished: false,
            observers: Vec::new(),
        };
        if !game.has_legal_move(active_player) {
            if game.has_legal_move(active_player.opponent()) {
                debug!(skipped = %active_player, "no legal move in starting position, turn passes");
                game.active_player = active_player.opponent();
            } else {
                game.check_termination();
            }
        }
        game
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The player whose move is currently legal.
    pub fn active_player(&self) -> Player {
        self.active_player
    }

    /// Number of accepted moves so far.
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Boards as they were before each accepted move, oldest first.
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    pub fn last_move(&self) -> Option<&Placement> {
        self.last_move.as_ref()
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Returns `true` when `player` may place a piece at `(x, y)`.
    pub fn is_legal_move(&self, player: Player, x: usize, y: usize) -> bool {
        if !self.is_vacant(x, y) {
            return false;
        }
        let origin = Cell::new(x, y);
        DIRECTIONS
            .iter()
            .any(|&direction| !self.bracket(player, origin, direction).is_empty())
    }

    /// Lists settable cells for `player`, row by row.
    pub fn legal_moves(&self, player: Player) -> Vec<Cell> {
        let side = self.board.side();
        (0..side)
            .flat_map(|y| (0..side).map(move |x| Cell::new(x, y)))
            .filter(|cell| self.is_legal_move(player, cell.x, cell.y))
            .collect()
    }

    pub fn has_legal_move(&self, player: Player) -> bool {
        self.board
            .cells()
            .any(|(cell, _)| self.is_legal_move(player, cell.x, cell.y))
    }

    /// Plays a move and reports whether it was accepted.
    ///
    /// Moves by the inactive player and illegal moves are rejected without
    /// touching the game.
    pub fn apply_move(&mut self, player: Player, x: usize, y: usize) -> bool {
        self.try_move(player, Cell::new(x, y)).is_ok()
    }

    /// Plays a move: places the piece, flips every bracketed run, advances
    /// the turn and checks for the end of the game.
    pub fn try_move(&mut self, player: Player, cell: Cell) -> Result<Placement, MoveError> {
        if player != self.active_player {
            debug!(%player, %cell, active = %self.active_player, "move out of turn");
            return Err(MoveError::WrongTurn { player });
        }

        let flipped = self.flips(player, cell);
        if flipped.is_empty() {
            debug!(%player, %cell, "illegal move");
            return Err(MoveError::Illegal { player, cell });
        }

        self.history.push(self.board.clone());
        let stamp = self.move_count;
        self.board.set(
            cell.x,
            cell.y,
            Square::Occupied(Piece {
                player,
                placed_at: stamp,
                turned: false,
            }),
        );
        for target in &flipped {
            self.board.set(
                target.x,
                target.y,
                Square::Occupied(Piece {
                    player,
                    placed_at: stamp,
                    turned: true,
                }),
            );
        }
        self.move_count += 1;
        debug!(%player, %cell, flipped = flipped.len(), move_count = self.move_count, "placed piece");

        let other = player.opponent();
        let other_can_move = self.has_legal_move(other);
        if other_can_move {
            self.active_player = other;
        }

        let finished = self.check_termination();
        let passed = !other_can_move && !finished;
        if passed {
            debug!(%player, skipped = %other, "opponent has no reply, turn passes back");
        }

        let placement = Placement {
            player,
            cell,
            flipped,
            passed,
            finished,
        };
        self.last_move = Some(placement.clone());
        Ok(placement)
    }

    /// Registers a callback fired once when neither player can move.
    pub fn on_terminate(&mut self, callback: impl Fn() + 'static) {
        self.observers.push(Box::new(callback));
    }

    /// Re-evaluates the end of the game and returns whether it is over.
    ///
    /// Observers fire in registration order on the first call that finds
    /// the game over and never again for this game.
    pub fn check_termination(&mut self) -> bool {
        if self.finished {
            return true;
        }
        if self.has_legal_move(Player::Black) || self.has_legal_move(Player::White) {
            return false;
        }

        self.finished = true;
        let (black_count, white_count) = self.score();
        info!(black_count, white_count, moves = self.move_count, "game over");
        for observer in &self.observers {
            observer();
        }
        true
    }

    /// Returns `(black_count, white_count)`.
    pub fn score(&self) -> (usize, usize) {
        self.board.counts()
    }

    /// Winner and counts, once the game is over.
    pub fn result(&self) -> Option<GameResult> {
        if !self.finished {
            return None;
        }
        let (black_count, white_count) = self.score();
        Some(GameResult::from_counts(black_count, white_count))
    }

    pub fn to_game_state(&self) -> GameState {
        let (black_count, white_count) = self.score();
        GameState {
            side: self.board.side(),
            board: self.board.to_array(),
            current_player: self.active_player,
            black_count,
            white_count,
            move_count: self.move_count,
            is_game_over: self.finished,
            is_pass: self.last_move.as_ref().is_some_and(|m| m.passed),
            flipped: self
                .last_move
                .as_ref()
                .map(|m| m.flipped.clone())
                .unwrap_or_default(),
            legal_moves: self.legal_moves(self.active_player),
        }
    }

    fn is_vacant(&self, x: usize, y: usize) -> bool {
        self.board
            .square(Cell::new(x, y))
            .is_some_and(Square::is_empty)
    }

    /// Every opponent cell a placement at `cell` would flip.
    fn flips(&self, player: Player, cell: Cell) -> Vec<Cell> {
        if !self.is_vacant(cell.x, cell.y) {
            return Vec::new();
        }
        DIRECTIONS
            .iter()
            .flat_map(|&direction| self.bracket(player, cell, direction))
            .collect()
    }

    /// Opponent run between `origin` and the nearest `player` piece along
    /// `direction`, or empty when that direction closes no bracket.
    fn bracket(&self, player: Player, origin: Cell, (dx, dy): (isize, isize)) -> Vec<Cell> {
        let mut line = Vec::new();
        let mut cursor = origin;

        while let Some(next) = self.step(cursor, dx, dy) {
            match self.board.get(next.x, next.y).player() {
                Some(owner) if owner == player => return line,
                Some(_) => line.push(next),
                None => break,
            }
            cursor = next;
        }

        Vec::new()
    }

    fn step(&self, cell: Cell, dx: isize, dy: isize) -> Option<Cell> {
        let x = cell.x.checked_add_signed(dx)?;
        let y = cell.y.checked_add_signed(dy)?;
        self.board.contains(x, y).then_some(Cell::new(x, y))
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::from_position(Board::default(), Player::Black)
    }
}

impl Clone for GameEngine {
    fn clone(&self) -> Self {
        Self {
            board: self.board.clone(),
            active_player: self.active_player,
            move_count: self.move_count,
            history: self.history.clone(),
            last_move: self.last_move.clone(),
            finished: self.finished,
            observers: Vec::new(),
        }
    }
}

impl fmt::Debug for GameEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameEngine")
            .field("board", &self.board)
            .field("active_player", &self.active_player)
            .field("move_count", &self.move_count)
            .field("history", &self.history.len())
            .field("finished", &self.finished)
            .field("observers", &self.observers.len())
            .finish()
    }
}
