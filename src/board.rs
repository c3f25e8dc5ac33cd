use std::fmt;
use std::str::FromStr;

use crate::error::ReversiError;
use crate::types::{Cell, Piece, Player, Square};

/// Side length of the standard board.
pub const DEFAULT_SIDE: usize = 8;
const MIN_SIDE: usize = 4;

/// Reversi board: a `side * side` grid of squares stored row-major.
///
/// The board is a plain container. It does not know the rules and never
/// rejects a write other than for being off the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    side: usize,
    squares: Vec<Square>,
}

impl Board {
    /// Creates the initial board for `side`.
    ///
    /// With `c = side / 2` the center block is
    /// `(c-1, c-1)=white, (c, c-1)=black, (c-1, c)=black, (c, c)=white`.
    ///
    /// # Panics
    /// When `side` is odd or smaller than 4.
    pub fn new(side: usize) -> Self {
        assert!(is_valid_side(side), "invalid board side {side}");
        Self::initial(side)
    }

    /// Fallible form of [`Board::new`].
    pub fn try_new(side: usize) -> Result<Self, ReversiError> {
        if !is_valid_side(side) {
            return Err(ReversiError::InvalidSide { side });
        }
        Ok(Self::initial(side))
    }

    fn initial(side: usize) -> Self {
        let mut board = Self {
            side,
            squares: vec![Square::Empty; side * side],
        };
        let center = side / 2;
        let white = Square::Occupied(Piece::initial(Player::White));
        let black = Square::Occupied(Piece::initial(Player::Black));
        board.set(center - 1, center - 1, white);
        board.set(center, center - 1, black);
        board.set(center - 1, center, black);
        board.set(center, center, white);
        board
    }

    pub fn side(&self) -> usize {
        self.side
    }

    pub fn contains(&self, x: usize, y: usize) -> bool {
        x < self.side && y < self.side
    }

    /// Returns the square at `(x, y)`.
    ///
    /// # Panics
    /// When `(x, y)` is off the board.
    pub fn get(&self, x: usize, y: usize) -> Square {
        assert!(self.contains(x, y), "({x}, {y}) is off a {0}x{0} board", self.side);
        self.squares[self.index(x, y)]
    }

    /// Checked read; `None` for cells off the board.
    pub fn square(&self, cell: Cell) -> Option<Square> {
        self.contains(cell.x, cell.y)
            .then(|| self.squares[self.index(cell.x, cell.y)])
    }

    /// Overwrites the square at `(x, y)`.
    ///
    /// # Panics
    /// When `(x, y)` is off the board.
    pub fn set(&mut self, x: usize, y: usize, square: Square) {
        assert!(self.contains(x, y), "({x}, {y}) is off a {0}x{0} board", self.side);
        let index = self.index(x, y);
        self.squares[index] = square;
    }

    /// Iterates all cells with their squares in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Cell, Square)> + '_ {
        self.squares
            .iter()
            .enumerate()
            .map(|(i, square)| (Cell::new(i % self.side, i / self.side), *square))
    }

    /// Number of pieces owned by `player`.
    pub fn count(&self, player: Player) -> usize {
        self.squares.iter().filter(|square| square.is(player)).count()
    }

    /// Returns `(black_count, white_count)`.
    pub fn counts(&self) -> (usize, usize) {
        (self.count(Player::Black), self.count(Player::White))
    }

    /// Returns the number of empty squares.
    pub fn empty_count(&self) -> usize {
        self.squares.iter().filter(|square| square.is_empty()).count()
    }

    /// Converts the board to row-major codes where 0=empty, 1=black, 2=white.
    pub fn to_array(&self) -> Vec<u8> {
        self.squares.iter().map(|square| square.code()).collect()
    }

    fn index(&self, x: usize, y: usize) -> usize {
        y * self.side + x
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_SIDE)
    }
}

impl fmt::Display for Board {
    /// One line per row: `X` black, `O` white, `.` empty.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.squares.chunks(self.side) {
            for square in row {
                let c = match square.player() {
                    Some(Player::Black) => 'X',
                    Some(Player::White) => 'O',
                    None => '.',
                };
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = ReversiError;

    /// Parses the [`Display`](fmt::Display) form back into a board.
    ///
    /// Blank lines and surrounding whitespace are ignored. Pieces get the
    /// opening timestamp.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|row| !row.is_empty())
            .collect();
        let side = rows.len();
        if !is_valid_side(side) {
            return Err(ReversiError::InvalidSide { side });
        }

        let mut squares = Vec::with_capacity(side * side);
        for (y, row) in rows.iter().enumerate() {
            if row.chars().count() != side {
                return Err(ReversiError::Decode {
                    what: "board",
                    message: format!("row {y} does not have {side} cells"),
                });
            }
            for c in row.chars() {
                let square = match c {
                    'X' | 'x' => Square::Occupied(Piece::initial(Player::Black)),
                    'O' | 'o' => Square::Occupied(Piece::initial(Player::White)),
                    '.' => Square::Empty,
                    other => {
                        return Err(ReversiError::Decode {
                            what: "board",
                            message: format!("unexpected cell {other:?} in row {y}"),
                        });
                    }
                };
                squares.push(square);
            }
        }

        Ok(Self { side, squares })
    }
}

pub(crate) fn is_valid_side(side: usize) -> bool {
    side >= MIN_SIDE && side % 2 == 0
}
