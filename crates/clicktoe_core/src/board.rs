//! Board, marks and the fixed set of winning lines.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Side taking a turn.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum Player {
    /// Player X (moves first).
    X,
    /// Player O.
    O,
}

impl Player {
    /// Returns the other player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// Occupant of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Mark {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Claimed by X.
    X,
    /// Claimed by O.
    O,
}

impl Mark {
    /// Returns the player owning this mark, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Mark::Empty => None,
            Mark::X => Some(Player::X),
            Mark::O => Some(Player::O),
        }
    }

    /// True for [`Mark::Empty`].
    pub fn is_empty(self) -> bool {
        self == Mark::Empty
    }

    /// Glyph drawn for this mark.
    pub fn symbol(self) -> &'static str {
        match self {
            Mark::Empty => "",
            Mark::X => "X",
            Mark::O => "O",
        }
    }
}

impl From<Player> for Mark {
    fn from(player: Player) -> Self {
        match player {
            Player::X => Mark::X,
            Player::O => Mark::O,
        }
    }
}

/// One of the nine board slots, row-major.
///
/// Cells are numbered 1-9 for display and indexed 0-8 for storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum Cell {
    /// Cell 1.
    TopLeft,
    /// Cell 2.
    TopCenter,
    /// Cell 3.
    TopRight,
    /// Cell 4.
    MiddleLeft,
    /// Cell 5.
    Center,
    /// Cell 6.
    MiddleRight,
    /// Cell 7.
    BottomLeft,
    /// Cell 8.
    BottomCenter,
    /// Cell 9.
    BottomRight,
}

impl Cell {
    /// All nine cells in row-major order.
    pub const ALL: [Cell; 9] = [
        Cell::TopLeft,
        Cell::TopCenter,
        Cell::TopRight,
        Cell::MiddleLeft,
        Cell::Center,
        Cell::MiddleRight,
        Cell::BottomLeft,
        Cell::BottomCenter,
        Cell::BottomRight,
    ];

    /// Storage index (0-8).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Display number (1-9).
    pub fn number(self) -> u8 {
        self as u8 + 1
    }

    /// Cell at storage index `index`, if in range.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Cell with display number `number`, if in 1-9.
    #[instrument]
    pub fn from_number(number: u8) -> Option<Self> {
        number
            .checked_sub(1)
            .and_then(|index| Self::from_index(index as usize))
    }

    /// Cell at `row` and `column` (both 0-2).
    pub fn at(row: usize, column: usize) -> Option<Self> {
        if row < 3 && column < 3 {
            Self::from_index(row * 3 + column)
        } else {
            None
        }
    }

    /// Row, 0 at the top.
    pub fn row(self) -> usize {
        self.index() / 3
    }

    /// Column, 0 at the left.
    pub fn column(self) -> usize {
        self.index() % 3
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Cell::TopLeft => "Top-left",
            Cell::TopCenter => "Top-center",
            Cell::TopRight => "Top-right",
            Cell::MiddleLeft => "Middle-left",
            Cell::Center => "Center",
            Cell::MiddleRight => "Middle-right",
            Cell::BottomLeft => "Bottom-left",
            Cell::BottomCenter => "Bottom-center",
            Cell::BottomRight => "Bottom-right",
        }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.number(), self.label())
    }
}

/// Rows, columns and diagonals that win when uniformly occupied.
pub const WINNING_LINES: [[Cell; 3]; 8] = [
    // Rows
    [Cell::TopLeft, Cell::TopCenter, Cell::TopRight],
    [Cell::MiddleLeft, Cell::Center, Cell::MiddleRight],
    [Cell::BottomLeft, Cell::BottomCenter, Cell::BottomRight],
    // Columns
    [Cell::TopLeft, Cell::MiddleLeft, Cell::BottomLeft],
    [Cell::TopCenter, Cell::Center, Cell::BottomCenter],
    [Cell::TopRight, Cell::MiddleRight, Cell::BottomRight],
    // Diagonals
    [Cell::TopLeft, Cell::Center, Cell::BottomRight],
    [Cell::TopRight, Cell::Center, Cell::BottomLeft],
];

/// 3x3 grid of marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    marks: [Mark; 9],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark at `cell`.
    pub fn get(&self, cell: Cell) -> Mark {
        self.marks[cell.index()]
    }

    /// True if nobody has played at `cell`.
    pub fn is_vacant(&self, cell: Cell) -> bool {
        self.get(cell).is_empty()
    }

    /// All marks in row-major order.
    pub fn marks(&self) -> &[Mark; 9] {
        &self.marks
    }

    /// True once every cell is occupied.
    pub fn is_full(&self) -> bool {
        self.marks.iter().all(|mark| !mark.is_empty())
    }

    /// Cells still open for play.
    pub fn vacant_cells(&self) -> Vec<Cell> {
        Cell::ALL
            .iter()
            .copied()
            .filter(|cell| self.is_vacant(*cell))
            .collect()
    }

    /// Number of cells holding `player`'s mark.
    pub fn count(&self, player: Player) -> usize {
        let mark = Mark::from(player);
        self.marks.iter().filter(|m| **m == mark).count()
    }

    pub(crate) fn set(&mut self, cell: Cell, mark: Mark) {
        self.marks[cell.index()] = mark;
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for column in 0..3 {
                let cell = Cell::ALL[row * 3 + column];
                match self.get(cell) {
                    Mark::Empty => write!(f, "{}", cell.number())?,
                    mark => write!(f, "{}", mark.symbol())?,
                }
                if column < 2 {
                    write!(f, "|")?;
                }
            }
            if row < 2 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

/// First line fully held by one player, scanning rows, then columns, then diagonals.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<(Player, [Cell; 3])> {
    WINNING_LINES.iter().find_map(|&[a, b, c]| {
        let mark = board.get(a);
        match mark.player() {
            Some(player) if mark == board.get(b) && mark == board.get(c) => {
                Some((player, [a, b, c]))
            }
            _ => None,
        }
    })
}
