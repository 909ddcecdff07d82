//! Read-only view of a game for the presentation layer.

use crate::{Cell, Mark, Player};
use serde::{Deserialize, Serialize};

/// Title line shown above the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum Heading {
    /// Game in progress.
    #[display("{}'s Turn", _0)]
    Turn(Player),
    /// Game won.
    #[display("{} Wins", _0)]
    Wins(Player),
    /// Board full, nobody won.
    #[display("Draw")]
    Draw,
}

/// Everything the renderer needs for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderState {
    cells: [Mark; 9],
    heading: Heading,
    has_winner: bool,
}

impl RenderState {
    /// Creates a snapshot.
    pub fn new(cells: [Mark; 9], heading: Heading, has_winner: bool) -> Self {
        Self {
            cells,
            heading,
            has_winner,
        }
    }

    /// Marks in row-major order.
    pub fn cells(&self) -> &[Mark; 9] {
        &self.cells
    }

    /// Mark at `cell`.
    pub fn mark(&self, cell: Cell) -> Mark {
        self.cells[cell.index()]
    }

    /// Occupied cells with their marks.
    pub fn occupied(&self) -> impl Iterator<Item = (Cell, Mark)> + '_ {
        Cell::ALL
            .into_iter()
            .map(|cell| (cell, self.mark(cell)))
            .filter(|(_, mark)| !mark.is_empty())
    }

    /// Title line.
    pub fn heading(&self) -> Heading {
        self.heading
    }

    /// True once a line has been completed.
    pub fn has_winner(&self) -> bool {
        self.has_winner
    }
}
