//! Single owner of game state, fed by pointer events.

use crate::{BoardGeometry, Cell, Game, Outcome, PlaceError, Player, Point, RenderState};
use tracing::{debug, instrument};

/// What a pointer press did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Click {
    /// The game was over; the board was cleared.
    Reset,
    /// The press landed outside the board.
    Missed,
    /// The press landed on an occupied cell and was ignored.
    Ignored(Cell),
    /// A mark was placed.
    Placed {
        /// Cell that received the mark.
        cell: Cell,
        /// Player who moved.
        player: Player,
        /// Outcome after the win check.
        outcome: Outcome,
    },
}

/// Owns the game and the board's screen placement.
///
/// Input handling and rendering both go through this value; one press is
/// fully processed before the next is read.
#[derive(Debug, Clone, Default)]
pub struct Controller {
    game: Game,
    geometry: BoardGeometry,
}

impl Controller {
    /// Creates a controller with a fresh game laid out by `geometry`.
    #[instrument]
    pub fn new(geometry: BoardGeometry) -> Self {
        Self {
            game: Game::new(),
            geometry,
        }
    }

    /// The game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// The board's screen placement.
    pub fn geometry(&self) -> &BoardGeometry {
        &self.geometry
    }

    /// Handles a primary-button press at `point`.
    ///
    /// A press on a finished game resets it regardless of where it lands.
    /// Otherwise the press is resolved to a cell and, if that cell is
    /// vacant, the current player's mark is placed there and the winning
    /// lines are checked. Presses that miss the board or hit an occupied
    /// cell change nothing.
    #[instrument(skip(self))]
    pub fn on_pointer_down(&mut self, point: Point) -> Click {
        if self.game.is_over() {
            self.game.reset();
            return Click::Reset;
        }

        let Some(cell) = self.geometry.cell_at(point) else {
            debug!("Press outside the board");
            return Click::Missed;
        };

        match self.game.play(cell) {
            Ok(player) => Click::Placed {
                cell,
                player,
                outcome: *self.game.outcome(),
            },
            Err(PlaceError::Occupied(cell)) => {
                debug!(%cell, "Cell already occupied");
                Click::Ignored(cell)
            }
            // Unreachable while the game-over branch above runs first.
            Err(PlaceError::GameOver) => Click::Ignored(cell),
        }
    }

    /// Resets the game without a press.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.game.reset();
    }

    /// Snapshot for the current frame.
    pub fn render_state(&self) -> RenderState {
        self.game.render_state()
    }
}
