//! The game state machine: placement, win detection and reset.

use crate::invariants::check_invariants;
use crate::{Board, Cell, Heading, Player, RenderState, winning_line};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Where the game stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Outcome {
    /// Moves are still being accepted.
    #[default]
    InProgress,
    /// A line was completed.
    Won {
        /// Owner of the completed line.
        player: Player,
        /// The completed line.
        line: [Cell; 3],
    },
    /// The board filled up without a completed line.
    Draw,
}

impl Outcome {
    /// True once the game has been won or drawn.
    pub fn is_over(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// The winning player, if any.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Won { player, .. } => Some(*player),
            _ => None,
        }
    }
}

/// Why a placement was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum PlaceError {
    /// The cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    Occupied(Cell),
    /// The game has been won or drawn and awaits a reset.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for PlaceError {}

/// Board, turn indicator and outcome of a single game.
///
/// The turn indicator flips exactly once per successful placement, including
/// the placement that wins. Win detection is a separate step: callers run
/// [`Game::check_winner`] after [`Game::place`], or use [`Game::play`] which
/// does both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    to_move: Player,
    outcome: Outcome,
    history: Vec<Cell>,
}

impl Game {
    /// Creates a game on an empty board with X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Player::X,
            outcome: Outcome::InProgress,
            history: Vec::with_capacity(9),
        }
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The player whose mark the next placement will put down.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Current outcome.
    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    /// True once a line has been completed.
    pub fn has_winner(&self) -> bool {
        matches!(self.outcome, Outcome::Won { .. })
    }

    /// The player who completed a line, if any.
    pub fn winner(&self) -> Option<Player> {
        self.outcome.winner()
    }

    /// True once the game has been won or drawn.
    pub fn is_over(&self) -> bool {
        self.outcome.is_over()
    }

    /// Cells in the order they were claimed since the last reset.
    pub fn history(&self) -> &[Cell] {
        &self.history
    }

    /// Puts the current player's mark on `cell` and passes the turn.
    ///
    /// Returns the player who moved. A refused placement leaves the game
    /// untouched.
    ///
    /// # Errors
    ///
    /// [`PlaceError::Occupied`] if `cell` already holds a mark,
    /// [`PlaceError::GameOver`] once the game has been won or drawn.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn place(&mut self, cell: Cell) -> Result<Player, PlaceError> {
        if self.outcome.is_over() {
            return Err(PlaceError::GameOver);
        }
        if !self.board.is_vacant(cell) {
            return Err(PlaceError::Occupied(cell));
        }

        let player = self.to_move;
        self.board.set(cell, player.into());
        self.history.push(cell);
        self.to_move = player.opponent();
        debug!(%cell, %player, "Mark placed");

        debug_assert!(
            check_invariants(self).is_ok(),
            "invariants violated: {:?}",
            check_invariants(self)
        );

        Ok(player)
    }

    /// Scans the winning lines and records the outcome.
    ///
    /// Returns true if the game has a winner. A full board without a line
    /// is recorded as a draw. An outcome, once recorded, is only cleared by
    /// [`Game::reset`].
    #[instrument(skip(self))]
    pub fn check_winner(&mut self) -> bool {
        if self.outcome.is_over() {
            return self.has_winner();
        }
        if let Some((player, line)) = winning_line(&self.board) {
            info!(%player, line = ?line, "Line completed");
            self.outcome = Outcome::Won { player, line };
            return true;
        }
        if self.board.is_full() {
            info!("Board full without a line");
            self.outcome = Outcome::Draw;
        }
        false
    }

    /// Places on `cell` and then checks for a winner.
    ///
    /// # Errors
    ///
    /// Propagates the refusal from [`Game::place`].
    #[instrument(skip(self))]
    pub fn play(&mut self, cell: Cell) -> Result<Player, PlaceError> {
        let player = self.place(cell)?;
        self.check_winner();
        Ok(player)
    }

    /// Clears the board, gives X the move and forgets the outcome.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!(moves = self.history.len(), "Resetting game");
        self.board = Board::new();
        self.to_move = Player::X;
        self.outcome = Outcome::InProgress;
        self.history.clear();
    }

    /// Snapshot consumed by the renderer every frame.
    pub fn render_state(&self) -> RenderState {
        let heading = match self.outcome {
            Outcome::InProgress => Heading::Turn(self.to_move),
            Outcome::Won { player, .. } => Heading::Wins(player),
            Outcome::Draw => Heading::Draw,
        };
        RenderState::new(*self.board.marks(), heading, self.has_winner())
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
