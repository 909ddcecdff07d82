//! Clicktoe core - two-player tic-tac-toe driven by pointer presses.
//!
//! # Architecture
//!
//! - **Board**: marks, cells and the eight winning lines
//! - **Geometry**: where the board sits on screen and which cell a press hits
//! - **Game**: placement, win detection and reset
//! - **Controller**: owns the game and turns presses into state changes
//! - **Render**: the per-frame snapshot handed to a renderer
//!
//! # Example
//!
//! ```
//! use clicktoe_core::{BoardGeometry, Click, Controller, Point};
//!
//! let mut controller = Controller::new(BoardGeometry::default());
//! let click = controller.on_pointer_down(Point::new(350.0, 250.0));
//! assert!(matches!(click, Click::Placed { .. }));
//! assert_eq!(controller.render_state().heading().to_string(), "O's Turn");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod controller;
mod game;
mod geometry;
mod invariants;
mod render;

pub use board::{Board, Cell, Mark, Player, WINNING_LINES, winning_line};
pub use controller::{Click, Controller};
pub use game::{Game, Outcome, PlaceError};
pub use geometry::{BoardGeometry, Point, Rect};
pub use invariants::{
    AlternatingTurn, Invariant, InvariantViolation, MonotonicBoard, check_invariants,
};
pub use render::{Heading, RenderState};
