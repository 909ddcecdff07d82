//! Clicktoe - two-player tic-tac-toe in a native window.
//!
//! The game rules live in [`clicktoe_core`]; this crate draws them and
//! feeds mouse presses back in.
//!
//! # Architecture
//!
//! - **Config**: window size, board placement, fonts and colours (TOML)
//! - **Render**: composes a frame onto any [`Canvas`]
//! - **Window**: the egui event loop and its [`Canvas`] implementation

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod render;
mod window;

pub use config::{ConfigError, DisplayConfig, Rgb};
pub use render::{Canvas, draw_frame};
pub use window::{ClicktoeApp, EguiCanvas, load_font, run};
