//! Frame composition over a minimal drawing surface.

use crate::config::{DisplayConfig, Rgb};
use clicktoe_core::{BoardGeometry, Point, Rect, RenderState};
use tracing::instrument;

/// The drawing primitives a frame needs.
pub trait Canvas {
    /// Fills the whole surface.
    fn clear(&mut self, color: Rgb);

    /// Fills `rect`.
    fn fill_rect(&mut self, rect: Rect, color: Rgb);

    /// Draws `text` with its top-left corner at `origin`.
    fn draw_text(&mut self, origin: Point, text: &str, size: f32, color: Rgb);
}

/// Draws one frame: background, heading, grid, then marks.
#[instrument(level = "trace", skip_all)]
pub fn draw_frame<C: Canvas + ?Sized>(
    canvas: &mut C,
    state: &RenderState,
    geometry: &BoardGeometry,
    config: &DisplayConfig,
) {
    let foreground = config.foreground();
    canvas.clear(config.background());

    canvas.draw_text(
        Point::new(geometry.x, config.title_y()),
        &state.heading().to_string(),
        config.title_font_size(),
        foreground,
    );

    for bar in geometry.grid_lines(config.line_thickness()) {
        canvas.fill_rect(bar, foreground);
    }

    for (cell, mark) in state.occupied() {
        canvas.draw_text(
            geometry.mark_origin(cell),
            mark.symbol(),
            config.mark_font_size(),
            foreground,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clicktoe_core::{Cell, Controller};

    #[derive(Debug, Clone, PartialEq)]
    enum Op {
        Clear(Rgb),
        Fill(Rect, Rgb),
        Text(Point, String, f32),
    }

    #[derive(Default)]
    struct Recorder {
        ops: Vec<Op>,
    }

    impl Canvas for Recorder {
        fn clear(&mut self, color: Rgb) {
            self.ops.push(Op::Clear(color));
        }

        fn fill_rect(&mut self, rect: Rect, color: Rgb) {
            self.ops.push(Op::Fill(rect, color));
        }

        fn draw_text(&mut self, origin: Point, text: &str, size: f32, _color: Rgb) {
            self.ops.push(Op::Text(origin, text.to_string(), size));
        }
    }

    fn texts(recorder: &Recorder) -> Vec<String> {
        recorder
            .ops
            .iter()
            .filter_map(|op| match op {
                Op::Text(_, text, _) => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_empty_board_draws_heading_and_grid() {
        let config = DisplayConfig::default();
        let controller = Controller::new(config.board());
        let mut recorder = Recorder::default();
        draw_frame(&mut recorder, &controller.render_state(), controller.geometry(), &config);

        assert_eq!(recorder.ops[0], Op::Clear(Rgb::new(25, 25, 25)));
        assert_eq!(
            recorder.ops[1],
            Op::Text(Point::new(300.0, 50.0), "X's Turn".to_string(), 100.0)
        );
        let bars = recorder.ops.iter().filter(|op| matches!(op, Op::Fill(..))).count();
        assert_eq!(bars, 4);
        assert_eq!(texts(&recorder), vec!["X's Turn".to_string()]);
    }

    #[test]
    fn test_marks_drawn_at_their_cells() {
        let config = DisplayConfig::default();
        let mut controller = Controller::new(config.board());
        let geometry = *controller.geometry();
        controller.on_pointer_down(geometry.cell_rect(Cell::Center).center());
        controller.on_pointer_down(geometry.cell_rect(Cell::BottomRight).center());

        let mut recorder = Recorder::default();
        draw_frame(&mut recorder, &controller.render_state(), &geometry, &config);

        assert!(recorder.ops.contains(&Op::Text(
            geometry.mark_origin(Cell::Center),
            "X".to_string(),
            150.0
        )));
        assert!(recorder.ops.contains(&Op::Text(
            geometry.mark_origin(Cell::BottomRight),
            "O".to_string(),
            150.0
        )));
        assert_eq!(texts(&recorder)[0], "X's Turn");
    }
}
