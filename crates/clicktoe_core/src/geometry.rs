//! Screen-space board layout and pointer-to-cell resolution.

use crate::Cell;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A position in screen units, origin at the top-left of the window.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal offset, growing rightwards.
    pub x: f32,
    /// Vertical offset, growing downwards.
    pub y: f32,
}

impl Point {
    /// Creates a point.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle in screen units.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge.
    pub x: f32,
    /// Top edge.
    pub y: f32,
    /// Extent to the right of `x`.
    pub width: f32,
    /// Extent below `y`.
    pub height: f32,
}

impl Rect {
    /// Creates a rectangle from its top-left corner and size.
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Top-left corner.
    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Midpoint.
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// True if `point` lies in `[x, x + width) × [y, y + height)`.
    pub fn contains(&self, point: Point) -> bool {
        (self.x..self.x + self.width).contains(&point.x)
            && (self.y..self.y + self.height).contains(&point.y)
    }
}

/// Placement of the board on screen.
///
/// Each axis is cut into thirds; the cut at `1/3` and `2/3` of the extent
/// separates the columns (horizontally) and the rows (vertically).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardGeometry {
    /// Left edge of the board.
    pub x: f32,
    /// Top edge of the board.
    pub y: f32,
    /// Board width.
    pub width: f32,
    /// Board height.
    pub height: f32,
}

impl Default for BoardGeometry {
    fn default() -> Self {
        Self {
            x: 300.0,
            y: 200.0,
            width: 400.0,
            height: 400.0,
        }
    }
}

impl BoardGeometry {
    /// Creates a geometry with the given origin and extents.
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// The whole board.
    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// Width of one column.
    pub fn cell_width(&self) -> f32 {
        self.width / 3.0
    }

    /// Height of one row.
    pub fn cell_height(&self) -> f32 {
        self.height / 3.0
    }

    /// Resolves a pointer position to the cell under it.
    ///
    /// Bounds are half-open on both axes: the left and top edges belong to
    /// the board, the right and bottom edges do not. Non-finite
    /// coordinates resolve to `None`.
    #[instrument(level = "trace", skip(self))]
    pub fn cell_at(&self, point: Point) -> Option<Cell> {
        if !self.bounds().contains(point) {
            return None;
        }
        let column = third(point.x, self.x, self.width);
        let row = third(point.y, self.y, self.height);
        Cell::at(row, column)
    }

    /// Screen area covered by `cell`.
    ///
    /// Edges come from the same cuts [`cell_at`](Self::cell_at) compares
    /// against, so every point of the rectangle resolves back to `cell`.
    pub fn cell_rect(&self, cell: Cell) -> Rect {
        let left = cut(self.x, self.width, cell.column());
        let top = cut(self.y, self.height, cell.row());
        Rect::new(
            left,
            top,
            cut(self.x, self.width, cell.column() + 1) - left,
            cut(self.y, self.height, cell.row() + 1) - top,
        )
    }

    /// Top-left corner of the glyph drawn in `cell`.
    ///
    /// Glyphs sit at the top of their cell, inset by a quarter of the cell width.
    pub fn mark_origin(&self, cell: Cell) -> Point {
        let rect = self.cell_rect(cell);
        Point::new(rect.x + rect.width / 4.0, rect.y)
    }

    /// The four grid bars: two vertical, then two horizontal.
    ///
    /// Each bar is `thickness` wide, centred on a third boundary and spans
    /// the full board.
    pub fn grid_lines(&self, thickness: f32) -> [Rect; 4] {
        let half = thickness / 2.0;
        let vertical = |k| {
            Rect::new(
                cut(self.x, self.width, k) - half,
                self.y,
                thickness,
                self.height,
            )
        };
        let horizontal = |k| {
            Rect::new(
                self.x,
                cut(self.y, self.height, k) - half,
                self.width,
                thickness,
            )
        };
        [vertical(1), vertical(2), horizontal(1), horizontal(2)]
    }
}

/// Screen position of the `k`-th cut along an axis, `k` in `0..=3`.
///
/// The outer cuts are the board edges themselves.
fn cut(start: f32, extent: f32, k: usize) -> f32 {
    match k {
        0 => start,
        3 => start + extent,
        k => start + extent * k as f32 / 3.0,
    }
}

/// Which third of the axis holds `position`, given it lies on the board.
fn third(position: f32, start: f32, extent: f32) -> usize {
    (1..3)
        .find(|&k| position < cut(start, extent, k))
        .map_or(2, |k| k - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_centres_resolve() {
        let geometry = BoardGeometry::default();
        for cell in Cell::ALL {
            let centre = geometry.cell_rect(cell).center();
            assert_eq!(geometry.cell_at(centre), Some(cell), "{cell}");
        }
    }

    #[test]
    fn test_top_left_edges_are_inside() {
        let geometry = BoardGeometry::default();
        assert_eq!(geometry.cell_at(Point::new(300.0, 200.0)), Some(Cell::TopLeft));
        assert_eq!(geometry.cell_at(Point::new(300.0, 599.0)), Some(Cell::BottomLeft));
        assert_eq!(geometry.cell_at(Point::new(699.0, 200.0)), Some(Cell::TopRight));
    }

    #[test]
    fn test_right_and_bottom_edges_are_outside() {
        let geometry = BoardGeometry::default();
        assert_eq!(geometry.cell_at(Point::new(700.0, 300.0)), None);
        assert_eq!(geometry.cell_at(Point::new(400.0, 600.0)), None);
        assert_eq!(geometry.cell_at(Point::new(700.0, 600.0)), None);
    }

    #[test]
    fn test_height_bounds_rows_on_tall_board() {
        let geometry = BoardGeometry::new(0.0, 0.0, 300.0, 600.0);
        assert_eq!(geometry.cell_at(Point::new(10.0, 350.0)), Some(Cell::MiddleLeft));
        assert_eq!(geometry.cell_at(Point::new(10.0, 550.0)), Some(Cell::BottomLeft));
        assert_eq!(geometry.cell_at(Point::new(10.0, 600.0)), None);
    }

    #[test]
    fn test_thresholds_split_at_thirds() {
        let geometry = BoardGeometry::new(0.0, 0.0, 300.0, 300.0);
        assert_eq!(geometry.cell_at(Point::new(99.9, 0.0)), Some(Cell::TopLeft));
        assert_eq!(geometry.cell_at(Point::new(100.0, 0.0)), Some(Cell::TopCenter));
        assert_eq!(geometry.cell_at(Point::new(200.0, 0.0)), Some(Cell::TopRight));
        assert_eq!(geometry.cell_at(Point::new(0.0, 100.0)), Some(Cell::MiddleLeft));
        assert_eq!(geometry.cell_at(Point::new(0.0, 200.0)), Some(Cell::BottomLeft));
    }

    #[test]
    fn test_cell_corners_resolve_to_their_cell() {
        for geometry in [
            BoardGeometry::default(),
            BoardGeometry::new(0.0, 0.0, 300.0, 300.0),
            BoardGeometry::new(17.5, 3.25, 401.0, 251.0),
        ] {
            for cell in Cell::ALL {
                let origin = geometry.cell_rect(cell).origin();
                assert_eq!(geometry.cell_at(origin), Some(cell), "{cell} on {geometry:?}");
            }
        }
    }

    #[test]
    fn test_cell_rects_tile_the_board() {
        let geometry = BoardGeometry::default();
        let bottom_right = geometry.cell_rect(Cell::BottomRight);
        assert_eq!(bottom_right.x + bottom_right.width, 700.0);
        assert_eq!(bottom_right.y + bottom_right.height, 600.0);
        let left = geometry.cell_rect(Cell::TopLeft);
        let centre = geometry.cell_rect(Cell::TopCenter);
        assert_eq!(left.x + left.width, centre.x);
    }

    #[test]
    fn test_non_finite_points_miss() {
        let geometry = BoardGeometry::default();
        assert_eq!(geometry.cell_at(Point::new(f32::NAN, 300.0)), None);
        assert_eq!(geometry.cell_at(Point::new(400.0, f32::INFINITY)), None);
    }

    #[test]
    fn test_degenerate_board_never_resolves() {
        let geometry = BoardGeometry::new(10.0, 10.0, 0.0, 0.0);
        assert_eq!(geometry.cell_at(Point::new(10.0, 10.0)), None);
    }

    #[test]
    fn test_mark_origin_insets_quarter_cell() {
        let geometry = BoardGeometry::new(0.0, 0.0, 300.0, 300.0);
        assert_eq!(geometry.mark_origin(Cell::TopLeft), Point::new(25.0, 0.0));
        assert_eq!(geometry.mark_origin(Cell::Center), Point::new(125.0, 100.0));
        assert_eq!(geometry.mark_origin(Cell::BottomRight), Point::new(225.0, 200.0));
    }

    #[test]
    fn test_grid_lines_centre_on_thirds() {
        let geometry = BoardGeometry::new(0.0, 0.0, 300.0, 300.0);
        let [v1, v2, h1, h2] = geometry.grid_lines(4.0);
        assert_eq!(v1, Rect::new(98.0, 0.0, 4.0, 300.0));
        assert_eq!(v2, Rect::new(198.0, 0.0, 4.0, 300.0));
        assert_eq!(h1, Rect::new(0.0, 98.0, 300.0, 4.0));
        assert_eq!(h2, Rect::new(0.0, 198.0, 300.0, 4.0));
    }
}
