//! End-to-end games driven through placements and pointer presses.

use clicktoe_core::{
    BoardGeometry, Cell, Click, Controller, Game, Heading, Mark, Outcome, Player, Point,
    WINNING_LINES,
};

/// Cells outside `line` that `count` filler moves can use without forming a line.
fn fillers(line: [Cell; 3], count: usize) -> Vec<Cell> {
    let mut chosen: Vec<Cell> = Vec::new();
    for cell in Cell::ALL {
        if chosen.len() == count {
            break;
        }
        if line.contains(&cell) {
            continue;
        }
        chosen.push(cell);
        let completes_line = WINNING_LINES
            .iter()
            .any(|l| l.iter().all(|c| chosen.contains(c)));
        if chosen.len() == 3 && completes_line {
            chosen.pop();
        }
    }
    assert_eq!(chosen.len(), count);
    chosen
}

#[test]
fn test_x_wins_every_line() {
    for line in WINNING_LINES {
        let filler = fillers(line, 2);
        let mut game = Game::new();
        let moves = [line[0], filler[0], line[1], filler[1], line[2]];
        for (turn, cell) in moves.into_iter().enumerate() {
            game.play(cell).expect("legal move");
            assert_eq!(game.has_winner(), turn == 4, "line {line:?} after move {turn}");
        }
        assert_eq!(game.outcome(), &Outcome::Won { player: Player::X, line });
    }
}

#[test]
fn test_o_wins_every_line() {
    for line in WINNING_LINES {
        let filler = fillers(line, 3);
        let mut game = Game::new();
        let moves = [filler[0], line[0], filler[1], line[1], filler[2], line[2]];
        for cell in moves {
            game.play(cell).expect("legal move");
        }
        assert_eq!(game.winner(), Some(Player::O), "line {line:?}");
        assert_eq!(game.render_state().heading(), Heading::Wins(Player::O));
    }
}

#[test]
fn test_mixed_line_does_not_win() {
    let mut game = Game::new();
    // X, O, X across the top row.
    for cell in [Cell::TopLeft, Cell::TopCenter, Cell::TopRight] {
        game.play(cell).expect("legal move");
    }
    assert!(!game.has_winner());
    assert!(!game.check_winner());
}

#[test]
fn test_top_row_scenario_through_pointer_presses() {
    let geometry = BoardGeometry::default();
    let mut controller = Controller::new(geometry);
    let press = |cell: Cell| geometry.cell_rect(cell).center();

    for number in [1, 4, 2, 5] {
        let cell = Cell::from_number(number).expect("valid cell number");
        assert!(matches!(controller.on_pointer_down(press(cell)), Click::Placed { .. }));
        assert!(!controller.render_state().has_winner());
    }

    let click = controller.on_pointer_down(press(Cell::TopRight));
    assert_eq!(
        click,
        Click::Placed {
            cell: Cell::TopRight,
            player: Player::X,
            outcome: Outcome::Won {
                player: Player::X,
                line: [Cell::TopLeft, Cell::TopCenter, Cell::TopRight],
            },
        }
    );
    let state = controller.render_state();
    assert!(state.has_winner());
    assert_eq!(state.heading().to_string(), "X Wins");
    assert_eq!(state.mark(Cell::MiddleLeft), Mark::O);

    assert_eq!(controller.on_pointer_down(press(Cell::Center)), Click::Reset);
    let state = controller.render_state();
    assert!(state.cells().iter().all(|m| m.is_empty()));
    assert_eq!(state.heading().to_string(), "X's Turn");
    assert!(!state.has_winner());
}

#[test]
fn test_draw_resets_on_next_press() {
    let geometry = BoardGeometry::default();
    let mut controller = Controller::new(geometry);
    for cell in [
        Cell::TopLeft,
        Cell::TopCenter,
        Cell::TopRight,
        Cell::Center,
        Cell::MiddleLeft,
        Cell::MiddleRight,
        Cell::BottomCenter,
        Cell::BottomLeft,
        Cell::BottomRight,
    ] {
        controller.on_pointer_down(geometry.cell_rect(cell).center());
    }
    assert_eq!(controller.render_state().heading(), Heading::Draw);
    assert!(!controller.render_state().has_winner());

    assert_eq!(controller.on_pointer_down(Point::new(1.0, 1.0)), Click::Reset);
    assert_eq!(controller.game(), &Game::new());
}

#[test]
fn test_press_on_outer_edges_does_not_panic() {
    let geometry = BoardGeometry::default();
    let mut controller = Controller::new(geometry);
    let right = geometry.x + geometry.width;
    let bottom = geometry.y + geometry.height;

    assert_eq!(controller.on_pointer_down(Point::new(right, 300.0)), Click::Missed);
    assert_eq!(controller.on_pointer_down(Point::new(400.0, bottom)), Click::Missed);
    assert_eq!(
        controller.on_pointer_down(Point::new(geometry.x, geometry.y)),
        Click::Placed {
            cell: Cell::TopLeft,
            player: Player::X,
            outcome: Outcome::InProgress,
        }
    );
}
