use tui_2048::core::grid::Grid;
use tui_2048::core::{GameSnapshot, GameState, SequenceRng, SimpleRng};
use tui_2048::term::{tile_style, AnchorY, FrameBuffer, GameView, Viewport};

fn snapshot_of(rows: &[[u32; 4]]) -> GameSnapshot {
    let grid = Grid::from_rows(rows).unwrap();
    GameState::from_grid(grid, SequenceRng::default()).snapshot()
}

#[test]
fn term_view_renders_rounded_border_corners() {
    let snap = GameState::<SimpleRng>::new(4, 1).unwrap().snapshot();
    let view = GameView::default().with_anchor_y(AnchorY::Top);
    let vp = Viewport::new(80, 24);
    let fb = view.render(&snap, vp);

    let l = view.layout(4, vp);
    let right = l.start_x + l.frame_w - 1;
    let bottom = l.start_y + l.frame_h - 1;
    assert_eq!(l.start_y, 0);
    assert_eq!(fb.get(l.start_x, 0).unwrap().ch, '╭');
    assert_eq!(fb.get(right, 0).unwrap().ch, '╮');
    assert_eq!(fb.get(l.start_x, bottom).unwrap().ch, '╰');
    assert_eq!(fb.get(right, bottom).unwrap().ch, '╯');
}

#[test]
fn term_view_paints_tiles_with_palette_colours() {
    let snap = snapshot_of(&[[2048, 0, 0, 0], [0; 4], [0; 4], [0, 0, 0, 2]]);
    let view = GameView::default();
    let vp = Viewport::new(80, 24);
    let fb = view.render(&snap, vp);
    let l = view.layout(4, vp);

    let (x, y) = l.tile_origin(0, 0);
    assert_eq!(fb.get(x, y).unwrap().style.bg, tile_style(2048).bg);
    assert!(fb.row_text(y + l.cell_h / 2).contains("2048"));

    let (ex, ey) = l.tile_origin(1, 1);
    assert_eq!(fb.get(ex, ey).unwrap().style.bg, tile_style(0).bg);

    let (x, y) = l.tile_origin(3, 3);
    assert_eq!(fb.get(x, y).unwrap().style.bg, tile_style(2).bg);
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let mut snap = GameState::<SimpleRng>::new(4, 3).unwrap().snapshot();
    snap.score = 1234;
    snap.best = 99999;
    snap.moves = 17;

    let fb = GameView::default().render(&snap, Viewport::new(80, 24));
    for text in ["SCORE", "1234", "BEST", "99999", "SIZE", "4x4", "MOVES", "17"] {
        assert!(fb.contains_text(text), "missing {text}");
    }
}

#[test]
fn term_view_skips_side_panel_when_narrow() {
    let snap = GameState::<SimpleRng>::new(4, 3).unwrap().snapshot();
    let fb = GameView::default().render(&snap, Viewport::new(24, 24));
    assert!(!fb.contains_text("SCORE"));
}

#[test]
fn term_view_shows_game_over_overlay() {
    let mut snap = GameState::<SimpleRng>::new(4, 3).unwrap().snapshot();
    let view = GameView::default();
    let vp = Viewport::new(80, 24);
    assert!(!view.render(&snap, vp).contains_text("GAME OVER"));

    snap.game_over = true;
    assert!(view.render(&snap, vp).contains_text("GAME OVER"));
}

#[test]
fn term_view_render_into_reuses_and_resizes_buffer() {
    let snap = GameState::<SimpleRng>::new(6, 9).unwrap().snapshot();
    let view = GameView::default();
    let mut fb = FrameBuffer::new(10, 10);

    view.render_into(&snap, Viewport::new(80, 24), &mut fb);
    assert_eq!((fb.width(), fb.height()), (80, 24));

    view.render_into(&snap, Viewport::new(100, 40), &mut fb);
    assert_eq!((fb.width(), fb.height()), (100, 40));
}

#[test]
fn term_view_fits_largest_board_in_small_terminal() {
    let snap = GameState::<SimpleRng>::new(20, 9).unwrap().snapshot();
    let view = GameView::default();
    let vp = Viewport::new(80, 24);
    let l = view.layout(20, vp);
    let fb = view.render(&snap, vp);

    assert!(l.start_y + l.frame_h <= vp.height);
    assert!(l.start_x + l.frame_w <= vp.width);
    assert_eq!(fb.height(), 24);
}
