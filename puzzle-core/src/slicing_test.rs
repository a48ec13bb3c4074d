#![allow(clippy::float_cmp)]

use std::collections::HashSet;

use super::*;

const CANVAS: Size = Size {
    width: 1000.0,
    height: 800.0,
};

#[test]
fn grid_cuts_tile_the_target_rectangle() {
    let image = Size::new(600.0, 400.0);
    let cuts = slice_grid(image, 0.5, CANVAS, Grid { rows: 2, cols: 3 });
    assert_eq!(cuts.len(), 6);
    let target = target_rect(CANVAS, image, 0.5);
    for cut in &cuts {
        assert_eq!(cut.size, Size::new(100.0, 100.0));
        assert_eq!(cut.source.width, 200.0);
        assert!(target.encloses(&Rect::at(cut.original_position, cut.size)));
    }
    let last = cuts.last().expect("cut");
    assert_eq!(last.id, "r1c2");
    assert_eq!(last.source.origin(), Point::new(400.0, 200.0));
    assert_eq!(last.original_position, Point::new(550.0, 400.0));
}

#[test]
fn cut_ids_are_unique() {
    let cuts = slice_grid(Size::new(640.0, 480.0), 1.0, CANVAS, Grid { rows: 5, cols: 7 });
    let ids = cuts.iter().map(|c| c.id.as_str()).collect::<HashSet<_>>();
    assert_eq!(ids.len(), 35);
}

#[test]
fn empty_grid_yields_no_cuts() {
    assert!(slice_grid(Size::new(10.0, 10.0), 1.0, CANVAS, Grid { rows: 0, cols: 3 }).is_empty());
}

#[test]
fn pieces_from_cuts_start_solved() {
    let cuts = slice_grid(Size::new(600.0, 400.0), 1.0, CANVAS, Grid { rows: 2, cols: 2 });
    let piece = cuts[1].piece(cuts[1].size);
    assert_eq!(piece.id(), "r0c1");
    assert_eq!(piece.current_position(), cuts[1].original_position);
    assert!(piece.is_in_place());
    assert!(!piece.is_fixed());
}

#[test]
fn fit_scale_respects_the_tighter_axis() {
    assert_eq!(fit_scale(Size::new(2000.0, 1000.0), CANVAS, 0.5), 0.25);
    assert_eq!(fit_scale(Size::new(100.0, 400.0), CANVAS, 0.5), 1.0);
    assert_eq!(fit_scale(Size::new(0.0, 400.0), CANVAS, 0.5), 1.0);
}
