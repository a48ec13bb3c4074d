use super::*;
use crate::geometry::Size;

fn piece(id: &str, ox: f64, oy: f64) -> Piece<Size> {
    Piece::new(id, Size::new(40.0, 30.0), Point::new(ox, oy))
}

fn two_pieces() -> PieceRegistry<Size> {
    let mut reg = PieceRegistry::new();
    reg.set_pieces(vec![piece("a", 0.0, 0.0), piece("b", 100.0, 100.0)]);
    reg
}

#[test]
fn find_by_id_returns_the_matching_piece() {
    let reg = two_pieces();
    assert_eq!(reg.len(), 2);
    for id in ["a", "b"] {
        let matches = reg.pieces().iter().filter(|p| p.id() == id).count();
        assert_eq!(matches, 1);
        assert_eq!(reg.find_by_id(id).map(Piece::id), Some(id));
    }
    assert!(reg.find_by_id("c").is_none());
}

#[test]
fn set_pieces_replaces_previous_state() {
    let mut reg = two_pieces();
    reg.update_status("a", true);
    reg.update_position("a", 500.0, 500.0);
    reg.set_pieces(vec![piece("a", 0.0, 0.0)]);
    let a = reg.find_by_id("a").expect("piece a");
    assert!(!a.is_fixed());
    assert_eq!(a.current_position(), Point::new(0.0, 0.0));
    assert!(reg.find_by_id("b").is_none());
}

#[test]
fn repeated_position_update_is_idempotent() {
    let mut once = two_pieces();
    once.update_position("a", 12.0, 34.0);
    let mut twice = two_pieces();
    twice.update_position("a", 12.0, 34.0);
    twice.update_position("a", 12.0, 34.0);
    let positions = |r: &PieceRegistry<Size>| {
        r.pieces()
            .iter()
            .map(|p| (p.current_position(), p.is_fixed()))
            .collect::<Vec<_>>()
    };
    assert_eq!(positions(&once), positions(&twice));
}

#[test]
fn unknown_id_updates_are_ignored() {
    let mut reg = two_pieces();
    reg.update_position("a", 7.0, 8.0);
    let before = reg
        .pieces()
        .iter()
        .map(|p| (p.current_position(), p.is_fixed()))
        .collect::<Vec<_>>();
    reg.update_position("does-not-exist", 1.0, 1.0);
    reg.update_status("does-not-exist", true);
    let after = reg
        .pieces()
        .iter()
        .map(|p| (p.current_position(), p.is_fixed()))
        .collect::<Vec<_>>();
    assert_eq!(before, after);
}

#[test]
fn position_update_leaves_solved_position_alone() {
    let mut reg = two_pieces();
    reg.update_position("b", 3.0, 4.0);
    let b = reg.find_by_id("b").expect("piece b");
    assert_eq!(b.current_position(), Point::new(3.0, 4.0));
    assert_eq!(b.original_position(), Point::new(100.0, 100.0));
}

#[test]
fn complete_when_every_piece_within_tolerance() {
    let mut reg = two_pieces();
    reg.update_position("a", 5.0, 5.0);
    reg.update_position("b", 108.0, 108.0);
    assert!(reg.is_complete());
}

#[test]
fn incomplete_when_one_piece_is_out_by_twenty() {
    let mut reg = two_pieces();
    reg.update_position("a", 5.0, 5.0);
    reg.update_position("b", 120.0, 120.0);
    assert!(!reg.is_complete());
}

#[test]
fn tolerance_is_strict_per_axis() {
    let mut reg = two_pieces();
    reg.update_position("a", 15.0, 0.0);
    assert!(!reg.is_complete());
    reg.update_position("a", 14.9, -14.9);
    assert!(reg.is_complete());
    reg.update_position("b", 100.0, 85.0);
    assert!(!reg.is_complete());
}

#[test]
fn completion_is_recomputed_after_each_update() {
    let mut reg = two_pieces();
    assert!(reg.is_complete());
    reg.update_position("a", 300.0, 300.0);
    assert!(!reg.is_complete());
    reg.update_position("a", 2.0, 1.0);
    assert!(reg.is_complete());
}

#[test]
fn empty_registry_is_vacuously_complete() {
    let reg: PieceRegistry<Size> = PieceRegistry::new();
    assert!(reg.is_empty());
    assert!(reg.is_complete());
}

#[test]
fn fixed_flag_does_not_affect_completion() {
    let mut reg = two_pieces();
    reg.update_position("b", 120.0, 120.0);
    reg.update_status("a", true);
    reg.update_status("b", true);
    assert!(!reg.is_complete());
    assert_eq!(reg.fixed_count(), 2);

    reg.update_position("b", 101.0, 99.0);
    reg.update_status("a", false);
    reg.update_status("b", false);
    assert!(reg.is_complete());
    assert_eq!(reg.fixed_count(), 0);
}
