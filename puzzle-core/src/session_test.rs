use rand::SeedableRng;
use rand::rngs::StdRng;

use super::*;
use crate::geometry::Point;

fn session_with_pieces() -> PuzzleSession<Size> {
    let mut session = PuzzleSession::new();
    session.set_pieces(vec![
        Piece::new("a", Size::new(40.0, 40.0), Point::new(0.0, 0.0)),
        Piece::new("b", Size::new(40.0, 40.0), Point::new(100.0, 100.0)),
    ]);
    session
}

fn loaded_session() -> PuzzleSession<Size> {
    let mut session = session_with_pieces();
    let ticket = session.begin_load();
    session
        .complete_load(ticket, Size::new(400.0, 300.0))
        .expect("load");
    session
}

#[test]
fn shuffle_without_image_is_a_no_op() {
    let mut session = session_with_pieces();
    let mut rng = StdRng::seed_from_u64(1);
    session.shuffle(1000.0, 800.0, 1.0, &mut rng);
    let positions = session
        .pieces()
        .iter()
        .map(Piece::current_position)
        .collect::<Vec<_>>();
    assert_eq!(positions, vec![Point::new(0.0, 0.0), Point::new(100.0, 100.0)]);
}

#[test]
fn shuffle_scatters_around_the_loaded_image() {
    let mut session = loaded_session();
    let mut rng = StdRng::seed_from_u64(2);
    session.shuffle(1000.0, 800.0, 1.0, &mut rng);
    let target = session
        .target_rect(Size::new(1000.0, 800.0), 1.0)
        .expect("target");
    for piece in session.pieces() {
        assert!(!target.intersects(&piece.bounds()));
    }
}

#[test]
fn drag_updates_pass_through_to_pieces() {
    let mut session = loaded_session();
    session.update_piece_position("a", 5.0, 5.0);
    session.update_piece_position("b", 108.0, 108.0);
    session.update_piece_status("b", true);
    assert!(session.is_complete());
    assert_eq!(session.fixed_count(), 1);
    let b = session.find_by_id("b").expect("b");
    assert_eq!(b.current_position(), Point::new(108.0, 108.0));
    assert!(b.is_fixed());

    session.update_piece_position("b", 120.0, 120.0);
    assert!(!session.is_complete());
}

#[test]
fn stale_load_is_discarded() {
    let mut session = session_with_pieces();
    let first = session.begin_load();
    let second = session.begin_load();
    let err = session
        .complete_load(first, Size::new(10.0, 10.0))
        .expect_err("stale");
    assert_eq!(
        err,
        LoadError::Stale {
            ticket: first.id(),
            current: second.id()
        }
    );
    assert!(!session.has_image());
    assert!(session.is_loading());

    session
        .complete_load(second, Size::new(20.0, 30.0))
        .expect("current load");
    assert_eq!(session.image_size(), Some(Size::new(20.0, 30.0)));
    assert!(!session.is_loading());
}

#[test]
fn new_load_keeps_previous_image_until_it_resolves() {
    let mut session = loaded_session();
    let ticket = session.begin_load();
    assert!(session.has_image());
    let err = session.fail_load(ticket, "404");
    assert_eq!(err, LoadError::Failed("404".to_owned()));
    assert!(!session.has_image());
    assert!(!session.is_loading());
}

#[test]
fn failed_load_drops_pieces_of_the_previous_image() {
    let mut session = loaded_session();
    session.update_piece_status("a", true);
    let ticket = session.begin_load();
    session.fail_load(ticket, "lookup failed");
    assert!(session.pieces().is_empty());
    assert_eq!(session.fixed_count(), 0);

    let mut rng = StdRng::seed_from_u64(4);
    session.shuffle(1000.0, 800.0, 1.0, &mut rng);
    assert!(session.pieces().is_empty());
}

#[test]
fn requests_resolving_in_reverse_order_keep_the_newest() {
    let mut session = session_with_pieces();
    // Tickets are taken when each request is made, before any lookup runs.
    let first = session.begin_load();
    let second = session.begin_load();
    session
        .complete_load(second, Size::new(222.0, 222.0))
        .expect("newest request");
    let err = session
        .complete_load(first, Size::new(111.0, 111.0))
        .expect_err("older request");
    assert!(matches!(err, LoadError::Stale { .. }));
    assert_eq!(session.image_size(), Some(Size::new(222.0, 222.0)));
    assert!(!session.is_loading());
}

#[test]
fn stale_lookup_failure_does_not_disturb_newer_load() {
    let mut session = loaded_session();
    let first = session.begin_load();
    let second = session.begin_load();
    let err = session.fail_load(first, "network error");
    assert!(matches!(err, LoadError::Stale { .. }));
    assert_eq!(session.pieces().len(), 2);
    assert!(session.is_loading());
    session
        .complete_load(second, Size::new(50.0, 60.0))
        .expect("current load");
    assert_eq!(session.image_size(), Some(Size::new(50.0, 60.0)));
}

#[test]
fn failure_of_stale_load_leaves_session_alone() {
    let mut session = loaded_session();
    let old = session.begin_load();
    let _current = session.begin_load();
    let err = session.fail_load(old, "timeout");
    assert!(matches!(err, LoadError::Stale { .. }));
    assert!(session.has_image());
    assert!(session.is_loading());
}

#[test]
fn empty_bitmap_is_rejected() {
    let mut session = session_with_pieces();
    let ticket = session.begin_load();
    let err = session
        .complete_load(ticket, Size::new(0.0, 300.0))
        .expect_err("empty");
    assert!(matches!(err, LoadError::EmptyImage { .. }));
    assert!(!session.has_image());
    assert!(session.pieces().is_empty());
}
