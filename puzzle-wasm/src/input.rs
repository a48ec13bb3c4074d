//! Drag controller: turns mouse events into position and status updates.

use puzzle_core::Point;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::MouseEvent;

use crate::canvas::draw;
use crate::state::{Drag, SharedState, State};
use crate::update_status_dom;
use crate::utils::event_canvas_coords;

pub fn attach_pointer_handlers(state: SharedState) -> Result<(), JsValue> {
    {
        let st = state.clone();
        let mousedown = Closure::<dyn FnMut(MouseEvent)>::wrap(Box::new(move |e: MouseEvent| {
            let mut s = st.borrow_mut();
            let (x, y) = event_canvas_coords(&e, &s.canvas);
            if let Some(drag) = pick_piece(&s, Point::new(x, y)) {
                s.dragging = Some(drag);
                draw(&s);
            }
        }));
        state
            .borrow()
            .canvas
            .add_event_listener_with_callback("mousedown", mousedown.as_ref().unchecked_ref())?;
        mousedown.forget();
    }
    {
        let st = state.clone();
        let mousemove = Closure::<dyn FnMut(MouseEvent)>::wrap(Box::new(move |e: MouseEvent| {
            let mut s = st.borrow_mut();
            let Some(drag) = s.dragging.clone() else {
                return;
            };
            let (x, y) = event_canvas_coords(&e, &s.canvas);
            s.session
                .update_piece_position(&drag.id, x - drag.off.0, y - drag.off.1);
            draw(&s);
        }));
        state
            .borrow()
            .canvas
            .add_event_listener_with_callback("mousemove", mousemove.as_ref().unchecked_ref())?;
        mousemove.forget();
    }
    {
        let st = state.clone();
        let mouseup = Closure::<dyn FnMut(MouseEvent)>::wrap(Box::new(move |_e: MouseEvent| {
            let mut s = st.borrow_mut();
            if let Some(drag) = s.dragging.take() {
                release_piece(&mut s, &drag.id);
                update_status_dom(&s);
                draw(&s);
            }
        }));
        state
            .borrow()
            .window
            .add_event_listener_with_callback("mouseup", mouseup.as_ref().unchecked_ref())?;
        mouseup.forget();
    }
    Ok(())
}

/// Topmost loose piece under the pointer. Fixed pieces stay put.
fn pick_piece(state: &State, pt: Point) -> Option<Drag> {
    state
        .session
        .pieces()
        .iter()
        .rev()
        .find(|p| !p.is_fixed() && p.bounds().contains(pt))
        .map(|p| {
            let pos = p.current_position();
            Drag {
                id: p.id().to_owned(),
                off: (pt.x - pos.x, pt.y - pos.y),
            }
        })
}

/// Snaps a released piece home and marks it fixed when it was dropped
/// close enough to its solved position.
fn release_piece(state: &mut State, id: &str) {
    let snap = state.config.snap_distance;
    let Some(home) = state
        .session
        .find_by_id(id)
        .filter(|p| p.is_within(snap))
        .map(|p| p.original_position())
    else {
        return;
    };
    state.session.update_piece_position(id, home.x, home.y);
    state.session.update_piece_status(id, true);
    log::debug!("piece {id} snapped");
    if !state.session.pieces().is_empty() && state.session.is_complete() {
        log::info!("puzzle solved");
    }
}
