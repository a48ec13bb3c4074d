use std::cell::RefCell;
use std::rc::Rc;

use puzzle_core::{LoadError, LoadTicket, PuzzleSession, Size, fit_scale, slice_grid};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlElement, HtmlImageElement};

mod canvas;
mod constants;
mod image;
mod input;
mod state;
mod utils;

use crate::canvas::{draw, init_canvas, render_piece, sync_canvas_size};
use crate::image::{fetch_random_photo_url, load_image, save_image_url, saved_image_url};
use crate::state::{SharedState, State};
use crate::utils::{MathRandom, config_from_query, get_query_param};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    let window = web_sys::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;
    let (canvas, ctx) = init_canvas(&document)?;
    let search = window.location().search().unwrap_or_default();
    let config = config_from_query(&search);
    log::debug!("starting with {}x{} grid", config.rows, config.cols);

    let state: SharedState = Rc::new(RefCell::new(State {
        window,
        document,
        canvas,
        ctx,
        config,
        session: PuzzleSession::new(),
        image: None,
        scale: 1.0,
        dpr: 1.0,
        dragging: None,
    }));
    sync_canvas_size(&mut state.borrow_mut());
    attach_ui(state.clone())?;
    input::attach_pointer_handlers(state.clone())?;
    update_status_dom(&state.borrow());
    draw(&state.borrow());

    let image_override = get_query_param(&search, "image");
    wasm_bindgen_futures::spawn_local(async move {
        if let Err(err) = init_puzzle_image(state.clone(), image_override).await {
            report_load_error(&state, &err);
        }
    });
    Ok(())
}

fn attach_ui(state: SharedState) -> Result<(), JsValue> {
    let doc = state.borrow().document.clone();

    if let Some(btn) = doc.get_element_by_id("shufflePuzzle") {
        let btn: HtmlElement = btn.dyn_into()?;
        let st = state.clone();
        let onclick = Closure::<dyn FnMut()>::wrap(Box::new(move || {
            let mut s = st.borrow_mut();
            s.dragging = None;
            shuffle_pieces(&mut s);
            update_status_dom(&s);
            draw(&s);
        }));
        btn.set_onclick(Some(onclick.as_ref().unchecked_ref()));
        onclick.forget();
    }

    if let Some(btn) = doc.get_element_by_id("changePuzzle") {
        let btn: HtmlElement = btn.dyn_into()?;
        let st = state.clone();
        let onclick = Closure::<dyn FnMut()>::wrap(Box::new(move || {
            let st = st.clone();
            wasm_bindgen_futures::spawn_local(async move {
                if let Err(err) = change_puzzle(st.clone()).await {
                    report_load_error(&st, &err);
                }
            });
        }));
        btn.set_onclick(Some(onclick.as_ref().unchecked_ref()));
        onclick.forget();
    }

    // Layout depends on the canvas size, so a resize starts the round over.
    {
        let st = state.clone();
        let onresize = Closure::<dyn FnMut()>::wrap(Box::new(move || {
            let mut s = st.borrow_mut();
            if sync_canvas_size(&mut s) {
                s.dragging = None;
                if let Err(e) = rebuild_pieces(&mut s) {
                    log::error!("failed to slice image: {e:?}");
                }
                shuffle_pieces(&mut s);
                update_status_dom(&s);
                draw(&s);
            }
        }));
        state
            .borrow()
            .window
            .add_event_listener_with_callback("resize", onresize.as_ref().unchecked_ref())?;
        onresize.forget();
    }
    Ok(())
}

/// First image: `?image=` wins, then the URL saved last time, then a fresh
/// random photo.
async fn init_puzzle_image(
    state: SharedState,
    image_override: Option<String>,
) -> Result<(), LoadError> {
    let ticket = begin_load(&state);
    let window = state.borrow().window.clone();
    let url = match image_override.or_else(|| saved_image_url(&window)) {
        Some(url) => url,
        None => lookup_random_photo(&state, ticket).await?,
    };
    load_puzzle(state, ticket, &url).await
}

async fn change_puzzle(state: SharedState) -> Result<(), LoadError> {
    let ticket = begin_load(&state);
    let url = lookup_random_photo(&state, ticket).await?;
    load_puzzle(state, ticket, &url).await
}

/// Takes the ticket at request time so a slow photo lookup cannot outrank a
/// newer request.
fn begin_load(state: &SharedState) -> LoadTicket {
    let mut s = state.borrow_mut();
    let ticket = s.session.begin_load();
    update_status_dom(&s);
    ticket
}

async fn lookup_random_photo(state: &SharedState, ticket: LoadTicket) -> Result<String, LoadError> {
    let window = state.borrow().window.clone();
    match fetch_random_photo_url(&window).await {
        Ok(url) => {
            save_image_url(&window, &url);
            Ok(url)
        }
        Err(err) => {
            let mut s = state.borrow_mut();
            let err = s.session.fail_load(ticket, err.to_string());
            finish_failed_load(&mut s, &err);
            Err(err)
        }
    }
}

/// Loads `url` and, if no newer load started meanwhile, cuts and scatters
/// a fresh set of pieces from it.
async fn load_puzzle(state: SharedState, ticket: LoadTicket, url: &str) -> Result<(), LoadError> {
    let loaded = load_image(url).await;

    let mut s = state.borrow_mut();
    let result = match loaded {
        Ok(img) => s
            .session
            .complete_load(ticket, natural_size(&img))
            .map(|()| img),
        Err(reason) => Err(s.session.fail_load(ticket, reason)),
    };
    let img = match result {
        Ok(img) => img,
        Err(err) => {
            finish_failed_load(&mut s, &err);
            return Err(err);
        }
    };
    s.image = Some(img);
    s.dragging = None;
    if let Err(e) = rebuild_pieces(&mut s) {
        log::error!("failed to slice image: {e:?}");
    }
    shuffle_pieces(&mut s);
    update_status_dom(&s);
    draw(&s);
    Ok(())
}

/// The session has already dropped its image and pieces for a current
/// failure. A stale result belongs to a superseded request and changes nothing.
fn finish_failed_load(state: &mut State, err: &LoadError) {
    if matches!(err, LoadError::Stale { .. }) {
        return;
    }
    state.image = None;
    state.dragging = None;
    update_status_dom(state);
    draw(state);
}

fn natural_size(img: &HtmlImageElement) -> Size {
    Size::new(img.natural_width() as f64, img.natural_height() as f64)
}

/// Cuts the current image into pieces that fit the current canvas.
fn rebuild_pieces(state: &mut State) -> Result<(), JsValue> {
    let Some(img) = state.image.clone() else {
        return Ok(());
    };
    let natural = natural_size(&img);
    let canvas = state.canvas_size();
    let scale = fit_scale(natural, canvas, state.config.fit_fraction);
    let cuts = slice_grid(natural, scale, canvas, state.config.grid());
    let mut pieces = Vec::with_capacity(cuts.len());
    for cut in &cuts {
        let bitmap = render_piece(&state.document, &img, cut, state.dpr)?;
        pieces.push(cut.piece(bitmap));
    }
    state.scale = scale;
    state.session.set_pieces(pieces);
    Ok(())
}

/// Clears every fixed flag, then scatters the pieces again. Without an
/// image there is nothing to scatter around, so the flags stay as they are.
fn shuffle_pieces(state: &mut State) {
    if !state.session.has_image() {
        return;
    }
    let ids = state
        .session
        .pieces()
        .iter()
        .filter(|p| p.is_fixed())
        .map(|p| p.id().to_owned())
        .collect::<Vec<_>>();
    for id in &ids {
        state.session.update_piece_status(id, false);
    }
    let canvas = state.canvas_size();
    let scale = state.scale;
    state
        .session
        .shuffle(canvas.width, canvas.height, scale, &mut MathRandom);
}

fn update_status_dom(state: &State) {
    if let Some(el) = state.document.get_element_by_id("status")
        && let Ok(el) = el.dyn_into::<HtmlElement>()
    {
        let session = &state.session;
        let txt = if session.is_loading() {
            "Loading image…".to_string()
        } else if session.pieces().is_empty() {
            String::new()
        } else if session.is_complete() {
            "Puzzle complete!".to_string()
        } else {
            format!("Placed: {}/{}", session.fixed_count(), session.pieces().len())
        };
        el.set_inner_text(&txt);
    }
}

fn report_load_error(state: &SharedState, err: &LoadError) {
    if matches!(err, LoadError::Stale { .. }) {
        log::debug!("{err}");
        return;
    }
    log::error!("{err}");
    let _ = state
        .borrow()
        .window
        .alert_with_message("Failed to fetch image. Please try again later");
}
