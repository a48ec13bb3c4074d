use puzzle_core::{Piece, PieceCut};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, HtmlImageElement};

use crate::constants::{
    BACKGROUND, CANVAS_ID, FIXED_STROKE, PIECE_STROKE, TARGET_FILL, TARGET_STROKE,
};
use crate::state::{PieceBitmap, State};

// Non-deprecated helpers to set canvas styles via property assignment.
pub fn set_fill_style(ctx: &CanvasRenderingContext2d, color: &str) {
    let _ = js_sys::Reflect::set(
        ctx.as_ref(),
        &JsValue::from_str("fillStyle"),
        &JsValue::from_str(color),
    );
}

pub fn set_stroke_style(ctx: &CanvasRenderingContext2d, color: &str) {
    let _ = js_sys::Reflect::set(
        ctx.as_ref(),
        &JsValue::from_str("strokeStyle"),
        &JsValue::from_str(color),
    );
}

pub fn init_canvas(
    document: &Document,
) -> Result<(HtmlCanvasElement, CanvasRenderingContext2d), JsValue> {
    let cv = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| JsValue::from_str("canvas #cv not found"))?
        .dyn_into::<HtmlCanvasElement>()?;
    let ctx = context_2d(&cv)?;
    Ok((cv, ctx))
}

fn context_2d(cv: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, JsValue> {
    cv.get_context("2d")?
        .ok_or_else(|| JsValue::from_str("2D context not available"))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(JsValue::from)
}

/// Match the canvas backing store to its CSS size times the device pixel
/// ratio. Returns true when the size changed.
pub fn sync_canvas_size(state: &mut State) -> bool {
    let dpr = state.window.device_pixel_ratio().max(1.0);
    let rect = state.canvas.get_bounding_client_rect();
    let target_w = (rect.width().max(1.0) * dpr).round().clamp(1.0, 10000.0) as u32;
    let target_h = (rect.height().max(1.0) * dpr).round().clamp(1.0, 10000.0) as u32;
    let changed = state.canvas.width() != target_w
        || state.canvas.height() != target_h
        || state.dpr != dpr;
    if changed {
        state.canvas.set_width(target_w);
        state.canvas.set_height(target_h);
        state.dpr = dpr;
    }
    changed
}

/// Draws one cut of the source image into its own offscreen canvas.
pub fn render_piece(
    document: &Document,
    image: &HtmlImageElement,
    cut: &PieceCut,
    dpr: f64,
) -> Result<PieceBitmap, JsValue> {
    let cv = document
        .create_element("canvas")?
        .dyn_into::<HtmlCanvasElement>()?;
    let w = (cut.size.width * dpr).round().max(1.0);
    let h = (cut.size.height * dpr).round().max(1.0);
    cv.set_width(w as u32);
    cv.set_height(h as u32);
    let ctx = context_2d(&cv)?;
    ctx.draw_image_with_html_image_element_and_sw_and_sh_and_dx_and_dy_and_dw_and_dh(
        image,
        cut.source.x,
        cut.source.y,
        cut.source.width,
        cut.source.height,
        0.0,
        0.0,
        w,
        h,
    )?;
    Ok(PieceBitmap {
        canvas: cv,
        size: cut.size,
    })
}

pub fn draw(state: &State) {
    let ctx = &state.ctx;
    let size = state.canvas_size();
    let _ = ctx.set_transform(state.dpr, 0.0, 0.0, state.dpr, 0.0, 0.0);
    set_fill_style(ctx, BACKGROUND);
    ctx.fill_rect(0.0, 0.0, size.width, size.height);

    if let Some(target) = state.session.target_rect(size, state.scale) {
        set_fill_style(ctx, TARGET_FILL);
        ctx.fill_rect(target.x, target.y, target.width, target.height);
        set_stroke_style(ctx, TARGET_STROKE);
        ctx.set_line_width(2.0);
        ctx.stroke_rect(target.x, target.y, target.width, target.height);
    }

    // Fixed pieces underneath, loose ones above, the dragged one on top.
    let dragged = state.dragging.as_ref().map(|d| d.id.as_str());
    let pieces = state.session.pieces();
    for p in pieces.iter().filter(|p| p.is_fixed()) {
        draw_piece(ctx, p);
    }
    for p in pieces
        .iter()
        .filter(|p| !p.is_fixed() && Some(p.id()) != dragged)
    {
        draw_piece(ctx, p);
    }
    if let Some(id) = dragged
        && let Some(p) = state.session.find_by_id(id)
    {
        draw_piece(ctx, p);
    }
}

fn draw_piece(ctx: &CanvasRenderingContext2d, piece: &Piece<PieceBitmap>) {
    let pos = piece.current_position();
    let size = piece.size();
    let _ = ctx.draw_image_with_html_canvas_element_and_dw_and_dh(
        &piece.visual().canvas,
        pos.x,
        pos.y,
        size.width,
        size.height,
    );
    let stroke = if piece.is_fixed() {
        FIXED_STROKE
    } else {
        PIECE_STROKE
    };
    set_stroke_style(ctx, stroke);
    ctx.set_line_width(1.0);
    ctx.stroke_rect(pos.x, pos.y, size.width, size.height);
}
