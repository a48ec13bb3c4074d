use puzzle_core::{PuzzleConfig, RandomSource};
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, MouseEvent};

/// `Math.random` as a scatter source; the browser seeds it.
pub struct MathRandom;

impl RandomSource for MathRandom {
    fn next_unit(&mut self) -> f64 {
        js_sys::Math::random()
    }
}

/// Pointer position in CSS pixels relative to the canvas' top-left corner.
pub fn event_canvas_coords(e: &MouseEvent, cv: &HtmlCanvasElement) -> (f64, f64) {
    if let Some(el) = cv.dyn_ref::<web_sys::Element>() {
        let rect = el.get_bounding_client_rect();
        (
            e.client_x() as f64 - rect.left(),
            e.client_y() as f64 - rect.top(),
        )
    } else {
        (e.offset_x() as f64, e.offset_y() as f64)
    }
}

/// Builds the session config from `?config=<json>` and the `rows`/`cols`
/// shortcuts. Bad input is logged and the defaults are kept.
pub fn config_from_query(search: &str) -> PuzzleConfig {
    let mut config = match get_query_param(search, "config") {
        Some(text) => PuzzleConfig::from_json(&text).unwrap_or_else(|e| {
            log::warn!("{e}; using default config");
            PuzzleConfig::default()
        }),
        None => PuzzleConfig::default(),
    };
    if let Some(rows) = get_query_param(search, "rows").and_then(|v| v.parse().ok()) {
        config.rows = rows;
    }
    if let Some(cols) = get_query_param(search, "cols").and_then(|v| v.parse().ok()) {
        config.cols = cols;
    }
    if let Err(e) = config.validate() {
        log::warn!("{e}; using default config");
        return PuzzleConfig::default();
    }
    config
}

/// Simple query string parser used at start-up.
pub fn get_query_param(search: &str, key: &str) -> Option<String> {
    let s = search.trim_start_matches('?');
    for pair in s.split('&') {
        let mut it = pair.splitn(2, '=');
        let k = it.next()?;
        let v = it.next().unwrap_or("");
        if k == key {
            return Some(url_decode(v));
        }
    }
    None
}

fn url_decode(s: &str) -> String {
    let s = s.replace('+', " ");
    percent_encoding::percent_decode_str(&s)
        .decode_utf8_lossy()
        .to_string()
}
