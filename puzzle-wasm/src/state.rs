use std::cell::RefCell;
use std::rc::Rc;

use puzzle_core::{PuzzleConfig, PuzzleSession, Size, Visual};
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, HtmlImageElement, Window};

/// Rendered bitmap for one piece, drawn from the source image at slicing time.
#[derive(Clone, Debug)]
pub struct PieceBitmap {
    pub canvas: HtmlCanvasElement,
    pub size: Size,
}

impl Visual for PieceBitmap {
    fn width(&self) -> f64 {
        self.size.width
    }

    fn height(&self) -> f64 {
        self.size.height
    }
}

/// Piece being dragged and the pointer offset from its top-left corner.
#[derive(Clone, Debug)]
pub struct Drag {
    pub id: String,
    pub off: (f64, f64),
}

/// Application state shared across the WASM callbacks.
pub struct State {
    pub window: Window,
    pub document: Document,
    pub canvas: HtmlCanvasElement,
    pub ctx: CanvasRenderingContext2d,
    pub config: PuzzleConfig,
    pub session: PuzzleSession<PieceBitmap>,
    pub image: Option<HtmlImageElement>,
    /// Display scale of the target rectangle relative to the image's natural size.
    pub scale: f64,
    pub dpr: f64,
    pub dragging: Option<Drag>,
}

impl State {
    /// Drawable size in CSS pixels.
    pub fn canvas_size(&self) -> Size {
        Size::new(
            self.canvas.width() as f64 / self.dpr,
            self.canvas.height() as f64 / self.dpr,
        )
    }
}

/// Handle passed to every callback; there is no global instance.
pub type SharedState = Rc<RefCell<State>>;
