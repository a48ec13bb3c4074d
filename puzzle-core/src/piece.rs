use crate::constants::COMPLETION_TOLERANCE;
use crate::geometry::{Point, Rect, Size, Visual};

/// One fragment of the source image.
///
/// `id` and `original_position` are fixed at slicing time. The live position
/// and the fixed flag only change through [`crate::PieceRegistry`].
#[derive(Clone, Debug)]
pub struct Piece<V = Size> {
    id: String,
    visual: V,
    original_position: Point,
    current_position: Point,
    is_fixed: bool,
}

impl<V: Visual> Piece<V> {
    /// New piece resting on its solved position, not yet fixed.
    pub fn new(id: impl Into<String>, visual: V, original_position: Point) -> Self {
        Piece {
            id: id.into(),
            visual,
            original_position,
            current_position: original_position,
            is_fixed: false,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn visual(&self) -> &V {
        &self.visual
    }

    pub fn size(&self) -> Size {
        self.visual.size()
    }

    pub fn original_position(&self) -> Point {
        self.original_position
    }

    pub fn current_position(&self) -> Point {
        self.current_position
    }

    pub fn is_fixed(&self) -> bool {
        self.is_fixed
    }

    /// Bounding box of the piece at its live position.
    pub fn bounds(&self) -> Rect {
        Rect::at(self.current_position, self.size())
    }

    /// Per-axis distance check against the solved position (strictly less than `tolerance`).
    pub fn is_within(&self, tolerance: f64) -> bool {
        (self.current_position.x - self.original_position.x).abs() < tolerance
            && (self.current_position.y - self.original_position.y).abs() < tolerance
    }

    pub fn is_in_place(&self) -> bool {
        self.is_within(COMPLETION_TOLERANCE)
    }

    pub(crate) fn set_position(&mut self, p: Point) {
        self.current_position = p;
    }

    pub(crate) fn set_fixed(&mut self, fixed: bool) {
        self.is_fixed = fixed;
    }
}
