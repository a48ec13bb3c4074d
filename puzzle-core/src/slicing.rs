use serde::{Deserialize, Serialize};

use crate::geometry::{Point, Rect, Size, Visual};
use crate::layout::target_rect;
use crate::piece::Piece;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    pub rows: u32,
    pub cols: u32,
}

impl Grid {
    pub fn count(&self) -> usize {
        self.rows as usize * self.cols as usize
    }
}

/// Where one piece comes from in the source image and where it belongs on
/// the canvas.
#[derive(Clone, Debug, PartialEq)]
pub struct PieceCut {
    pub id: String,
    /// Rectangle in the image's natural pixel space.
    pub source: Rect,
    /// Display size on the canvas.
    pub size: Size,
    pub original_position: Point,
}

impl PieceCut {
    /// Builds the piece for this cut around a rendered bitmap.
    pub fn piece<V: Visual>(&self, visual: V) -> Piece<V> {
        Piece::new(self.id.clone(), visual, self.original_position)
    }
}

/// Largest scale that keeps the image within `fit_fraction` of the canvas
/// on both axes.
pub fn fit_scale(image: Size, canvas: Size, fit_fraction: f64) -> f64 {
    if image.is_empty() || canvas.is_empty() {
        return 1.0;
    }
    (canvas.width * fit_fraction / image.width).min(canvas.height * fit_fraction / image.height)
}

/// Splits the scaled image into `rows x cols` equal rectangles laid out
/// inside the centered target rectangle. Ids are `r{row}c{col}`.
pub fn slice_grid(image: Size, scale: f64, canvas: Size, grid: Grid) -> Vec<PieceCut> {
    if grid.rows == 0 || grid.cols == 0 {
        return Vec::new();
    }
    let target = target_rect(canvas, image, scale);
    let src_w = image.width / grid.cols as f64;
    let src_h = image.height / grid.rows as f64;
    let size = Size::new(src_w, src_h).scaled(scale);
    let mut cuts = Vec::with_capacity(grid.count());
    for row in 0..grid.rows {
        for col in 0..grid.cols {
            let (r, c) = (row as f64, col as f64);
            cuts.push(PieceCut {
                id: format!("r{row}c{col}"),
                source: Rect::new(c * src_w, r * src_h, src_w, src_h),
                size,
                original_position: Point::new(
                    target.x + c * size.width,
                    target.y + r * size.height,
                ),
            });
        }
    }
    cuts
}

#[cfg(test)]
#[path = "slicing_test.rs"]
mod tests;
