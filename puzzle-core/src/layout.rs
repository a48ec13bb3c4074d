//! Scatter layout: places pieces in the bands around the target rectangle.
//!
//! Positions depend only on the canvas, the target rectangle, the piece
//! size and the samples drawn from a [`RandomSource`].

use log::{debug, warn};
use rand::Rng;
use rand::rngs::StdRng;

use crate::constants::ZONE_COUNT;
use crate::geometry::{Point, Rect, Size, Visual};
use crate::registry::PieceRegistry;

/// Uniform samples in `[0, 1)`.
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;
}

impl RandomSource for StdRng {
    fn next_unit(&mut self) -> f64 {
        self.random::<f64>()
    }
}

/// One of the four bands surrounding the target rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Zone {
    /// Full canvas width, above the target.
    Top,
    /// Full canvas width, below the target.
    Bottom,
    /// Full canvas height, left of the target.
    Left,
    /// Full canvas height, right of the target.
    Right,
}

impl Zone {
    pub const ALL: [Zone; ZONE_COUNT] = [Zone::Top, Zone::Bottom, Zone::Left, Zone::Right];

    /// Uniform pick among the four bands.
    pub fn pick(rng: &mut impl RandomSource) -> Zone {
        let idx = (rng.next_unit() * ZONE_COUNT as f64).floor() as usize;
        Zone::ALL[idx.min(ZONE_COUNT - 1)]
    }

    /// Region a piece of `piece` size may take its top-left corner from,
    /// as `(min, span)` per axis. Spans go negative when the band cannot hold
    /// the piece.
    fn ranges(self, canvas: Size, target: &Rect, piece: Size) -> ((f64, f64), (f64, f64)) {
        let full_x = (0.0, canvas.width - piece.width);
        let full_y = (0.0, canvas.height - piece.height);
        match self {
            Zone::Top => (full_x, (0.0, target.y - piece.height)),
            Zone::Bottom => (
                full_x,
                (target.bottom(), canvas.height - target.bottom() - piece.height),
            ),
            Zone::Left => ((0.0, target.x - piece.width), full_y),
            Zone::Right => (
                (target.right(), canvas.width - target.right() - piece.width),
                full_y,
            ),
        }
    }
}

/// Where a single piece landed and which band produced it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub position: Point,
    /// `None` when the chosen band was too small and the piece was placed
    /// anywhere on the canvas instead.
    pub zone: Option<Zone>,
}

/// Centered target rectangle for an image of natural size `image` drawn at `scale`.
pub fn target_rect(canvas: Size, image: Size, scale: f64) -> Rect {
    let size = image.scaled(scale);
    Rect::new(
        (canvas.width - size.width) / 2.0,
        (canvas.height - size.height) / 2.0,
        size.width,
        size.height,
    )
}

fn usable(span: f64) -> bool {
    span.is_finite() && span >= 0.0
}

/// Draws a position for one piece: a random band first, then a uniform
/// point inside that band. Falls back to anywhere on the canvas when the
/// band cannot hold the piece.
pub fn scatter_position(
    canvas: Size,
    target: &Rect,
    piece: Size,
    rng: &mut impl RandomSource,
) -> Placement {
    let zone = Zone::pick(rng);
    let ((x0, x_span), (y0, y_span)) = zone.ranges(canvas, target, piece);
    if usable(x_span) && usable(y_span) {
        let x = x0 + rng.next_unit() * x_span;
        let y = y0 + rng.next_unit() * y_span;
        return Placement {
            position: Point::new(x, y),
            zone: Some(zone),
        };
    }
    // Degenerate band: keep the piece on the canvas, overlap allowed.
    let x = rng.next_unit() * (canvas.width - piece.width).max(0.0);
    let y = rng.next_unit() * (canvas.height - piece.height).max(0.0);
    Placement {
        position: Point::new(x, y),
        zone: None,
    }
}

/// Overwrites every piece's live position. Fixed flags and solved positions
/// are left alone.
pub fn scatter<V: Visual>(
    registry: &mut PieceRegistry<V>,
    canvas: Size,
    target: &Rect,
    rng: &mut impl RandomSource,
) {
    let mut fallbacks = 0usize;
    for piece in registry.pieces_mut() {
        let placement = scatter_position(canvas, target, piece.size(), rng);
        if placement.zone.is_none() {
            fallbacks += 1;
        }
        piece.set_position(placement.position);
    }
    if fallbacks > 0 {
        warn!(
            "{fallbacks} pieces did not fit their band around a {}x{} target on a {}x{} canvas",
            target.width, target.height, canvas.width, canvas.height
        );
    }
    debug!("scattered {} pieces", registry.len());
}

#[cfg(test)]
#[path = "layout_test.rs"]
mod tests;
