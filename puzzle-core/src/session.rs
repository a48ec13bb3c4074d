//! One puzzle session: the piece registry plus the image it was cut from.
//!
//! Image loads are tracked with tickets. Only the most recently issued
//! ticket may install an image; anything older is reported as
//! [`LoadError::Stale`] and discarded.

use log::{debug, warn};

use crate::error::LoadError;
use crate::geometry::{Rect, Size, Visual};
use crate::layout::{self, RandomSource};
use crate::piece::Piece;
use crate::registry::PieceRegistry;

/// Handle for one in-flight image load.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadTicket(u64);

impl LoadTicket {
    pub fn id(self) -> u64 {
        self.0
    }
}

#[derive(Clone, Debug)]
pub struct PuzzleSession<V> {
    registry: PieceRegistry<V>,
    image: Option<Size>,
    generation: u64,
    pending: Option<u64>,
}

impl<V> Default for PuzzleSession<V> {
    fn default() -> Self {
        PuzzleSession {
            registry: PieceRegistry::default(),
            image: None,
            generation: 0,
            pending: None,
        }
    }
}

impl<V: Visual> PuzzleSession<V> {
    pub fn new() -> Self {
        Self::default()
    }

    // -- image pipeline --

    /// Starts a new load. Any load begun earlier becomes stale; the current
    /// image stays usable until the new one resolves.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.generation += 1;
        self.pending = Some(self.generation);
        debug!("begin image load {}", self.generation);
        LoadTicket(self.generation)
    }

    pub fn complete_load(&mut self, ticket: LoadTicket, natural: Size) -> Result<(), LoadError> {
        self.check_current(ticket)?;
        self.pending = None;
        if natural.is_empty() {
            self.drop_image();
            return Err(LoadError::EmptyImage {
                width: natural.width,
                height: natural.height,
            });
        }
        debug!("image load {} resolved: {}x{}", ticket.0, natural.width, natural.height);
        self.image = Some(natural);
        Ok(())
    }

    /// Records a failed load and returns the error to surface. The current
    /// image and the pieces cut from it are dropped. A failure of a stale
    /// load leaves the session untouched.
    pub fn fail_load(&mut self, ticket: LoadTicket, reason: impl Into<String>) -> LoadError {
        if let Err(stale) = self.check_current(ticket) {
            return stale;
        }
        self.pending = None;
        self.drop_image();
        LoadError::Failed(reason.into())
    }

    fn drop_image(&mut self) {
        self.image = None;
        self.registry.set_pieces(Vec::new());
    }

    fn check_current(&self, ticket: LoadTicket) -> Result<(), LoadError> {
        if ticket.0 != self.generation {
            warn!("dropping image load {} (current {})", ticket.0, self.generation);
            return Err(LoadError::Stale {
                ticket: ticket.0,
                current: self.generation,
            });
        }
        Ok(())
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }

    pub fn image_size(&self) -> Option<Size> {
        self.image
    }

    // -- pieces --

    pub fn set_pieces(&mut self, pieces: Vec<Piece<V>>) {
        self.registry.set_pieces(pieces);
    }

    pub fn pieces(&self) -> &[Piece<V>] {
        self.registry.pieces()
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Piece<V>> {
        self.registry.find_by_id(id)
    }

    /// Target rectangle for the loaded image, if any.
    pub fn target_rect(&self, canvas: Size, scale: f64) -> Option<Rect> {
        self.image.map(|image| layout::target_rect(canvas, image, scale))
    }

    /// Scatters every piece around the target rectangle. No-op until an
    /// image has loaded.
    pub fn shuffle(
        &mut self,
        canvas_width: f64,
        canvas_height: f64,
        scale: f64,
        rng: &mut impl RandomSource,
    ) {
        let canvas = Size::new(canvas_width, canvas_height);
        let Some(target) = self.target_rect(canvas, scale) else {
            debug!("shuffle skipped: no image loaded");
            return;
        };
        layout::scatter(&mut self.registry, canvas, &target, rng);
    }

    // Drag controller entry points. Coordinates are trusted as given.

    pub fn update_piece_position(&mut self, id: &str, x: f64, y: f64) {
        self.registry.update_position(id, x, y);
    }

    pub fn update_piece_status(&mut self, id: &str, fixed: bool) {
        self.registry.update_status(id, fixed);
    }

    pub fn is_complete(&self) -> bool {
        self.registry.is_complete()
    }

    pub fn fixed_count(&self) -> usize {
        self.registry.fixed_count()
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
