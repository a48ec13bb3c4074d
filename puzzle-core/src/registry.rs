use log::{debug, trace};

use crate::geometry::{Point, Visual};
use crate::piece::Piece;

/// Owns the pieces of the current puzzle and is their only writer.
#[derive(Clone, Debug)]
pub struct PieceRegistry<V> {
    pieces: Vec<Piece<V>>,
}

impl<V> Default for PieceRegistry<V> {
    fn default() -> Self {
        PieceRegistry { pieces: Vec::new() }
    }
}

impl<V: Visual> PieceRegistry<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bulk replace. Ids are trusted to be unique; previous positions and
    /// fixed flags are dropped with the old pieces.
    pub fn set_pieces(&mut self, pieces: Vec<Piece<V>>) {
        debug!("replacing {} pieces with {}", self.pieces.len(), pieces.len());
        self.pieces = pieces;
    }

    pub fn pieces(&self) -> &[Piece<V>] {
        &self.pieces
    }

    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Piece<V>> {
        self.pieces.iter().find(|p| p.id() == id)
    }

    fn find_by_id_mut(&mut self, id: &str) -> Option<&mut Piece<V>> {
        self.pieces.iter_mut().find(|p| p.id() == id)
    }

    /// Unknown ids are ignored: late drag events may target a piece that a
    /// reset already removed.
    pub fn update_position(&mut self, id: &str, x: f64, y: f64) {
        match self.find_by_id_mut(id) {
            Some(piece) => piece.set_position(Point::new(x, y)),
            None => trace!("position update for unknown piece {id}"),
        }
    }

    pub fn update_status(&mut self, id: &str, fixed: bool) {
        match self.find_by_id_mut(id) {
            Some(piece) => piece.set_fixed(fixed),
            None => trace!("status update for unknown piece {id}"),
        }
    }

    /// Proximity only; the fixed flag plays no part. Recomputed on every
    /// call. An empty registry is vacuously complete, so callers should not
    /// ask before pieces are set.
    pub fn is_complete(&self) -> bool {
        self.pieces.iter().all(Piece::is_in_place)
    }

    pub fn fixed_count(&self) -> usize {
        self.pieces.iter().filter(|p| p.is_fixed()).count()
    }

    pub(crate) fn pieces_mut(&mut self) -> impl Iterator<Item = &mut Piece<V>> {
        self.pieces.iter_mut()
    }
}

#[cfg(test)]
#[path = "registry_test.rs"]
mod tests;
