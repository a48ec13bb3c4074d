//! Piece placement and completion engine for an image jigsaw.
//!
//! A [`PuzzleSession`] owns the pieces cut from one image. The layout module
//! scatters them around the centered target rectangle; drag handlers feed
//! positions and fixed flags back in; [`PuzzleSession::is_complete`] answers
//! whether every piece sits close enough to its solved position.

pub mod config;
pub mod constants;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod piece;
pub mod registry;
pub mod session;
pub mod slicing;

pub use config::PuzzleConfig;
pub use constants::COMPLETION_TOLERANCE;
pub use error::{ConfigError, LoadError};
pub use geometry::{Point, Rect, Size, Visual};
pub use layout::{Placement, RandomSource, Zone, scatter, scatter_position, target_rect};
pub use piece::Piece;
pub use registry::PieceRegistry;
pub use session::{LoadTicket, PuzzleSession};
pub use slicing::{Grid, PieceCut, fit_scale, slice_grid};
