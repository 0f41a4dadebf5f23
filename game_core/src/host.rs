//! Seams to the host environment (drawing surface and score readout)

use crate::map::{Aabb, GameMap};
use crate::resources::Score;

/// Something the game can draw solid rectangles onto
pub trait DrawSurface {
    /// Current size in pixels; may change between frames
    fn size(&self) -> GameMap;
    fn clear(&mut self);
    fn fill_rect(&mut self, rect: Aabb);
}

/// Receives the "human : computer" score whenever it changes
pub trait ScoreDisplay {
    fn show_score(&mut self, score: &Score);
}
