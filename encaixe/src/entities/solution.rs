use crate::entities::{MarkerInstance, PlacedPiece};
use std::time::Instant;

/// Extra roll length reported past the last piece, in roll units.
pub const END_ALLOWANCE: f32 = 100.0;

/// The core works in centimeters; consumption is reported in meters.
pub const UNITS_PER_METER: f32 = 100.0;

/// Snapshot of a [`MarkerLayout`](crate::entities::MarkerLayout) at a specific
/// moment.
#[derive(Clone, Debug)]
pub struct MarkerSolution {
    /// Pieces at their final positions, in placement order
    pub placed: Vec<PlacedPiece>,
    pub strip_width: f32,
    /// Maximum y-coordinate reached by any placed piece
    pub extent: f32,
    /// Instant the solution was created
    pub time_stamp: Instant,
}

impl MarkerSolution {
    /// Total roll length consumed, in meters, including the end allowance.
    pub fn material_length_m(&self) -> f32 {
        (self.extent + END_ALLOWANCE) / UNITS_PER_METER
    }

    /// Fraction of the consumed roll area covered by pieces.
    pub fn density(&self, instance: &MarkerInstance) -> f32 {
        if self.extent == 0.0 {
            return 0.0;
        }
        instance.piece_area / (self.extent * self.strip_width)
    }
}
