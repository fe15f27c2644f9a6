use crate::entities::{MarkerSolution, PlacedPiece};
use crate::geometry::Rect;
use crate::util::assertions;
use std::time::Instant;

/// Dynamic state of one packing run: the regions already reserved on the roll,
/// the pieces placed so far and the running extent. Grows monotonically;
/// pieces are never un-placed within a run.
#[derive(Clone, Debug)]
pub struct MarkerLayout {
    strip_width: f32,
    margin: f32,
    /// Margin-inflated footprints of all placed pieces, in placement order
    occupied: Vec<Rect>,
    placed: Vec<PlacedPiece>,
    /// Maximum y-coordinate reached by any placed piece
    extent: f32,
}

impl MarkerLayout {
    pub fn new(strip_width: f32, margin: f32) -> Self {
        MarkerLayout {
            strip_width,
            margin,
            occupied: vec![],
            placed: vec![],
            extent: 0.0,
        }
    }

    /// Commits a placement: reserves the margin-inflated footprint and updates
    /// the running extent.
    pub fn place(&mut self, placed: PlacedPiece) {
        debug_assert!(assertions::placement_is_feasible(self, &placed));

        self.extent = f32::max(self.extent, placed.y + placed.length);
        self.occupied.push(placed.inflated_footprint(self.margin));
        self.placed.push(placed);
    }

    /// Snapshot of the current state as a [`MarkerSolution`].
    pub fn save(&self) -> MarkerSolution {
        MarkerSolution {
            placed: self.placed.clone(),
            strip_width: self.strip_width,
            extent: self.extent,
            time_stamp: Instant::now(),
        }
    }

    pub fn strip_width(&self) -> f32 {
        self.strip_width
    }

    pub fn margin(&self) -> f32 {
        self.margin
    }

    pub fn occupied(&self) -> &[Rect] {
        &self.occupied
    }

    pub fn placed(&self) -> &[PlacedPiece] {
        &self.placed
    }

    pub fn extent(&self) -> f32 {
        self.extent
    }
}
