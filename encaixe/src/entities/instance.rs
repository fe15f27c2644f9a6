use crate::entities::Piece;
use anyhow::{Result, ensure};
use std::ops::RangeInclusive;

/// Bounds within which the roll width must lie.
pub const STRIP_WIDTH_RANGE: RangeInclusive<f32> = 10.0..=1000.0;

/// Instance of a marker-making run: a set of pieces with demanded quantities,
/// to be packed onto a roll with a fixed width and a mandatory spacing margin.
#[derive(Clone, Debug)]
pub struct MarkerInstance {
    /// The pieces to be cut and their quantities
    pub pieces: Vec<(Piece, usize)>,
    /// The total area of all demanded pieces
    pub piece_area: f32,
    /// The (fixed) width of the roll
    pub strip_width: f32,
    /// Clearance kept past the trailing edges of every placed piece
    pub margin: f32,
}

impl MarkerInstance {
    pub fn new(pieces: Vec<(Piece, usize)>, strip_width: f32, margin: f32) -> Result<Self> {
        ensure!(
            STRIP_WIDTH_RANGE.contains(&strip_width),
            "strip width must lie in {STRIP_WIDTH_RANGE:?}, got {strip_width}"
        );
        ensure!(margin >= 0.0, "margin must be non-negative, got {margin}");
        ensure!(
            pieces.iter().enumerate().all(|(i, (p, _))| p.id == i),
            "piece ids must match their index in the instance"
        );

        let piece_area = pieces
            .iter()
            .map(|(piece, qty)| piece.area() * *qty as f32)
            .sum();

        Ok(Self {
            pieces,
            piece_area,
            strip_width,
            margin,
        })
    }

    pub fn piece(&self, id: usize) -> &Piece {
        &self.pieces[id].0
    }

    pub fn total_piece_qty(&self) -> usize {
        self.pieces.iter().map(|(_, qty)| qty).sum()
    }
}
