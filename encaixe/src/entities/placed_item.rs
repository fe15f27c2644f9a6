use crate::entities::PieceInstance;
use crate::geometry::Rect;

/// A [`Piece`](crate::entities::Piece) that has been placed on the roll.
/// Created exactly once per [`PieceInstance`], immutable afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedPiece {
    /// ID of the piece type that was placed
    pub piece_id: usize,
    /// Position of the corner closest to the roll origin (x across, y along)
    pub x: f32,
    pub y: f32,
    /// Extents as placed; swapped relative to the piece type when `rotated`
    pub width: f32,
    pub length: f32,
    /// Whether the piece was rotated 90 degrees to make it fit
    pub rotated: bool,
}

impl PlacedPiece {
    pub fn new(instance: &PieceInstance, x: f32, y: f32, rotated: bool) -> Self {
        let (width, length) = match rotated {
            false => (instance.width, instance.length),
            true => (instance.length, instance.width),
        };
        PlacedPiece {
            piece_id: instance.piece_id,
            x,
            y,
            width,
            length,
            rotated,
        }
    }

    /// Margin-exclusive footprint of the piece on the roll.
    pub fn footprint(&self) -> Rect {
        Rect {
            x_min: self.x,
            y_min: self.y,
            x_max: self.x + self.width,
            y_max: self.y + self.length,
        }
    }

    /// Footprint inflated by `margin` on the trailing edges, as reserved in
    /// the layout. Leading edges are not inflated.
    pub fn inflated_footprint(&self, margin: f32) -> Rect {
        Rect {
            x_min: self.x,
            y_min: self.y,
            x_max: self.x + self.width + margin,
            y_max: self.y + self.length + margin,
        }
    }
}
