use crate::entities::{Piece, PieceInstance};

/// Expands piece types with demanded quantities into individual instances,
/// one per unit of demand, each carrying its computed area.
/// Instances of the same type end up contiguous; the area-descending sort in
/// the engine fully reorders them anyway.
pub fn expand(pieces: &[(Piece, usize)]) -> Vec<PieceInstance> {
    pieces
        .iter()
        .flat_map(|(piece, qty)| {
            (0..*qty).map(|_| PieceInstance {
                piece_id: piece.id,
                width: piece.width,
                length: piece.length,
                area: piece.area(),
            })
        })
        .collect()
}
