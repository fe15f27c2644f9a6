/// A rectangular pattern piece to be cut, as defined in the input file.
#[derive(Clone, Debug)]
pub struct Piece {
    pub id: usize,
    /// Dimension of the piece along the roll
    pub length: f32,
    /// Dimension of the piece across the roll
    pub width: f32,
    /// Human-readable description, carried through to rendering and export
    pub label: String,
}

impl Piece {
    pub fn area(&self) -> f32 {
        self.length * self.width
    }
}

/// One physical copy of a [`Piece`], produced by the expander.
/// Read-only once created.
#[derive(Clone, Debug, PartialEq)]
pub struct PieceInstance {
    /// ID of the piece type this instance was expanded from
    pub piece_id: usize,
    pub width: f32,
    pub length: f32,
    pub area: f32,
}
