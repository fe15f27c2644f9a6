use crate::entities::{MarkerInstance, Piece};
use crate::errors::MalformedInputError;
use crate::io::ext_repr::{ExtMarkerInstance, ExtPiece};
use itertools::Itertools;

/// Converts the external representation into a validated [`MarkerInstance`].
/// Any malformed row fails the whole import; no placement is attempted.
pub fn import(ext: &ExtMarkerInstance) -> Result<MarkerInstance, MalformedInputError> {
    let pieces = ext
        .pieces
        .iter()
        .enumerate()
        .map(|(id, ext_piece)| import_piece(id, ext_piece).map(|p| (p, ext_piece.quantity)))
        .try_collect()?;

    MarkerInstance::new(pieces, ext.strip_width, ext.margin)
        .map_err(|e| MalformedInputError(e.to_string()))
}

fn import_piece(id: usize, ext: &ExtPiece) -> Result<Piece, MalformedInputError> {
    if !(ext.length.is_finite() && ext.length > 0.0) {
        return Err(MalformedInputError(format!(
            "row {id} ('{}'): comprimento must be a positive number, got {}",
            ext.label, ext.length
        )));
    }
    if !(ext.width.is_finite() && ext.width > 0.0) {
        return Err(MalformedInputError(format!(
            "row {id} ('{}'): largura must be a positive number, got {}",
            ext.label, ext.width
        )));
    }

    Ok(Piece {
        id,
        length: ext.length,
        width: ext.width,
        label: ext.label.clone(),
    })
}
