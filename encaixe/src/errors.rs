use thiserror::Error;

/// A row of the input could not be turned into a valid piece, or the run
/// configuration is out of bounds. Raised before any placement starts.
#[derive(Debug, Clone, Error)]
#[error("malformed input: {0}")]
pub struct MalformedInputError(pub String);

/// The greedy scan exhausted both orientations within the roll width and the
/// height ceiling. The run halts; pieces placed before the failure remain
/// available on the packer.
#[derive(Debug, Clone, Error)]
#[error(
    "piece '{label}' (id {piece_id}) does not fit on the roll in either orientation; \
     increase the roll width or reduce the piece dimensions"
)]
pub struct PieceDoesNotFitError {
    pub piece_id: usize,
    pub label: String,
}
