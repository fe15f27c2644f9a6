mod instance;
mod item;
mod layout;
mod placed_item;
mod solution;

pub use instance::MarkerInstance;
pub use instance::STRIP_WIDTH_RANGE;
pub use item::Piece;
pub use item::PieceInstance;
pub use layout::MarkerLayout;
pub use placed_item::PlacedPiece;
pub use solution::END_ALLOWANCE;
pub use solution::MarkerSolution;
pub use solution::UNITS_PER_METER;
