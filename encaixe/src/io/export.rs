use crate::entities::{MarkerInstance, MarkerSolution};
use crate::io::ext_repr::{ExtMarkerSolution, ExtPlacedPiece};
use std::time::Instant;

/// Exports a solution out of the library.
pub fn export(
    instance: &MarkerInstance,
    solution: &MarkerSolution,
    epoch: Instant,
) -> ExtMarkerSolution {
    ExtMarkerSolution {
        placed_pieces: solution
            .placed
            .iter()
            .map(|p| ExtPlacedPiece {
                label: instance.piece(p.piece_id).label.clone(),
                x: p.x,
                y: p.y,
                width: p.width,
                length: p.length,
                rotated: p.rotated,
            })
            .collect(),
        extent: solution.extent,
        material_length_m: solution.material_length_m(),
        density: solution.density(instance),
        run_time_sec: solution.time_stamp.duration_since(epoch).as_secs(),
    }
}
