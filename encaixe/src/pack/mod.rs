mod engine;
mod expand;
mod scan;

pub use engine::Packer;
pub use engine::placement_order;
pub use expand::expand;
pub use scan::find_position;

use serde::{Deserialize, Serialize};

/// Tunables of the greedy scan.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct PackConfig {
    /// Distance between consecutive candidate origins, in both axes
    pub step: f32,
    /// Maximum y-coordinate the scan will consider before giving up on a piece
    pub height_ceiling: f32,
}

impl Default for PackConfig {
    fn default() -> Self {
        Self {
            step: 1.0,
            height_ceiling: 10_000.0,
        }
    }
}
