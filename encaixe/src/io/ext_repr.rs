use serde::{Deserialize, Serialize};

/// Default clearance between pieces, in roll units.
pub const DEFAULT_MARGIN: f32 = 2.0;

/// The JSON representation of a marker-making instance. Row fields keep the
/// column names of the source spreadsheets.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtMarkerInstance {
    /// The name of the instance
    pub name: String,
    /// The width of the material roll
    #[serde(rename = "largura_tecido")]
    pub strip_width: f32,
    /// Clearance kept past the trailing edges of every piece
    #[serde(rename = "espacamento", default = "default_margin")]
    pub margin: f32,
    /// The pieces to be cut
    #[serde(rename = "moldes")]
    pub pieces: Vec<ExtPiece>,
}

fn default_margin() -> f32 {
    DEFAULT_MARGIN
}

/// One row of the piece table.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtPiece {
    #[serde(rename = "comprimento")]
    pub length: f32,
    #[serde(rename = "largura")]
    pub width: f32,
    #[serde(rename = "descricao")]
    pub label: String,
    #[serde(rename = "quantidade")]
    pub quantity: usize,
}

/// The JSON representation of a solved marker.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtMarkerSolution {
    /// Pieces at their final positions, in placement order
    pub placed_pieces: Vec<ExtPlacedPiece>,
    /// Maximum y-coordinate reached by any placed piece
    pub extent: f32,
    /// Total roll length consumed, in meters, including the end allowance
    pub material_length_m: f32,
    /// Fraction of the consumed roll area covered by pieces
    pub density: f32,
    /// The time it took to generate the solution in seconds
    pub run_time_sec: u64,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtPlacedPiece {
    #[serde(rename = "descricao")]
    pub label: String,
    pub x: f32,
    pub y: f32,
    #[serde(rename = "largura")]
    pub width: f32,
    #[serde(rename = "comprimento")]
    pub length: f32,
    #[serde(rename = "rotacionado")]
    pub rotated: bool,
}
