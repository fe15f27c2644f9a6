use serde::{Deserialize, Serialize};

use encaixe::io::ext_repr::{ExtMarkerInstance, ExtMarkerSolution};

use crate::config::FFDConfig;

/// Full record of a run: the input, the solution and the config that
/// produced it.
#[derive(Serialize, Deserialize, Clone)]
pub struct FFDOutput {
    #[serde(flatten)]
    pub instance: ExtMarkerInstance,
    pub solution: ExtMarkerSolution,
    pub config: FFDConfig,
}
