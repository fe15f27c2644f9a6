use serde::{Deserialize, Serialize};

use encaixe::pack::PackConfig;

use crate::io::svg_util::SvgDrawOptions;

/// Configuration for the FFD reference implementation
#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
pub struct FFDConfig {
    /// Tunables of the greedy scan
    pub pack_config: PackConfig,
    /// Optional SVG drawing options
    #[serde(default)]
    pub svg_draw_options: SvgDrawOptions,
}

impl Default for FFDConfig {
    fn default() -> Self {
        Self {
            pack_config: PackConfig::default(),
            svg_draw_options: SvgDrawOptions::default(),
        }
    }
}
