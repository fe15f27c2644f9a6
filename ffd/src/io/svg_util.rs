use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct SvgDrawOptions {
    /// Color theme of the drawing
    #[serde(default)]
    pub theme: SvgLayoutThemes,
    /// Draws the margin-inflated occupied regions as dashed outlines
    #[serde(default)]
    pub draw_occupied: bool,
}

impl Default for SvgDrawOptions {
    fn default() -> Self {
        Self {
            theme: SvgLayoutThemes::default(),
            draw_occupied: false,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize, Default)]
pub enum SvgLayoutThemes {
    #[default]
    EarthTones,
    Gray,
}

impl SvgLayoutThemes {
    pub fn get_theme(&self) -> SvgLayoutTheme {
        match self {
            SvgLayoutThemes::EarthTones => EARTH_TONES_THEME,
            SvgLayoutThemes::Gray => GRAY_THEME,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Debug)]
pub struct SvgLayoutTheme {
    pub stroke_width_multiplier: f32,
    pub strip_fill: &'static str,
    pub piece_fill: &'static str,
    pub rotated_piece_fill: &'static str,
}

pub static EARTH_TONES_THEME: SvgLayoutTheme = SvgLayoutTheme {
    stroke_width_multiplier: 2.0,
    strip_fill: "#CC824A",
    piece_fill: "#FFC879",
    rotated_piece_fill: "#FFB05C",
};

pub static GRAY_THEME: SvgLayoutTheme = SvgLayoutTheme {
    stroke_width_multiplier: 2.5,
    strip_fill: "#C3C3C3",
    piece_fill: "#8F8F8F",
    rotated_piece_fill: "#7A7A7A",
};
