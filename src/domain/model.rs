use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One sampled color as reported by the image service, channels in `[0, 1]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawSwatch {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub hex: String,
}

/// The `?palette=json` document. Fields the service adds beyond these are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawPalette {
    pub colors: Vec<RawSwatch>,
    pub dominant_colors: IndexMap<String, RawSwatch>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb8 {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

/// An 8-bit color together with its css and hex renderings.
///
/// Built only through `From<Rgb8>`, so the three forms always agree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Color8 {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub css: String,
    pub hex: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Palette {
    pub hex: Vec<String>,
    pub rgb: Vec<Color8>,
    pub hex_dominant: IndexMap<String, String>,
    pub rgb_dominant: IndexMap<String, Color8>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextColor {
    pub colorful: Color8,
    pub monochrome: Color8,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Combo {
    pub palette: Palette,
    pub text_color: TextColor,
}
