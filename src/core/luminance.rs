use crate::domain::model::RawSwatch;

/// Luminance above this counts as light.
pub const LIGHT_THRESHOLD: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LuminanceMode {
    Light,
    Dark,
    /// Exactly half of the values are light.
    Multi,
}

/// Gamma-weighted brightness of unit-interval channels.
pub fn perceptual_luminance(red: f64, green: f64, blue: f64) -> f64 {
    (red.powf(2.2) * 0.2126 + green.powf(2.2) * 0.7152 + blue.powf(2.2) * 0.0722).powf(0.6)
}

pub fn swatch_luminance(swatch: &RawSwatch) -> f64 {
    perceptual_luminance(swatch.red, swatch.green, swatch.blue)
}

/// Compare the number of values strictly above [`LIGHT_THRESHOLD`] with half
/// the sequence length.
///
/// Callers pass a non-empty slice; an empty one classifies as `Multi`.
pub fn classify(luminances: &[f64]) -> LuminanceMode {
    let light = luminances.iter().filter(|&&l| l > LIGHT_THRESHOLD).count() as f64;
    let half = luminances.len() as f64 / 2.0;

    if light > half {
        LuminanceMode::Light
    } else if light < half {
        LuminanceMode::Dark
    } else {
        LuminanceMode::Multi
    }
}
