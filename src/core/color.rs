use crate::domain::model::{Color8, RawSwatch, Rgb8};

/// Scale a unit-interval channel to 8 bits, rounding half away from zero.
pub fn float_to_8bit(value: f64) -> u8 {
    // `as` saturates, so stray values just outside [0, 1] clamp to 0 or 255.
    (value * 255.0).round() as u8
}

pub fn to_css(rgb: Rgb8) -> String {
    format!("rgb({} {} {})", rgb.red, rgb.green, rgb.blue)
}

pub fn to_hex(rgb: Rgb8) -> String {
    format!("#{:02x}{:02x}{:02x}", rgb.red, rgb.green, rgb.blue)
}

impl Rgb8 {
    pub fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    pub fn from_unit(red: f64, green: f64, blue: f64) -> Self {
        Self::new(float_to_8bit(red), float_to_8bit(green), float_to_8bit(blue))
    }

    /// `255 - channel` on every channel.
    pub fn inverted(self) -> Self {
        Self::new(255 - self.red, 255 - self.green, 255 - self.blue)
    }
}

impl From<&RawSwatch> for Rgb8 {
    fn from(swatch: &RawSwatch) -> Self {
        Rgb8::from_unit(swatch.red, swatch.green, swatch.blue)
    }
}

impl From<Rgb8> for Color8 {
    fn from(rgb: Rgb8) -> Self {
        Color8 {
            red: rgb.red,
            green: rgb.green,
            blue: rgb.blue,
            css: to_css(rgb),
            hex: to_hex(rgb),
        }
    }
}

impl Color8 {
    pub fn rgb(&self) -> Rgb8 {
        Rgb8::new(self.red, self.green, self.blue)
    }
}
