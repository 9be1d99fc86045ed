pub mod color;
pub mod luminance;
pub mod palette;
pub mod service;
pub mod text_color;

pub use crate::domain::model::{
    Color8, Combo, Palette, RawPalette, RawSwatch, Rgb8, TextColor,
};
pub use crate::domain::ports::{ConfigProvider, PaletteSource};
pub use crate::utils::error::Result;
