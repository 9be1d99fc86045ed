pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::http::HttpPaletteSource;
pub use config::ClientConfig;
pub use crate::core::palette::build_palette;
pub use crate::core::service::{get_combo, get_palette, get_text_color, PaletteService};
pub use crate::core::text_color::{colorful_text_color, monochrome_text_color};
pub use crate::core::{Color8, Combo, Palette, RawPalette, RawSwatch, Rgb8, TextColor};
pub use utils::error::{PaletteError, Result};
