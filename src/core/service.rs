use crate::adapters::http::HttpPaletteSource;
use crate::config::ClientConfig;
use crate::core::palette::build_palette;
use crate::core::text_color::select_text_color;
use crate::core::{Combo, Palette, PaletteSource, RawPalette, TextColor};
use crate::utils::error::Result;

/// The three public entry points over a palette source.
///
/// Every failure (fetch, status, shape, empty swatch list) is logged and
/// reported as `None`.
pub struct PaletteService<S: PaletteSource> {
    source: S,
}

impl<S: PaletteSource> PaletteService<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub async fn get_palette(&self, image_url: &str) -> Option<Palette> {
        let raw = self.fetch(image_url).await?;
        Some(build_palette(&raw))
    }

    pub async fn get_text_color(&self, image_url: &str) -> Option<TextColor> {
        let raw = self.fetch(image_url).await?;
        recover(image_url, select_text_color(&raw.colors))
    }

    pub async fn get_combo(&self, image_url: &str) -> Option<Combo> {
        let raw = self.fetch(image_url).await?;
        let text_color = recover(image_url, select_text_color(&raw.colors))?;
        Some(Combo {
            palette: build_palette(&raw),
            text_color,
        })
    }

    async fn fetch(&self, image_url: &str) -> Option<RawPalette> {
        recover(image_url, self.source.fetch_palette(image_url).await)
    }
}

impl PaletteService<HttpPaletteSource> {
    pub fn http(config: &ClientConfig) -> Result<Self> {
        Ok(Self::new(HttpPaletteSource::new(config)?))
    }
}

fn recover<T>(image_url: &str, result: Result<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!(
                "No palette result for {}: {} (Category: {:?})",
                image_url,
                e,
                e.category()
            );
            None
        }
    }
}

fn default_service(image_url: &str) -> Option<PaletteService<HttpPaletteSource>> {
    recover(image_url, PaletteService::http(&ClientConfig::default()))
}

/// [`PaletteService::get_palette`] with the default HTTP client.
pub async fn get_palette(image_url: &str) -> Option<Palette> {
    default_service(image_url)?.get_palette(image_url).await
}

pub async fn get_text_color(image_url: &str) -> Option<TextColor> {
    default_service(image_url)?.get_text_color(image_url).await
}

pub async fn get_combo(image_url: &str) -> Option<Combo> {
    default_service(image_url)?.get_combo(image_url).await
}
