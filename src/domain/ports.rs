use crate::domain::model::RawPalette;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Supplies the raw palette document for an image URL.
#[async_trait]
pub trait PaletteSource: Send + Sync {
    async fn fetch_palette(&self, image_url: &str) -> Result<RawPalette>;
}

pub trait ConfigProvider: Send + Sync {
    fn timeout_seconds(&self) -> u64;
    fn user_agent(&self) -> Option<&str>;
}
