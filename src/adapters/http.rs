use crate::core::{ConfigProvider, PaletteSource, RawPalette};
use crate::utils::error::{PaletteError, Result};
use crate::utils::validation::Validate;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Fetches `<image url>?palette=json` from the image service.
pub struct HttpPaletteSource {
    client: Client,
}

impl HttpPaletteSource {
    pub fn new<C: ConfigProvider>(config: &C) -> Result<Self> {
        let mut builder = Client::builder().timeout(Duration::from_secs(config.timeout_seconds()));
        if let Some(user_agent) = config.user_agent() {
            builder = builder.user_agent(user_agent.to_string());
        }

        Ok(Self {
            client: builder.build()?,
        })
    }

    /// Any query the image URL already carries (crops, resizes) is kept.
    pub fn palette_url(&self, image_url: &str) -> Result<Url> {
        let mut url = Url::parse(image_url)?;
        url.query_pairs_mut().append_pair("palette", "json");
        Ok(url)
    }
}

#[async_trait]
impl PaletteSource for HttpPaletteSource {
    async fn fetch_palette(&self, image_url: &str) -> Result<RawPalette> {
        let url = self.palette_url(image_url)?;

        tracing::debug!("Requesting palette from: {}", url);
        let response = self.client.get(url.clone()).send().await?;
        tracing::debug!("Palette response status: {}", response.status());

        if !response.status().is_success() {
            return Err(PaletteError::HttpStatusError {
                status: response.status().as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.bytes().await?;
        let palette: RawPalette = serde_json::from_slice(&body)?;
        palette.validate()?;

        tracing::debug!(
            "Received {} swatches and {} dominant colors",
            palette.colors.len(),
            palette.dominant_colors.len()
        );
        Ok(palette)
    }
}
