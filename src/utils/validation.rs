use crate::domain::model::{RawPalette, RawSwatch};
use crate::utils::error::{PaletteError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(PaletteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(PaletteError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(PaletteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(PaletteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(PaletteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

fn validate_swatch(location: &str, swatch: &RawSwatch) -> Result<()> {
    let channels = [
        ("red", swatch.red),
        ("green", swatch.green),
        ("blue", swatch.blue),
    ];
    for (name, value) in channels {
        if !value.is_finite() || !(0.0..=1.0).contains(&value) {
            return Err(PaletteError::MalformedPaletteError {
                message: format!("{}.{} = {} is outside [0, 1]", location, name, value),
            });
        }
    }
    Ok(())
}

impl Validate for RawPalette {
    /// Channel ranges only. An empty `colors` list is a valid palette; the
    /// text color selectors reject it on their own.
    fn validate(&self) -> Result<()> {
        for (index, swatch) in self.colors.iter().enumerate() {
            validate_swatch(&format!("colors[{}]", index), swatch)?;
        }
        for (role, swatch) in &self.dominant_colors {
            validate_swatch(&format!("dominant_colors.{}", role), swatch)?;
        }
        Ok(())
    }
}
