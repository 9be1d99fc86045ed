use crate::domain::model::{Color8, Palette, RawPalette, Rgb8};

/// Normalize a raw palette document.
///
/// Swatch order and the dominant role order are kept exactly as received.
/// `hex` entries are the service's own strings, not recomputed from the floats.
pub fn build_palette(raw: &RawPalette) -> Palette {
    let hex = raw.colors.iter().map(|swatch| swatch.hex.clone()).collect();
    let rgb = raw
        .colors
        .iter()
        .map(|swatch| Color8::from(Rgb8::from(swatch)))
        .collect();

    let hex_dominant = raw
        .dominant_colors
        .iter()
        .map(|(role, swatch)| (role.clone(), swatch.hex.clone()))
        .collect();
    let rgb_dominant = raw
        .dominant_colors
        .iter()
        .map(|(role, swatch)| (role.clone(), Color8::from(Rgb8::from(swatch))))
        .collect();

    tracing::debug!(
        "Built palette with {} swatches and {} dominant roles",
        raw.colors.len(),
        raw.dominant_colors.len()
    );

    Palette {
        hex,
        rgb,
        hex_dominant,
        rgb_dominant,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::RawSwatch;
    use indexmap::IndexMap;

    fn swatch(red: f64, green: f64, blue: f64, hex: &str) -> RawSwatch {
        RawSwatch {
            red,
            green,
            blue,
            hex: hex.to_string(),
        }
    }

    #[test]
    fn test_single_swatch_scenario() {
        let mut dominant_colors = IndexMap::new();
        dominant_colors.insert("vibrant".to_string(), swatch(0.0, 1.0, 0.0, "#00ff00"));
        let raw = RawPalette {
            colors: vec![swatch(1.0, 0.0, 0.0, "#ff0000")],
            dominant_colors,
        };

        let palette = build_palette(&raw);

        assert_eq!(palette.hex, vec!["#ff0000"]);
        assert_eq!(palette.rgb.len(), 1);
        assert_eq!(palette.rgb[0].rgb(), Rgb8::new(255, 0, 0));
        assert_eq!(palette.rgb[0].css, "rgb(255 0 0)");
        assert_eq!(palette.hex_dominant["vibrant"], "#00ff00");
        assert_eq!(palette.rgb_dominant["vibrant"].rgb(), Rgb8::new(0, 255, 0));
        assert_eq!(palette.rgb_dominant["vibrant"].css, "rgb(0 255 0)");
    }

    // Blue comes from the swatch's blue channel. Older renditions of this
    // conversion read green twice; a swatch with green != blue catches that.
    #[test]
    fn test_swatch_blue_channel_uses_blue_float() {
        let raw = RawPalette {
            colors: vec![swatch(0.0, 1.0, 0.2, "#00ff33")],
            dominant_colors: IndexMap::new(),
        };

        let palette = build_palette(&raw);

        assert_eq!(palette.rgb[0].blue, 51);
        assert_eq!(palette.rgb[0].css, "rgb(0 255 51)");
    }

    #[test]
    fn test_hex_passes_through_verbatim() {
        let raw = RawPalette {
            colors: vec![swatch(1.0, 1.0, 1.0, "#FFFFFE")],
            dominant_colors: IndexMap::new(),
        };

        let palette = build_palette(&raw);

        assert_eq!(palette.hex, vec!["#FFFFFE"]);
        assert_eq!(palette.rgb[0].hex, "#ffffff");
    }

    #[test]
    fn test_order_and_roles_preserved() {
        let mut dominant_colors = IndexMap::new();
        dominant_colors.insert("vibrant".to_string(), swatch(0.9, 0.1, 0.1, "#e61a1a"));
        dominant_colors.insert("muted_dark".to_string(), swatch(0.1, 0.1, 0.1, "#1a1a1a"));
        dominant_colors.insert("muted".to_string(), swatch(0.5, 0.5, 0.5, "#808080"));
        let raw = RawPalette {
            colors: vec![
                swatch(0.1, 0.1, 0.1, "#1a1a1a"),
                swatch(0.9, 0.1, 0.1, "#e61a1a"),
                swatch(0.5, 0.5, 0.5, "#808080"),
            ],
            dominant_colors,
        };

        let palette = build_palette(&raw);

        assert_eq!(palette.hex, vec!["#1a1a1a", "#e61a1a", "#808080"]);
        let hex_roles: Vec<&str> = palette.hex_dominant.keys().map(String::as_str).collect();
        let rgb_roles: Vec<&str> = palette.rgb_dominant.keys().map(String::as_str).collect();
        assert_eq!(hex_roles, vec!["vibrant", "muted_dark", "muted"]);
        assert_eq!(rgb_roles, hex_roles);
    }

    #[test]
    fn test_serializes_with_camel_case_keys() {
        let mut dominant_colors = IndexMap::new();
        dominant_colors.insert("vibrant".to_string(), swatch(0.0, 1.0, 0.0, "#00ff00"));
        let raw = RawPalette {
            colors: vec![],
            dominant_colors,
        };

        let json = serde_json::to_value(build_palette(&raw)).unwrap();

        assert_eq!(json["hexDominant"]["vibrant"], "#00ff00");
        assert_eq!(json["rgbDominant"]["vibrant"]["green"], 255);
        assert_eq!(json["rgb"], serde_json::json!([]));
    }
}
