use crate::core::luminance::{classify, swatch_luminance, LuminanceMode, LIGHT_THRESHOLD};
use crate::domain::model::{Color8, RawSwatch, Rgb8, TextColor};
use crate::utils::error::{PaletteError, Result};

pub const WHITE: Rgb8 = Rgb8 {
    red: 255,
    green: 255,
    blue: 255,
};
pub const BLACK: Rgb8 = Rgb8 {
    red: 0,
    green: 0,
    blue: 0,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    /// Tie-break priority: the earliest channel reaching the maximum wins.
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    pub fn of(self, swatch: &RawSwatch) -> f64 {
        match self {
            Channel::Red => swatch.red,
            Channel::Green => swatch.green,
            Channel::Blue => swatch.blue,
        }
    }
}

/// The channel with the largest sum across all swatches.
pub fn tonal_bias(colors: &[RawSwatch]) -> Channel {
    let mut accumulated = [0.0f64; 3];
    for swatch in colors {
        for (slot, channel) in accumulated.iter_mut().zip(Channel::ALL) {
            *slot += channel.of(swatch);
        }
    }

    let mut bias = Channel::Red;
    let mut best = accumulated[0];
    for (sum, channel) in accumulated.into_iter().zip(Channel::ALL).skip(1) {
        if sum > best {
            best = sum;
            bias = channel;
        }
    }
    bias
}

/// Invert the first swatch that leans at least average-strongly into the
/// palette's tonal bias.
pub fn colorful_text_color(colors: &[RawSwatch]) -> Result<Color8> {
    if colors.is_empty() {
        return Err(PaletteError::EmptyPaletteError);
    }

    let bias = tonal_bias(colors);
    let average_bias = colors.iter().map(|s| bias.of(s)).sum::<f64>() / colors.len() as f64;

    // Summation rounding can push the average a hair above every swatch when
    // they are all equal; the strongest swatch is the answer then.
    let dominant = match colors.iter().find(|s| bias.of(s) >= average_bias) {
        Some(swatch) => swatch,
        None => strongest(colors, bias),
    };

    tracing::debug!(
        "Tonal bias {:?}, average {:.4}, contrasting against {}",
        bias,
        average_bias,
        dominant.hex
    );

    Ok(Color8::from(Rgb8::from(dominant).inverted()))
}

fn strongest(colors: &[RawSwatch], channel: Channel) -> &RawSwatch {
    let mut best = &colors[0];
    for swatch in &colors[1..] {
        if channel.of(swatch) > channel.of(best) {
            best = swatch;
        }
    }
    best
}

/// Black on light images, white on dark ones.
///
/// A tie is settled by the first half of the swatches (rounded up), and if
/// that also ties, by the first swatch alone.
pub fn monochrome_text_color(colors: &[RawSwatch]) -> Result<Color8> {
    if colors.is_empty() {
        return Err(PaletteError::EmptyPaletteError);
    }

    let luminances: Vec<f64> = colors.iter().map(swatch_luminance).collect();
    let mode = classify(&luminances);
    tracing::debug!("Luminance mode {:?} over {} swatches", mode, luminances.len());

    let rgb = match mode {
        LuminanceMode::Dark => WHITE,
        LuminanceMode::Light => BLACK,
        LuminanceMode::Multi => {
            let favored = &luminances[..luminances.len().div_ceil(2)];
            match classify(favored) {
                LuminanceMode::Dark => WHITE,
                LuminanceMode::Light => BLACK,
                LuminanceMode::Multi if favored[0] <= LIGHT_THRESHOLD => WHITE,
                LuminanceMode::Multi => BLACK,
            }
        }
    };

    Ok(Color8::from(rgb))
}

pub fn select_text_color(colors: &[RawSwatch]) -> Result<TextColor> {
    Ok(TextColor {
        colorful: colorful_text_color(colors)?,
        monochrome: monochrome_text_color(colors)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn swatch(red: f64, green: f64, blue: f64) -> RawSwatch {
        let rgb = Rgb8::from_unit(red, green, blue);
        RawSwatch {
            red,
            green,
            blue,
            hex: crate::core::color::to_hex(rgb),
        }
    }

    fn grey(level: f64) -> RawSwatch {
        swatch(level, level, level)
    }

    #[test]
    fn test_tonal_bias_picks_largest_sum() {
        let colors = vec![swatch(0.2, 0.9, 0.1), swatch(0.3, 0.8, 0.9)];
        assert_eq!(tonal_bias(&colors), Channel::Green);
    }

    #[test]
    fn test_tonal_bias_ties_resolve_red_then_green() {
        assert_eq!(tonal_bias(&[swatch(0.5, 0.5, 0.5)]), Channel::Red);
        assert_eq!(tonal_bias(&[swatch(0.1, 0.6, 0.6)]), Channel::Green);
    }

    #[test]
    fn test_red_biased_palette_gets_low_red_text() {
        let colors = vec![
            swatch(0.9, 0.2, 0.1),
            swatch(0.8, 0.3, 0.2),
            swatch(0.95, 0.1, 0.3),
        ];

        let color = colorful_text_color(&colors).unwrap();

        // Average red is ~0.883; the first swatch at or above it is the first one.
        assert_eq!(color.rgb(), Rgb8::from_unit(0.9, 0.2, 0.1).inverted());
        assert!(color.red < 64);
    }

    #[test]
    fn test_colorful_skips_swatches_below_average_bias() {
        let colors = vec![swatch(0.1, 0.2, 0.4), swatch(0.1, 0.3, 0.9)];

        let color = colorful_text_color(&colors).unwrap();

        assert_eq!(color.rgb(), Rgb8::new(229, 178, 25));
        assert_eq!(color.hex, "#e5b219");
    }

    // The css string carries the inverted blue channel. An older rendition
    // repeated inverted green in the blue slot; here css, fields and hex agree.
    #[test]
    fn test_colorful_css_matches_channels() {
        let color = colorful_text_color(&[swatch(0.8, 0.2, 0.6)]).unwrap();

        assert_eq!(color.rgb(), Rgb8::new(51, 204, 102));
        assert_eq!(color.css, "rgb(51 204 102)");
        assert_eq!(color.hex, "#33cc66");
    }

    #[test]
    fn test_colorful_equal_swatches_still_resolve() {
        // 0.05 + 0.05 + 0.05 divided by three lands just above 0.05.
        let colors = vec![grey(0.05), grey(0.05), grey(0.05)];
        let color = colorful_text_color(&colors).unwrap();
        assert_eq!(color.rgb(), Rgb8::new(242, 242, 242));
    }

    #[test]
    fn test_monochrome_light_and_dark() {
        let light = vec![grey(0.9), grey(0.8), swatch(1.0, 1.0, 0.7)];
        assert_eq!(monochrome_text_color(&light).unwrap().rgb(), BLACK);

        let dark = vec![grey(0.1), grey(0.3), swatch(0.0, 0.2, 0.1)];
        assert_eq!(monochrome_text_color(&dark).unwrap().rgb(), WHITE);
    }

    #[test]
    fn test_monochrome_tie_uses_first_half() {
        // Four swatches, two light: favored half is [dark, dark].
        let colors = vec![grey(0.1), grey(0.2), grey(0.9), grey(0.95)];
        assert_eq!(monochrome_text_color(&colors).unwrap().hex, "#ffffff");

        // Favored half is [light, light].
        let colors = vec![grey(0.9), grey(0.95), grey(0.1), grey(0.2)];
        assert_eq!(monochrome_text_color(&colors).unwrap().hex, "#000000");
    }

    #[test]
    fn test_monochrome_tie_in_favored_half_uses_first_swatch() {
        // Favored half [light, dark] ties again; the first swatch is light.
        let colors = vec![grey(0.9), grey(0.1), grey(0.2), grey(0.95)];
        assert_eq!(monochrome_text_color(&colors).unwrap().rgb(), BLACK);

        let colors = vec![grey(0.1), grey(0.9), grey(0.95), grey(0.2)];
        assert_eq!(monochrome_text_color(&colors).unwrap().rgb(), WHITE);
    }

    #[test]
    fn test_two_swatch_tie_follows_first() {
        let colors = vec![grey(0.95), grey(0.05)];
        assert_eq!(monochrome_text_color(&colors).unwrap().rgb(), BLACK);
    }

    #[test]
    fn test_empty_swatches_are_rejected() {
        assert!(matches!(
            colorful_text_color(&[]),
            Err(PaletteError::EmptyPaletteError)
        ));
        assert!(matches!(
            select_text_color(&[]),
            Err(PaletteError::EmptyPaletteError)
        ));
    }
}
