use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::metrics::{band, Band};

// ---------------------------------------------------------------------------
// HSL → Color32
// ---------------------------------------------------------------------------

/// Convert an HSL triple (hue in degrees) to an egui colour.
pub fn hsl_color(hue: f32, saturation: f32, lightness: f32) -> Color32 {
    let rgb: Srgb = Hsl::new_srgb(hue, saturation, lightness).into_color();
    Color32::from_rgb(
        (rgb.red.clamp(0.0, 1.0) * 255.0).round() as u8,
        (rgb.green.clamp(0.0, 1.0) * 255.0).round() as u8,
        (rgb.blue.clamp(0.0, 1.0) * 255.0).round() as u8,
    )
}

// ---------------------------------------------------------------------------
// Band colours
// ---------------------------------------------------------------------------

/// Text colour for a band: green, blue, amber, red.
pub fn band_color(band: Band) -> Color32 {
    match band {
        Band::Strong => hsl_color(142.0, 0.72, 0.32),
        Band::Good => hsl_color(221.0, 0.83, 0.45),
        Band::Fair => hsl_color(41.0, 0.92, 0.40),
        Band::Weak => hsl_color(0.0, 0.72, 0.48),
    }
}

/// Colour for a raw score.
pub fn score_color(score: f64) -> Color32 {
    band_color(band(score))
}

/// Stroke and fill for the radar polygon.
pub fn radar_accent() -> Color32 {
    hsl_color(243.0, 0.75, 0.59)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bands_have_distinct_colours() {
        let colours = [Band::Strong, Band::Good, Band::Fair, Band::Weak].map(band_color);
        for (i, a) in colours.iter().enumerate() {
            for b in &colours[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn strong_is_greenish() {
        let c = band_color(Band::Strong);
        assert!(c.g() > c.r() && c.g() > c.b());
        assert_eq!(score_color(4.5), c);
    }

    #[test]
    fn pure_red_conversion() {
        assert_eq!(hsl_color(0.0, 1.0, 0.5), Color32::from_rgb(255, 0, 0));
    }
}
