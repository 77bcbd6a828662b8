use eframe::egui::Color32;
use palette::Srgb;
use plotters::style::RGBColor;

// ---------------------------------------------------------------------------
// Chart palette
// ---------------------------------------------------------------------------

/// Backend-neutral colour used throughout the figure model.
pub type Rgb = Srgb<u8>;

/// First entries of the classic "tab10" cycle, so the charts read the same
/// as the figures already in the study write-up.
pub const BLUE: Rgb = Srgb::new(0x1f, 0x77, 0xb4);
pub const ORANGE: Rgb = Srgb::new(0xff, 0x7f, 0x0e);
pub const GREEN: Rgb = Srgb::new(0x2c, 0xa0, 0x2c);
pub const GRAY: Rgb = Srgb::new(0x7f, 0x7f, 0x7f);
pub const BLACK: Rgb = Srgb::new(0, 0, 0);

// ---------------------------------------------------------------------------
// Backend conversions
// ---------------------------------------------------------------------------

/// Colour for the on-screen viewer.
pub fn to_color32(c: Rgb) -> Color32 {
    Color32::from_rgb(c.red, c.green, c.blue)
}

/// Colour for the SVG exporter.
pub fn to_plotters(c: Rgb) -> RGBColor {
    RGBColor(c.red, c.green, c.blue)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversions_keep_channels() {
        assert_eq!(to_color32(ORANGE), Color32::from_rgb(255, 127, 14));
        let RGBColor(r, g, b) = to_plotters(BLUE);
        assert_eq!((r, g, b), (0x1f, 0x77, 0xb4));
    }
}
