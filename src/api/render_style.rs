use crate::render::Color;

/// Style contract for the current render frame.
///
/// All colors are normalized RGBA; all lengths are pixels. Highlight
/// colors are translucent so backplates tint glyphs without hiding them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderStyle {
    pub frame_line_color: Color,
    pub frame_stroke_width: f64,
    pub sign_label_color: Color,
    pub sign_label_font_size_px: f64,
    pub planet_label_color: Color,
    /// Glyph font for a lone occupant.
    pub glyph_font_size_single_px: f64,
    /// Glyph font for 2..=4 co-located occupants.
    pub glyph_font_size_clustered_px: f64,
    /// Glyph font for 5 or more co-located occupants.
    pub glyph_font_size_dense_px: f64,
    pub highlight_benefic_color: Color,
    pub highlight_malefic_color: Color,
    pub highlight_neutral_color: Color,
    /// Padding added around a glyph when sizing its highlight backplate.
    pub highlight_pad_px: f64,
    pub aspect_line_color: Color,
    pub aspect_line_stroke_width: f64,
    pub aspect_label_font_size_px: f64,
    /// Shown centered when no chart data is installed.
    pub placeholder_text: &'static str,
    pub placeholder_font_size_px: f64,
    pub placeholder_color: Color,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            frame_line_color: Color::rgb(0.48, 0.12, 0.12),
            frame_stroke_width: 1.5,
            sign_label_color: Color::rgb(0.42, 0.36, 0.30),
            sign_label_font_size_px: 11.0,
            planet_label_color: Color::rgb(0.12, 0.12, 0.16),
            glyph_font_size_single_px: 15.0,
            glyph_font_size_clustered_px: 13.0,
            glyph_font_size_dense_px: 11.0,
            highlight_benefic_color: Color::rgba(0.18, 0.55, 0.24, 0.30),
            highlight_malefic_color: Color::rgba(0.76, 0.18, 0.15, 0.30),
            highlight_neutral_color: Color::rgba(0.82, 0.64, 0.15, 0.30),
            highlight_pad_px: 3.0,
            aspect_line_color: Color::rgba(0.25, 0.35, 0.70, 0.85),
            aspect_line_stroke_width: 1.25,
            aspect_label_font_size_px: 10.0,
            placeholder_text: "Awaiting chart data",
            placeholder_font_size_px: 14.0,
            placeholder_color: Color::rgb(0.45, 0.45, 0.48),
        }
    }
}
