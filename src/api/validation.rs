use crate::error::{KundaliError, KundaliResult};

use super::RenderStyle;

pub(super) fn validate_render_style(style: RenderStyle) -> KundaliResult<()> {
    for (name, color) in [
        ("frame_line_color", style.frame_line_color),
        ("sign_label_color", style.sign_label_color),
        ("planet_label_color", style.planet_label_color),
        ("highlight_benefic_color", style.highlight_benefic_color),
        ("highlight_malefic_color", style.highlight_malefic_color),
        ("highlight_neutral_color", style.highlight_neutral_color),
        ("aspect_line_color", style.aspect_line_color),
        ("placeholder_color", style.placeholder_color),
    ] {
        color.validate().map_err(|_| {
            KundaliError::InvalidData(format!("render style `{name}` is out of range"))
        })?;
    }

    for (name, value) in [
        ("frame_stroke_width", style.frame_stroke_width),
        ("aspect_line_stroke_width", style.aspect_line_stroke_width),
        ("sign_label_font_size_px", style.sign_label_font_size_px),
        ("glyph_font_size_single_px", style.glyph_font_size_single_px),
        (
            "glyph_font_size_clustered_px",
            style.glyph_font_size_clustered_px,
        ),
        ("glyph_font_size_dense_px", style.glyph_font_size_dense_px),
        ("aspect_label_font_size_px", style.aspect_label_font_size_px),
        ("placeholder_font_size_px", style.placeholder_font_size_px),
    ] {
        if !value.is_finite() || value <= 0.0 {
            return Err(KundaliError::InvalidData(format!(
                "render style `{name}` must be finite and > 0"
            )));
        }
    }

    if !style.highlight_pad_px.is_finite() || style.highlight_pad_px < 0.0 {
        return Err(KundaliError::InvalidData(
            "render style `highlight_pad_px` must be finite and >= 0".to_owned(),
        ));
    }
    if style.placeholder_text.is_empty() {
        return Err(KundaliError::InvalidData(
            "render style `placeholder_text` must not be empty".to_owned(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::validate_render_style;
    use crate::api::RenderStyle;

    #[test]
    fn default_style_passes_validation() {
        assert!(validate_render_style(RenderStyle::default()).is_ok());
    }

    #[test]
    fn zero_stroke_width_is_rejected() {
        let style = RenderStyle {
            frame_stroke_width: 0.0,
            ..RenderStyle::default()
        };
        assert!(validate_render_style(style).is_err());
    }

    #[test]
    fn negative_highlight_pad_is_rejected() {
        let style = RenderStyle {
            highlight_pad_px: -1.0,
            ..RenderStyle::default()
        };
        assert!(validate_render_style(style).is_err());
    }
}
