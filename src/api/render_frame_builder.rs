use crate::classify::{Dignity, aspects_from};
use crate::core::HouseNumber;
use crate::interaction::{Highlight, HighlightMode};
use crate::layout::geometry::{NORTH_FRAME_SEGMENTS, SOUTH_FRAME_SEGMENTS, south_lagna_slash};
use crate::layout::{ChartLayout, ChartSquare, GridStyle, PlacedPlanet, SlotBand};
use crate::render::{
    Color, LinePrimitive, RectPrimitive, RenderFrame, Renderer, TextHAlign, TextPrimitive,
};

use super::{KundaliEngine, PairAspect, RenderStyle};

impl<R: Renderer> KundaliEngine<R> {
    /// Materializes the current scene: skeleton, labels, occupant glyphs
    /// and any active highlight. Deterministic for a given engine state.
    #[must_use]
    pub fn build_render_frame(&self) -> RenderFrame {
        let style = self.core.presentation.render_style;
        let layout = self.layout();
        let square = ChartSquare::from_viewport(layout.viewport);
        let mut frame = RenderFrame::new(layout.viewport);

        push_skeleton(&mut frame, &layout, square, style);
        push_labels(&mut frame, &layout, style);
        push_occupants(&mut frame, &layout, style);

        match self.core.model.view.highlight() {
            Some(Highlight::Planet { name, mode }) => {
                self.push_planet_highlight(&mut frame, &layout, name, *mode, style);
            }
            Some(Highlight::HouseAspects { house }) => {
                let focus = *house;
                self.push_house_aspect_highlight(&mut frame, &layout, focus, style);
            }
            None => {}
        }

        if self.core.model.chart.planets.is_empty() {
            let center = square.project(0.5, 0.5);
            frame.texts.push(TextPrimitive::new(
                style.placeholder_text,
                center.x,
                center.y,
                style.placeholder_font_size_px,
                style.placeholder_color,
                TextHAlign::Center,
            ));
        }

        frame
    }

    fn push_planet_highlight(
        &self,
        frame: &mut RenderFrame,
        layout: &ChartLayout,
        name: &str,
        mode: HighlightMode,
        style: RenderStyle,
    ) {
        let Some(target) = layout.placed_planet(name) else {
            return;
        };
        match mode {
            HighlightMode::Friendship => {
                let Some(matrices) = self.core.runtime.matrices.as_ref() else {
                    return;
                };
                let Some(target_body) = target.body else {
                    return;
                };
                for house in &layout.houses {
                    let font = glyph_font_px(style, house.band);
                    for occupant in &house.occupants {
                        if occupant.name.eq_ignore_ascii_case(&target.name) {
                            push_backplate(
                                frame,
                                occupant,
                                font,
                                style,
                                style.highlight_neutral_color,
                            );
                            continue;
                        }
                        let Some(body) = occupant.body else {
                            continue;
                        };
                        let Some(relation) = matrices.friendship_between(target_body, body) else {
                            continue;
                        };
                        let fill = if relation.is_friendly() {
                            style.highlight_benefic_color
                        } else if relation.is_hostile() {
                            style.highlight_malefic_color
                        } else {
                            style.highlight_neutral_color
                        };
                        push_backplate(frame, occupant, font, style, fill);
                    }
                }
            }
            HighlightMode::Aspects => {
                let Some(seat) = layout.house_of_planet(&target.name) else {
                    return;
                };
                for aspect in aspects_from(target.body, seat) {
                    let sighted = layout.house(aspect.target);
                    let centroid = sighted.frame.centroid();
                    push_aspect_line(
                        frame,
                        (target.x, target.y),
                        (centroid.x, centroid.y),
                        aspect.label,
                        style,
                    );

                    let font = glyph_font_px(style, sighted.band);
                    for occupant in &sighted.occupants {
                        let fill = match (target.body, occupant.body) {
                            (Some(a), Some(b)) => self
                                .core
                                .runtime
                                .matrices
                                .as_ref()
                                .and_then(|matrices| matrices.aspect_between(a, b))
                                .map(|aspect| match aspect {
                                    PairAspect::Benefic => style.highlight_benefic_color,
                                    PairAspect::Malefic => style.highlight_malefic_color,
                                    PairAspect::Unknown => style.highlight_neutral_color,
                                }),
                            _ => None,
                        };
                        if let Some(fill) = fill {
                            push_backplate(frame, occupant, font, style, fill);
                        }
                    }
                }
            }
        }
    }

    fn push_house_aspect_highlight(
        &self,
        frame: &mut RenderFrame,
        layout: &ChartLayout,
        focus: HouseNumber,
        style: RenderStyle,
    ) {
        let centroid = layout.house(focus).frame.centroid();
        for aspect in self.aspects_on_house(focus) {
            let Some(source) = layout.placed_planet(&aspect.planet) else {
                continue;
            };
            push_aspect_line(
                frame,
                (source.x, source.y),
                (centroid.x, centroid.y),
                aspect.label,
                style,
            );
            let band = layout.house(aspect.from_house).band;
            push_backplate(
                frame,
                source,
                glyph_font_px(style, band),
                style,
                style.highlight_neutral_color,
            );
        }
    }
}

fn push_skeleton(
    frame: &mut RenderFrame,
    layout: &ChartLayout,
    square: ChartSquare,
    style: RenderStyle,
) {
    let segments: &[((f64, f64), (f64, f64))] = match layout.style {
        GridStyle::NorthDiamond => &NORTH_FRAME_SEGMENTS,
        GridStyle::SouthGrid => &SOUTH_FRAME_SEGMENTS,
    };
    for &((x1, y1), (x2, y2)) in segments {
        let a = square.project(x1, y1);
        let b = square.project(x2, y2);
        frame.lines.push(LinePrimitive::new(
            a.x,
            a.y,
            b.x,
            b.y,
            style.frame_stroke_width,
            style.frame_line_color,
        ));
    }

    // South charts mark the ascendant cell with a corner slash.
    if layout.style == GridStyle::SouthGrid {
        let ((x1, y1), (x2, y2)) = south_lagna_slash(layout.ascendant);
        let a = square.project(x1, y1);
        let b = square.project(x2, y2);
        frame.lines.push(LinePrimitive::new(
            a.x,
            a.y,
            b.x,
            b.y,
            style.frame_stroke_width,
            style.frame_line_color,
        ));
    }
}

/// North houses print their sign number; south cells have fixed signs,
/// so they print the house number each cell currently holds instead.
fn push_labels(frame: &mut RenderFrame, layout: &ChartLayout, style: RenderStyle) {
    for house in &layout.houses {
        let text = match layout.style {
            GridStyle::NorthDiamond => house.sign.number().to_string(),
            GridStyle::SouthGrid => house.house.number().to_string(),
        };
        frame.texts.push(TextPrimitive::new(
            text,
            house.sign_label.x,
            house.sign_label.y,
            style.sign_label_font_size_px,
            style.sign_label_color,
            TextHAlign::Center,
        ));
    }
}

fn push_occupants(frame: &mut RenderFrame, layout: &ChartLayout, style: RenderStyle) {
    for house in &layout.houses {
        let font = glyph_font_px(style, house.band);
        for occupant in &house.occupants {
            frame.texts.push(TextPrimitive::new(
                glyph_label(occupant),
                occupant.x,
                occupant.y,
                font,
                style.planet_label_color,
                TextHAlign::Center,
            ));
        }
    }
}

fn push_aspect_line(
    frame: &mut RenderFrame,
    from: (f64, f64),
    to: (f64, f64),
    label: &str,
    style: RenderStyle,
) {
    frame.lines.push(LinePrimitive::new(
        from.0,
        from.1,
        to.0,
        to.1,
        style.aspect_line_stroke_width,
        style.aspect_line_color,
    ));
    // Ordinal rides the midpoint of the sight line.
    frame.texts.push(TextPrimitive::new(
        label,
        (from.0 + to.0) * 0.5,
        (from.1 + to.1) * 0.5,
        style.aspect_label_font_size_px,
        style.aspect_line_color,
        TextHAlign::Center,
    ));
}

fn push_backplate(
    frame: &mut RenderFrame,
    planet: &PlacedPlanet,
    font_px: f64,
    style: RenderStyle,
    fill: Color,
) {
    let width = font_px * 2.2 + style.highlight_pad_px * 2.0;
    let height = font_px * 1.3 + style.highlight_pad_px * 2.0;
    frame.rects.push(RectPrimitive::new(
        planet.x - width * 0.5,
        planet.y - height * 0.5,
        width,
        height,
        fill,
    ));
}

fn glyph_font_px(style: RenderStyle, band: SlotBand) -> f64 {
    match band {
        SlotBand::Single => style.glyph_font_size_single_px,
        SlotBand::Clustered => style.glyph_font_size_clustered_px,
        SlotBand::Dense => style.glyph_font_size_dense_px,
    }
}

/// Glyph text: short code plus status markers. Exalted planets carry a
/// rising arrow, debilitated a falling one, combust a star; retrograde
/// wraps the whole glyph in parentheses.
fn glyph_label(planet: &PlacedPlanet) -> String {
    let mut label = planet.code.clone();
    match planet.status.dignity {
        Dignity::Exalted => label.push('\u{2191}'),
        Dignity::Debilitated => label.push('\u{2193}'),
        Dignity::MoolaTrikona | Dignity::OwnSign | Dignity::Neutral => {}
    }
    if planet.status.combust {
        label.push('*');
    }
    if planet.retrograde {
        label = format!("({label})");
    }
    label
}
