use kundali_rs::api::{
    KundaliEngine, KundaliEngineConfig, RelationMatricesPayload, RenderStyle,
};
use kundali_rs::core::{HouseNumber, Rashi, Viewport};
use kundali_rs::interaction::HighlightMode;
use kundali_rs::layout::GridStyle;
use kundali_rs::render::{NullRenderer, RenderFrame};

const CHART_JSON: &str = r#"{
    "ascendant_longitude_deg": 12.5,
    "planets": [
        {"name": "Sun", "longitude_deg": 15.0},
        {"name": "Moon", "longitude_deg": 200.0},
        {"name": "Mars", "longitude_deg": 95.0}
    ]
}"#;

fn engine() -> KundaliEngine<NullRenderer> {
    let config = KundaliEngineConfig::new(Viewport::new(480, 480));
    let mut engine = KundaliEngine::new(NullRenderer::default(), config).expect("engine init");
    engine.set_chart_json(CHART_JSON).expect("chart installs");
    engine
}

fn load_matrices(engine: &mut KundaliEngine<NullRenderer>, raw: &str) {
    let token = engine.begin_relation_fetch();
    let payload = RelationMatricesPayload::from_json_str(raw).expect("payload parses");
    assert!(engine.complete_relation_fetch(token, Ok(payload)));
}

fn label_count(frame: &RenderFrame, label: &str) -> usize {
    frame.texts.iter().filter(|text| text.text == label).count()
}

#[test]
fn north_frame_holds_skeleton_labels_and_glyphs() {
    let engine = engine();
    let frame = engine.build_render_frame();

    // 10 skeleton segments, 12 sign labels plus 3 glyphs, no highlight.
    assert_eq!(frame.lines.len(), 10);
    assert_eq!(frame.texts.len(), 15);
    assert!(frame.rects.is_empty());

    // Aries rising: house labels print sign numbers 1 through 12.
    for number in 1..=12 {
        assert_eq!(label_count(&frame, &number.to_string()), 1);
    }
    assert_eq!(label_count(&frame, "Su"), 1);
    assert_eq!(label_count(&frame, "Mo"), 1);
}

#[test]
fn north_labels_follow_the_override() {
    let mut engine = engine();
    let _ = engine.make_ascendant(Rashi::Leo);
    let frame = engine.build_render_frame();
    // Labels are pushed house 1 first; Leo is sign number 5.
    assert_eq!(frame.texts[0].text, "5");
    assert_eq!(frame.texts[11].text, "4");
}

#[test]
fn south_frame_adds_the_lagna_slash() {
    let mut engine = engine();
    engine.set_grid_style(GridStyle::SouthGrid);

    let frame = engine.build_render_frame();
    assert_eq!(frame.lines.len(), 13);
    // South cells print house numbers, not sign numbers.
    assert_eq!(frame.texts[0].text, "1");
    assert_eq!(frame.texts[11].text, "12");

    // The slash rides the ascendant cell, so an override moves it.
    let natal_slash = frame.lines[12];
    let _ = engine.make_ascendant(Rashi::Leo);
    let overridden = engine.build_render_frame();
    let moved_slash = overridden.lines[12];
    assert!(
        (natal_slash.x1 - moved_slash.x1).abs() > 1e-9
            || (natal_slash.y1 - moved_slash.y1).abs() > 1e-9
    );
    // House-number labels do not move with the override.
    assert_eq!(overridden.texts[0].text, "1");
}

#[test]
fn placeholder_appears_only_for_empty_charts() {
    let config = KundaliEngineConfig::new(Viewport::new(480, 480));
    let mut engine = KundaliEngine::new(NullRenderer::default(), config).expect("engine init");
    let placeholder = RenderStyle::default().placeholder_text;

    let frame = engine.build_render_frame();
    assert_eq!(frame.lines.len(), 10);
    assert_eq!(frame.texts.len(), 13);
    assert_eq!(label_count(&frame, placeholder), 1);

    engine.set_chart_json(CHART_JSON).expect("chart installs");
    let frame = engine.build_render_frame();
    assert_eq!(label_count(&frame, placeholder), 0);
}

#[test]
fn friendship_highlight_backplates_known_pairs() {
    let mut engine = engine();
    load_matrices(
        &mut engine,
        r#"{"friendship_matrix": {"Sun-Moon": "great_friend", "Sun-Mars": "enemy"}}"#,
    );
    let _ = engine.highlight_planet("Sun", HighlightMode::Friendship);

    let style = RenderStyle::default();
    let frame = engine.build_render_frame();
    // Target plus both relation-bearing planets.
    assert_eq!(frame.rects.len(), 3);
    let fill_count = |fill| frame.rects.iter().filter(|rect| rect.fill == fill).count();
    assert_eq!(fill_count(style.highlight_benefic_color), 1);
    assert_eq!(fill_count(style.highlight_malefic_color), 1);
    assert_eq!(fill_count(style.highlight_neutral_color), 1);
}

#[test]
fn friendship_highlight_skips_pairs_without_entries() {
    let mut engine = engine();
    load_matrices(&mut engine, r#"{"friendship_matrix": {"Sun-Moon": "friend"}}"#);
    let _ = engine.highlight_planet("Sun", HighlightMode::Friendship);

    let frame = engine.build_render_frame();
    // Sun (target, neutral) and Moon only; Mars has no entry.
    assert_eq!(frame.rects.len(), 2);
}

#[test]
fn aspect_highlight_draws_sight_lines_with_ordinals() {
    let mut engine = engine();
    let _ = engine.highlight_planet("Mars", HighlightMode::Aspects);

    let frame = engine.build_render_frame();
    // Mars casts 7th, 4th and 8th sight: three lines over the skeleton.
    assert_eq!(frame.lines.len(), 13);
    assert_eq!(frame.texts.len(), 18);
    for label in ["7th", "4th", "8th"] {
        assert_eq!(label_count(&frame, label), 1);
    }
    // Without an aspects matrix no backplate is drawn.
    assert!(frame.rects.is_empty());
}

#[test]
fn aspect_backplates_come_from_the_aspects_matrix() {
    let mut engine = engine();
    load_matrices(&mut engine, r#"{"aspects_matrix": {"Mars-Moon": {"type": "malefic"}}}"#);
    let _ = engine.highlight_planet("Mars", HighlightMode::Aspects);

    let style = RenderStyle::default();
    let frame = engine.build_render_frame();
    // Moon sits in the 4th-sight house and the pair is rated malefic.
    assert_eq!(frame.rects.len(), 1);
    assert_eq!(frame.rects[0].fill, style.highlight_malefic_color);
}

#[test]
fn house_focus_draws_reverse_sight_lines() {
    let mut engine = engine();
    let _ = engine.highlight_house_aspects(HouseNumber::FIRST);

    let style = RenderStyle::default();
    let frame = engine.build_render_frame();
    // Only the Moon (7th sight from house 7) reaches house 1.
    assert_eq!(frame.lines.len(), 11);
    assert_eq!(label_count(&frame, "7th"), 1);
    assert_eq!(frame.rects.len(), 1);
    assert_eq!(frame.rects[0].fill, style.highlight_neutral_color);
}

#[test]
fn highlight_of_a_missing_planet_adds_nothing() {
    let mut engine = engine();
    let _ = engine.highlight_planet("Ketu", HighlightMode::Aspects);
    let frame = engine.build_render_frame();
    assert_eq!(frame.lines.len(), 10);
    assert!(frame.rects.is_empty());
}

#[test]
fn render_pushes_counts_through_the_renderer() {
    let mut engine = engine();
    engine.render().expect("render succeeds");
    let renderer = engine.into_renderer();
    assert_eq!(renderer.last_line_count, 10);
    assert_eq!(renderer.last_text_count, 15);
    assert_eq!(renderer.last_rect_count, 0);
}
