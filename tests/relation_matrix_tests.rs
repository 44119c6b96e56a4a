use kundali_rs::api::{
    KundaliEngine, KundaliEngineConfig, PairRelation, RelationMatricesPayload,
};
use kundali_rs::core::{Body, Viewport};
use kundali_rs::error::KundaliError;
use kundali_rs::interaction::{HighlightMode, StateUpdate};
use kundali_rs::render::NullRenderer;

const CHART_JSON: &str = r#"{
    "ascendant_longitude_deg": 40.0,
    "planets": [
        {"name": "Sun", "longitude_deg": 100.0},
        {"name": "Moon", "longitude_deg": 210.0}
    ]
}"#;

fn engine() -> KundaliEngine<NullRenderer> {
    let config = KundaliEngineConfig::new(Viewport::new(480, 480));
    let mut engine = KundaliEngine::new(NullRenderer::default(), config).expect("engine init");
    engine.set_chart_json(CHART_JSON).expect("chart installs");
    engine
}

fn payload(friendship: &str) -> RelationMatricesPayload {
    let raw = format!(r#"{{"friendship_matrix": {{"Sun-Moon": "{friendship}"}}}}"#);
    RelationMatricesPayload::from_json_str(&raw).expect("payload parses")
}

#[test]
fn the_newest_fetch_wins_across_overlapping_requests() {
    let mut engine = engine();
    let first = engine.begin_relation_fetch();
    let second = engine.begin_relation_fetch();

    // The older completion arrives late and is discarded outright.
    assert!(!engine.complete_relation_fetch(first, Ok(payload("enemy"))));
    assert!(!engine.matrices_loaded());

    assert!(engine.complete_relation_fetch(second, Ok(payload("great_friend"))));
    let matrices = engine.relation_matrices().expect("matrices loaded");
    assert_eq!(
        matrices.friendship_between(Body::Sun, Body::Moon),
        Some(PairRelation::GreatFriend)
    );
}

#[test]
fn completions_ordered_normally_still_apply() {
    let mut engine = engine();
    let token = engine.begin_relation_fetch();
    assert!(engine.complete_relation_fetch(token, Ok(payload("friend"))));
    assert!(engine.matrices_loaded());

    // A second round replaces the first wholesale.
    let token = engine.begin_relation_fetch();
    assert!(engine.complete_relation_fetch(token, Ok(payload("neutral"))));
    let matrices = engine.relation_matrices().expect("matrices loaded");
    assert_eq!(
        matrices.friendship_between(Body::Moon, Body::Sun),
        Some(PairRelation::Neutral)
    );
}

#[test]
fn a_failed_fetch_keeps_the_previous_matrices() {
    let mut engine = engine();
    let token = engine.begin_relation_fetch();
    assert!(engine.complete_relation_fetch(token, Ok(payload("great_friend"))));

    let retry = engine.begin_relation_fetch();
    let failure = Err(KundaliError::InvalidPayload("relation service 502".into()));
    assert!(!engine.complete_relation_fetch(retry, failure));

    let matrices = engine.relation_matrices().expect("previous matrices kept");
    assert_eq!(
        matrices.friendship_between(Body::Sun, Body::Moon),
        Some(PairRelation::GreatFriend)
    );
}

#[test]
fn friendship_highlight_waits_for_matrices() {
    let mut engine = engine();
    assert_eq!(
        engine.highlight_planet("Sun", HighlightMode::Friendship),
        StateUpdate::Unchanged
    );
    assert!(engine.view().highlight().is_none());

    // Aspect emphasis never needed the matrices.
    assert_eq!(
        engine.highlight_planet("Sun", HighlightMode::Aspects),
        StateUpdate::Redraw
    );
    let _ = engine.clear_highlight();

    let token = engine.begin_relation_fetch();
    assert!(engine.complete_relation_fetch(token, Ok(payload("friend"))));
    assert_eq!(
        engine.highlight_planet("Sun", HighlightMode::Friendship),
        StateUpdate::Redraw
    );
    assert!(engine.view().highlight().is_some());
}

#[test]
fn chart_replacement_invalidates_matrices_and_inflight_fetches() {
    let mut engine = engine();
    let token = engine.begin_relation_fetch();
    assert!(engine.complete_relation_fetch(token, Ok(payload("friend"))));
    assert!(engine.matrices_loaded());

    // New chart: loaded matrices no longer describe it.
    engine.set_chart_json(CHART_JSON).expect("chart installs");
    assert!(!engine.matrices_loaded());

    // A fetch that straddles the chart swap is stale on arrival.
    let straddling = engine.begin_relation_fetch();
    engine.set_chart_json(CHART_JSON).expect("chart installs");
    assert!(!engine.complete_relation_fetch(straddling, Ok(payload("friend"))));
    assert!(!engine.matrices_loaded());
}

#[test]
fn clearing_the_chart_also_drops_matrices() {
    let mut engine = engine();
    let token = engine.begin_relation_fetch();
    assert!(engine.complete_relation_fetch(token, Ok(payload("friend"))));

    engine.clear_chart();
    assert!(!engine.matrices_loaded());
    assert_eq!(
        engine.highlight_planet("Sun", HighlightMode::Friendship),
        StateUpdate::Unchanged
    );
}

#[test]
fn empty_payload_still_counts_as_loaded() {
    let mut engine = engine();
    let token = engine.begin_relation_fetch();
    let empty = RelationMatricesPayload::from_json_str("{}").expect("payload parses");
    assert!(engine.complete_relation_fetch(token, Ok(empty)));
    assert!(engine.matrices_loaded());
    let matrices = engine.relation_matrices().expect("matrices loaded");
    assert!(matrices.is_empty());
    assert_eq!(matrices.friendship_between(Body::Sun, Body::Moon), None);
}
