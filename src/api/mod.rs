//! Engine facade: the public orchestration API over chart data, layout,
//! interaction state and rendering.

mod chart_model;
mod chart_payload;
mod chart_presentation;
mod chart_runtime;
mod data_controller;
mod engine;
mod engine_accessors;
mod engine_config;
mod engine_core;
mod engine_init;
mod engine_snapshot;
mod interaction_controller;
mod json_contract;
mod matrix_client;
mod observer_registry;
mod render_frame_builder;
mod render_style;
mod validation;

pub use chart_payload::{ChartPayload, PlanetPayload};
pub use engine::KundaliEngine;
pub use engine_config::KundaliEngineConfig;
pub use engine_snapshot::EngineSnapshot;
pub use json_contract::{ENGINE_SNAPSHOT_JSON_SCHEMA_V1, EngineSnapshotJsonContractV1};
pub use matrix_client::{
    PairAspect, PairAspectEntry, PairRelation, RelationFetchToken, RelationMatrices,
    RelationMatricesPayload,
};
pub use render_style::RenderStyle;
