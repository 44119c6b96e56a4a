//! kundali-rs: Vedic chart geometry, annotation and interaction engine.
//!
//! The crate turns validated birth-chart data into a positioned, annotated,
//! interactive diagram model (north-diamond or south-grid), with a strict
//! split between pure layout/classification and renderer backends.

pub mod api;
pub mod classify;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod layout;
pub mod render;
pub mod telemetry;

pub use api::{KundaliEngine, KundaliEngineConfig};
pub use error::{KundaliError, KundaliResult};
