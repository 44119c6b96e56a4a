//! Host-facing extension hooks.
//!
//! Keep extensions decoupled: observers watch the engine, they never sit
//! on core computation paths.

pub mod observers;

pub use observers::{ChartEvent, ChartObserver, ChartObserverContext};
