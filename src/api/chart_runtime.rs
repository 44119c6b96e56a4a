use crate::extensions::ChartObserver;

use super::matrix_client::RelationMatrices;

/// Runtime orchestration state grouped separately from model/presentation.
pub(super) struct ChartRuntimeState {
    pub(super) observers: Vec<Box<dyn ChartObserver>>,
    pub(super) matrices: Option<RelationMatrices>,
    /// Bumped on every chart install and on every fetch start. Async
    /// completions carrying an older value are dropped.
    pub(super) matrix_generation: u64,
}

impl ChartRuntimeState {
    #[must_use]
    pub(super) fn bootstrap() -> Self {
        Self {
            observers: Vec::new(),
            matrices: None,
            matrix_generation: 0,
        }
    }
}
