use super::chart_model::ChartModel;
use super::chart_presentation::ChartPresentationState;
use super::chart_runtime::ChartRuntimeState;

/// Aggregated engine state split into model / presentation / runtime
/// groups so controller impls borrow only what they touch.
pub(super) struct EngineCore {
    pub(super) model: ChartModel,
    pub(super) presentation: ChartPresentationState,
    pub(super) runtime: ChartRuntimeState,
}
