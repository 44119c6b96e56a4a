use crate::core::{ChartData, Viewport};
use crate::interaction::ChartViewState;
use crate::layout::GridStyle;

/// Installed chart plus the transient view state layered over it.
pub(super) struct ChartModel {
    pub(super) viewport: Viewport,
    pub(super) grid_style: GridStyle,
    pub(super) chart: ChartData,
    pub(super) view: ChartViewState,
}

impl ChartModel {
    #[must_use]
    pub(super) fn bootstrap(viewport: Viewport, grid_style: GridStyle) -> Self {
        Self {
            viewport,
            grid_style,
            chart: ChartData::default(),
            view: ChartViewState::default(),
        }
    }
}
