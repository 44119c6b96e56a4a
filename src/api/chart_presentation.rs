use super::RenderStyle;

/// Presentation state grouped separately from chart model/runtime.
#[derive(Default)]
pub(super) struct ChartPresentationState {
    pub(super) render_style: RenderStyle,
}
