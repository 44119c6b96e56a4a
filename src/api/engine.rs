use crate::error::KundaliResult;
use crate::extensions::ChartEvent;
use crate::render::Renderer;

use super::validation::validate_render_style;
use super::{RenderStyle, engine_core::EngineCore};

/// Main orchestration facade consumed by host applications.
///
/// `KundaliEngine` owns the installed chart, the transient view state
/// (highlight, ascendant override, menu/modal), relation matrices and
/// renderer calls. Layout is recomputed on demand as a pure function of
/// the owned state.
pub struct KundaliEngine<R: Renderer> {
    pub(super) renderer: R,
    pub(super) core: EngineCore,
}

impl<R: Renderer> KundaliEngine<R> {
    #[must_use]
    pub fn render_style(&self) -> RenderStyle {
        self.core.presentation.render_style
    }

    pub fn set_render_style(&mut self, style: RenderStyle) -> KundaliResult<()> {
        validate_render_style(style)?;
        self.core.presentation.render_style = style;
        Ok(())
    }

    /// Builds the current frame and hands it to the renderer.
    pub fn render(&mut self) -> KundaliResult<()> {
        let frame = self.build_render_frame();
        self.renderer.render(&frame)?;
        self.emit_chart_event(&ChartEvent::Rendered);
        Ok(())
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
