use tracing::debug;

use crate::core::house::sign_for_house;
use crate::core::{ChartData, HouseNumber, Rashi, Viewport};
use crate::error::{KundaliError, KundaliResult};
use crate::interaction::{ChartViewState, MenuMetrics};
use crate::layout::{ChartLayout, GridStyle, layout_chart};
use crate::render::Renderer;

use super::KundaliEngine;

impl<R: Renderer> KundaliEngine<R> {
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.core.model.viewport
    }

    /// Updates viewport dimensions used by layout projection and menu
    /// anchor clamping.
    pub fn set_viewport(&mut self, viewport: Viewport) -> KundaliResult<()> {
        if !viewport.is_valid() {
            return Err(KundaliError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        self.core.model.viewport = viewport;
        Ok(())
    }

    #[must_use]
    pub fn grid_style(&self) -> GridStyle {
        self.core.model.grid_style
    }

    pub fn set_grid_style(&mut self, style: GridStyle) {
        if self.core.model.grid_style != style {
            debug!(style = style.name(), "grid style changed");
            self.core.model.grid_style = style;
        }
    }

    #[must_use]
    pub fn chart(&self) -> &ChartData {
        &self.core.model.chart
    }

    #[must_use]
    pub fn view(&self) -> &ChartViewState {
        &self.core.model.view
    }

    pub fn set_menu_metrics(&mut self, metrics: MenuMetrics) {
        self.core.model.view.set_menu_metrics(metrics);
    }

    /// Ascendant sign after any view-level override.
    #[must_use]
    pub fn resolved_ascendant(&self) -> Rashi {
        self.core
            .model
            .view
            .ascendant_override()
            .unwrap_or_else(|| self.core.model.chart.ascendant_sign())
    }

    /// Currently resolved (house, sign) pairs under the resolved
    /// ascendant.
    #[must_use]
    pub fn resolved_signs(&self) -> Vec<(HouseNumber, Rashi)> {
        let ascendant = self.resolved_ascendant();
        HouseNumber::ALL
            .into_iter()
            .map(|house| (house, sign_for_house(ascendant, house)))
            .collect()
    }

    /// Computes the annotated layout for the current state. Pure with
    /// respect to engine state; calling it twice yields equal layouts.
    #[must_use]
    pub fn layout(&self) -> ChartLayout {
        let model = &self.core.model;
        layout_chart(
            &model.chart,
            model.grid_style,
            model.view.ascendant_override(),
            model.viewport,
        )
    }

    /// True while a context menu is open and the host should route
    /// document-level presses to `outside_press`.
    #[must_use]
    pub fn wants_outside_press_events(&self) -> bool {
        self.core.model.view.wants_outside_press_events()
    }
}
