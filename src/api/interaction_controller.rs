use tracing::debug;

use crate::classify::{AspectOnHouse, aspects_on_house};
use crate::core::house::{house_of_sign, sign_for_house};
use crate::core::{HouseNumber, Rashi};
use crate::extensions::ChartEvent;
use crate::interaction::{
    ContextMenuTarget, DetailKind, Highlight, HighlightMode, HouseAction, StateUpdate,
};
use crate::render::Renderer;

use super::KundaliEngine;

impl<R: Renderer> KundaliEngine<R> {
    /// Activates planet emphasis. Friendship mode needs loaded relation
    /// matrices; without them the call is inert and reports `Unchanged`.
    pub fn highlight_planet(
        &mut self,
        name: impl Into<String>,
        mode: HighlightMode,
    ) -> StateUpdate {
        let name = name.into();
        if mode == HighlightMode::Friendship && self.core.runtime.matrices.is_none() {
            debug!(planet = %name, "friendship highlight skipped: no relation matrices");
            return StateUpdate::Unchanged;
        }
        let update = self
            .core
            .model
            .view
            .set_highlight(Highlight::Planet { name, mode });
        if update != StateUpdate::Unchanged {
            self.emit_chart_event(&ChartEvent::HighlightChanged);
        }
        update
    }

    /// Focuses a house: the reverse query showing which planets cast
    /// sight on it.
    pub fn highlight_house_aspects(&mut self, house: HouseNumber) -> StateUpdate {
        let update = self
            .core
            .model
            .view
            .set_highlight(Highlight::HouseAspects { house });
        if update != StateUpdate::Unchanged {
            self.emit_chart_event(&ChartEvent::HighlightChanged);
        }
        update
    }

    pub fn clear_highlight(&mut self) -> StateUpdate {
        let update = self.core.model.view.clear_highlight();
        if update != StateUpdate::Unchanged {
            self.emit_chart_event(&ChartEvent::HighlightChanged);
        }
        update
    }

    /// Reinterprets houses from the given sign. Chart data is read,
    /// never rewritten; `reset_ascendant` restores the natal mapping.
    pub fn make_ascendant(&mut self, sign: Rashi) -> StateUpdate {
        let update = self.core.model.view.set_ascendant_override(sign);
        if update != StateUpdate::Unchanged {
            debug!(sign = sign.name(), "ascendant override set");
            self.emit_chart_event(&ChartEvent::AscendantOverridden { sign });
        }
        update
    }

    pub fn reset_ascendant(&mut self) -> StateUpdate {
        let update = self.core.model.view.reset_ascendant_override();
        if update != StateUpdate::Unchanged {
            debug!("ascendant override reset");
            self.emit_chart_event(&ChartEvent::AscendantReset);
        }
        update
    }

    /// Opens a context menu at the pressed point, clamped into the
    /// viewport. `now_ms` feeds the outside-press debounce window.
    pub fn open_context_menu(
        &mut self,
        target: ContextMenuTarget,
        x: f64,
        y: f64,
        now_ms: u64,
    ) -> StateUpdate {
        let viewport = self.core.model.viewport;
        self.core
            .model
            .view
            .open_context_menu(target, x, y, now_ms, viewport)
    }

    pub fn close_context_menu(&mut self) -> StateUpdate {
        self.core.model.view.close_context_menu()
    }

    /// Document-level press outside the open menu. Presses inside the
    /// debounce window of the opening press are swallowed.
    pub fn outside_press(&mut self, at_ms: u64) -> StateUpdate {
        self.core.model.view.outside_press(at_ms)
    }

    /// Routes one sign-label menu action. The menu closes first; the
    /// action then either relayouts (ascendant), highlights (aspects) or
    /// opens a detail modal.
    pub fn apply_house_action(&mut self, house: HouseNumber, action: HouseAction) -> StateUpdate {
        let closed = self.core.model.view.close_context_menu();
        let applied = match action {
            HouseAction::MakeAscendant => {
                let sign = sign_for_house(self.resolved_ascendant(), house);
                self.make_ascendant(sign)
            }
            HouseAction::ShowAspects => self.highlight_house_aspects(house),
            HouseAction::Analysis => self.open_detail(DetailKind::Analysis),
            HouseAction::Significations => self.open_detail(DetailKind::Significations),
            HouseAction::Strength => self.open_detail(DetailKind::Strength),
        };
        closed.merge(applied)
    }

    pub fn open_detail(&mut self, kind: DetailKind) -> StateUpdate {
        self.core.model.view.open_modal(kind)
    }

    pub fn close_detail(&mut self) -> StateUpdate {
        self.core.model.view.close_modal()
    }

    /// Host input hook: a press landed on a house body.
    pub fn house_clicked(&mut self, house: HouseNumber) {
        let sign = sign_for_house(self.resolved_ascendant(), house);
        self.emit_chart_event(&ChartEvent::HouseClicked { house, sign });
    }

    /// Host input hook: a press landed on a planet glyph. Returns the
    /// seat of the planet, or `None` when the chart has no such planet.
    pub fn planet_clicked(&mut self, name: &str) -> Option<HouseNumber> {
        let ascendant = self.resolved_ascendant();
        let planet = self.core.model.chart.planet(name)?;
        let house = house_of_sign(ascendant, planet.sign);
        let canonical = planet.name.clone();
        self.emit_chart_event(&ChartEvent::PlanetClicked {
            name: canonical,
            house,
        });
        Some(house)
    }

    /// Planets casting sight on `house` under the resolved ascendant.
    #[must_use]
    pub fn aspects_on_house(&self, house: HouseNumber) -> Vec<AspectOnHouse> {
        aspects_on_house(&self.core.model.chart, self.resolved_ascendant(), house)
    }
}
