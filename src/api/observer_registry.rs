use tracing::debug;

use crate::error::{KundaliError, KundaliResult};
use crate::extensions::{ChartEvent, ChartObserver, ChartObserverContext};
use crate::render::Renderer;

use super::KundaliEngine;

impl<R: Renderer> KundaliEngine<R> {
    /// Registers an observer. Ids must be non-empty and unique.
    pub fn register_observer(&mut self, observer: Box<dyn ChartObserver>) -> KundaliResult<()> {
        let id = observer.id().to_owned();
        if id.trim().is_empty() {
            return Err(KundaliError::InvalidData(
                "observer id must not be empty".to_owned(),
            ));
        }
        if self.has_observer(&id) {
            return Err(KundaliError::InvalidData(format!(
                "observer id `{id}` is already registered"
            )));
        }
        debug!(id = %id, "observer registered");
        self.core.runtime.observers.push(observer);
        Ok(())
    }

    /// Removes the observer with the given id; returns whether one was
    /// removed.
    pub fn unregister_observer(&mut self, id: &str) -> bool {
        let before = self.core.runtime.observers.len();
        self.core
            .runtime
            .observers
            .retain(|observer| observer.id() != id);
        let removed = self.core.runtime.observers.len() != before;
        if removed {
            debug!(id = %id, "observer unregistered");
        }
        removed
    }

    #[must_use]
    pub fn has_observer(&self, id: &str) -> bool {
        self.core
            .runtime
            .observers
            .iter()
            .any(|observer| observer.id() == id)
    }

    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.core.runtime.observers.len()
    }

    pub(super) fn emit_chart_event(&mut self, event: &ChartEvent) {
        if self.core.runtime.observers.is_empty() {
            return;
        }
        let context = self.observer_context();
        for observer in &mut self.core.runtime.observers {
            observer.on_event(event, context);
        }
    }

    fn observer_context(&self) -> ChartObserverContext {
        let model = &self.core.model;
        ChartObserverContext {
            viewport: model.viewport,
            grid_style: model.grid_style,
            ascendant: model
                .view
                .ascendant_override()
                .unwrap_or_else(|| model.chart.ascendant_sign()),
            override_active: model.view.ascendant_override().is_some(),
            planet_count: model.chart.planets.len(),
            highlight_active: model.view.highlight().is_some(),
        }
    }
}
