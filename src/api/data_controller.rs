use tracing::debug;

use crate::core::ChartData;
use crate::error::KundaliResult;
use crate::extensions::ChartEvent;
use crate::render::Renderer;

use super::KundaliEngine;
use super::chart_payload::ChartPayload;

impl<R: Renderer> KundaliEngine<R> {
    /// Installs a validated chart, replacing the previous one.
    ///
    /// Emphasis scoped to the old chart (highlight, open menu) is
    /// dropped; the ascendant override survives as a view preference.
    /// Loaded relation matrices are invalidated together with any
    /// in-flight fetches.
    pub fn set_chart(&mut self, chart: ChartData) -> KundaliResult<()> {
        chart.validate()?;
        let planet_count = chart.planets.len();
        debug!(planet_count, "installing chart data");
        self.core.model.chart = chart;
        let _ = self.core.model.view.on_chart_data_arrived();
        self.invalidate_relation_matrices();
        self.emit_chart_event(&ChartEvent::ChartUpdated { planet_count });
        Ok(())
    }

    /// Normalizes and installs a wire payload.
    pub fn set_chart_payload(&mut self, payload: ChartPayload) -> KundaliResult<()> {
        self.set_chart(payload.into_chart()?)
    }

    /// Parses, normalizes and installs a JSON payload.
    pub fn set_chart_json(&mut self, raw: &str) -> KundaliResult<()> {
        self.set_chart_payload(ChartPayload::from_json_str(raw)?)
    }

    /// Reverts to the empty chart, keeping view preferences.
    pub fn clear_chart(&mut self) {
        debug!("clearing chart data");
        self.core.model.chart = ChartData::default();
        let _ = self.core.model.view.on_chart_data_arrived();
        self.invalidate_relation_matrices();
        self.emit_chart_event(&ChartEvent::ChartUpdated { planet_count: 0 });
    }
}
