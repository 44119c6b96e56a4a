use serde::{Deserialize, Serialize};

use crate::core::{HouseNumber, Rashi, Viewport};
use crate::interaction::Highlight;
use crate::layout::GridStyle;
use crate::render::Renderer;

use super::KundaliEngine;

/// Deterministic, serializable projection of engine state for hosts,
/// tests and support tooling. Field order is stable for diffing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub viewport: Viewport,
    pub grid_style: GridStyle,
    /// Natal ascendant sign derived from chart data.
    pub ascendant_sign: Rashi,
    pub override_sign: Option<Rashi>,
    pub resolved_signs: Vec<(HouseNumber, Rashi)>,
    /// Occupant names per house in chart order, houses 1..=12.
    pub occupancy: Vec<Vec<String>>,
    pub highlight: Option<Highlight>,
    pub context_menu_open: bool,
    pub modal_open: bool,
    pub matrices_loaded: bool,
    pub matrix_generation: u64,
}

impl<R: Renderer> KundaliEngine<R> {
    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot {
        let layout = self.layout();
        let view = &self.core.model.view;
        EngineSnapshot {
            viewport: self.core.model.viewport,
            grid_style: self.core.model.grid_style,
            ascendant_sign: self.core.model.chart.ascendant_sign(),
            override_sign: view.ascendant_override(),
            resolved_signs: layout.resolved_signs(),
            occupancy: layout
                .houses
                .iter()
                .map(|house| {
                    house
                        .occupants
                        .iter()
                        .map(|occupant| occupant.name.clone())
                        .collect()
                })
                .collect(),
            highlight: view.highlight().cloned(),
            context_menu_open: view.context_menu().is_some(),
            modal_open: view.modal().is_some(),
            matrices_loaded: self.core.runtime.matrices.is_some(),
            matrix_generation: self.core.runtime.matrix_generation,
        }
    }
}
