use serde::{Deserialize, Serialize};

use crate::core::{HouseNumber, Rashi, Viewport};
use crate::layout::GridStyle;

/// Read-only state snapshot passed to observer hooks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartObserverContext {
    pub viewport: Viewport,
    pub grid_style: GridStyle,
    /// Ascendant sign after any view-level override.
    pub ascendant: Rashi,
    pub override_active: bool,
    pub planet_count: usize,
    pub highlight_active: bool,
}

/// Event stream exposed to observers. Click events are the navigation
/// hooks hosting screens route on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ChartEvent {
    ChartUpdated { planet_count: usize },
    HouseClicked { house: HouseNumber, sign: Rashi },
    PlanetClicked { name: String, house: HouseNumber },
    AscendantOverridden { sign: Rashi },
    AscendantReset,
    HighlightChanged,
    RelationMatricesLoaded { pair_count: usize },
    Rendered,
}

/// Extension hook interface for bounded custom logic.
///
/// Observers can watch events and read engine context without mutating
/// core internals directly.
pub trait ChartObserver {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: &ChartEvent, context: ChartObserverContext);
}
